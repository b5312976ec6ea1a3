//! Past-event domain module.
//!
//! # Module Structure
//!
//! - `model`: Read-only event reference data
//! - `catalog`: Seeded catalog of past events
//! - `comment`: Event comments and their visibility rule
//! - `reaction`: Like/dislike votes and attestations

mod catalog;
mod comment;
mod model;
mod reaction;

pub use catalog::EventCatalog;
pub use comment::Comment;
pub use model::{Event, EventId};
pub use reaction::{EventReactions, ReactionCounts, ReactionKind, Vote};
