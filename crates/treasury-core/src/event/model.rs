//! Event reference data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type EventId = u32;

/// A past event funded by the treasury. Never mutated by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub place: String,
    pub attendees: u32,
    pub description: String,
    /// Organizer wallet address
    pub organizer: String,
    /// Total expenses in USD
    pub total_expenses: f64,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub receipts: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
}
