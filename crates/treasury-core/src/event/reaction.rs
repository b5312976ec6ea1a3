//! Event reactions.
//!
//! Likes and dislikes are stored as a single [`Vote`] per participant, so an
//! address can never be in both sets at once. Attestations are tracked
//! separately and toggle independently of the vote.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strum::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReactionKind {
    Like,
    Dislike,
    Attestation,
}

impl ReactionKind {
    /// The vote this kind sets, or `None` for attestations.
    fn vote(self) -> Option<Vote> {
        match self {
            ReactionKind::Like => Some(Vote::Liked),
            ReactionKind::Dislike => Some(Vote::Disliked),
            ReactionKind::Attestation => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Liked,
    Disliked,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionCounts {
    pub likes: usize,
    pub dislikes: usize,
    pub attestations: usize,
}

/// Reactions on a single event, keyed by participant address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventReactions {
    votes: BTreeMap<String, Vote>,
    attestations: BTreeSet<String>,
}

impl EventReactions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggles `kind` for `address` and returns whether it is now set.
    ///
    /// Liking an event the address already likes clears the vote; liking an
    /// event it dislikes replaces the dislike. Same for dislikes.
    pub fn toggle(&mut self, address: &str, kind: ReactionKind) -> bool {
        match kind.vote() {
            Some(vote) => {
                if self.votes.get(address) == Some(&vote) {
                    self.votes.remove(address);
                    false
                } else {
                    self.votes.insert(address.to_string(), vote);
                    true
                }
            }
            None => {
                if self.attestations.remove(address) {
                    false
                } else {
                    self.attestations.insert(address.to_string());
                    true
                }
            }
        }
    }

    pub fn has(&self, address: &str, kind: ReactionKind) -> bool {
        match kind.vote() {
            Some(vote) => self.votes.get(address) == Some(&vote),
            None => self.attestations.contains(address),
        }
    }

    pub fn vote_of(&self, address: &str) -> Option<Vote> {
        self.votes.get(address).copied()
    }

    /// Addresses that like the event, in address order.
    pub fn likes(&self) -> Vec<&str> {
        self.voters(Vote::Liked)
    }

    /// Addresses that dislike the event, in address order.
    pub fn dislikes(&self) -> Vec<&str> {
        self.voters(Vote::Disliked)
    }

    pub fn attestations(&self) -> Vec<&str> {
        self.attestations.iter().map(String::as_str).collect()
    }

    pub fn counts(&self) -> ReactionCounts {
        let likes = self.votes.values().filter(|v| **v == Vote::Liked).count();
        ReactionCounts {
            likes,
            dislikes: self.votes.len() - likes,
            attestations: self.attestations.len(),
        }
    }

    fn voters(&self, vote: Vote) -> Vec<&str> {
        self.votes
            .iter()
            .filter(|(_, v)| **v == vote)
            .map(|(address, _)| address.as_str())
            .collect()
    }
}
