//! Event comments.

use serde::{Deserialize, Serialize};

/// A comment left on an event.
///
/// Private comments are messages to the organizer. They are listed only to
/// their author; this is a display filter, not an access control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Millisecond timestamp, unique within a store
    pub id: i64,
    pub author: String,
    pub text: String,
    pub is_private: bool,
    /// RFC 3339 creation time
    pub timestamp: String,
}

impl Comment {
    /// Whether `viewer` (the connected address, if any) may see this comment.
    pub fn is_visible_to(&self, viewer: Option<&str>) -> bool {
        !self.is_private || viewer == Some(self.author.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(author: &str, is_private: bool) -> Comment {
        Comment {
            id: 1,
            author: author.to_string(),
            text: "hello".to_string(),
            is_private,
            timestamp: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_public_comment_visible_to_everyone() {
        let c = comment("0xA", false);
        assert!(c.is_visible_to(None));
        assert!(c.is_visible_to(Some("0xB")));
    }

    #[test]
    fn test_private_comment_visible_only_to_author() {
        let c = comment("0xA", true);
        assert!(c.is_visible_to(Some("0xA")));
        assert!(!c.is_visible_to(Some("0xB")));
        assert!(!c.is_visible_to(None));
    }
}
