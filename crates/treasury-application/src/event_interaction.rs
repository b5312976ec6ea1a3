//! Per-event comments and reactions.
//!
//! Interactions live in memory for the lifetime of the store. The acting
//! participant is always the address of the shared [`SessionHolder`]; there
//! is no way to comment or react on behalf of another address.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use treasury_core::error::{Result, TreasuryError};
use treasury_core::event::{Comment, EventId, EventReactions, ReactionCounts, ReactionKind};
use treasury_core::notification::{Notification, Notifier};

use crate::notifications;
use crate::session_holder::SessionHolder;

#[derive(Default)]
struct InteractionState {
    comments: HashMap<EventId, Vec<Comment>>,
    reactions: HashMap<EventId, EventReactions>,
    last_comment_id: i64,
}

impl InteractionState {
    /// Millisecond timestamp, bumped past the previous id on collision.
    fn next_comment_id(&mut self, now_ms: i64) -> i64 {
        let id = now_ms.max(self.last_comment_id + 1);
        self.last_comment_id = id;
        id
    }
}

pub struct EventInteractionStore {
    session: Arc<SessionHolder>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<InteractionState>,
}

impl EventInteractionStore {
    pub fn new(session: Arc<SessionHolder>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            session,
            notifier,
            state: RwLock::new(InteractionState::default()),
        }
    }

    /// Appends a comment by the connected participant.
    ///
    /// # Errors
    ///
    /// - `NotConnected`: No session address
    /// - `EmptyComment`: `text` is blank after trimming
    ///
    /// Both are also surfaced as notifications; nothing is appended.
    pub async fn add_comment(
        &self,
        event_id: EventId,
        text: &str,
        is_private: bool,
    ) -> Result<Comment> {
        let author = match self.session.require_connected().await {
            Ok(address) => address,
            Err(e) => return Err(self.reject(e, "leave a comment")),
        };

        if text.trim().is_empty() {
            return Err(self.reject(TreasuryError::EmptyComment, "leave a comment"));
        }

        let now = Utc::now();
        let comment = {
            let mut state = self.state.write().await;
            let comment = Comment {
                id: state.next_comment_id(now.timestamp_millis()),
                author,
                text: text.to_string(),
                is_private,
                timestamp: now.to_rfc3339(),
            };
            state
                .comments
                .entry(event_id)
                .or_default()
                .push(comment.clone());
            comment
        };

        tracing::debug!(
            "[EventInteraction] Comment {} added to event {} (private: {})",
            comment.id,
            event_id,
            is_private
        );

        self.notifier.notify(if is_private {
            Notification::success(
                "Private message sent",
                "Your message has been sent to the organizer.",
            )
        } else {
            Notification::success("Comment added", "Your comment has been added to the event.")
        });

        Ok(comment)
    }

    /// Toggles a reaction of the connected participant.
    ///
    /// Returns whether the reaction is set afterwards. Like and dislike are
    /// mutually exclusive; attestations toggle on their own.
    pub async fn react(&self, event_id: EventId, kind: ReactionKind) -> Result<bool> {
        let address = match self.session.require_connected().await {
            Ok(address) => address,
            Err(e) => return Err(self.reject(e, "react to this event")),
        };

        let is_set = self
            .state
            .write()
            .await
            .reactions
            .entry(event_id)
            .or_default()
            .toggle(&address, kind);

        tracing::debug!(
            "[EventInteraction] {} {} on event {} by {}",
            kind,
            if is_set { "set" } else { "cleared" },
            event_id,
            address
        );

        self.notifier.notify(reaction_notification(kind, is_set));
        Ok(is_set)
    }

    /// Whether the connected participant holds `kind` on the event.
    ///
    /// Always `false` without a session address.
    pub async fn has_reacted(&self, event_id: EventId, kind: ReactionKind) -> bool {
        let Some(address) = self.session.address().await else {
            return false;
        };

        self.state
            .read()
            .await
            .reactions
            .get(&event_id)
            .is_some_and(|r| r.has(&address, kind))
    }

    /// All comments on the event in insertion order, private ones included.
    pub async fn comments(&self, event_id: EventId) -> Vec<Comment> {
        self.state
            .read()
            .await
            .comments
            .get(&event_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Comments the current viewer may see.
    pub async fn visible_comments(&self, event_id: EventId) -> Vec<Comment> {
        let viewer = self.session.address().await;
        let mut comments = self.comments(event_id).await;
        comments.retain(|c| c.is_visible_to(viewer.as_deref()));
        comments
    }

    pub async fn reactions(&self, event_id: EventId) -> EventReactions {
        self.state
            .read()
            .await
            .reactions
            .get(&event_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn reaction_summary(&self, event_id: EventId) -> ReactionCounts {
        self.state
            .read()
            .await
            .reactions
            .get(&event_id)
            .map(EventReactions::counts)
            .unwrap_or_default()
    }

    fn reject(&self, err: TreasuryError, action: &str) -> TreasuryError {
        let notification = match &err {
            TreasuryError::EmptyComment => Some(Notification::error(
                "Empty comment",
                "Please enter a comment before submitting.",
            )),
            other => notifications::rejection(other, action),
        };
        if let Some(notification) = notification {
            self.notifier.notify(notification);
        }
        tracing::debug!("[EventInteraction] Rejected: {}", err);
        err
    }
}

fn reaction_notification(kind: ReactionKind, is_set: bool) -> Notification {
    match (kind, is_set) {
        (ReactionKind::Attestation, true) => Notification::success(
            "Attestation recorded",
            "You have attested to this event's authenticity.",
        ),
        (ReactionKind::Attestation, false) => Notification::success(
            "Attestation removed",
            "You have withdrawn your attestation.",
        ),
        (ReactionKind::Like, true) => {
            Notification::success("Like recorded", "You have liked this event.")
        }
        (ReactionKind::Dislike, true) => {
            Notification::success("Dislike recorded", "You have disliked this event.")
        }
        (ReactionKind::Like, false) => {
            Notification::success("Like removed", "You no longer like this event.")
        }
        (ReactionKind::Dislike, false) => {
            Notification::success("Dislike removed", "You no longer dislike this event.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treasury_core::config::AppConfig;
    use treasury_core::session::{Signer, WALLET_ADDRESS_KEY};
    use treasury_infrastructure::{LocalSigner, MemoryKeyValueStore, MemoryNotifier};

    struct Fixture {
        session: Arc<SessionHolder>,
        store: EventInteractionStore,
        notifier: Arc<MemoryNotifier>,
    }

    /// A store whose session has `address` restored, or is disconnected.
    async fn fixture(address: Option<&str>) -> Fixture {
        let kv = match address {
            Some(a) => MemoryKeyValueStore::with_entries([(WALLET_ADDRESS_KEY, a)]),
            None => MemoryKeyValueStore::new(),
        };
        let notifier = Arc::new(MemoryNotifier::new());
        let signer: Arc<dyn Signer> = Arc::new(LocalSigner::new(vec!["0xB".to_string()]));
        let session = Arc::new(SessionHolder::new(
            AppConfig::without_delays().session,
            Some(signer),
            Arc::new(kv),
            notifier.clone(),
        ));
        session.restore().await;
        notifier.take();

        let store = EventInteractionStore::new(session.clone(), notifier.clone());
        Fixture {
            session,
            store,
            notifier,
        }
    }

    #[tokio::test]
    async fn test_add_comment_requires_connection() {
        let f = fixture(None).await;

        let result = f.store.add_comment(1, "hello", false).await;

        assert!(matches!(result, Err(TreasuryError::NotConnected)));
        assert!(f.store.comments(1).await.is_empty());
        let n = f.notifier.notifications();
        assert_eq!(n.len(), 1);
        assert_eq!(n[0].title, "Not connected");
        assert_eq!(n[0].description, "Please connect your wallet to leave a comment.");
    }

    #[tokio::test]
    async fn test_blank_comment_never_appends() {
        let f = fixture(Some("0xA")).await;

        for text in ["", "   ", "\n\t"] {
            let result = f.store.add_comment(1, text, false).await;
            assert!(matches!(result, Err(TreasuryError::EmptyComment)));
        }

        assert!(f.store.comments(1).await.is_empty());
        assert_eq!(f.notifier.last_title().as_deref(), Some("Empty comment"));
    }

    #[tokio::test]
    async fn test_add_comment_appends_in_order() {
        let f = fixture(Some("0xA")).await;

        let first = f.store.add_comment(1, "first", false).await.unwrap();
        let second = f.store.add_comment(1, "second", true).await.unwrap();

        let comments = f.store.comments(1).await;
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].text, "first");
        assert_eq!(comments[1].text, "second");
        assert!(second.id > first.id);
        assert_eq!(first.author, "0xA");
        assert!(f.store.comments(2).await.is_empty());

        let titles: Vec<String> = f.notifier.take().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["Comment added", "Private message sent"]);
    }

    #[tokio::test]
    async fn test_comment_text_kept_verbatim() {
        let f = fixture(Some("0xA")).await;
        let comment = f.store.add_comment(1, "  spaced  ", false).await.unwrap();
        assert_eq!(comment.text, "  spaced  ");
    }

    #[tokio::test]
    async fn test_private_comments_filtered_by_viewer() {
        let f = fixture(Some("0xA")).await;
        f.store.add_comment(1, "public", false).await.unwrap();
        f.store.add_comment(1, "for the organizer", true).await.unwrap();

        assert_eq!(f.store.visible_comments(1).await.len(), 2);

        f.session.disconnect().await;
        let visible = f.store.visible_comments(1).await;
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "public");
    }

    #[tokio::test]
    async fn test_like_twice_toggles_off() {
        let f = fixture(Some("0xA")).await;

        assert!(f.store.react(7, ReactionKind::Like).await.unwrap());
        assert!(!f.store.react(7, ReactionKind::Like).await.unwrap());

        assert!(!f.store.has_reacted(7, ReactionKind::Like).await);
        assert!(f.store.reactions(7).await.likes().is_empty());
        assert_eq!(f.notifier.last_title().as_deref(), Some("Like removed"));
    }

    #[tokio::test]
    async fn test_like_then_dislike_moves_vote() {
        let f = fixture(Some("0xA")).await;

        f.store.react(7, ReactionKind::Like).await.unwrap();
        f.store.react(7, ReactionKind::Dislike).await.unwrap();

        let reactions = f.store.reactions(7).await;
        assert!(reactions.likes().is_empty());
        assert_eq!(reactions.dislikes(), vec!["0xA"]);
        assert!(f.store.has_reacted(7, ReactionKind::Dislike).await);
        assert!(!f.store.has_reacted(7, ReactionKind::Like).await);
    }

    #[tokio::test]
    async fn test_attestation_independent_of_vote() {
        let f = fixture(Some("0xA")).await;

        f.store.react(3, ReactionKind::Like).await.unwrap();
        f.store.react(3, ReactionKind::Attestation).await.unwrap();

        assert!(f.store.has_reacted(3, ReactionKind::Like).await);
        assert!(f.store.has_reacted(3, ReactionKind::Attestation).await);
        assert_eq!(
            f.store.reaction_summary(3).await,
            ReactionCounts {
                likes: 1,
                dislikes: 0,
                attestations: 1
            }
        );
        assert_eq!(f.notifier.last_title().as_deref(), Some("Attestation recorded"));

        f.store.react(3, ReactionKind::Attestation).await.unwrap();
        assert!(!f.store.has_reacted(3, ReactionKind::Attestation).await);
        assert!(f.store.has_reacted(3, ReactionKind::Like).await);
    }

    #[tokio::test]
    async fn test_react_requires_connection() {
        let f = fixture(None).await;

        let result = f.store.react(1, ReactionKind::Attestation).await;

        assert!(matches!(result, Err(TreasuryError::NotConnected)));
        assert_eq!(f.store.reaction_summary(1).await, ReactionCounts::default());
        let n = f.notifier.notifications();
        assert_eq!(
            n[0].description,
            "Please connect your wallet to react to this event."
        );
    }

    #[tokio::test]
    async fn test_has_reacted_false_after_disconnect() {
        let f = fixture(Some("0xA")).await;
        f.store.react(1, ReactionKind::Like).await.unwrap();

        f.session.disconnect().await;

        assert!(!f.store.has_reacted(1, ReactionKind::Like).await);
        assert_eq!(f.store.reaction_summary(1).await.likes, 1);
    }

    #[tokio::test]
    async fn test_reactions_keyed_by_acting_address() {
        let f = fixture(Some("0xA")).await;
        f.store.react(1, ReactionKind::Like).await.unwrap();

        f.session.disconnect().await;
        f.session.connect().await;
        f.store.react(1, ReactionKind::Like).await.unwrap();

        let reactions = f.store.reactions(1).await;
        assert_eq!(reactions.likes(), vec!["0xA", "0xB"]);
    }

    #[test]
    fn test_comment_ids_strictly_increase_on_same_millisecond() {
        let mut state = InteractionState::default();
        let a = state.next_comment_id(1_000);
        let b = state.next_comment_id(1_000);
        let c = state.next_comment_id(999);
        assert_eq!((a, b, c), (1_000, 1_001, 1_002));
    }
}
