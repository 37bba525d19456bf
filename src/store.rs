//! Shared notification state keyed by request identifier.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use crate::models::notice::{Notice, NoticeOptions};

/// Notification state shared between the client and a UI consumer.
///
/// Holds three independent mappings (loading, success, warning) from an
/// arbitrary identifier, conventionally the request URL, to a [`Notice`].
/// Every toggle overwrites the record at its identifier wholesale; records
/// are never merged with prior state and never expire. There is no
/// transition validation between the mappings and no removal operation.
///
/// Concurrent writers to the same identifier race with last-write-wins
/// semantics; the locks guard memory safety only.
#[derive(Debug, Default)]
pub struct MessageStore {
    loading: RwLock<HashMap<String, Notice>>,
    success: RwLock<HashMap<String, Notice>>,
    warning: RwLock<HashMap<String, Notice>>,
}

impl MessageStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn build_notice(options: &NoticeOptions) -> Notice {
        Notice {
            display: options.display,
            close: options.close,
            icon: options.icon.clone(),
            text: options.rendered_text(),
        }
    }

    /// Overwrite the loading notice for `id`.
    ///
    /// Loading notices are not dismissable; `close` is always unset.
    pub async fn toggle_loading(&self, id: &str, options: NoticeOptions) {
        let mut notice = Self::build_notice(&options);
        notice.close = None;
        debug!(id, "loading notice toggled");
        self.loading.write().await.insert(id.to_string(), notice);
    }

    /// Overwrite the success notice for `id`.
    pub async fn toggle_success(&self, id: &str, options: NoticeOptions) {
        let notice = Self::build_notice(&options);
        debug!(id, "success notice toggled");
        self.success.write().await.insert(id.to_string(), notice);
    }

    /// Overwrite the warning notice for `id`.
    pub async fn toggle_warning(&self, id: &str, options: NoticeOptions) {
        let notice = Self::build_notice(&options);
        debug!(id, "warning notice toggled");
        self.warning.write().await.insert(id.to_string(), notice);
    }

    /// The loading notice for `id`, if any.
    pub async fn loading(&self, id: &str) -> Option<Notice> {
        self.loading.read().await.get(id).cloned()
    }

    /// The success notice for `id`, if any.
    pub async fn success(&self, id: &str) -> Option<Notice> {
        self.success.read().await.get(id).cloned()
    }

    /// The warning notice for `id`, if any.
    pub async fn warning(&self, id: &str) -> Option<Notice> {
        self.warning.read().await.get(id).cloned()
    }

    /// Snapshot of all loading notices.
    pub async fn loading_all(&self) -> HashMap<String, Notice> {
        self.loading.read().await.clone()
    }

    /// Snapshot of all success notices.
    pub async fn success_all(&self) -> HashMap<String, Notice> {
        self.success.read().await.clone()
    }

    /// Snapshot of all warning notices.
    pub async fn warning_all(&self) -> HashMap<String, Notice> {
        self.warning.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::notice::MessagePart;

    #[tokio::test]
    async fn test_success_toggle_builds_record() {
        let store = MessageStore::new();
        store
            .toggle_success(
                "/api/items",
                NoticeOptions::new()
                    .close(true)
                    .icon("success")
                    .text("OK")
                    .decorate("<p>", "</p>"),
            )
            .await;

        let notice = store.success("/api/items").await.unwrap();
        assert!(notice.display);
        assert_eq!(notice.close, Some(true));
        assert_eq!(notice.icon.as_deref(), Some("success"));
        assert_eq!(notice.text.as_deref(), Some("<p>OK</p>"));
    }

    #[tokio::test]
    async fn test_toggle_overwrites_wholesale() {
        let store = MessageStore::new();
        store
            .toggle_warning(
                "/api/items",
                NoticeOptions::new().close(true).icon("error").text("first"),
            )
            .await;
        store
            .toggle_warning("/api/items", NoticeOptions::new().text("second"))
            .await;

        // No merging with the prior record: close and icon are gone.
        let notice = store.warning("/api/items").await.unwrap();
        assert_eq!(notice.close, None);
        assert_eq!(notice.icon, None);
        assert_eq!(notice.text.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_mappings_are_independent() {
        let store = MessageStore::new();
        store
            .toggle_success("/a", NoticeOptions::new().text("done"))
            .await;

        assert!(store.success("/a").await.is_some());
        assert!(store.warning("/a").await.is_none());
        assert!(store.loading("/a").await.is_none());
    }

    #[tokio::test]
    async fn test_loading_is_never_dismissable() {
        let store = MessageStore::new();
        store
            .toggle_loading("/a", NoticeOptions::new().close(true).text("working"))
            .await;

        let notice = store.loading("/a").await.unwrap();
        assert_eq!(notice.close, None);
        assert_eq!(notice.text.as_deref(), Some("working"));
    }

    #[tokio::test]
    async fn test_multi_part_text_assembly() {
        let store = MessageStore::new();
        let parts = vec![
            MessagePart {
                msg: Some("a".into()),
            },
            MessagePart::default(),
            MessagePart {
                msg: Some("b".into()),
            },
        ];
        store
            .toggle_warning(
                "/a",
                NoticeOptions::new().text(parts).decorate("[", "]"),
            )
            .await;

        let notice = store.warning("/a").await.unwrap();
        assert_eq!(notice.text.as_deref(), Some("[a][b]"));
    }

    #[tokio::test]
    async fn test_absent_text_stays_absent() {
        let store = MessageStore::new();
        store
            .toggle_success("/a", NoticeOptions::new().decorate("<p>", "</p>"))
            .await;

        let notice = store.success("/a").await.unwrap();
        assert_eq!(notice.text, None);
    }

    #[tokio::test]
    async fn test_snapshot_reflects_all_entries() {
        let store = MessageStore::new();
        store
            .toggle_success("/a", NoticeOptions::new().text("one"))
            .await;
        store
            .toggle_success("/b", NoticeOptions::new().text("two"))
            .await;

        let all = store.success_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all["/a"].text.as_deref(), Some("one"));
        assert_eq!(all["/b"].text.as_deref(), Some("two"));
    }
}
