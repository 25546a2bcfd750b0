//! Client-side notification feed pagination.
//!
//! Incremental fetching for an infinite-scroll notification list, kept free
//! of any view layer: the embedding UI calls [`NotificationFeed::on_metadata`]
//! when a page response arrives and [`NotificationFeed::next_request`] when
//! its scroll trigger fires, and renders a terminal indicator once
//! [`NotificationFeed::reached_end`] reports true.
//!
//! A failed fetch never delivers metadata, which leaves `has_more` false and
//! silently halts further loads; recovering from that is the caller's
//! problem.

use super::model::NotificationPageMeta;

/// Page size requested by the feed.
pub const FEED_PAGE_LIMIT: i64 = 12;

/// An offset/limit pair to request from the notifications endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub offset: i64,
    pub limit: i64,
}

/// Tracks whether more notification pages exist and computes the offset for
/// the next fetch from server-reported metadata.
#[derive(Debug, Default)]
pub struct NotificationFeed {
    has_more: bool,
    last_meta: Option<NotificationPageMeta>,
}

impl NotificationFeed {
    /// A fresh feed; `has_more` stays false until the first page's metadata
    /// arrives.
    pub fn new() -> Self {
        Self::default()
    }

    /// The request that loads the first page.
    pub fn initial_request(&self) -> FetchRequest {
        FetchRequest {
            offset: 0,
            limit: FEED_PAGE_LIMIT,
        }
    }

    /// Feed a page response's metadata in.
    ///
    /// Only metadata that differs from the previous value re-arms the scroll
    /// trigger: `has_more` becomes true while `page_number <= page_count`.
    pub fn on_metadata(&mut self, meta: NotificationPageMeta) {
        if self.last_meta == Some(meta) {
            return;
        }
        self.has_more = meta.page_number <= meta.page_count;
        self.last_meta = Some(meta);
    }

    /// Whether the scroll trigger may fire.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Fetch-more trigger.
    ///
    /// Yields the next page request, or `None` while the feed is disarmed.
    /// `has_more` is cleared before the request is handed out, so a second
    /// trigger with no intervening metadata update is suppressed.
    pub fn next_request(&mut self) -> Option<FetchRequest> {
        if !self.has_more {
            return None;
        }

        let offset = match self.last_meta {
            Some(meta) if meta.page_size > 0 && meta.page_number > 0 => {
                meta.page_size * meta.page_number
            }
            _ => 0,
        };

        self.has_more = false;

        Some(FetchRequest {
            offset,
            limit: FEED_PAGE_LIMIT,
        })
    }

    /// Whether the feed has reached the last page.
    ///
    /// Rendering policy only: the UI shows an end-of-notifications marker
    /// instead of a loading indicator. Nothing here forbids further calls to
    /// [`Self::next_request`] if `has_more` is re-armed.
    pub fn reached_end(&self) -> bool {
        match self.last_meta {
            Some(meta) => meta.page_number >= meta.page_count,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(page_size: i64, page_number: i64, page_count: i64) -> NotificationPageMeta {
        NotificationPageMeta {
            page_size,
            page_number,
            page_count,
        }
    }

    #[test]
    fn test_starts_disarmed() {
        let feed = NotificationFeed::new();
        assert!(!feed.has_more());
        assert!(!feed.reached_end());
    }

    #[test]
    fn test_initial_request_shape() {
        let feed = NotificationFeed::new();
        assert_eq!(
            feed.initial_request(),
            FetchRequest {
                offset: 0,
                limit: 12
            }
        );
    }

    #[test]
    fn test_metadata_arms_trigger() {
        let mut feed = NotificationFeed::new();
        feed.on_metadata(meta(12, 1, 4));
        assert!(feed.has_more());
    }

    #[test]
    fn test_next_request_computes_offset() {
        let mut feed = NotificationFeed::new();
        feed.on_metadata(meta(12, 1, 4));
        let request = feed.next_request().unwrap();
        assert_eq!(request.offset, 12);
        assert_eq!(request.limit, 12);
    }

    #[test]
    fn test_zero_page_number_offset_is_zero() {
        let mut feed = NotificationFeed::new();
        feed.on_metadata(meta(12, 0, 4));
        let request = feed.next_request().unwrap();
        assert_eq!(request.offset, 0);
    }

    #[test]
    fn test_second_trigger_is_suppressed() {
        let mut feed = NotificationFeed::new();
        feed.on_metadata(meta(12, 1, 4));
        assert!(feed.next_request().is_some());
        assert!(feed.next_request().is_none());
    }

    #[test]
    fn test_identical_metadata_does_not_rearm() {
        let mut feed = NotificationFeed::new();
        feed.on_metadata(meta(12, 1, 4));
        feed.next_request();
        feed.on_metadata(meta(12, 1, 4));
        assert!(!feed.has_more());
    }

    #[test]
    fn test_last_page_still_arms() {
        // 3 <= 3: the last page arms one more fetch
        let mut feed = NotificationFeed::new();
        feed.on_metadata(meta(12, 3, 3));
        assert!(feed.has_more());
        assert!(feed.reached_end());
    }

    #[test]
    fn test_past_end_disarms() {
        let mut feed = NotificationFeed::new();
        feed.on_metadata(meta(12, 4, 3));
        assert!(!feed.has_more());
        assert!(feed.reached_end());
    }

    #[test]
    fn test_full_scroll_sequence() {
        let mut feed = NotificationFeed::new();

        feed.on_metadata(meta(12, 1, 2));
        let request = feed.next_request().unwrap();
        assert_eq!(request.offset, 12);

        feed.on_metadata(meta(12, 2, 2));
        let request = feed.next_request().unwrap();
        assert_eq!(request.offset, 24);

        feed.on_metadata(meta(12, 3, 2));
        assert!(!feed.has_more());
        assert!(feed.next_request().is_none());
        assert!(feed.reached_end());
    }
}
