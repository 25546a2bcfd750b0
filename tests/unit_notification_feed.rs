use bookstack::modules::notifications::feed::{FetchRequest, NotificationFeed};
use bookstack::modules::notifications::model::NotificationPageMeta;

fn meta(page_size: i64, page_number: i64, page_count: i64) -> NotificationPageMeta {
    NotificationPageMeta {
        page_size,
        page_number,
        page_count,
    }
}

#[test]
fn test_feed_starts_with_no_more_pages() {
    let mut feed = NotificationFeed::new();
    assert!(!feed.has_more());
    assert!(feed.next_request().is_none());
}

#[test]
fn test_initial_request_uses_default_limit() {
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
fn test_offset_is_page_size_times_page_number() {
    let mut feed = NotificationFeed::new();
    feed.on_metadata(meta(12, 1, 5));

    let request = feed.next_request().unwrap();
    assert_eq!(request.offset, 12);
    assert_eq!(request.limit, 12);
}

#[test]
fn test_offset_zero_when_page_number_is_zero() {
    let mut feed = NotificationFeed::new();
    feed.on_metadata(meta(12, 0, 5));

    let request = feed.next_request().unwrap();
    assert_eq!(request.offset, 0);
}

#[test]
fn test_offset_zero_when_page_size_is_zero() {
    let mut feed = NotificationFeed::new();
    feed.on_metadata(meta(0, 3, 5));

    let request = feed.next_request().unwrap();
    assert_eq!(request.offset, 0);
}

#[test]
fn test_has_more_true_on_last_page() {
    // pageNumber 3 <= pageCount 3 still arms the trigger
    let mut feed = NotificationFeed::new();
    feed.on_metadata(meta(12, 3, 3));
    assert!(feed.has_more());
}

#[test]
fn test_has_more_false_past_last_page() {
    // pageNumber 4 > pageCount 3 disarms the trigger
    let mut feed = NotificationFeed::new();
    feed.on_metadata(meta(12, 4, 3));
    assert!(!feed.has_more());
}

#[test]
fn test_double_trigger_issues_one_request() {
    let mut feed = NotificationFeed::new();
    feed.on_metadata(meta(12, 1, 3));

    let first = feed.next_request();
    let second = feed.next_request();

    assert!(first.is_some());
    assert!(second.is_none());
}

#[test]
fn test_unchanged_metadata_does_not_rearm_trigger() {
    let mut feed = NotificationFeed::new();
    feed.on_metadata(meta(12, 1, 3));
    feed.next_request();

    // Same metadata again: no change detected, trigger stays disarmed
    feed.on_metadata(meta(12, 1, 3));
    assert!(feed.next_request().is_none());
}

#[test]
fn test_changed_metadata_rearms_trigger() {
    let mut feed = NotificationFeed::new();
    feed.on_metadata(meta(12, 1, 3));
    feed.next_request();

    feed.on_metadata(meta(12, 2, 3));
    let request = feed.next_request().unwrap();
    assert_eq!(request.offset, 24);
}

#[test]
fn test_reached_end_rendering_policy() {
    let mut feed = NotificationFeed::new();
    assert!(!feed.reached_end());

    feed.on_metadata(meta(12, 1, 3));
    assert!(!feed.reached_end());

    feed.on_metadata(meta(12, 3, 3));
    assert!(feed.reached_end());

    feed.on_metadata(meta(12, 4, 3));
    assert!(feed.reached_end());
}

#[test]
fn test_scroll_through_entire_feed() {
    let mut feed = NotificationFeed::new();

    // First page arrives
    feed.on_metadata(meta(12, 1, 3));
    assert_eq!(feed.next_request().unwrap().offset, 12);

    // Second page arrives
    feed.on_metadata(meta(12, 2, 3));
    assert_eq!(feed.next_request().unwrap().offset, 24);

    // Third (last) page arrives; one final fetch is allowed
    feed.on_metadata(meta(12, 3, 3));
    assert_eq!(feed.next_request().unwrap().offset, 36);

    // The overshoot page reports pageNumber past pageCount; feed stops
    feed.on_metadata(meta(12, 4, 3));
    assert!(!feed.has_more());
    assert!(feed.next_request().is_none());
    assert!(feed.reached_end());
}
