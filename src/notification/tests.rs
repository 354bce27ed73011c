use super::*;

#[test]
fn test_push_and_latest() {
    let mut manager = NotificationManager::new();
    assert!(manager.is_empty());
    assert!(manager.latest().is_none());

    manager.info("opened index.html");
    manager.error("save failed");

    assert_eq!(manager.len(), 2);
    assert_eq!(manager.latest().unwrap().message, "save failed");
    assert_eq!(manager.latest().unwrap().kind, NotificationType::Error);
}

#[test]
fn test_latest_prefers_higher_severity() {
    let mut manager = NotificationManager::new();
    manager.error("save failed");
    manager.warn("name taken");
    manager.info("opened notes.md");
    manager.success("saved notes.md");

    // The live failure stays on the status line despite later chatter
    assert_eq!(manager.latest().unwrap().message, "save failed");
}

#[test]
fn test_latest_recency_breaks_ties() {
    let mut manager = NotificationManager::new();
    manager.info("first");
    manager.info("second");
    assert_eq!(manager.latest().unwrap().message, "second");
}

#[test]
fn test_ttl_scales_with_kind() {
    assert!(NotificationType::Success.ttl() < NotificationType::Info.ttl());
    assert!(NotificationType::Info.ttl() < NotificationType::Warning.ttl());
    assert!(NotificationType::Warning.ttl() < NotificationType::Error.ttl());
}

#[test]
fn test_expiry_uses_kind_ttl() {
    let posted_at = Instant::now();
    let notif = Notification {
        message: "saved".to_string(),
        kind: NotificationType::Success,
        posted_at,
    };
    assert!(!notif.is_expired(posted_at));
    assert!(!notif.is_expired(posted_at + NotificationType::Success.ttl()));
    assert!(notif.is_expired(posted_at + NotificationType::Success.ttl() + Duration::from_secs(1)));
}

#[test]
fn test_prune_drops_short_lived_kinds_first() {
    let mut manager = NotificationManager::new();
    manager.success("saved app.js");
    manager.error("write failed");

    // Between the success TTL and the error TTL only the error survives
    manager.prune_expired(Instant::now() + Duration::from_secs(4));
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.latest().unwrap().kind, NotificationType::Error);

    manager.prune_expired(Instant::now() + Duration::from_secs(60));
    assert!(manager.is_empty());
}

#[test]
fn test_severity_mapping() {
    use crate::error::ErrorSeverity;
    assert_eq!(
        NotificationType::from(ErrorSeverity::Critical),
        NotificationType::Error
    );
    assert_eq!(
        NotificationType::from(ErrorSeverity::Info),
        NotificationType::Info
    );
}
