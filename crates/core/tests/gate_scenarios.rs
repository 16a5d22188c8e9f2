//! End-to-end review gate scenarios
//!
//! These tests drive the public API the way an embedding host would:
//! - compatibility failures render one inline error and register nothing
//! - the install date is recorded once and the prompt shows a day after
//!   `days_after` elapses
//! - the same integration path always maps to the same option row

use std::sync::Arc;

use review_me_core::{
    ErrorBuffer, GateStatus, HostServices, ManualClock, NoticeQueue, NoticeStyle, OptionStore,
    ReviewError, ReviewGate, Scope, SqliteStore, StaticPlatform,
};
use serde_json::json;
use tempfile::tempdir;

const PLUGIN_PATH: &str = "foo/foo.rs";
const START: i64 = 1_700_000_000;

fn services(
    platform: StaticPlatform,
    store: Arc<dyn OptionStore>,
    clock: Arc<ManualClock>,
    errors: Arc<ErrorBuffer>,
) -> HostServices {
    HostServices::new(Arc::new(platform), store, errors).with_clock(clock)
}

#[test]
fn test_plugin_scenario_prompts_after_one_day() {
    let dir = tempdir().unwrap();
    let store: Arc<dyn OptionStore> = Arc::new(SqliteStore::open(dir.path().join("options.db")).unwrap());
    let clock = Arc::new(ManualClock::new(START));
    let errors = Arc::new(ErrorBuffer::new());
    let queue = Arc::new(NoticeQueue::new());
    let args = json!({ "days_after": 0, "type": "plugin", "slug": "foo", "rating": 4 });

    let gate = ReviewGate::from_value(
        args.clone(),
        PLUGIN_PATH,
        services(StaticPlatform::new("6.4", "8.2"), store.clone(), clock.clone(), errors.clone())
            .with_notices(queue.clone()),
    )
    .unwrap();

    assert!(matches!(gate.status(), GateStatus::Waiting));
    assert_eq!(store.get_timestamp(gate.key().as_str()).unwrap(), Some(START));
    assert!(queue.is_empty());

    clock.advance(86_401);
    let gate = ReviewGate::from_value(
        args,
        PLUGIN_PATH,
        services(StaticPlatform::new("6.4", "8.2"), store.clone(), clock.clone(), errors.clone())
            .with_notices(queue.clone()),
    )
    .unwrap();

    assert!(matches!(gate.status(), GateStatus::Prompted));
    assert!(errors.emitted().is_empty());

    let notices = queue.drain();
    assert_eq!(notices.len(), 1);
    let notice = &notices[0];
    assert_eq!(notice.key, gate.key().as_str());
    assert_eq!(notice.style, NoticeStyle::Updated);
    assert_eq!(notice.options.scope, Scope::Global);
    assert_eq!(notice.options.cap, "administrator");
    assert!(notice
        .message
        .contains("https://wordpress.org/support/view/plugin-reviews/foo?rate=4#postform"));

    // install date is never rewritten
    assert_eq!(store.get_timestamp(gate.key().as_str()).unwrap(), Some(START));
}

#[test]
fn test_each_failure_emits_exactly_one_error() {
    let cases = [
        (StaticPlatform::new("4.1", "8.2"), true, "host_version"),
        (StaticPlatform::new("6.4", "5.4"), true, "runtime_version"),
        (StaticPlatform::new("6.4", "8.2"), false, "dependency"),
    ];

    for (platform, with_registrar, category) in cases {
        let store: Arc<dyn OptionStore> = Arc::new(review_me_core::MemoryStore::new());
        let errors = Arc::new(ErrorBuffer::new());
        let queue = Arc::new(NoticeQueue::new());

        let mut host = services(
            platform,
            store.clone(),
            Arc::new(ManualClock::new(START)),
            errors.clone(),
        );
        if with_registrar {
            host = host.with_notices(queue.clone());
        }

        let gate = ReviewGate::new(Default::default(), PLUGIN_PATH, host);

        match gate.status() {
            GateStatus::Failed(err) => assert_eq!(err.category(), category),
            other => panic!("Expected failure for {}, got {:?}", category, other),
        }
        assert_eq!(errors.emitted().len(), 1, "one error for {}", category);
        assert!(queue.is_empty());
        assert_eq!(store.get_timestamp(gate.key().as_str()).unwrap(), None);
    }
}

#[test]
fn test_key_is_stable_across_loads() {
    let root = "/srv/site/plugins";
    let build = || {
        HostServices::new(
            Arc::new(StaticPlatform::new("6.4", "8.2")),
            Arc::new(review_me_core::MemoryStore::new()),
            Arc::new(ErrorBuffer::new()),
        )
        .with_root(root)
        .with_notices(Arc::new(NoticeQueue::new()))
    };

    let first = ReviewGate::new(Default::default(), "/srv/site/plugins/foo/foo.rs", build());
    let second = ReviewGate::new(Default::default(), "/srv/site/plugins/foo/foo.rs", build());
    let other = ReviewGate::new(Default::default(), "/srv/site/plugins/bar/bar.rs", build());

    assert_eq!(first.key(), second.key());
    assert_ne!(first.key(), other.key());
    assert!(first.key().as_str().starts_with("wrm_"));
}

#[test]
fn test_invalid_config_is_an_error_not_a_notice() {
    let result = ReviewGate::from_value(
        json!({ "rating": 0 }),
        PLUGIN_PATH,
        HostServices::new(
            Arc::new(StaticPlatform::new("6.4", "8.2")),
            Arc::new(review_me_core::MemoryStore::new()),
            Arc::new(ErrorBuffer::new()),
        ),
    );

    assert!(matches!(result, Err(ReviewError::InvalidConfig(_))));
}
