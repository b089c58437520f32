// tests/tracker_properties.rs

use proptest::prelude::*;

use depwatch::graph::WatchedPath;
use depwatch::watch::{ChangeKind, ChangeTracker, Fingerprint};

/// `None` models a missing file.
fn to_fingerprint(content: &Option<Vec<u8>>) -> Fingerprint {
    match content {
        Some(bytes) => Fingerprint::of_bytes(bytes),
        None => Fingerprint::Absent,
    }
}

fn content_strategy() -> impl Strategy<Value = Option<Vec<u8>>> {
    proptest::option::of(proptest::collection::vec(any::<u8>(), 0..16))
}

proptest! {
    #[test]
    fn first_observation_is_never_a_change(
        path in "[a-z]{1,8}\\.txt",
        content in content_strategy(),
    ) {
        let mut tracker = ChangeTracker::new();
        let kind = tracker.observe(&WatchedPath::new(path), to_fingerprint(&content));
        prop_assert_eq!(kind, ChangeKind::FirstSeen);
    }

    #[test]
    fn classification_follows_content_equality(
        contents in proptest::collection::vec(content_strategy(), 1..20),
    ) {
        let mut tracker = ChangeTracker::new();
        let path = WatchedPath::new("watched.txt");

        for (i, content) in contents.iter().enumerate() {
            let kind = tracker.observe(&path, to_fingerprint(content));
            let expected = if i == 0 {
                ChangeKind::FirstSeen
            } else if contents[i - 1] == *content {
                ChangeKind::Unchanged
            } else {
                ChangeKind::Changed
            };
            prop_assert_eq!(kind, expected);
        }
    }

    #[test]
    fn fingerprinting_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(Fingerprint::of_bytes(&bytes), Fingerprint::of_bytes(&bytes));
    }
}
