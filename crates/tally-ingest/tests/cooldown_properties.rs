//! Property tests for the cooldown invariant: two accepted sightings of
//! one identifier are never closer than the configured window.

use proptest::prelude::*;
use tally_ingest::CooldownTracker;

proptest! {
    #[test]
    fn accepted_gaps_respect_the_window(
        offsets in prop::collection::vec(0u64..300, 1..60),
        cooldown in 1u64..120,
    ) {
        let mut tracker = CooldownTracker::new();
        let mut now = 0u64;
        let mut accepted_at: Vec<u64> = Vec::new();

        for offset in offsets {
            now += offset;
            if tracker.should_accept(1, now, cooldown) {
                tracker.record_accepted(1, now);
                accepted_at.push(now);
            }
        }

        for pair in accepted_at.windows(2) {
            prop_assert!(
                pair[1] - pair[0] >= cooldown,
                "accepted gap {} < cooldown {}",
                pair[1] - pair[0],
                cooldown
            );
        }
    }

    #[test]
    fn first_sighting_of_any_identifier_is_accepted(
        identifier in any::<i64>(),
        now in any::<u64>(),
        cooldown in 0u64..=86_400,
    ) {
        let tracker = CooldownTracker::new();
        prop_assert!(tracker.should_accept(identifier, now, cooldown));
    }

    #[test]
    fn interleaved_identifiers_never_block_each_other(
        offsets in prop::collection::vec((0u64..120, 1i64..5), 1..40),
        cooldown in 1u64..90,
    ) {
        let mut tracker = CooldownTracker::new();
        let mut now = 0u64;
        let mut last_accepted = std::collections::HashMap::new();

        for (offset, identifier) in offsets {
            now += offset;
            let accepted = tracker.should_accept(identifier, now, cooldown);
            let expected = match last_accepted.get(&identifier) {
                None => true,
                Some(last) => now - last >= cooldown,
            };
            prop_assert_eq!(accepted, expected);
            if accepted {
                tracker.record_accepted(identifier, now);
                last_accepted.insert(identifier, now);
            }
        }
    }

    #[test]
    fn zero_cooldown_accepts_everything(
        offsets in prop::collection::vec(0u64..10, 1..30),
    ) {
        let mut tracker = CooldownTracker::new();
        let mut now = 0u64;
        for offset in offsets {
            now += offset;
            prop_assert!(tracker.should_accept(1, now, 0));
            tracker.record_accepted(1, now);
        }
    }
}
