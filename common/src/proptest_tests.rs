use proptest::prelude::*;

use crate::state::CounterState;
use crate::util::format_timestamp;
use crate::wire::CounterSnapshot;

prop_compose! {
    fn arb_snapshot()(
        count in 0u64..1_000_000,
        message in "[a-zA-Z0-9 ]{0,32}",
        timestamp in "[a-zA-Z0-9:TZ-]{0,24}",
    ) -> CounterSnapshot {
        CounterSnapshot {
            count,
            message,
            timestamp,
        }
    }
}

prop_compose! {
    fn arb_state()(
        count in 0u64..1_000_000,
        last_updated in "[a-zA-Z0-9:TZ-]{0,24}",
        is_loading in any::<bool>(),
        error_message in proptest::option::of("[a-z ]{1,16}"),
    ) -> CounterState {
        CounterState {
            count,
            last_updated,
            is_loading,
            error_message,
        }
    }
}

proptest! {
    #[test]
    fn local_increment_always_steps_by_exactly_one(mut state in arb_state()) {
        let before = state.count;
        state.apply_local_increment("2024-01-01T00:00:00Z");
        prop_assert_eq!(state.count, before + 1);
    }

    #[test]
    fn local_reset_always_lands_on_zero(mut state in arb_state()) {
        state.apply_local_reset("2024-01-01T00:00:00Z");
        prop_assert_eq!(state.count, 0);
    }

    #[test]
    fn snapshot_application_mirrors_the_server(mut state in arb_state(), snapshot in arb_snapshot()) {
        state.apply_snapshot(&snapshot);
        prop_assert_eq!(state.count, snapshot.count);
        prop_assert_eq!(&state.last_updated, &snapshot.timestamp);
        prop_assert!(state.error_message.is_none());
    }

    #[test]
    fn format_timestamp_never_panics(raw in "\\PC*") {
        let _ = format_timestamp(&raw);
    }

    #[test]
    fn format_timestamp_passes_unparseable_input_through(raw in "[a-z ]{0,24}") {
        prop_assert_eq!(format_timestamp(&raw), raw);
    }
}
