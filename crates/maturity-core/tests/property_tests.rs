//! # Property-Based Tests
//!
//! Navigation invariants checked with proptest.

use maturity_core::{NavigationCommand, NavigationController, StageCatalog, ViewMode};
use proptest::collection::vec;
use proptest::prelude::*;

fn controller_at(start: usize) -> NavigationController {
    let mut nav = NavigationController::default();
    nav.select_stage(start).expect("select");
    nav
}

fn any_mode() -> impl Strategy<Value = ViewMode> {
    prop_oneof![Just(ViewMode::Application), Just(ViewMode::Service)]
}

fn any_command() -> impl Strategy<Value = NavigationCommand> {
    prop_oneof![
        (-3i64..8).prop_map(|index| NavigationCommand::Select { index }),
        Just(NavigationCommand::Advance),
        Just(NavigationCommand::Retreat),
        any_mode().prop_map(|mode| NavigationCommand::SetViewMode { mode }),
        Just(NavigationCommand::Reset),
    ]
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// n advances from i land on min(i + n, len - 1).
    #[test]
    fn advance_saturates_at_last(start in 0usize..5, n in 0usize..20) {
        let mut nav = controller_at(start);
        let last = nav.catalog().len() - 1;

        for _ in 0..n {
            nav.advance();
        }

        prop_assert_eq!(nav.current_index(), (start + n).min(last));
    }

    /// n retreats from i land on max(i - n, 0).
    #[test]
    fn retreat_saturates_at_first(start in 0usize..5, n in 0usize..20) {
        let mut nav = controller_at(start);

        for _ in 0..n {
            nav.retreat();
        }

        prop_assert_eq!(nav.current_index(), start.saturating_sub(n));
    }

    /// can_advance / can_retreat are false exactly at the boundaries.
    #[test]
    fn boundary_flags(index in 0usize..5) {
        let nav = controller_at(index);
        let last = nav.catalog().len() - 1;

        prop_assert_eq!(!nav.can_advance(), index == last);
        prop_assert_eq!(!nav.can_retreat(), index == 0);
    }

    /// select_stage resolves to exactly stage_at(index).
    #[test]
    fn select_resolves_catalog_stage(index in 0usize..5, mode in any_mode()) {
        let catalog = StageCatalog::reference();
        let mut nav = NavigationController::default();
        nav.set_view_mode(mode);
        nav.select_stage(index).expect("select");

        let expected = catalog.stage_at(index).expect("in range");
        prop_assert_eq!(nav.current_stage(), expected);
        prop_assert_eq!(nav.current_items(), &expected.items[mode]);
    }

    /// Out-of-range selections never change the state.
    #[test]
    fn invalid_select_is_rejected_atomically(start in 0usize..5, index in 5usize..1000) {
        let mut nav = controller_at(start);
        let before = nav.state();

        prop_assert!(nav.select_stage(index).is_err());
        prop_assert_eq!(nav.state(), before);
    }

    /// Any command sequence keeps the index in bounds, and a failed command
    /// leaves the state as it was.
    #[test]
    fn command_sequences_preserve_invariant(commands in vec(any_command(), 0..60)) {
        let mut nav = NavigationController::default();
        let len = nav.catalog().len();

        for command in commands {
            let before = nav.state();
            if nav.apply(command).is_err() {
                prop_assert_eq!(nav.state(), before);
            }
            prop_assert!(nav.current_index() < len);

            let view = nav.view();
            prop_assert_eq!(view.index, nav.current_index());
            prop_assert_eq!(view.can_advance, nav.can_advance());
            prop_assert_eq!(view.can_retreat, nav.can_retreat());
            prop_assert_eq!(view.items.as_slice(), nav.current_items());
        }
    }
}
