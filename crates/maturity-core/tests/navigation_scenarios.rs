//! # Navigation Scenario Tests
//!
//! End-to-end walks through the reference catalog.
//!
//! ## Groups
//! - N0: Initial state
//! - N1: Forward and backward stepping
//! - N2: Direct selection
//! - N3: View mode composition

use maturity_core::{
    MaturityError, MaturityGrade, NavigationController, StageCatalog, StageId, ViewMode,
};

// =============================================================================
// N0: INITIAL STATE
// =============================================================================

mod n0_initial_state {
    use super::*;

    /// N0.1: A fresh controller shows the first stage in application mode.
    #[test]
    fn fresh_controller() {
        let nav = NavigationController::default();

        assert_eq!(nav.current_stage().id, StageId::Foundation);
        assert_eq!(nav.view_mode(), ViewMode::Application);
        assert!(!nav.can_retreat());
        assert!(nav.can_advance());
    }

    /// N0.2: The first view carries the foundation scorecard.
    #[test]
    fn fresh_view() {
        let view = NavigationController::default().view();

        assert_eq!(view.index, 0);
        assert_eq!(view.total, 5);
        assert_eq!(view.maturity, 15);
        assert_eq!(view.grade, MaturityGrade::E);
        assert_eq!(view.track_percent, 0);
        assert_eq!(view.kpis.len(), 3);
        let ids: Vec<&str> = view.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["app-rep", "app-core"]);
    }
}

// =============================================================================
// N1: STEPPING
// =============================================================================

mod n1_stepping {
    use super::*;

    /// N1.1: Four advances reach the last stage; a fifth is a no-op.
    #[test]
    fn advance_to_last() {
        let mut nav = NavigationController::default();
        for _ in 0..4 {
            nav.advance();
        }

        assert_eq!(nav.current_stage().id, StageId::Fly);
        assert!(!nav.can_advance());

        nav.advance();
        assert_eq!(nav.current_index(), 4);
        assert_eq!(nav.current_stage().id, StageId::Fly);
    }

    /// N1.2: Every stage is visited in journey order.
    #[test]
    fn visits_in_order() {
        let mut nav = NavigationController::default();
        let mut visited = vec![nav.current_stage().id];
        while nav.can_advance() {
            nav.advance();
            visited.push(nav.current_stage().id);
        }

        assert_eq!(visited, StageId::ALL.to_vec());
    }

    /// N1.3: Grades rise along the reference journey.
    #[test]
    fn grades_along_journey() {
        let mut nav = NavigationController::default();
        let mut grades = vec![nav.view().grade];
        while nav.can_advance() {
            nav.advance();
            grades.push(nav.view().grade);
        }

        assert_eq!(
            grades,
            vec![
                MaturityGrade::E,
                MaturityGrade::D,
                MaturityGrade::C,
                MaturityGrade::B,
                MaturityGrade::A,
            ]
        );
    }
}

// =============================================================================
// N2: DIRECT SELECTION
// =============================================================================

mod n2_selection {
    use super::*;

    /// N2.1: select 2 shows walk; retreat shows crawl.
    #[test]
    fn select_then_retreat() {
        let mut nav = NavigationController::default();

        nav.select_stage(2).expect("select");
        assert_eq!(nav.current_stage().id, StageId::Walk);

        nav.retreat();
        assert_eq!(nav.current_stage().id, StageId::Crawl);
    }

    /// N2.2: Jumps may go backwards.
    #[test]
    fn backward_jump() {
        let mut nav = NavigationController::default();
        nav.select_stage(4).expect("select");
        nav.select_stage(1).expect("select");
        assert_eq!(nav.current_stage().id, StageId::Crawl);
    }

    /// N2.3: index == len is rejected and the state is unchanged.
    #[test]
    fn select_len_rejected() {
        let mut nav = NavigationController::default();
        nav.select_stage(3).expect("select");
        let len = nav.catalog().len();

        let result = nav.select_stage(len);
        assert!(matches!(result, Err(MaturityError::InvalidIndex { .. })));
        assert_eq!(nav.current_index(), 3);
    }

    /// N2.4: index == -1 is rejected and the state is unchanged.
    #[test]
    fn select_negative_rejected() {
        let mut nav = NavigationController::default();
        nav.select_stage(2).expect("select");

        let result = nav.apply(maturity_core::NavigationCommand::Select { index: -1 });
        assert!(matches!(
            result,
            Err(MaturityError::InvalidIndex { index: -1, .. })
        ));
        assert_eq!(nav.current_index(), 2);
    }
}

// =============================================================================
// N3: VIEW MODE COMPOSITION
// =============================================================================

mod n3_view_mode {
    use super::*;

    /// N3.1: service mode then select 4 yields fly's service items.
    #[test]
    fn service_items_follow_index() {
        let catalog = StageCatalog::reference();
        let mut nav = NavigationController::default();

        nav.set_view_mode(ViewMode::Service);
        nav.select_stage(4).expect("select");

        let fly = catalog.get(StageId::Fly).expect("fly stage");
        assert_eq!(nav.current_items(), fly.items.service.as_slice());
        assert_eq!(nav.view_mode(), ViewMode::Service);
    }

    /// N3.2: current_items is exactly the catalog list, order preserved.
    #[test]
    fn items_are_not_filtered() {
        let mut nav = NavigationController::default();
        nav.set_view_mode(ViewMode::Service);

        let ids: Vec<&str> = nav.current_items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["svc-core", "svc-users", "svc-groups", "svc-loc"]);
    }

    /// N3.3: An unknown mode string is rejected before it reaches the controller.
    #[test]
    fn unknown_mode_rejected() {
        let nav = NavigationController::default();
        let parsed = "infrastructure".parse::<ViewMode>();

        assert!(matches!(parsed, Err(MaturityError::InvalidViewMode(_))));
        assert_eq!(nav.view_mode(), ViewMode::Application);
    }

    /// N3.4: Switching modes back and forth keeps the stage.
    #[test]
    fn toggling_keeps_stage() {
        let mut nav = NavigationController::default();
        nav.select_stage(2).expect("select");

        nav.set_view_mode(nav.view_mode().toggled());
        assert_eq!(nav.current_items().len(), 3);
        nav.set_view_mode(nav.view_mode().toggled());
        assert_eq!(nav.current_items().len(), 4);
        assert_eq!(nav.current_stage().id, StageId::Walk);
    }
}
