#[cfg(test)]
mod tests {
    use crate::forecast::{AdviceStatus, Hours};
    use crate::model::decision::Decision;
    use crate::model::settings::Settings;
    use crate::model::subject::AttendanceSnapshot;
    use crate::repository::{SettingsRepository, SnapshotRepository};
    use crate::service::dashboard_service::DashboardService;
    use crate::usecase::planner::PlannerUseCase;
    use crate::window::{PlanningWindow, WINDOW_DAYS};
    use anyhow::Result;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockSnapshotRepo {
        snapshot: RefCell<Option<AttendanceSnapshot>>,
    }

    impl SnapshotRepository for MockSnapshotRepo {
        fn load(&self) -> Result<Option<AttendanceSnapshot>> { Ok(self.snapshot.borrow().clone()) }
        fn save(&self, snapshot: &AttendanceSnapshot) -> Result<()> {
            *self.snapshot.borrow_mut() = Some(snapshot.clone());
            Ok(())
        }
        fn clear(&self) -> Result<()> {
            *self.snapshot.borrow_mut() = None;
            Ok(())
        }
    }

    struct MockSettingsRepo;
    impl SettingsRepository for MockSettingsRepo {
        fn load(&self) -> Result<Settings> { Ok(Settings::default()) }
        fn save(&self, _settings: &Settings) -> Result<()> { Ok(()) }
    }

    const MATH_ONLY: &str = r#"{"subjects": [
        {"id": 1, "name": "Math", "type": "Lecture", "attended": 30, "conducted": 40, "percentage": 75}
    ]}"#;

    const TWO_SUBJECTS: &str = r#"{"subjects": [
        {"id": 1, "name": "Math", "type": "Lecture", "attended": 30, "conducted": 40},
        {"id": 2, "name": "Optics", "type": "Lab", "attended": 18, "conducted": 21}
    ]}"#;

    fn window() -> PlanningWindow {
        PlanningWindow::starting(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
    }

    fn dashboard() -> DashboardService<MockSnapshotRepo, MockSettingsRepo> {
        DashboardService::new(MockSnapshotRepo::default(), MockSettingsRepo)
    }

    #[test]
    fn test_end_to_end_forecast() {
        let dashboard = dashboard();
        dashboard.import_report(MATH_ONLY).unwrap();
        let mut planner = PlannerUseCase::new(&dashboard, window()).unwrap();

        assert_eq!(planner.toggle(0, "1").unwrap(), Some(Decision::Attend));
        planner.toggle(1, "1").unwrap();
        assert_eq!(planner.toggle(1, "1").unwrap(), Some(Decision::Skip));

        let report = planner.report().unwrap();
        let math = &report.subjects[0].row;
        assert_eq!(math.projected_attended(), 31.0);
        assert_eq!(math.projected_conducted(), 42.0);
        assert_eq!(format!("{:.1}", math.current_percentage), "75.0");
        assert_eq!(format!("{:.1}", math.projected_percentage), "73.8");
        assert_eq!(format!("{:.1}", math.delta), "-1.2");

        assert_eq!(report.global.projected_percentage, math.projected_percentage);
        assert_eq!(report.global_projected.status, AdviceStatus::Risk);
        assert_eq!(report.global_projected.hours, Hours::Finite(2));
    }

    #[test]
    fn test_toggle_tokens() {
        let dashboard = dashboard();
        dashboard.import_report(TWO_SUBJECTS).unwrap();
        let mut planner = PlannerUseCase::new(&dashboard, window()).unwrap();

        assert_eq!(planner.toggle_token("wed", "opt").unwrap(), Some(Decision::Attend));
        assert_eq!(planner.decision(2, "2"), Some(Decision::Attend));
        assert!(planner.toggle_token("wed", "chemistry").is_err());
        assert!(planner.toggle(0, "99").is_err());
        assert_eq!(planner.plan().len(), 1);
    }

    #[test]
    fn test_apply_tokens_last_write_wins() {
        let dashboard = dashboard();
        dashboard.import_report(TWO_SUBJECTS).unwrap();
        let mut planner = PlannerUseCase::new(&dashboard, window()).unwrap();

        let args: Vec<String> = ["attend:tom:math", "skip:tom:math", "a:sun:optics"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(planner.apply_tokens(&args).unwrap(), 3);

        assert_eq!(planner.plan().len(), 2);
        assert_eq!(planner.decision(1, "1"), Some(Decision::Skip));
        assert_eq!(planner.decision(6, "2"), Some(Decision::Attend));

        let report = planner.report().unwrap();
        assert_eq!(report.global.added_attended, 3.0);
        assert_eq!(report.global.added_conducted, 4.0);
    }

    #[test]
    fn test_decisions_bounded_by_window_times_subjects() {
        let dashboard = dashboard();
        dashboard.import_report(TWO_SUBJECTS).unwrap();
        let mut planner = PlannerUseCase::new(&dashboard, window()).unwrap();

        for day in 0..WINDOW_DAYS + 2 {
            for id in ["1", "2", "3"] {
                let _ = planner.toggle(day, id);
            }
        }
        assert_eq!(planner.plan().len(), WINDOW_DAYS * planner.subjects().len());
    }

    #[test]
    fn test_reimport_resets_plan() {
        let dashboard = dashboard();
        dashboard.import_report(MATH_ONLY).unwrap();
        let mut planner = PlannerUseCase::new(&dashboard, window()).unwrap();
        planner.toggle(0, "1").unwrap();

        // Nothing changed on disk.
        assert!(!planner.refresh().unwrap());
        assert_eq!(planner.plan().len(), 1);

        dashboard.import_report(MATH_ONLY).unwrap();
        assert!(planner.refresh().unwrap());
        assert!(planner.plan().is_empty());
    }

    #[test]
    fn test_clear_and_reset() {
        let dashboard = dashboard();
        dashboard.import_report(TWO_SUBJECTS).unwrap();
        let mut planner = PlannerUseCase::new(&dashboard, window()).unwrap();

        planner.toggle(0, "1").unwrap();
        planner.reset();
        assert!(planner.plan().is_empty());

        planner.toggle(0, "2").unwrap();
        dashboard.clear().unwrap();
        assert!(planner.refresh().unwrap());
        assert!(planner.subjects().is_empty());
        assert!(planner.plan().is_empty());
    }
}
