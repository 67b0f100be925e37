#[cfg(test)]
mod tests {
    use crate::repository::MemoryBackend;
    use crate::service::LedgerService;
    use crate::usecase::views::ViewUseCase;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn seeded_service() -> LedgerService<MemoryBackend> {
        let service = LedgerService::new(MemoryBackend::new());

        let putting = service.create_drill("Putting", 50, date("2024-06-10")).unwrap();
        let chipping = service.create_drill("Chipping", 30, date("2024-06-10")).unwrap();
        service
            .save_day(date("2024-06-10"), vec![putting, chipping])
            .unwrap();

        let driving = service.create_drill("Driving", 20, date("2024-06-12")).unwrap();
        service.save_day(date("2024-06-12"), vec![driving]).unwrap();

        service
    }

    #[test]
    fn test_daily_view() {
        let service = seeded_service();
        let views = ViewUseCase::new(&service);

        let view = views.daily(date("2024-06-10")).unwrap();
        assert_eq!(view.drills.len(), 2);
        assert_eq!(view.total_shots, 80);
        assert_eq!(view.saved_names, vec!["Putting", "Chipping", "Driving"]);

        let empty = views.daily(date("2024-06-11")).unwrap();
        assert!(empty.drills.is_empty());
        assert_eq!(empty.total_shots, 0);
    }

    #[test]
    fn test_weekly_view() {
        let service = seeded_service();
        let views = ViewUseCase::new(&service);

        // 2024-06-12 is a Wednesday; its week runs Sun 06-09 .. Sat 06-15.
        let view = views.weekly(date("2024-06-12")).unwrap();
        assert_eq!(view.start, date("2024-06-09"));
        assert_eq!(view.end, date("2024-06-15"));
        assert_eq!(view.days.len(), 7);

        let monday = &view.days[1];
        assert_eq!(monday.date, date("2024-06-10"));
        assert_eq!(monday.total_shots, 80);
        assert!(!monday.is_today);

        let wednesday = &view.days[3];
        assert!(wednesday.is_today);
        assert_eq!(wednesday.total_shots, 20);

        assert_eq!(view.summary.total_shots, 100);
        assert_eq!(view.summary.distinct_days_trained, 2);
    }

    #[test]
    fn test_monthly_view() {
        let service = seeded_service();
        let views = ViewUseCase::new(&service);

        let view = views.monthly(2024, 6, date("2024-06-15")).unwrap();
        // June 2024 starts on a Saturday: 6 leading blanks plus 30 days.
        assert_eq!(view.cells.len(), 6 + 30);
        assert!(view.cells[..6].iter().all(|c| c.is_none()));

        let june_10 = view.cells[6 + 9].as_ref().unwrap();
        assert_eq!(june_10.date, date("2024-06-10"));
        assert_eq!(june_10.drills.len(), 2);

        assert_eq!(view.summary.total_shots, 100);
        assert_eq!(view.summary.distinct_days_trained, 2);
        // All three names appear once; the earliest stored wins the tie.
        assert_eq!(
            view.summary.most_common_drill_name,
            Some("Putting".to_string())
        );

        // Viewing the current month counts only elapsed days.
        assert_eq!(view.elapsed_days, 15);
        // A past month counts its full length.
        let past = views.monthly(2024, 6, date("2024-07-02")).unwrap();
        assert_eq!(past.elapsed_days, 30);
    }

    #[test]
    fn test_yearly_view() {
        let service = seeded_service();
        let views = ViewUseCase::new(&service);

        let view = views.yearly(2024).unwrap();
        assert_eq!(view.months.len(), 12);

        let june = &view.months[5];
        assert_eq!(june.month, 6);
        assert_eq!(june.summary.total_shots, 100);

        let may = &view.months[4];
        assert_eq!(may.summary.total_shots, 0);
        assert_eq!(may.summary.most_common_drill_name, None);

        assert_eq!(view.summary.total_shots, 100);
        assert_eq!(view.summary.distinct_days_trained, 2);
    }

    #[test]
    fn test_views_refresh_after_removal() {
        let service = seeded_service();
        let views = ViewUseCase::new(&service);

        let id = views.daily(date("2024-06-12")).unwrap().drills[0].id.clone();
        service.remove_drill(&id).unwrap();

        let view = views.daily(date("2024-06-12")).unwrap();
        assert!(view.drills.is_empty());
    }
}
