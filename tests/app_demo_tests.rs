use chrono::NaiveDate;
use pet_core::{AvailabilityStore, FlowKind, YearMonth};
use pet_domain::{Booking, StaticPetSource, TimeSlot};
use petflow::app::{self, month_grid, parse_year_month, run_adoption_demo, run_service_demo};
use petflow::{build_engine, AppConfig, CoreError};

fn config() -> AppConfig {
    AppConfig { today: NaiveDate::from_ymd_opt(2024, 6, 1),
                ..AppConfig::default() }
}

#[test]
fn service_demo_books_the_free_afternoon() {
    let cfg = config();
    let catalog = tokio_test::block_on(app::load(&StaticPetSource));
    let mut engine = build_engine(&cfg, catalog);

    let report = run_service_demo(&mut engine, &cfg.seed_service, cfg.seed_offset_days).unwrap();
    assert_eq!(report.flow, FlowKind::Service);
    assert_eq!(report.title, "Book a Service");
    assert!(report.log.iter().any(|l| l == "next: Details -> Review (Review & Confirm)"));
    let conflict_day = NaiveDate::from_ymd_opt(2024, 6, 6).unwrap();
    assert_eq!(report.bookings,
               vec![Booking::new("service_01", conflict_day, TimeSlot::Morning),
                    Booking::new("service_01", conflict_day, TimeSlot::Afternoon)]);
    assert!(report.log.iter().any(|l| l.contains("select slot morning: Ignored(SlotTaken)")));
    assert_eq!(report.confirmation.unwrap().headline, "Booking Confirmed!");
    assert_eq!(report.review["Notes"], "Nervous around dryers");
}

#[test]
fn adoption_demo_writes_no_booking() {
    let catalog = tokio_test::block_on(app::load(&StaticPetSource));
    let mut engine = build_engine(&config(), catalog);
    let before = engine.store().list();

    let report = run_adoption_demo(&mut engine).unwrap();
    assert_eq!(report.flow, FlowKind::Adoption);
    assert_eq!(report.title, "Adoption Application");
    assert_eq!(report.started_at.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(report.confirmation.unwrap().headline, "Application Submitted!");
    assert_eq!(engine.store().list(), before);
}

#[test]
fn calendar_for_unknown_service_is_not_found() {
    let catalog = tokio_test::block_on(app::load(&StaticPetSource));
    let engine = build_engine(&config(), catalog);
    let err = month_grid(&engine, "service_99", YearMonth::new(2024, 5).unwrap()).unwrap_err();
    assert!(matches!(err, CoreError::Wizard(_)));

    let grid = month_grid(&engine, "service_01", parse_year_month("2024-06").unwrap()).unwrap();
    assert_eq!(grid.label, "June 2024");
    assert!(grid.day(1).unwrap().today);
}

#[test]
fn month_argument_is_validated() {
    for raw in ["2024", "2024-00", "2024-13", "june"] {
        assert!(parse_year_month(raw).is_err(), "{raw}");
    }
}
