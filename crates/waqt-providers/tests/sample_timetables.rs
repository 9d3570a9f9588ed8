use chrono::NaiveDate;
use std::path::PathBuf;
use waqt_providers::{DayDataProvider, JsonTimetableProvider, MonthKey};

fn samples() -> JsonTimetableProvider {
    JsonTimetableProvider::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/samples"))
}

#[test]
fn test_every_sample_day_is_valid() {
    let provider = samples();

    for month in provider.list_months().expect("samples should be listable") {
        let file = provider.load_month(month).expect("sample month should load");
        assert!(!file.days.is_empty(), "{} has no days", month);

        for (key, parsed) in file.entries() {
            let day = parsed.unwrap_or_else(|e| panic!("{}: {}", key, e));
            assert!(month.contains(day.date), "{} filed under {}", key, month);
            day.validate().unwrap_or_else(|e| panic!("{}", e));
        }
    }
}

#[test]
fn test_sample_months() {
    let months = samples().list_months().unwrap();
    assert_eq!(
        months,
        vec![
            MonthKey { year: 2024, month: 6 },
            MonthKey { year: 2024, month: 7 }
        ]
    );
}

#[test]
fn test_fetch_across_month_boundary() {
    let provider = samples();
    let june_30 = provider
        .fetch(NaiveDate::from_ymd_opt(2024, 6, 30).unwrap())
        .unwrap();
    let july_1 = provider
        .fetch(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap())
        .unwrap();

    assert_eq!(june_30.timezone.as_deref(), Some("Europe/London"));
    assert_eq!(july_1.date, june_30.date.succ_opt().unwrap());
}

#[test]
fn test_fetch_is_idempotent() {
    let provider = samples();
    let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    assert_eq!(provider.fetch(date).unwrap(), provider.fetch(date).unwrap());
}
