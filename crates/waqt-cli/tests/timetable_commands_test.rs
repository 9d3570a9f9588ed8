use waqt_testing::TestWorld;
use waqt_testing::fixtures::write_uniform_month;

#[test]
fn test_months_lists_files_in_order() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_sample_month("2024-07")
        .with_sample_month("2024-06")
        .with_data_file("README.txt", "not a timetable");

    let json = world.run_json(&["months"])?;
    let months = json["content"]["months"]
        .as_array()
        .expect("months array");
    assert_eq!(months.len(), 2);
    assert_eq!(months[0]["month"], "2024-06");
    assert_eq!(months[0]["days"], 30);
    assert_eq!(months[1]["month"], "2024-07");
    assert_eq!(months[1]["timezone"], "Europe/London");
    Ok(())
}

#[test]
fn test_months_empty_data_dir() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["months"])?;
    assert!(result.success(), "{}", result.stderr);
    Ok(())
}

#[test]
fn test_check_clean_samples() -> anyhow::Result<()> {
    let world = TestWorld::new()
        .with_sample_month("2024-06")
        .with_sample_month("2024-07");

    let json = world.run_json(&["check"])?;
    assert_eq!(json["content"]["days_checked"], 61);
    assert_eq!(json["content"]["problem_count"], 0);

    let result = world.run(&["check", "2024-06"])?;
    assert!(result.success(), "{}", result.stderr);
    assert!(result.stdout.contains("2024-06  30 day(s)  ok"));
    Ok(())
}

#[test]
fn test_check_reports_out_of_order_day() -> anyhow::Result<()> {
    let world = TestWorld::new();
    // Asr before Zuhr on every day
    write_uniform_month(
        world.data_dir(),
        "2024-02",
        ["05:30", "07:00", "12:20", "12:10", "17:30", "19:00"],
    )?;

    let result = world.run(&["check", "2024-02"])?;
    assert!(!result.success());
    assert!(result.stdout.contains("2024-02  29 day(s)  FAILED"));
    assert!(
        result
            .stdout
            .contains("2024-02-01: asr (12:10) is earlier than zuhr (12:20)")
    );
    assert!(
        result
            .stderr
            .contains("Error: 29 problem(s) found in timetable files")
    );
    Ok(())
}

#[test]
fn test_check_missing_month() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["check", "2030-01"])?;

    assert!(!result.success());
    assert!(result.stdout.contains("2030-01: No timetable file for 2030-01"));
    Ok(())
}

#[test]
fn test_uniform_month_is_usable() -> anyhow::Result<()> {
    let world = TestWorld::new();
    write_uniform_month(
        world.data_dir(),
        "2024-12",
        ["06:15", "08:00", "12:00", "13:40", "15:55", "17:30"],
    )?;

    let json = world.run_json(&["status", "--at", "2024-12-31T23:00"])?;
    // December 31 has no January file behind it
    assert!(json["content"]["next"].is_null());
    assert_eq!(json["content"]["active"], "isha");
    Ok(())
}
