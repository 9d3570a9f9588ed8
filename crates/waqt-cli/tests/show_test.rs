use waqt_testing::TestWorld;
use waqt_testing::assertions::assert_mode;

#[test]
fn test_show_past_date_is_inspect_mode() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample_month("2024-06");
    let json = world.run_json(&["show", "2024-06-15"])?;

    assert_mode(&json, "inspect")?;
    assert_eq!(json["content"]["date"], "2024-06-15");
    assert_eq!(json["content"]["progress"]["fraction"], 1.0);
    // No "missing tomorrow" warning outside live mode
    assert!(json["badge"].is_null());
    Ok(())
}

#[test]
fn test_show_plain_marks_inspecting() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample_month("2024-06");
    let result = world.run(&["show", "2024-06-01"])?;

    assert!(result.success(), "{}", result.stderr);
    assert!(result.stdout.contains("Saturday, 1 June 2024"));
    assert!(result.stdout.contains("24 DHU AL-QADAH 1445 AH"));
    assert!(result.stdout.contains("INSPECTING"));
    assert!(!result.stdout.contains("NEXT"));
    assert!(result.stdout.contains("100%"));
    Ok(())
}

#[test]
fn test_show_missing_day() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample_month("2024-06");
    let result = world.run(&["show", "2024-08-01"])?;

    assert!(!result.success());
    assert!(result.stderr.contains("Error: No timetable file for 2024-08"));
    Ok(())
}

#[test]
fn test_show_invalid_date() -> anyhow::Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["show", "2024-06-31"])?;

    assert!(!result.success());
    assert!(
        result
            .stderr
            .contains("Invalid date '2024-06-31': expected YYYY-MM-DD")
    );
    Ok(())
}

#[test]
fn test_times_prints_flat_day_record() -> anyhow::Result<()> {
    let world = TestWorld::new().with_sample_month("2024-07");
    let result = world.run(&["times", "2024-07-01"])?;

    assert!(result.success(), "{}", result.stderr);
    let json = result.json()?;
    assert_eq!(json["date"], "2024-07-01");
    assert_eq!(json["fajr"], "02:34");
    assert_eq!(json["isha"], "22:32");
    Ok(())
}
