use assert_cmd::Command;
use std::time::Duration;
use waqt_testing::TestWorld;

#[allow(deprecated)]
fn watch(world: &TestWorld, stdin: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("waqt").expect("waqt binary");
    world.configure_command(&mut cmd);
    cmd.args(["--format", "json", "watch", "--mode", "console"])
        .write_stdin(stdin)
        .timeout(Duration::from_secs(20))
        .assert()
}

#[test]
fn test_watch_console_browses_and_quits() {
    let world = TestWorld::new().with_sample_month("2024-06");

    let assert = watch(&world, "2024-06-01\n+\nnonsense\nq\n").success();
    let output = assert.get_output();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    let frames: Vec<serde_json::Value> = stdout
        .lines()
        .filter(|line| line.starts_with('{'))
        .map(|line| serde_json::from_str(line).expect("one JSON frame per line"))
        .collect();

    let dates: Vec<&str> = frames
        .iter()
        .filter(|f| f["mode"] == "inspect")
        .filter_map(|f| f["date"].as_str())
        .collect();
    assert_eq!(dates, vec!["2024-06-01", "2024-06-02"]);

    assert!(stderr.contains("Unknown input 'nonsense'"));
}

#[test]
fn test_watch_console_survives_missing_today() {
    // The data dir holds 2024 only, so the live frame fails and is reported
    let world = TestWorld::new().with_sample_month("2024-06");

    let assert = watch(&world, "q\n").success();
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(stderr.contains("Error: No timetable file for"));
}
