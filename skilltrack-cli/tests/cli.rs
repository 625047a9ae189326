use std::process::Command;

const EMPTY: &str = "0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,,";

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "skilltrack-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

fn skilltrack() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_skilltrack"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_decode_writes_json_report() {
    let output_path = temp_path("decode");
    let status = skilltrack()
        .args(["decode", "#1,2", "--report", "json", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(&output_path).expect("read output");
    let value: serde_json::Value = serde_json::from_str(&content).expect("json report");
    assert_eq!(value["state"]["milestone_by_track"]["UX_STRATEGY_PLANNING"], 1);
    assert_eq!(value["state"]["milestone_by_track"]["UX_WRITING"], 2);
    assert_eq!(value["state"]["name"], "");
    assert_eq!(
        value["fragment"],
        "1,2,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,,"
    );
    let _ = std::fs::remove_file(output_path);
}

#[test]
fn cli_decode_rejects_empty_fragment() {
    let output = skilltrack().args(["decode", "#"]).output().expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nothing to decode"));
}

#[test]
fn cli_check_strict_flags_repairs() {
    let output = skilltrack()
        .args(["check", "--strict", "1,x"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Fragment needs repair"));
    assert!(stdout.contains("Normalized: #1,0,"));

    let status = skilltrack()
        .args(["check", "--strict", EMPTY])
        .status()
        .expect("run cli");
    assert!(status.success());
}

#[test]
fn cli_titles_lists_eligible_titles() {
    let output = skilltrack()
        .args(["titles", "--report", "json", EMPTY])
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json report");
    assert_eq!(value["eligible_titles"], serde_json::json!(["Junior Designer"]));
    assert_eq!(value["summary"]["points_to_next"], 17);
}

#[test]
fn cli_encode_reads_assessment_json() {
    let input_path = temp_path("encode-input");
    let mut milestones = serde_json::Map::new();
    milestones.insert("AGILE".to_string(), serde_json::json!(3));
    milestones.insert("EMPATHY".to_string(), serde_json::json!(2.5));
    milestones.insert("BRANDING".to_string(), serde_json::Value::Null);
    milestones.insert("UI_DESIGN".to_string(), serde_json::json!("4"));
    let state = serde_json::json!({
        "name": "Ada, L",
        "title": "Designer",
        "milestone_by_track": milestones,
        "focused_track": "AGILE",
    });
    std::fs::write(&input_path, state.to_string()).expect("write input");

    let output = skilltrack()
        .arg("encode")
        .arg(&input_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        "#0,0,0,0,0,0,0,4,0,0,0,3,0,0,0,0,0,0,Ada%2C%20L,Designer"
    );
    let _ = std::fs::remove_file(input_path);
}

#[test]
fn cli_edit_updates_fragment_file() {
    let fragment_path = temp_path("edit");
    std::fs::write(&fragment_path, format!("#{EMPTY}\n")).expect("seed fragment");

    let status = skilltrack()
        .args(["edit", "--file"])
        .arg(&fragment_path)
        .args(["name=Ada", "set=AGILE:5", "down", "prev"])
        .status()
        .expect("run cli");
    assert!(status.success());
    let stored = std::fs::read_to_string(&fragment_path).expect("read fragment");
    assert_eq!(
        stored.trim(),
        "0,0,0,0,0,0,0,0,0,0,0,4,0,0,0,0,0,0,Ada,Junior%20Designer"
    );
    let _ = std::fs::remove_file(fragment_path);
}

#[test]
fn cli_edit_dry_run_leaves_file_alone() {
    let fragment_path = temp_path("dry-run");
    std::fs::write(&fragment_path, "1,1\n").expect("seed fragment");

    let output = skilltrack()
        .args(["edit", "--dry-run", "--file"])
        .arg(&fragment_path)
        .arg("up")
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Dry run"));
    assert_eq!(
        std::fs::read_to_string(&fragment_path).expect("read fragment"),
        "1,1\n"
    );
    let _ = std::fs::remove_file(fragment_path);
}

#[test]
fn cli_edit_rejects_unknown_ops() {
    let fragment_path = temp_path("bad-op");
    let output = skilltrack()
        .args(["edit", "--file"])
        .arg(&fragment_path)
        .arg("teleport")
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown edit op"));
    assert!(!fragment_path.exists());
}
