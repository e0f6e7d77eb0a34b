use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_recruta")
}

#[test]
fn attack_run_prints_the_report_lines() {
    let output = Command::new(bin())
        .args(["ataque", "1", "1000", "1000", "1000"])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Status: Optimal"));
    assert!(stdout.contains("Cavalaria Leve: 2"));
    assert!(stdout.contains("Madeira gasta: 992"));
    assert!(stdout.contains("Argila gasta: 575"));
    assert!(stdout.contains("Ferro gasto: 964"));
}

#[test]
fn json_flag_emits_the_full_plan() {
    let output = Command::new(bin())
        .args(["ataque", "1", "1000", "1000", "1000", "--json"])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value = serde_json::from_str(&stdout).expect("plan should be json");
    assert_eq!(payload["status"], "optimal");
    assert_eq!(payload["counts"]["Lanceiro"], 4);
    assert_eq!(payload["spend"]["wood"], 992);
    assert_eq!(payload["total_build_time_secs"], 15950);
}

#[test]
fn missing_arguments_exit_with_usage() {
    let output = Command::new(bin()).output().expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: recruta"));
}

#[test]
fn zero_hours_is_rejected_by_the_core() {
    let output = Command::new(bin())
        .args(["ataque", "0", "1000", "1000", "1000"])
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid input"));
}
