use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const LOW_PAIN_ANSWERS: [&str; 8] = [
    "s1=nee",
    "s2=nee",
    "s3=nee",
    "s4=nee",
    "vas_now=2",
    "vas_after=3",
    "ak1=nee",
    "ak2=nee",
];

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a private
/// database for testing
fn compass_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("compass").expect("Failed to find compass binary");
    let db_path = temp_dir.path().join("cli_test.db");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn answer_args(answers: &[&str]) -> Vec<String> {
    answers
        .iter()
        .flat_map(|answer| ["--answer".to_string(), (*answer).to_string()])
        .collect()
}

#[test]
fn test_cli_assess_low_pain() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["--language", "en", "assess"])
        .args(answer_args(&LOW_PAIN_ANSWERS))
        .assert()
        .success()
        .stdout(predicate::str::contains("# Your Advice"))
        .stdout(predicate::str::contains("Based on your highest pain score: 3"))
        .stdout(predicate::str::contains("Advice: Take it easy today."))
        .stdout(predicate::str::contains("Note:").not());
}

#[test]
fn test_cli_assess_urgent_stops_at_screening() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["--language", "en", "assess"])
        .args(answer_args(&["s1=nee", "s2=nee", "s3=ja"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("# Your Advice (Urgent)"))
        .stdout(predicate::str::contains("Contact your GP or physiotherapist."))
        .stdout(predicate::str::contains("pain score").not());
}

#[test]
fn test_cli_assess_missing_answer_fails() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["--language", "en", "assess"])
        .args(answer_args(&["s1=nee", "s2=nee", "s3=nee", "s4=nee"]))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Please fill in all answers before proceeding.",
        ));
}

#[test]
fn test_cli_assess_out_of_range_fails() {
    let temp_dir = create_cli_test_environment();
    let mut answers = LOW_PAIN_ANSWERS.to_vec();
    answers[4] = "vas_now=11";

    compass_cmd(&temp_dir)
        .arg("assess")
        .args(answer_args(&answers))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Vul alle antwoorden in",
        ))
        .stderr(predicate::str::contains("vas_now"));
}

#[test]
fn test_cli_assess_json_output() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["--language", "en", "assess", "--json"])
        .args(answer_args(&LOW_PAIN_ANSWERS))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"language\": \"en\""))
        .stdout(predicate::str::contains("\"urgent\": false"))
        .stdout(predicate::str::contains("\"vas_after\": 3"))
        .stdout(predicate::str::contains("\"s1\": \"NEE\""));
}

#[test]
fn test_cli_history_empty() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved results."));
}

#[test]
fn test_cli_assess_save_then_history() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["assess", "--save"])
        .args(answer_args(&LOW_PAIN_ANSWERS))
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved result 1."));

    compass_cmd(&temp_dir)
        .args(["--language", "en", "assess", "--save"])
        .args(answer_args(&["s1=ja"]))
        .assert()
        .success();

    compass_cmd(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("## 2. "))
        .stdout(predicate::str::contains("[en] (urgent)"))
        .stdout(predicate::str::contains("## 1. "))
        .stdout(predicate::str::contains("Advies: Doe rustig aan vandaag."));

    compass_cmd(&temp_dir)
        .args(["history", "--language", "nl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## 1. "))
        .stdout(predicate::str::contains("## 2. ").not());
}

#[test]
fn test_cli_steps_lists_catalog() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["--language", "en", "steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0. **Knee Load Compass** (landing)"))
        .stdout(predicate::str::contains("`vas_after`: 0-10"));
}

#[test]
fn test_cli_run_interactive_high_pain() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["--language", "en", "run"])
        .write_stdin("\nnee\nno\nn\nnee\n6\n1\nja\nyes\ns\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1/8"))
        .stdout(predicate::str::contains("Step 8/8"))
        .stdout(predicate::str::contains(
            "You can also build up your explosive exercises",
        ))
        .stdout(predicate::str::contains("your pain clearly worsens with walking"))
        .stdout(predicate::str::contains("your pain clearly worsens with jumping"))
        .stdout(predicate::str::contains(
            "Knee Load Compass - ADVISORY tool for Patellofemoral Pain Syndrome",
        ));
}

#[test]
fn test_cli_run_refuses_to_skip_questions() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["--language", "en"])
        .write_stdin("\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("fill in all answers before proceeding"));
}

#[test]
fn test_cli_run_urgent_back_and_language_toggle() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["--language", "en", "run"])
        .write_stdin("\nja\nb\nl\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Your Advice (Urgent)"))
        .stdout(predicate::str::contains("Stap 1/8"));
}

#[test]
fn test_cli_run_save_records_result() {
    let temp_dir = create_cli_test_environment();

    compass_cmd(&temp_dir)
        .args(["run", "--save"])
        .write_stdin("\nnee\nja\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved result 1."));

    compass_cmd(&temp_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("[nl] (urgent)"));
}
