//! Runs the `batch-resizer` binary and checks exit codes and stream usage.

mod common;

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use common::{Fixture, file_names};

fn batch_resizer(folder: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_batch-resizer"))
        .arg(folder)
        .output()
        .unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn missing_folder_exits_with_one() {
    let fx = Fixture::new("cli-missing");
    let missing = fx.root.join("nope");

    let output = batch_resizer(&missing);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("not found"));
    assert!(stdout_of(&output).is_empty());
    assert!(!fx.root.join("nope-w-300").exists());
}

#[test]
fn corrupt_image_still_exits_with_zero() {
    let fx = Fixture::new("cli-corrupt");
    fx.rgb("good.png", 600, 300);
    fx.write("broken.jpg", b"\xFF\xD8\xFF\xE0 not really a jpeg");

    let output = batch_resizer(&fx.input());

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("✗ broken.jpg: Error - "));
    assert!(stdout.contains("Done! Processed 1/2 images"));
    assert_eq!(file_names(&fx.output(300)), ["good.jpg"]);
}

#[test]
fn json_flag_prints_only_the_summary() {
    let fx = Fixture::new("cli-json");
    fx.rgb("wide.png", 900, 600);
    fx.write("broken.gif", b"GIF89a but truncated");

    let output = Command::new(env!("CARGO_BIN_EXE_batch-resizer"))
        .arg(fx.input())
        .args(["450", "70", "--json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let summary: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(summary["found"], 2);
    assert_eq!(summary["processed"], 1);
    assert_eq!(summary["results"].as_array().unwrap().len(), 2);
    assert!(summary["outputDir"].as_str().unwrap().ends_with("photos-w-450"));
    assert!(!stdout_of(&output).contains("Done!"));
}

#[test]
fn prompt_goes_to_stderr_when_folder_is_omitted() {
    let fx = Fixture::new("cli-prompt");
    fx.rgb("shot.jpg", 640, 480);

    let mut child = Command::new(env!("CARGO_BIN_EXE_batch-resizer"))
        .arg("--json")
        .current_dir(fx.input())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Empty answer selects the current directory
    child.stdin.take().unwrap().write_all(b"\n").unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(stderr_of(&output).contains("Enter folder path"));
    let summary: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(summary["processed"], 1);
    assert_eq!(file_names(&fx.output(300)), ["shot.jpg"]);
}

#[test]
fn invalid_width_is_a_usage_error() {
    let fx = Fixture::new("cli-usage");

    let output = Command::new(env!("CARGO_BIN_EXE_batch-resizer"))
        .arg(fx.input())
        .arg("0")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    assert!(!fx.output(0).exists());
}
