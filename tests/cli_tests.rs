use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn wxdaily() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wxdaily"))
}

#[test]
fn help_lists_the_subcommands() {
    let output = wxdaily().arg("--help").output().expect("run wxdaily");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("send"));
    assert!(stdout.contains("context"));
    assert!(stdout.contains("check"));
}

#[test]
fn send_without_credentials_exits_nonzero() {
    let dir = TempDir::new().expect("temp dir");

    let output = wxdaily()
        .args(["send", "--to", "openid-a", "--template", "tmpl-1", "--config"])
        .arg(dir.path().join("absent.toml"))
        .env_remove("WECHAT_APP_ID")
        .env_remove("WECHAT_APP_SECRET")
        .output()
        .expect("run wxdaily");

    assert!(!output.status.success(), "expected nonzero exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("WECHAT_APP_ID"),
        "expected missing-credential message, stderr: {stderr}"
    );
}

#[test]
fn check_config_rejects_invalid_tuning() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, "[quote]\nmax_attempts = 0\n").expect("write temp config");

    let output = wxdaily()
        .args(["check", "config", "--config"])
        .arg(&path)
        .output()
        .expect("run wxdaily");

    assert!(!output.status.success(), "expected nonzero exit code");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("quote.max_attempts"),
        "expected invalid-field message, stderr: {stderr}"
    );
}

#[test]
fn check_config_accepts_a_valid_file() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[push]\nrecipients = [\"openid-a\"]\ntemplate_id = \"tmpl-1\"\n",
    )
    .expect("write temp config");

    let output = wxdaily()
        .args(["check", "config", "--config"])
        .arg(&path)
        .output()
        .expect("run wxdaily");

    assert!(output.status.success(), "expected zero exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("configuration valid"), "stdout: {stdout}");
}
