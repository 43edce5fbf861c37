use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    if let Some(path) = env::var_os("CARGO_BIN_EXE_minimark") {
        return PathBuf::from(path);
    }
    let exe = env::current_exe().expect("current exe");
    let mut debug_dir = exe.as_path();
    while let Some(parent) = debug_dir.parent() {
        if parent.file_name().and_then(|name| name.to_str()) == Some("debug") {
            let candidate = parent.join("minimark");
            if candidate.exists() {
                return candidate;
            }
        }
        debug_dir = parent;
    }
    panic!("binary path missing");
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let mut path = env::temp_dir();
    let now = SystemTime::now().duration_since(UNIX_EPOCH).expect("time");
    let file_name = format!(
        "minimark_{}_{}_{}.md",
        name,
        now.as_secs(),
        now.subsec_nanos()
    );
    path.push(file_name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn renders_file_argument() {
    let input = temp_file("file", "# Title\n\nBody text.\n");
    let output = Command::new(bin_path())
        .args([input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "<h1>Title</h1>\n<p>Body text.</p>\n");
}

#[test]
fn renders_stdin_when_no_file_is_given() {
    let mut child = Command::new(bin_path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"*hi*\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "<p><em>hi</em></p>\n");
}

#[test]
fn strict_flag_escapes_raw_html() {
    let input = temp_file("strict", "<b>x</b>\n");
    let output = Command::new(bin_path())
        .args(["-n", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "<p>&lt;b&gt;x&lt;/b&gt;</p>\n");
}

#[test]
fn double_dash_ends_option_parsing() {
    let input = temp_file("dashes", "plain\n");
    let output = Command::new(bin_path())
        .args(["--", input.to_str().expect("path")])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "<p>plain</p>\n");
}

#[test]
fn version_flag_prints_version() {
    let output = Command::new(bin_path())
        .args(["-v"])
        .output()
        .expect("run");

    assert!(output.status.success(), "expected success exit code");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("minimark "), "expected version line");
}

#[test]
fn unknown_option_fails_with_usage() {
    let output = Command::new(bin_path())
        .args(["-x"])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "expected usage on stderr");
}

#[test]
fn missing_file_fails() {
    let output = Command::new(bin_path())
        .args(["/nonexistent/minimark-input.md"])
        .output()
        .expect("run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "expected read error");
}
