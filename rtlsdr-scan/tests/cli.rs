use std::io::{BufRead, BufReader};
use std::net::TcpListener;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rtlsdr-scan"))
        .args(args)
        .output()
        .expect("run rtlsdr-scan")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn samples_reports_power_of_two() {
    let output = run(&["samples", "--dwell", "0.01"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("samples: 32768"), "{text}");
    assert!(text.contains("dwell: 0.016"), "{text}");
}

#[test]
fn format_uses_config_precision() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("settings.json");
    std::fs::write(&config, r#"{"precision_freq": 3, "precision_level": 1}"#).expect("config");

    let output = run(&[
        "--config",
        config.to_str().expect("utf8 path"),
        "format",
        "--freq",
        "100.123456",
        "--level",
        "-42",
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("100.123 MHz"), "{text}");
    assert!(text.contains("-42.0 dB/Hz"), "{text}");
}

#[test]
fn ports_lists_at_least_one() {
    let output = run(&["ports"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.lines().count() >= 2, "{text}");
}

#[test]
fn version_stamp_then_show() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundle = dir.path().to_str().expect("utf8 path");

    let output = run(&["--bundle-dir", bundle, "version", "stamp"]);
    assert!(output.status.success());
    assert!(dir.path().join("version-timestamp").exists());

    let output = run(&["--bundle-dir", bundle, "version", "show", "--seconds"]);
    assert!(output.status.success());
    let seconds: i64 = stdout(&output).trim().parse().expect("integer seconds");
    assert!(seconds > 1);
}

#[test]
fn version_show_without_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let bundle = dir.path().to_str().expect("utf8 path");
    let output = run(&["--bundle-dir", bundle, "version", "show"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("[rtlsdr-scan][ERROR]"));
}

#[test]
fn time_unknown_for_zero() {
    let output = run(&["time", "0"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Unknown");

    let output = run(&["time", "0", "--iso"]);
    assert_eq!(stdout(&output).trim(), "1970-01-01T00:00:00Z");
}

#[test]
fn tune_delivers_command() {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr").to_string();

    let output = run(&["tune", "433920000", "--addr", &addr]);
    assert!(output.status.success());

    let (stream, _) = listener.accept().expect("accept");
    let mut line = String::new();
    BufReader::new(stream).read_line(&mut line).expect("read line");
    assert_eq!(
        line,
        "{\"Command\":\"Set\",\"Method\":\"Frequency\",\"Value\":433920000.0}\r\n"
    );
}

#[test]
fn tune_without_listener_still_succeeds() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("local addr").to_string()
    };
    let output = run(&["tune", "100", "--addr", &addr, "--timeout-ms", "200"]);
    assert!(output.status.success());
}

#[test]
fn tune_defaults_to_local_control_port() {
    let output = run(&["tune", "--help"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("127.0.0.1:3382"));
}

#[test]
fn convert_requires_an_input() {
    let output = run(&["convert"]);
    assert!(!output.status.success());

    let output = run(&["convert", "--level", "1"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "0");

    let output = run(&["convert", "--level", "1", "--db", "3"]);
    assert!(!output.status.success());
}

#[test]
fn samples_rejects_non_positive_sample_rate() {
    let output = run(&["samples", "--dwell", "0.01", "--sample-rate", "0"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("sample_rate must be positive"));
    assert!(!stdout(&output).contains("inf"));
}
