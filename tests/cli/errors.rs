//! Tests for error reporting and exit codes.

use crate::support::*;
use std::fs;

#[test]
fn test_missing_key_source_fails() {
    let t = Test::new();

    let output = t.cmd().args(["get", "k"]).output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no key file specified");
}

#[test]
fn test_set_without_key_does_not_create_store() {
    let t = Test::new();

    let output = t.cmd().args(["set", "k", "v"]).output().unwrap();
    assert_failure(&output);
    assert!(!t.default_store_path().exists());
}

#[test]
fn test_short_key_file_is_format_error() {
    let t = Test::new();
    fs::create_dir_all(t.dir.path().join("keys")).unwrap();
    fs::write(t.key_path(), "# created: now\n# public key: age1x\n").unwrap();

    let output = t.get("k");
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid key file format");
}

#[test]
fn test_malformed_secret_line_fails() {
    let t = Test::new();
    fs::create_dir_all(t.dir.path().join("keys")).unwrap();
    fs::write(t.key_path(), "# created: now\n# public key: age1x\nnope").unwrap();

    let output = t.get("k");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse private key");
}

#[test]
fn test_missing_key_file_fails() {
    let t = Test::new();

    let output = t.get("k");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read");
}

#[test]
fn test_logging_goes_to_stderr() {
    let t = Test::with_values(&[("k", "v")]);

    let output = t.kv().args(["--verbose", "get", "k"]).output().unwrap();
    assert_success(&output);
    assert_eq!(stdout(&output), "v\n");
    assert_stderr_contains(&output, "loading store");
}

#[test]
fn test_default_no_debug_output() {
    let t = Test::with_values(&[("k", "v")]);

    let output = t.get("k");
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_log_env_var() {
    let t = Test::with_values(&[("k", "marker-7f3a")]);

    let output = t
        .kv()
        .env("KVAGE_LOG", "kvage=trace")
        .args(["get", "k"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "decrypting");
    // Plaintext never reaches the log
    assert!(!stderr(&output).contains("marker-7f3a"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_store_is_not_overwritten() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_values(&[("precious", "keep-me")]);
    let store = t.default_store_path();
    let before = fs::read_to_string(&store).unwrap();
    fs::set_permissions(&store, fs::Permissions::from_mode(0o200)).unwrap();

    // root ignores file modes
    if fs::read(&store).is_ok() {
        return;
    }

    let output = t.set("new", "v");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read");

    let output = t.rm("precious");
    assert_failure(&output);

    fs::set_permissions(&store, fs::Permissions::from_mode(0o600)).unwrap();
    assert_eq!(fs::read_to_string(&store).unwrap(), before);
    let output = t.get("precious");
    assert_success(&output);
    assert_eq!(stdout(&output), "keep-me\n");
}

#[cfg(unix)]
#[test]
fn test_exposed_key_file_warns() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_values(&[("k", "v")]);
    fs::set_permissions(t.key_path(), fs::Permissions::from_mode(0o644)).unwrap();

    let output = t.get("k");
    assert_success(&output);
    assert_eq!(stdout(&output), "v\n");
    assert_stderr_contains(&output, "insecure key file permissions");
}

#[cfg(unix)]
#[test]
fn test_private_key_file_does_not_warn() {
    let t = Test::with_values(&[("k", "v")]);

    let output = t.get("k");
    assert_success(&output);
    assert!(!stderr(&output).contains("insecure key file permissions"));
}

#[test]
fn test_rm_leaves_unparsable_store_alone() {
    let t = Test::with_key();
    fs::write(t.local_store_path(), "data: [unterminated\n").unwrap();

    let output = t.rm("anything");
    assert_success(&output);
    assert_stderr_contains(&output, "cannot parse store");
    assert_eq!(
        fs::read_to_string(t.local_store_path()).unwrap(),
        "data: [unterminated\n"
    );
}
