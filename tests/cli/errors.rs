//! Tests for failures and how they are reported.

use crate::support::*;

#[test]
fn test_missing_pattern() {
    let t = Test::with_passwords();

    for args in [&[][..], &["-r"][..], &["-v", "x"][..]] {
        let output = t.run(args, MASTER);
        assert_failure(&output);
        assert_stderr_contains(&output, "need a pattern");
    }
}

#[test]
fn test_missing_pattern_checked_before_file() {
    let t = Test::new();

    let output = t.run(&[], MASTER);
    assert_failure(&output);
    assert_stderr_contains(&output, "need a pattern");
    assert_stderr_excludes(&output, "database not found");
}

#[test]
fn test_invalid_regex() {
    let t = Test::new();

    let output = t.run(&["/(unclosed"], MASTER);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid pattern");
}

#[test]
fn test_missing_database_hint() {
    let t = Test::new();

    let output = t.get("company");
    assert_failure(&output);
    assert_stderr_contains(&output, "database not found");
    assert_stderr_contains(&output, "passwordmachine --create");
}

#[test]
fn test_wrong_passphrase() {
    let t = Test::with_passwords();

    let output = t.run(&["company"], WRONG);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to decrypt");
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_wrong_passphrase_never_writes() {
    let t = Test::with_passwords();

    let output = t.run(&["-v", "x", "company/new"], WRONG);
    assert_failure(&output);
    assert_eq!(t.read_db(), LEGACY_PASSWORDS_DB);
}

#[test]
fn test_empty_passphrase() {
    let t = Test::with_passwords();

    let output = t.run(&["company"], "");
    assert_failure(&output);
    assert_stderr_contains(&output, "passphrase cannot be empty");
}

#[test]
fn test_decrypted_garbage() {
    let t = Test::new();
    t.write_db(LEGACY_NOT_JSON);

    let output = t.get("company");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to decrypt");
}

#[test]
fn test_not_a_database() {
    let t = Test::new();
    t.write_db("this is plainly not hex");

    let output = t.get("company");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to decrypt");
}

#[test]
fn test_binary_file_is_not_a_database() {
    let t = Test::new();
    std::fs::write(t.db(), [0xffu8, 0xfe, 0x00, 0x41]).unwrap();

    let output = t.get("company");
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to decrypt");
    assert_stderr_excludes(&output, "io error");
}

#[test]
fn test_version_mismatch() {
    let t = Test::new();

    // a legacy file claiming a newer format
    let ciphertext = passwordmachine::CipherKind::Legacy
        .encrypt(r#"{"version":"~9.0.0","data":{}}"#, MASTER)
        .unwrap();
    t.write_db(&ciphertext);

    let output = t.get("company");
    assert_failure(&output);
    assert_stderr_contains(&output, "version mismatch");
    assert_stderr_contains(&output, "~9.0.0");
}

#[test]
fn test_verbose_error_shows_details() {
    let t = Test::with_passwords();

    let output = t.run(&["-V", "company"], WRONG);
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to decrypt");
    assert_stderr_contains(&output, "DecryptionFailed");
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.bare_cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "passwordmachine");
    assert_stdout_contains(&output, env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.bare_cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "--create");
    assert_stdout_contains(&output, "--encrypt");
    assert_stdout_contains(&output, "--dump");
}
