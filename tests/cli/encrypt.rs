//! Tests for `passwordmachine --encrypt`.

use crate::support::*;

fn encrypt(t: &Test, plaintext: &str, args: &[&str]) -> std::process::Output {
    t.write_db(plaintext);
    let mut all = vec!["--encrypt"];
    all.extend_from_slice(args);
    t.run(&all, MASTER)
}

#[test]
fn test_encrypt_legacy_matches_reference() {
    let t = Test::new();

    let output = encrypt(&t, PASSWORDS_JSON, &["--cipher", "legacy"]);
    assert_success(&output);
    assert_eq!(stdout(&output), LEGACY_PASSWORDS_DB);
}

#[test]
fn test_encrypt_does_not_touch_input() {
    let t = Test::new();

    assert_success(&encrypt(&t, PASSWORDS_JSON, &["--cipher", "legacy"]));
    assert_eq!(t.read_db(), PASSWORDS_JSON);
}

#[test]
fn test_encrypt_output_opens() {
    let t = Test::new();

    let output = encrypt(&t, PASSWORDS_JSON, &[]);
    assert_success(&output);
    let ciphertext = stdout(&output);
    assert!(ciphertext.starts_with("-----BEGIN AGE ENCRYPTED FILE-----"));

    t.write_db(&ciphertext);
    let output = t.get("company/area 69/http");
    assert_success(&output);
    assert_eq!(stdout(&output), "super_mega_secret");
}

#[test]
fn test_encrypt_restamps_version_for_cipher() {
    let t = Test::new();

    let output = encrypt(
        &t,
        r#"{"version":"~2.0.0","data":{"a":"b"}}"#,
        &["--cipher", "legacy"],
    );
    assert_success(&output);

    t.write_db(&stdout(&output));
    let dump = t.dump_json();
    assert_eq!(dump["version"], "~1.0.0");
    assert_eq!(dump["data"]["a"], "b");
}

#[test]
fn test_encrypt_rejects_missing_version() {
    let t = Test::new();

    let output = encrypt(&t, r#"{"data":{}}"#, &["--cipher", "legacy"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "database has no version");
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_encrypt_rejects_bad_tree() {
    let t = Test::new();

    let output = encrypt(
        &t,
        r#"{"version":"~1.0.0","data":{"port":8080}}"#,
        &["--cipher", "legacy"],
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "malformed database");
}

#[test]
fn test_encrypt_missing_input() {
    let t = Test::new();

    let output = t.run(&["--encrypt"], MASTER);
    assert_failure(&output);
    assert_stderr_contains(&output, "database not found");
}
