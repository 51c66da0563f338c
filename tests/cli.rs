use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

const LINE1: &str = "P<USASMITH<<JOHN<JAMES<<<<<<<<<<<<<<<<<<<<<<";
const LINE2: &str = "1234567890USA9001011M2505015<<<<<<<<<<<<<<<8";

fn cmd() -> Command {
    Command::cargo_bin("mrz").unwrap()
}

#[test]
fn decode_inline_lines() {
    cmd()
        .args(["decode", "--line1", LINE1, "--line2", LINE2])
        .assert()
        .success()
        .stdout(contains("SMITH").and(contains("JOHN JAMES")));
}

#[test]
fn decode_from_stdin_as_json() {
    cmd()
        .args(["decode", "--from", "-", "--json", "--check"])
        .write_stdin(format!("{LINE1}\n{LINE2}\n"))
        .assert()
        .success()
        .stdout(contains("\"given_names\": \"JOHN JAMES\"").and(contains("\"mismatches\"")));
}

#[test]
fn decode_strict_fails_on_mismatch() {
    cmd()
        .args(["decode", "--line1", LINE1, "--line2", LINE2, "--strict"])
        .assert()
        .failure()
        .stderr(contains("passport_number"));
}

#[test]
fn decode_rejects_short_line() {
    cmd()
        .args(["decode", "--line1", "P<USASMITH", "--line2", LINE2])
        .assert()
        .failure()
        .stderr(contains("LengthError"));
}

#[test]
fn piped_errors_are_plain_text() {
    cmd()
        .args(["decode", "--line1", "P<USASMITH", "--line2", LINE2])
        .assert()
        .failure()
        .stderr(contains("LengthError").and(contains("\u{1b}[").not()));
}

#[test]
fn encode_from_flags() {
    cmd()
        .args([
            "encode",
            "--type",
            "P",
            "--country",
            "USA",
            "--name",
            "SMITH<<JOHN",
            "--passport-number",
            "123456789",
        ])
        .assert()
        .success()
        .stdout(contains("P<USASMITH<<JOHN<<<<").and(contains("123456789<<<")));
}

#[test]
fn encode_from_json_with_report() {
    cmd()
        .args(["encode", "--fields", "-", "--report"])
        .write_stdin(r#"{"type":"P","country":"GERMANY","name":"MULLER<<HANS"}"#)
        .assert()
        .success()
        .stdout(contains("P<GERMULLER<<HANS"))
        .stderr(contains("Truncated to fit: country"));
}

#[test]
fn check_digit_and_verify() {
    cmd()
        .args(["check", "digit", "123456789"])
        .assert()
        .success()
        .stdout("8\n");
    cmd()
        .args(["check", "verify", "123456789", "8"])
        .assert()
        .success()
        .stdout(contains("valid"));
    cmd()
        .args(["check", "verify", "123456789", "9"])
        .assert()
        .failure()
        .stderr(contains("expected 8"));
}

#[test]
fn check_digit_rejects_letters() {
    cmd()
        .args(["check", "digit", "12A4"])
        .assert()
        .failure()
        .stderr(contains("InvalidDigitError"));
}

#[test]
fn layout_lists_fields() {
    cmd()
        .args(["layout", "--line", "2"])
        .assert()
        .success()
        .stdout(contains("personal_number").and(contains("document_type").not()));
}
