//! End-to-end tests that run the compiled binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

const WORLD: &str = "\
#s:1|Gatehouse| ____ | :  : | :  : | :__: |
#s:2|Hall
#l:10|Archway|1|2|0|1
#p:31|Wren|(@)|1|100|5
#o:20|Lantern|1|30|1|-1|-1|A dented brass lantern.
#c:40|Keeper|~[o]~ |1|100|1|Mind the archway.
";

fn world_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(WORLD.as_bytes()).unwrap();
    file
}

#[test]
fn immediate_exit_is_a_clean_run() {
    let world = world_file();
    Command::cargo_bin("thorngate")
        .unwrap()
        .arg(world.path())
        .write_stdin("exit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Gatehouse"))
        .stdout(predicate::str::contains("Wren"));
}

#[test]
fn end_of_input_ends_the_session() {
    let world = world_file();
    Command::cargo_bin("thorngate")
        .unwrap()
        .arg(world.path())
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn dump_prints_the_world_as_json() {
    let world = world_file();
    Command::cargo_bin("thorngate")
        .unwrap()
        .arg(world.path())
        .arg("--dump")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"spaces\""))
        .stdout(predicate::str::contains("Gatehouse"));
}

#[test]
fn missing_data_file_fails() {
    Command::cargo_bin("thorngate")
        .unwrap()
        .arg("/definitely/not/here.dat")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn malformed_data_file_fails_with_the_record_kind() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"#s:not-a-number|Hall\n").unwrap();
    Command::cargo_bin("thorngate")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("space record"));
}

#[test]
fn log_file_records_accepted_commands() {
    let world = world_file();
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("session.log");
    Command::cargo_bin("thorngate")
        .unwrap()
        .arg(world.path())
        .arg("--log")
        .arg(&log)
        .arg("--seed")
        .arg("7")
        .write_stdin("chat Keeper\nexit\n")
        .assert()
        .success();
    let logged = std::fs::read_to_string(&log).unwrap();
    assert!(logged.contains("chat"));
    assert!(logged.contains("exit"));
}
