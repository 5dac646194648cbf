use crate::common::{Workspace, lexacount};
use predicates::prelude::*;

#[test]
fn shows_help_without_arguments() {
    lexacount()
        .assert()
        .success()
        .stdout(predicate::str::contains("LexaCount v"))
        .stdout(predicate::str::contains("--bracket"))
        .stdout(predicate::str::contains("Copyright (c) 2025 anic17 Software"));
}

#[test]
fn shows_help() {
    for flag in ["-h", "--help", "/?"] {
        lexacount()
            .arg(flag)
            .assert()
            .success()
            .stdout(predicate::str::contains("--list <LIST FILE>"));
    }
}

#[test]
fn shows_version() {
    let expected = format!(
        "LexaCount v{} - Count source lines of code.\nCopyright (c) 2025 anic17 Software\n",
        env!("CARGO_PKG_VERSION")
    );
    for flag in ["-v", "--version"] {
        lexacount().arg(flag).assert().success().stdout(expected.clone());
    }
}

#[test]
fn missing_list_argument_is_usage_error() {
    lexacount()
        .arg("-l")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "Error: Required parameter after '-l'. See 'lexacount --help' for more information.",
        ));

    lexacount()
        .args(["a.c", "--list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Required parameter after '--list'"));
}

#[test]
fn unknown_flag_is_usage_error() {
    lexacount().arg("--bogus").assert().code(1);
}

#[test]
fn debug_log_on_piped_stderr_is_plain_text() {
    let ws = Workspace::new();
    ws.write_file("a.c", "x;\n");

    ws.command()
        .env("LEXACOUNT_LOG", "debug")
        .arg("a.c")
        .assert()
        .success()
        .stdout("a.c: 1 code lines\nTotal lines: 1 code lines\n")
        .stderr(predicate::str::contains("name_width=11"))
        .stderr(predicate::str::contains("\u{1b}[").not());
}
