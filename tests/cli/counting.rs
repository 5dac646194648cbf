use crate::common::Workspace;
use predicates::prelude::*;

const EXAMPLE: &str = "// header comment\nint x = 1;\n\n{";

#[test]
fn counts_example_with_bracket_exclusion() {
    let ws = Workspace::new();
    ws.write_file("example.c", EXAMPLE);

    ws.command()
        .args(["-b", "example.c"])
        .assert()
        .success()
        .stdout(
            "example.c: 1 code lines (and 1 blank line and 1 comment and 1 line with only brackets)\n\
             Total lines: 1 code lines (and 1 blank line and 1 comment and 1 line with only brackets)\n",
        );
}

#[test]
fn brackets_are_code_without_exclusion() {
    let ws = Workspace::new();
    ws.write_file("example.c", EXAMPLE);

    ws.command()
        .arg("example.c")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "example.c: 2 code lines (and 1 blank line and 1 comment)\n",
        ));
}

#[test]
fn prints_table() {
    let ws = Workspace::new();
    ws.write_file("a.c", "// c\nint a;\n\n");
    ws.write_file("b.c", "{\n}\nint b;\n");

    let expected = "\
| File        | Code lines | Blank      | Comments   | Brackets   |
|-------------|------------|------------|------------|------------|
| a.c         | 1          | 1          | 1          | 0          |
| b.c         | 1          | 0          | 0          | 2          |
|-------------|------------|------------|------------|------------|
| Total lines | 2          | 1          | 1          | 2          |
";
    ws.command()
        .args(["-t", "-b", "a.c", "b.c"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn total_is_sum_of_files() {
    let ws = Workspace::new();
    ws.write_file("one.rs", "fn a() {}\n// x\n\n\n");
    ws.write_file("two.rs", "\"// quoted\"\n  // real\nlet y = 2; // trailing");

    ws.command()
        .args(["one.rs", "two.rs"])
        .assert()
        .success()
        .stdout(
            "one.rs: 1 code lines (and 2 blank lines and 1 comment)\n\
             two.rs: 2 code lines (and 1 comment)\n\
             Total lines: 3 code lines (and 2 blank lines and 2 comments)\n",
        );
}

#[test]
fn reports_unopenable_files_and_continues() {
    let ws = Workspace::new();
    ws.write_file("ok.c", "int x;\n");

    ws.command()
        .args(["missing.c", "ok.c"])
        .assert()
        .success()
        .stderr(predicate::str::starts_with("Error: missing.c: "))
        .stderr(predicate::str::contains("os error").not())
        .stdout("ok.c: 1 code lines\nTotal lines: 1 code lines\n");
}

#[test]
fn exclude_silences_unopenable_files() {
    let ws = Workspace::new();
    ws.write_file("ok.c", "int x;\n");

    ws.command()
        .args(["-x", "missing.c", "ok.c"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty())
        .stdout("ok.c: 1 code lines\nTotal lines: 1 code lines\n");
}

#[test]
fn empty_file_counts_nothing() {
    let ws = Workspace::new();
    ws.write_file("empty.c", "");

    ws.command()
        .arg("empty.c")
        .assert()
        .success()
        .stdout("empty.c: 0 code lines\nTotal lines: 0 code lines\n");
}

#[test]
fn custom_comment_marker() {
    let ws = Workspace::new();
    ws.write_file("script.py", "# comment\nx = 1  # trailing\n");

    ws.command()
        .args(["--comment", "#", "script.py"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("script.py: 1 code lines (and 1 comment)\n"));
}
