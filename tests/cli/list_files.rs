use crate::common::Workspace;
use predicates::prelude::*;

#[test]
fn list_entries_follow_direct_files() {
    let ws = Workspace::new();
    ws.write_file("direct.c", "a;\n");
    ws.write_file("one.c", "b;\nc;\n");
    ws.write_file("two.c", "\n");
    ws.write_file("files.txt", "one.c\r\n\r\ntwo.c\n");

    ws.command()
        .args(["-l", "files.txt", "direct.c"])
        .assert()
        .success()
        .stdout(
            "direct.c: 1 code lines\n\
             one.c: 2 code lines\n\
             two.c: 0 code lines (and 1 blank line)\n\
             Total lines: 3 code lines (and 1 blank line)\n",
        );
}

#[test]
fn repeated_lists_keep_order() {
    let ws = Workspace::new();
    ws.write_file("a.c", "x\n");
    ws.write_file("b.c", "y\n");
    ws.write_file("first.txt", "b.c\n");
    ws.write_file("second.txt", "a.c\n");

    let output = ws
        .command()
        .args(["--list", "first.txt", "--list", "second.txt"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout
        .lines()
        .filter_map(|line| line.split(':').next())
        .collect();

    assert!(output.status.success());
    assert_eq!(names, ["b.c", "a.c", "Total lines"]);
}

#[test]
fn table_width_covers_list_entries() {
    let ws = Workspace::new();
    ws.write_file("src/nested/long_file_name.c", "x\n");
    ws.write_file("files.txt", "src/nested/long_file_name.c\n");

    let output = ws.command().args(["-t", "-l", "files.txt"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "| File                        | Code lines | Blank      | Comments   |"
    );
    assert!(lines.iter().all(|l| l.len() == lines[0].len()));
}

#[test]
fn missing_entry_in_list_is_not_fatal() {
    let ws = Workspace::new();
    ws.write_file("files.txt", "gone.c\n");

    ws.command()
        .args(["-l", "files.txt"])
        .assert()
        .success()
        .stderr(predicate::str::starts_with("Error: gone.c: "))
        .stdout("Total lines: 0 code lines\n");
}

#[test]
fn missing_list_file_is_fatal() {
    let ws = Workspace::new();
    ws.write_file("a.c", "x\n");

    let assert = ws
        .command()
        .args(["-l", "nope.txt", "a.c"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: nope.txt: "));

    #[cfg(unix)]
    assert.code(254);
    #[cfg(not(unix))]
    let _ = assert;
}

#[test]
fn exclude_hides_list_file_error_but_still_fails() {
    let ws = Workspace::new();

    ws.command()
        .args(["-x", "-l", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::is_empty());
}

#[test]
fn list_file_name_may_start_with_dash() {
    let ws = Workspace::new();
    ws.write_file("a.c", "x;\n");
    ws.write_file("-files.txt", "a.c\n");

    ws.command()
        .args(["-l", "-files.txt"])
        .assert()
        .success()
        .stdout("a.c: 1 code lines\nTotal lines: 1 code lines\n");
}
