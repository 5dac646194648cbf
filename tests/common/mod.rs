#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary directory the CLI runs in, so file names stay relative.
#[derive(Debug)]
pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }

    /// `lexacount` with the workspace as its working directory.
    pub fn command(&self) -> Command {
        let mut cmd = lexacount();
        cmd.current_dir(self.path());
        cmd
    }
}

pub fn lexacount() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lexacount"));
    cmd.env_remove("LEXACOUNT_LOG");
    cmd
}
