use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch project directory plus a preconfigured `roster` invocation.
pub struct E2EFixture {
    pub temp_dir: TempDir,
}

impl E2EFixture {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::write(&path, content).expect("write fixture file");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).expect("read fixture file")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("roster").expect("roster binary");
        cmd.current_dir(self.root())
            .env("ROSTER_CONFIG", self.path("no-config.toml"))
            .env("NO_COLOR", "1")
            .env_remove("ROSTER_DOCUMENT_PATH")
            .env_remove("ROSTER_ROWS_PATH")
            .env_remove("ROSTER_COLOR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Run the menu with `script` on stdin and return stdout.
    pub fn session(&self, script: &str) -> String {
        let output = self
            .cmd()
            .write_stdin(script.to_string())
            .output()
            .expect("run roster shell");
        assert!(
            output.status.success(),
            "shell failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}
