//! Shared testing utilities for ecocast CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MUMBAI_JSON: &str = r#"{"rainfall_mm":12.5,"temperature_c":29.1,"humidity_percent":78,"wind_speed_kmh":14,"spm_ugm3":95}"#;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the `ecocast` binary with no credential in the environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ecocast").expect("Failed to locate ecocast binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env_remove("GEMINI_API_KEY")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Build a command that talks to `api_url` with a test credential.
    pub fn cli_against(&self, api_url: &str) -> Command {
        self.write_config(&format!("[service]\napi_url = \"{}\"\nmodel = \"test-model\"\n", api_url));
        let mut cmd = self.cli();
        cmd.env("GEMINI_API_KEY", "test-key");
        cmd
    }

    /// Write `ecocast.toml` into the working directory.
    pub fn write_config(&self, content: &str) {
        fs::write(self.work_dir.join("ecocast.toml"), content).expect("Failed to write config");
    }
}

/// A `generateContent` response body carrying `text` as the only candidate part.
#[allow(dead_code)]
pub fn candidate_body(text: &str) -> String {
    serde_json::json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
    .to_string()
}
