use anyhow::{Context, Result};
use org2anki::cli::args::Args;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Scratch directory holding org inputs and card outputs for one test
#[allow(dead_code)]
pub struct TestWorkspace {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestWorkspace {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        Ok(Self { temp_dir })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write `content` to `name` and return its path
    pub fn write(&self, name: &str, content: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.path(name);
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Copy a file from tests/fixtures into the workspace
    pub fn copy_fixture(&self, name: &str) -> Result<PathBuf> {
        let path = self.path(name);
        fs::copy(fixture_path(name), &path).context("Failed to copy fixture")?;
        Ok(path)
    }

    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.path(name);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// Arguments for converting `input` into `output`, with an empty config file
    /// so a per-user config cannot leak into the test.
    pub fn args(&self, input: &Path, output: &Path) -> Result<Args> {
        Ok(Args {
            input: input.to_path_buf(),
            output: Some(output.to_path_buf()),
            append: false,
            keep_last: false,
            escape_html: false,
            json: false,
            config: Some(self.write("config.toml", "")?),
            verbose: 0,
        })
    }

    /// Run the compiled binary with HOME pointed at the workspace
    pub fn run_binary(&self, args: &[&str]) -> Result<Output> {
        Command::new(env!("CARGO_BIN_EXE_org2anki"))
            .args(args)
            .env("HOME", self.temp_dir.path())
            .env("XDG_CONFIG_HOME", self.temp_dir.path())
            .output()
            .context("Failed to run org2anki binary")
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
