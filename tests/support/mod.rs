use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::NamedTempFile;

/// Command for the `brickset` binary under test.
pub fn brickset_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_brickset"))
}

/// Write a catalog fixture; the temp file stays alive as long as the guard.
pub fn write_catalog(json: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate catalog fixture")?;
    file.write_all(json.as_bytes())
        .context("failed to write catalog fixture")?;
    Ok(file)
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {cmd:?}"))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

/// Run the binary with `catalog` injected through the environment override and
/// return its stdout.
pub fn run_against_catalog(catalog: &Path, args: &[&str]) -> Result<String> {
    let mut cmd = brickset_command();
    cmd.args(args).env("BRICKSET_CATALOG", catalog);
    let output = run_command(cmd)?;
    String::from_utf8(output.stdout).context("stdout was not valid UTF-8")
}
