//! Helper function to run `cargo clippy` on the library packages given a [`ClippyConfig`].

use anyhow::Result;

use crate::{
    action::{cargo_command, run_cmd},
    cli::clippy::ClippyConfig,
};

/// Runs `cargo clippy` on the library packages, including their tests.
///
/// # Errors
///
/// Returns errors when the `cargo clippy` command fails.
pub fn clippy(config: ClippyConfig) -> Result<()> {
    let mut cmd = cargo_command("clippy", config.arch);
    cmd.arg("--all-targets");
    cmd.arg("--no-deps");

    run_cmd(cmd)?;

    Ok(())
}
