//! Helper function to document the library packages given a [`DocConfig`].

use anyhow::Result;

use crate::{
    action::{cargo_command, run_cmd},
    cli::doc::DocConfig,
};

/// Runs `cargo doc` on the library packages.
///
/// # Errors
///
/// Returns errors if the `cargo doc` command fails.
pub fn doc(config: DocConfig) -> Result<()> {
    let mut cmd = cargo_command("doc", config.arch);
    cmd.arg("--no-deps");

    run_cmd(cmd)?;

    Ok(())
}
