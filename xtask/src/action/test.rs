//! Helper function to run the library tests given a [`TestConfig`].

use anyhow::{Context, Result};

use crate::{
    action::{cargo_command, run_cmd},
    cli::test::TestConfig,
};

/// Runs `cargo test` on the library packages for the configured target.
///
/// # Errors
///
/// Returns errors when the `cargo test` command fails.
pub fn test(config: TestConfig) -> Result<()> {
    println!(
        "Testing for {} ({}-bit addresses)",
        config.arch.as_str(),
        config.arch.pointer_width()
    );

    let mut cmd = cargo_command("test", config.arch);
    cmd.args(["--profile", config.profile.as_str()]);

    run_cmd(cmd).with_context(|| format!("tests failed for {}", config.arch.as_str()))?;

    Ok(())
}
