//! Automation for analyzing, documenting, and testing the address arithmetic libraries across the
//! supported pointer widths.

use anyhow::Result;

use crate::{
    action::{clippy::clippy, doc::doc, test::test},
    cli::Action,
};

pub mod action;
pub mod cli;
pub mod common;

/// The library packages that are checked by every [`Action`].
pub const PACKAGES: &[&str] = &["conversion", "address"];

fn main() -> Result<()> {
    match cli::get_action() {
        Action::Test(config) => test(config)?,
        Action::Clippy(config) => clippy(config)?,
        Action::Doc(config) => doc(config)?,
    }

    Ok(())
}
