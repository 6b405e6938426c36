//! Command line parsing and [`Action`] construction.

use clap::Command;

use crate::cli::{clippy::ClippyConfig, doc::DocConfig, test::TestConfig};

pub mod clippy;
pub mod doc;
pub mod test;

/// The action to carry out.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum Action {
    /// Run the library tests with a specific configuration.
    Test(TestConfig),
    /// Run `cargo clippy` on the library packages.
    Clippy(ClippyConfig),
    /// Run `cargo doc` on the library packages.
    Doc(DocConfig),
}

/// Parses `xtask`'s arguments to construct an [`Action`].
pub fn get_action() -> Action {
    parse_action(command_parser().get_matches())
}

/// Constructs an [`Action`] from already parsed arguments.
fn parse_action(matches: clap::ArgMatches) -> Action {
    let Some((subcommand_name, subcommand_matches)) = matches.subcommand() else {
        unreachable!("subcommand is required");
    };
    match subcommand_name {
        "test" => Action::Test(test::parse_arguments(subcommand_matches)),
        "clippy" => Action::Clippy(clippy::parse_arguments(subcommand_matches)),
        "doc" => Action::Doc(doc::parse_arguments(subcommand_matches)),
        _ => unreachable!("unexpected subcommand: {subcommand_name:?}"),
    }
}

/// Returns the command parser for all [`Action`]s.
fn command_parser() -> Command {
    Command::new("xtask")
        .about("Developer utility for checking the address arithmetic libraries")
        .subcommand(test::subcommand_parser())
        .subcommand(clippy::subcommand_parser())
        .subcommand(doc::subcommand_parser())
        .subcommand_required(true)
        .arg_required_else_help(true)
}
