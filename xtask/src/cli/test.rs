//! Command line parsing and [`Action::Test`][at] construction.
//!
//! [at]: crate::cli::Action::Test

use clap::{Arg, ArgMatches, Command, builder::EnumValueParser};

use crate::common::{Arch, Profile};

/// Description of the target and profile with which the library tests are run.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct TestConfig {
    /// The [`Arch`] for which the tests should be built.
    pub arch: Arch,
    /// The [`Profile`] with which the tests should be built.
    pub profile: Profile,
}

/// Parses the arguments required to produce a valid [`TestConfig`].
pub fn parse_arguments(matches: &ArgMatches) -> TestConfig {
    let arch = matches
        .get_one::<Arch>("arch")
        .copied()
        .unwrap_or_else(|| unreachable!("`arch` is a required argument"));

    let profile = matches
        .get_one::<Profile>("profile")
        .copied()
        .unwrap_or_else(|| unreachable!("`profile` should have a default value"));

    TestConfig { arch, profile }
}

/// Returns the command parser for an [`Action::Test`][at].
///
/// [at]: crate::cli::Action::Test
pub fn subcommand_parser() -> Command {
    let arch = Arg::new("arch")
        .long("arch")
        .value_parser(EnumValueParser::<Arch>::new())
        .env("XTASK_ARCH")
        .required(true);

    let profile = Arg::new("profile")
        .long("profile")
        .value_parser(EnumValueParser::<Profile>::new())
        .default_value("dev");

    Command::new("test")
        .about("Run the library tests for the given architecture")
        .arg(arch)
        .arg(profile)
}
