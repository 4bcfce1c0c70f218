use clap::{ArgAction, ArgMatches, Command};

use infocei::cli;
use infocei::core::GenericResult;

const DEFAULT_STATEMENT_PATH: &str = "InfoCEI.csv";

pub struct Options {
    pub log_level: log::Level,
    pub statement_path: String,
}

pub fn parse() -> GenericResult<Options> {
    parse_matches(&new_app().get_matches())
}

fn new_app() -> Command {
    cli::new_app("infocei", "Extracts trades and account details from InfoCEI statement")
        .version(env!("CARGO_PKG_VERSION"))
        .args([
            cli::new_arg("verbose", "Set verbosity level")
                .short('v').long("verbose")
                .action(ArgAction::Count),

            cli::new_arg("STATEMENT", "Path to InfoCEI statement *.csv file")
                .default_value(DEFAULT_STATEMENT_PATH),
        ])
}

fn parse_matches(matches: &ArgMatches) -> GenericResult<Options> {
    let log_level = cli::log_level(matches.get_count("verbose"))?;

    let statement_path = matches.get_one::<String>("STATEMENT").cloned()
        .unwrap_or_else(|| DEFAULT_STATEMENT_PATH.to_owned());

    Ok(Options {log_level, statement_path})
}
