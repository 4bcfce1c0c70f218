mod parser;

use std::io::{self, Write};
use std::process::ExitCode;

use log::error;

use infocei::core::EmptyResult;
use infocei::statement::Statement;

use self::parser::Options;

fn main() -> ExitCode {
    let options = match parser::parse() {
        Ok(options) => options,
        Err(err) => {
            let _ = writeln!(io::stderr(), "{err}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(err) = easy_logging::init(module_path!(), options.log_level) {
        let _ = writeln!(io::stderr(), "Failed to initialize the logging: {err}.");
        return ExitCode::FAILURE;
    }

    if let Err(err) = run(options) {
        error!("{err}.");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(options: Options) -> EmptyResult {
    let statement = Statement::read(&options.statement_path)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &statement)?;
    writeln!(stdout)?;

    Ok(())
}
