use std::process;

use colored::Colorize;
use fwt::{CliError, Parser, Result, bin2hex, cli, logging, newlines};

fn main() {
    match try_main() {
        Ok(_) => process::exit(0),
        Err(CliError::Usage(msg)) => {
            eprint!("{}", msg);
            process::exit(2);
        }
        Err(CliError::Newlines(e)) => {
            eprintln!("{} {}", "newlines error:".red().bold(), e);
            process::exit(3);
        }
        Err(CliError::Bin2Hex(e)) => {
            eprintln!("{} {}", "bin2hex error:".red().bold(), e);
            process::exit(3);
        }
    }
}

fn try_main() -> Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => return Err(CliError::Usage(e.render().to_string())),
    };
    logging::init_logging(cli.verbose);

    match cli.command {
        cli::Command::Newlines(args) => newlines::convert_newlines(args)?,
        cli::Command::Bin2hex(args) => bin2hex::bin2hex(args)?,
    }

    Ok(())
}
