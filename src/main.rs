// src/main.rs
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use lexacount::args::Args;
use lexacount::config::Config;
use std::ffi::OsString;
use std::process::ExitCode;

fn main() -> ExitCode {
    let raw: Vec<OsString> = std::env::args_os().collect();

    if raw.len() < 2 || raw[1] == "/?" {
        return print_help();
    }

    let args = match Args::try_parse_from(&raw) {
        Ok(args) => args,
        Err(e) => return usage_error(&e, &raw),
    };

    lexacount::logging::init();

    if args.version {
        println!("{}", lexacount::BANNER);
        println!("{}", lexacount::COPYRIGHT);
        return ExitCode::SUCCESS;
    }

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match lexacount::app::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if !(config.exclude_unopenable && e.is_list_file_error()) {
                eprintln!("Error: {e}");
            }
            ExitCode::from(e.exit_code())
        }
    }
}

fn print_help() -> ExitCode {
    match Args::command().print_help() {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn usage_error(e: &clap::Error, raw: &[OsString]) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        ErrorKind::InvalidValue if raw.last().is_some_and(|a| a == "-l" || a == "--list") => {
            let flag = raw.last().map(|a| a.to_string_lossy()).unwrap_or_default();
            eprintln!(
                "Error: Required parameter after '{flag}'. See 'lexacount --help' for more information."
            );
            ExitCode::FAILURE
        }
        _ => {
            let _ = e.print();
            ExitCode::FAILURE
        }
    }
}
