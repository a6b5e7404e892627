//! School records shell.
//!
//! # Responsibility
//! - Bootstrap logging and the school store from the working directory.
//! - Run the interactive menu until exit, then close the store.

mod config;
mod menu;
mod shell;

use config::ShellConfig;
use log::{error, info};
use school_core::{default_log_level, init_logging, open_db, SchoolService};
use shell::Shell;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("failed to resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };
    let config = ShellConfig::in_dir(&working_dir);

    if let Err(err) = init_logging(default_log_level(), &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let conn = match open_db(&config.db_path) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!(
                "failed to open school database `{}`: {err}",
                config.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let run_result = Shell::new(
        SchoolService::new(&conn),
        stdin.lock(),
        stdout.lock(),
        config.export_path.as_path(),
    )
    .run();

    if let Err((_, err)) = conn.close() {
        error!("event=db_close module=cli status=error error={err}");
    }

    match run_result {
        Ok(()) => {
            info!("event=app_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
