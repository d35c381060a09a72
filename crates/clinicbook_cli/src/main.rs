//! ClinicBook interactive shell.
//!
//! # Responsibility
//! - Bootstrap config, logging, storage and the session model.
//! - Read commands from stdin, execute them and print the visible list.

mod parser;

use clap::Parser;
use clinicbook_core::config::DEFAULT_CONFIG_FILE;
use clinicbook_core::{
    init_logging, init_model, init_prefs, CommandResult, Config, JsonAddressBookStorage,
    JsonUserPrefsStorage, LogicManager, PersonKind, StorageManager, UserPrefsStorage,
};
use log::{info, warn};
use parser::{parse_command, COMMAND_USAGES};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "clinicbook", version, about = "Manage patient and doctor contacts")]
struct Args {
    /// Path to the JSON configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Directory for rolling log files; defaults to `./logs`.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let log_dir = match args.log_dir {
        Some(dir) => dir,
        None => match std::env::current_dir() {
            Ok(cwd) => cwd.join("logs"),
            Err(err) => {
                eprintln!("error: cannot resolve working directory: {err}");
                return ExitCode::FAILURE;
            }
        },
    };
    if let Err(err) = init_logging(&config.log_level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let prefs_storage = JsonUserPrefsStorage::new(&config.user_prefs_file_path);
    let prefs = init_prefs(&prefs_storage);
    let storage = StorageManager::new(
        JsonAddressBookStorage::new(prefs.address_book_file_path()),
        prefs_storage,
    );
    let model = init_model(&storage, prefs);
    info!(
        "event=session_start module=cli status=ok prefs_path={}",
        storage.user_prefs_file_path().display()
    );

    let mut logic = LogicManager::new(model, storage);
    if let Err(err) = run(&mut logic) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    match logic.shutdown() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            warn!("event=session_stop module=cli status=error error={}", err);
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

type Logic = LogicManager<StorageManager<JsonAddressBookStorage, JsonUserPrefsStorage>>;

fn run(logic: &mut Logic) -> std::io::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for kind in PersonKind::ALL {
        print_list(&mut stdout, logic, kind)?;
    }

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "{err}")?;
                continue;
            }
        };

        match logic.execute(&command) {
            Ok(result) => {
                write_result(&mut stdout, &result)?;
                if result.exit {
                    return Ok(());
                }
                if let Some(kind) = command.kind() {
                    print_list(&mut stdout, logic, kind)?;
                }
            }
            Err(err) => writeln!(stdout, "{err}")?,
        }
    }
}

fn write_result(out: &mut impl Write, result: &CommandResult) -> std::io::Result<()> {
    writeln!(out, "{}", result.feedback)?;
    if result.show_help {
        for usage in COMMAND_USAGES {
            writeln!(out, "  {usage}")?;
        }
    }
    Ok(())
}

fn print_list(out: &mut impl Write, logic: &Logic, kind: PersonKind) -> std::io::Result<()> {
    let persons = logic.filtered_person_list(kind);
    writeln!(out, "-- {}s ({}) --", kind, persons.len())?;
    for (idx, person) in persons.iter().enumerate() {
        writeln!(out, "{:>3}. {person}", idx + 1)?;
    }
    Ok(())
}
