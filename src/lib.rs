//! Greetings library crate
//!
//! This crate provides the functionality behind the `greetings` CLI. It is
//! organized into small modules: `greeting` (greeting formatter), `info`
//! (version banner and process exit), and `clipboard` (cross-platform
//! clipboard helper). The binary `src/main.rs` calls `greetings_lib::run()` to
//! execute the CLI.
//!
//! Public API
//!
//! - `run()` — CLI entrypoint used by the binary.
//! - `greeting::hello()` — format a greeting for a name.
//! - `info::help()` — print the banner and exit with a status code.

pub mod clipboard;
pub mod greeting;
pub mod info;

use clap::{ArgAction, Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use crate::clipboard::copy_to_clipboard;
use crate::greeting::hello;

/// Exit status used when the binary is invoked without a subcommand.
const USAGE_EXIT_CODE: i32 = 2;

/// Top-level CLI types and runner. Keep `main.rs` thin.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a greeting for NAME
    Hello {
        /// Name to greet (used verbatim)
        name: String,

        /// Copy the greeting to the clipboard
        #[arg(long = "clipboard", action = ArgAction::SetTrue)]
        clipboard: bool,
    },
    /// Print the package banner and version, then exit
    Info {
        /// Process exit status to terminate with
        #[arg(
            short = 'e',
            long = "exit-code",
            default_value_t = 0i32,
            allow_negative_numbers = true
        )]
        exit_code: i32,
    },
}

/// Run the greetings CLI.
///
/// Parses arguments and dispatches to module functions:
/// - `hello` — print the greeting and optionally copy it to the clipboard.
/// - `info` — print the banner and exit with the requested code.
/// - no subcommand — print the banner and exit with status 2.
///
/// ```no_run
/// greetings_lib::run(); // called from src/main.rs
/// ```
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Hello { name, clipboard }) => {
            let msg = hello(&name);
            println!("{}", msg);

            if clipboard && let Err(e) = copy_to_clipboard(&msg) {
                warn!(error = %e, "clipboard copy failed");
                eprintln!("warning: failed to copy to clipboard: {}", e);
            }
        }
        Some(Commands::Info { exit_code }) => info::help(exit_code),
        None => {
            debug!("no subcommand given");
            info::help(USAGE_EXIT_CODE)
        }
    }
}

/// Install a stderr subscriber when `-v` is given. `RUST_LOG` overrides the
/// level derived from the flag count.
fn init_tracing(verbose: u8) {
    if verbose == 0 {
        return;
    }

    let level = match verbose {
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_hello_with_clipboard() {
        let cli = Cli::try_parse_from(["greetings", "hello", "World", "--clipboard"]).unwrap();
        match cli.command {
            Some(Commands::Hello { name, clipboard }) => {
                assert_eq!(name, "World");
                assert!(clipboard);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_info_default_and_negative_exit_code() {
        let cli = Cli::try_parse_from(["greetings", "info"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Info { exit_code: 0 })));

        let cli = Cli::try_parse_from(["greetings", "info", "--exit-code", "-1"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Info { exit_code: -1 })));
    }

    #[test]
    fn parses_global_verbose_and_missing_subcommand() {
        let cli = Cli::try_parse_from(["greetings", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());
    }
}
