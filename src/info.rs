//! Version banner and process exit.
//!
//! The text is produced by `banner_lines` / `write_help` so it can be tested
//! in-process; `help` is the thin boundary that prints it and terminates.

use std::io::{self, Write};

use tracing::debug;

/// Package version shown in the banner.
pub const VERSION: f64 = 1.0;

/// First line of the banner.
pub const BANNER: &str = "My own package.";

/// The two banner lines, without trailing newlines.
pub fn banner_lines() -> [String; 2] {
    [BANNER.to_string(), format!("Version: {:.1}", VERSION)]
}

/// Write the banner to `out`, one newline-terminated line each.
pub fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    for line in banner_lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Print the banner to stdout and exit the process with `exit_code`.
///
/// Never returns. A failed write is ignored; the exit still happens with the
/// requested status.
pub fn help(exit_code: i32) -> ! {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let _ = write_help(&mut out).and_then(|_| out.flush());
    drop(out);

    debug!(exit_code, "exiting after banner");
    std::process::exit(exit_code);
}
