use thiserror::Error;

/// Failure while talking to the system clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard init: {0}")]
    Init(#[source] arboard::Error),
    #[error("clipboard set: {0}")]
    Set(#[source] arboard::Error),
}

/// Copy `s` to the system clipboard.
///
/// Thin wrapper around `arboard`. Headless environments usually have no
/// clipboard, so callers treat errors as non-fatal (the CLI prints a warning).
pub fn copy_to_clipboard(s: &str) -> Result<(), ClipboardError> {
    let mut ctx = arboard::Clipboard::new().map_err(ClipboardError::Init)?;
    ctx.set_text(s.to_owned()).map_err(ClipboardError::Set)
}
