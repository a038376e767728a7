use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    /// Terminal I/O failed underneath a collaborator.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    /// The reshuffle margin should make this unreachable; hitting it means a
    /// logic bug, not a recoverable game event.
    #[error("cannot draw from an empty deck")]
    EmptyDeck,
    /// The player interrupted the session (Ctrl-C / closed stdin) while we were
    /// waiting for input.
    #[error("interrupted while waiting for input")]
    Interrupted,
}
