use fridgesavvy_shared::ErrorKind;
use thiserror::Error;

/// Failure of a single command line. None of these end the session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("{0}")]
    Usage(&'static str),

    #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
    UnknownCommand(String),

    #[error("Invalid quantity '{0}'. Expected a number.")]
    InvalidQuantity(String),

    #[error(transparent)]
    Kitchen(#[from] fridgesavvy_shared::Error),
}

impl CommandError {
    /// Domain error category, `None` for grammar errors.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            CommandError::Kitchen(err) => Some(err.kind()),
            _ => None,
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
