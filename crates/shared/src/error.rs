use strum::{AsRefStr, Display};
use time::Date;

/// Entity a lookup failed to find.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFound {
    #[error("No pantry item named '{0}' found.")]
    PantryItem(String),

    #[error("No recipe named '{0}' found.")]
    Recipe(String),

    #[error("Recipe '{recipe}' has no ingredient named '{ingredient}'.")]
    Ingredient { recipe: String, ingredient: String },

    #[error("No planned recipe '{recipe}' on {date} found.")]
    Plan { recipe: String, date: Date },
}

/// Entity whose unique key is already taken.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Duplicate {
    #[error("Recipe '{0}' already exists.")]
    Recipe(String),

    #[error("Recipe '{recipe}' is already planned on {date}.")]
    Plan { recipe: String, date: Date },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid date '{0}'. Expected format: YYYY-MM-DD.")]
    DateFormat(String),

    #[error(transparent)]
    NotFound(#[from] NotFound),

    #[error(transparent)]
    Duplicate(#[from] Duplicate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    DateFormat,
    NotFound,
    Duplicate,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::DateFormat(_) => ErrorKind::DateFormat,
            Error::NotFound(_) => ErrorKind::NotFound,
            Error::Duplicate(_) => ErrorKind::Duplicate,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
