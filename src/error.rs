use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingCredential(String),
    #[error("could not find common ancestor with {base}")]
    NoCommonAncestor { base: String },
    #[error("could not get branch changes: {0}")]
    DiffCollection(String),
    #[error("no changes found in branch to generate summary")]
    EmptyChangeSet,
    #[error("version control error: {0}")]
    VersionControl(String),
    #[error("error generating summary: {0}")]
    Generation(String),
    #[error("error creating PR: {0}")]
    PrCreation(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
