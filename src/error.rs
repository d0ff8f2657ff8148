use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("no date range given: pass --start and --end, or --month")]
    MissingRange,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Failed to read repository list {path}: {source}")]
    RepoList {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Git log failed in {repo}: {message}")]
    Git { repo: String, message: String },
    #[error("Parse error in {repo}: {message}")]
    Parse { repo: String, message: String },
}
