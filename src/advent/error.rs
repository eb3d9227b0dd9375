use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdventError {
    #[error("Day {day} is out of range (calendar has {days} days)")]
    OutOfRange { day: u32, days: u32 },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Persist error: {0}")]
    Persist(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, AdventError>;
