use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Degenerate outcome distribution: normalizing total is {total}")]
    DegenerateDistribution { total: f64 },

    #[error("Unknown outcome category: {0}")]
    UnknownOutcome(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
