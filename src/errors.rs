#[derive(Debug, Clone)]
pub enum Errors {
    UnsupportedSystem(String),
    CoreCountUnavailable(String),
    MemoryUnavailable(String),
    InvalidMetric(String),
    SerializeError(String),
}

impl std::fmt::Display for Errors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Errors::UnsupportedSystem(msg) => write!(f, "Unsupported System: {}", msg),
            Errors::CoreCountUnavailable(msg) => write!(f, "Core Count Unavailable: {}", msg),
            Errors::MemoryUnavailable(msg) => write!(f, "Memory Unavailable: {}", msg),
            Errors::InvalidMetric(msg) => write!(f, "Invalid Metric: {}", msg),
            Errors::SerializeError(msg) => write!(f, "Serialize Error: {}", msg),
        }
    }
}

impl std::error::Error for Errors {}

pub type Result<T> = std::result::Result<T, Errors>;
