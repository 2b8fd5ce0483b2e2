use thiserror::Error;

/// Constructing a config cannot fail: both constructors accept every
/// input unconditionally. The only fallible operation in the program
/// is writing the result to stdout.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
