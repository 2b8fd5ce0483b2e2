use std::fmt;

use crate::options::ConfigOpt;

/// Server tuning values. All three fields are inert data: nothing here
/// opens a socket, counts connections, or negotiates TLS.
///
/// There are two ways to build one, and contrasting them is the point
/// of this crate:
///
///   - `ServerConfig::new` takes every field positionally.
///   - `ServerConfig::from_opts` starts from the default and applies
///     caller-supplied mutators, so callers name only what they change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub max_conn: usize,
    pub id: String,
    pub tls: bool,
}

/// The baseline that every options-based construction starts from.
impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            max_conn: 10,
            id: "server1".to_string(),
            tls: false,
        }
    }
}

impl ServerConfig {
    /// Fixed-arity constructor: every caller supplies every value, even
    /// a caller that only cares about one of them. No defaults, no
    /// optionality, no validation.
    #[allow(dead_code)]
    pub fn new(max_conn: usize, id: impl Into<String>, tls: bool) -> Self {
        Self {
            max_conn,
            id: id.into(),
            tls,
        }
    }

    /// Options-based constructor: start from `Self::default()`, then
    /// apply each mutator in the order given. Later mutators can
    /// overwrite earlier ones; that is documented behavior, not an
    /// error, and there is no conflict detection.
    ///
    /// `impl IntoIterator<Item = ConfigOpt>` is the Rust rendition of a
    /// variadic parameter: `from_opts([])`, an array literal, or a Vec
    /// all work at the call site.
    pub fn from_opts(opts: impl IntoIterator<Item = ConfigOpt>) -> Self {
        let mut config = Self::default();

        for opt in opts {
            opt(&mut config);
        }

        config
    }
}

/// Structured key-value form, one field per line. This is what the
/// program prints.
impl fmt::Display for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "max_conn = {}", self.max_conn)?;
        writeln!(f, "id = {}", self.id)?;
        write!(f, "tls = {}", self.tls)
    }
}
