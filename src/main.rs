mod config;
mod error;
mod options;

use std::io::{self, Write};

use config::ServerConfig;
use error::ConfigError;
use options::{with_max_conn, with_tls};

fn main() -> Result<(), ConfigError> {
    // Only the fields we care about; the identifier keeps its default.
    let config = ServerConfig::from_opts([with_tls(), with_max_conn(20)]);

    let mut out = io::stdout().lock();
    writeln!(out, "{config}")?;

    Ok(())
}
