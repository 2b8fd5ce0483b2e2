use crate::config::ServerConfig;

/// A unit of deferred change: a closure that mutates the in-progress
/// config in place.
///
/// FnOnce is the right bound because `from_opts` calls each option
/// exactly once, and FnOnce accepts the widest range of closures,
/// including ones that move a captured value (like `with_id`, which
/// moves its String into the config). Stored as `Box<dyn FnOnce>`
/// because closures have anonymous types; boxing erases the type so
/// different options can share one array or Vec.
pub type ConfigOpt = Box<dyn FnOnce(&mut ServerConfig)>;

/// Enable TLS. No parameter: the mutation is unconditional.
pub fn with_tls() -> ConfigOpt {
    Box::new(|config| config.tls = true)
}

/// Set the connection limit. Any value is accepted; the limit is inert
/// data and nothing enforces it.
pub fn with_max_conn(max_conn: usize) -> ConfigOpt {
    Box::new(move |config| config.max_conn = max_conn)
}

/// Set the identifier.
#[allow(dead_code)]
pub fn with_id(id: impl Into<String>) -> ConfigOpt {
    let id = id.into();
    Box::new(move |config| config.id = id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_tls_touches_only_the_tls_field() {
        let config = ServerConfig::from_opts([with_tls()]);

        assert!(config.tls);
        assert_eq!(config.max_conn, 10);
        assert_eq!(config.id, "server1");
    }

    #[test]
    fn with_max_conn_touches_only_the_limit() {
        let config = ServerConfig::from_opts([with_max_conn(20)]);

        assert_eq!(config.max_conn, 20);
        assert_eq!(config.id, "server1");
        assert!(!config.tls);
    }

    #[test]
    fn with_id_touches_only_the_identifier() {
        let config = ServerConfig::from_opts([with_id("gateway")]);

        assert_eq!(config.id, "gateway");
        assert_eq!(config.max_conn, 10);
        assert!(!config.tls);
    }

    #[test]
    fn later_option_wins_on_the_same_field() {
        let config = ServerConfig::from_opts([with_max_conn(1), with_max_conn(2)]);

        assert_eq!(config.max_conn, 2);

        // Same property, reversed order.
        let config = ServerConfig::from_opts([with_max_conn(2), with_max_conn(1)]);

        assert_eq!(config.max_conn, 1);
    }

    #[test]
    fn single_field_setters_are_idempotent() {
        let once = ServerConfig::from_opts([with_id("a")]);
        let twice = ServerConfig::from_opts([with_id("a"), with_id("a")]);

        assert_eq!(once, twice);
    }
}
