//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter directives used when `RUST_LOG` is not set.
pub fn default_directives(verbose: bool, configured_level: &str) -> String {
    if verbose {
        "debug,tower_http=debug".to_string()
    } else {
        configured_level.to_string()
    }
}

/// Install the global subscriber. `RUST_LOG` wins over everything else.
pub fn init(verbose: bool, configured_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(verbose, configured_level)))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_overrides_config_level() {
        assert_eq!(default_directives(true, "warn"), "debug,tower_http=debug");
    }

    #[test]
    fn test_config_level_used_when_quiet() {
        assert_eq!(default_directives(false, "warn"), "warn");
    }

    #[test]
    fn test_directives_parse() {
        assert!(EnvFilter::try_new(default_directives(true, "info")).is_ok());
    }
}
