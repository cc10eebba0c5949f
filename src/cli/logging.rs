//! Diagnostic logging for the command-line tool
//!
//! Events go to stderr so report output on stdout stays pipeable.

use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::GlobalOpts;

/// Filter directive for the given flags and configured level
///
/// `--quiet` and `--verbose` win over `log_level`; without either the
/// default is `warn`.
pub fn filter_directive(global: &GlobalOpts, configured: Option<&str>) -> String {
    if global.quiet {
        "error".to_string()
    } else if global.verbose {
        "dcc=debug".to_string()
    } else {
        configured.unwrap_or("warn").to_string()
    }
}

/// Install the global subscriber; later calls are ignored
pub fn init(global: &GlobalOpts, configured: Option<&str>) {
    let directive = filter_directive(global, configured);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .compact()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn opts(quiet: bool, verbose: bool) -> GlobalOpts {
        GlobalOpts {
            format: OutputFormat::Auto,
            quiet,
            verbose,
        }
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(&opts(false, false), None), "warn");
        assert_eq!(filter_directive(&opts(false, false), Some("info")), "info");
        assert_eq!(filter_directive(&opts(false, true), Some("info")), "dcc=debug");
        assert_eq!(filter_directive(&opts(true, true), None), "error");
    }

    #[test]
    fn test_init_twice() {
        init(&opts(false, false), Some("not a [valid filter"));
        init(&opts(false, true), None);
    }
}
