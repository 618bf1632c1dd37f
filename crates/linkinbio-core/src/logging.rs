//! Tracing setup shared by the desktop app and the CLI.
//!
//! `RUST_LOG` wins when set; otherwise the verbosity count picks a level
//! for the link-in-bio crates and keeps dependencies at `warn`.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("warn,linkinbio={level},linkinbio_core={level},linkinbio_cli={level},linkinbio_ui={level}")
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbosity > 0)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_levels() {
        assert!(default_directive(0).contains("linkinbio_core=info"));
        assert!(default_directive(1).contains("linkinbio_core=debug"));
        assert!(default_directive(5).contains("linkinbio_core=trace"));
        assert!(default_directive(0).starts_with("warn,"));
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
