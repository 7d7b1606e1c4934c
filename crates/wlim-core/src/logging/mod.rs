use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter directive for the `wlim` crates in quiet and verbose mode
fn wlim_directive(quiet: bool) -> Directive {
    let level = if quiet { "error" } else { "info" };
    match format!("wlim={level}").parse() {
        Ok(directive) => directive,
        Err(_) => tracing::level_filters::LevelFilter::ERROR.into(),
    }
}

/// Initialize JSON logging on stderr.
///
/// Quiet mode emits only error events from the `wlim` crates; otherwise info
/// and above. `RUST_LOG` directives are applied first, so other crates can be
/// traced without touching the `wlim` level.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::from_default_env().add_directive(wlim_directive(quiet));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_per_mode() {
        assert_eq!(wlim_directive(true).to_string(), "wlim=error");
        assert_eq!(wlim_directive(false).to_string(), "wlim=info");
    }
}
