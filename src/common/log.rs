use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_tree::HierarchicalLayer;

/// Installs the global subscriber. `RUST_LOG` wins over `verbosity`.
pub fn init(verbosity: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive(verbosity)))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true),
        )
        .try_init()?;
    Ok(())
}

fn default_directive(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,rift_hop={level}")
}

#[cfg(test)]
mod tests {
    use super::default_directive;

    #[test]
    fn verbosity_raises_only_our_level() {
        assert_eq!(default_directive(0), "warn,rift_hop=warn");
        assert_eq!(default_directive(2), "warn,rift_hop=debug");
        assert_eq!(default_directive(9), "warn,rift_hop=trace");
        for v in 0..4 {
            assert!(tracing_subscriber::EnvFilter::try_new(default_directive(v)).is_ok());
        }
    }
}
