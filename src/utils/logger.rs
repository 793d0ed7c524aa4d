use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Binaries under src/bin log with their own target, so each is listed next to the library.
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "excel_sql_export=debug,toml_export=debug,info"
    } else {
        "excel_sql_export=info,toml_export=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

// stdout carries the report, so every log line goes to stderr.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .json(),
        )
        .init();
}

pub fn init(verbose: bool, json: bool) {
    if json {
        init_json_logger(verbose);
    } else {
        init_cli_logger(verbose);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cover_both_binaries() {
        for verbose in [false, true] {
            let directives = default_directives(verbose);
            assert!(directives.contains("excel_sql_export="));
            assert!(directives.contains("toml_export="));
            assert!(EnvFilter::try_new(directives).is_ok());
        }
        assert!(default_directives(false).contains("toml_export=info"));
        assert!(default_directives(true).contains("toml_export=debug"));
    }
}
