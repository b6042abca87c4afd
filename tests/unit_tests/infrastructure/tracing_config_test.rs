use sanjeevani::infrastructure::observability::{LogFormat, TracingConfig};

fn config_from(vars: &'static [(&'static str, &'static str)]) -> TracingConfig {
    TracingConfig::from_lookup(|name| {
        vars.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    })
}

#[test]
fn given_no_variables_when_loading_then_local_text_logging() {
    let config = config_from(&[]);

    assert_eq!(config.environment, "local");
    assert_eq!(config.format, LogFormat::Text);
    assert_eq!(config.default_filter, TracingConfig::DEFAULT_FILTER);
}

#[test]
fn given_json_log_format_when_loading_then_json_logging() {
    let config = config_from(&[("LOG_FORMAT", "JSON"), ("APP_ENVIRONMENT", "prod")]);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "prod");
}

#[test]
fn given_unknown_log_format_when_loading_then_falls_back_to_text() {
    let config = config_from(&[("LOG_FORMAT", "yaml")]);

    assert_eq!(config.format, LogFormat::Text);
}

#[test]
fn given_default_filter_when_inspected_then_enables_crate_debug_logs() {
    assert!(TracingConfig::DEFAULT_FILTER.starts_with("info"));
    assert!(TracingConfig::DEFAULT_FILTER.contains("sanjeevani=debug"));
    assert!(TracingConfig::DEFAULT_FILTER.contains("tower_http=debug"));
}
