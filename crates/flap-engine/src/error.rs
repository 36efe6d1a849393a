use thiserror::Error;

/// Errors raised at the boundary of the engine (configuration and host input).
/// The simulation itself is total and never fails.
#[derive(Error, Debug)]
pub enum FlapError {
    #[error("invalid viewport {width}x{height}: dimensions must be finite and positive")]
    InvalidViewport { width: f32, height: f32 },
    #[error("invalid game config: {0}")]
    InvalidConfig(String),
    #[error("malformed game config: {source}")]
    Config {
        #[from]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_error_names_dimensions() {
        let err = FlapError::InvalidViewport { width: -1.0, height: 600.0 };
        assert!(err.to_string().contains("-1x600"));
    }

    #[test]
    fn invalid_config_carries_reason() {
        let err = FlapError::InvalidConfig("max_events 5000 exceeds 1024".to_string());
        assert_eq!(err.to_string(), "invalid game config: max_events 5000 exceeds 1024");
    }

    #[test]
    fn json_error_converts() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: FlapError = parse.into();
        assert!(matches!(err, FlapError::Config { .. }));
    }
}
