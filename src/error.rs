// Typed errors with thiserror. Construction and the JSON boundary are the only
// fallible points; runtime event handling silently no-ops instead.

use thiserror::Error;

/// Engine error types.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Carousel requires at least one slide")]
    CarouselEmpty,

    #[error("Interval {name} must be positive")]
    InvalidInterval { name: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        EngineError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = EngineError::InvalidInterval {
            name: "autoplay_interval_ms",
        };
        assert!(err.to_string().contains("autoplay_interval_ms"));

        let err = EngineError::InvalidConfig("missing badge".to_string());
        assert!(err.to_string().contains("missing badge"));
    }
}
