use thiserror::Error;

/// Errors raised while bringing a game up. Nothing in the per-frame path
/// returns these; once a game is initialized every tick is infallible.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The host surface has no usable size (canvas missing or collapsed).
    #[error("rendering surface unavailable ({width}x{height})")]
    SurfaceUnavailable { width: f32, height: f32 },

    /// A configuration value is out of its legal range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
