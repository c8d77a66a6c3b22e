use crate::config::Config;
use crate::render::CidFontFace;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Face returned by the one-time font registration at startup.
    pub font: &'static CidFontFace,
}
