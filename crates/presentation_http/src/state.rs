//! Application state shared across handlers

use std::sync::Arc;

use application::{
    AccessGate, DealAnalysisService,
    ports::{InferencePort, SessionStore},
};
use infrastructure::AppConfig;

use crate::views::{PageRenderer, ViewError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Shared-password gate
    pub access_gate: Arc<AccessGate>,
    /// Deal analysis service
    pub analysis_service: Arc<DealAnalysisService>,
    /// Per-browser session storage
    pub sessions: Arc<dyn SessionStore>,
    /// Page templates
    pub views: Arc<PageRenderer>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("access_gate", &self.access_gate)
            .field("analysis_service", &self.analysis_service)
            .field("views", &self.views)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Wire services from configuration and adapters
    pub fn new(
        config: AppConfig,
        inference: Arc<dyn InferencePort>,
        sessions: Arc<dyn SessionStore>,
    ) -> Result<Self, ViewError> {
        Ok(Self {
            access_gate: Arc::new(AccessGate::new(config.security.app_password.clone())),
            analysis_service: Arc::new(DealAnalysisService::new(inference)),
            sessions,
            views: Arc::new(PageRenderer::new()?),
            config: Arc::new(config),
        })
    }
}
