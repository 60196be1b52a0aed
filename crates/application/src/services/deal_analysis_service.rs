//! Deal analysis service - builds the prompt and sends it to the model

use std::{fmt, sync::Arc, time::Instant};

use domain::{AnalysisResult, DealInput, SessionContext};
use tracing::{debug, info, instrument, warn};

use crate::{
    deal_prompt::build_prompt,
    error::{ApplicationError, DispatchError},
    ports::InferencePort,
};

/// Service that turns a deal into an analysis
pub struct DealAnalysisService {
    inference: Arc<dyn InferencePort>,
}

impl fmt::Debug for DealAnalysisService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DealAnalysisService")
            .field("model", &self.inference.current_model())
            .finish_non_exhaustive()
    }
}

impl DealAnalysisService {
    /// Create a new analysis service
    pub fn new(inference: Arc<dyn InferencePort>) -> Self {
        Self { inference }
    }

    /// Send a prompt to the model and return its text untouched.
    ///
    /// One call, no retry. Any failure becomes a [`DispatchError`] carrying
    /// the underlying message.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn dispatch(&self, prompt: &str) -> Result<AnalysisResult, DispatchError> {
        let start = Instant::now();

        match self.inference.generate(prompt).await {
            Ok(result) => {
                debug!(
                    model = %result.model,
                    tokens = ?result.tokens_used,
                    latency_ms = start.elapsed().as_millis(),
                    "Deal analysis generated"
                );
                Ok(AnalysisResult::new(result.content))
            },
            Err(e) => {
                warn!(error = %e, "Deal analysis failed");
                Err(DispatchError::from(e))
            },
        }
    }

    /// Analyze a deal for a session.
    ///
    /// A locked session is refused before the prompt is built, so no
    /// outbound call happens.
    #[instrument(skip(self, session, input), fields(session = %session.id))]
    pub async fn analyze(
        &self,
        session: &SessionContext,
        input: &DealInput,
    ) -> Result<AnalysisResult, ApplicationError> {
        if !session.is_authenticated() {
            warn!("Analysis requested by a locked session");
            return Err(ApplicationError::NotAuthorized(
                "enter the access password first".to_string(),
            ));
        }

        let prompt = build_prompt(input);
        info!(notes_len = input.notes.len(), "Dispatching deal analysis");

        Ok(self.dispatch(&prompt).await?)
    }

    /// Get the configured model name
    pub fn current_model(&self) -> String {
        self.inference.current_model()
    }
}
