use std::sync::Mutex;
use tracing::{error, info, instrument};

use crate::brain::{Category, CategoryClassifier, ResponseComposer, TemplatePicker};
use crate::config::{ConfigStore, ResponderConfig};
use crate::error::AppError;
use crate::history::{Clock, Exchange, HistoryLog, JsonFileHistoryStore, LocalClock};
use crate::settings::Settings;
use crate::signature::{RenderedResponse, Signature};

/// Everything produced for one message.
#[derive(Debug, Clone)]
pub struct ResponseOutcome {
    pub categories: Vec<Category>,
    pub body: String,
    pub response: RenderedResponse,
    pub exchange: Exchange,
}

/// The auto-responder.
///
/// Configuration is fixed at construction and shared freely. The history log sits
/// behind a mutex held for the whole append-and-persist step, so concurrent callers
/// never interleave full-snapshot writes.
pub struct Responder {
    config: ResponderConfig,
    classifier: CategoryClassifier,
    composer: ResponseComposer,
    signature: Signature,
    clock: Box<dyn Clock>,
    history: Mutex<HistoryLog>,
}

impl Responder {
    /// Creates a responder with random template choice, local time and the default signature.
    pub fn new(config: ResponderConfig, history: HistoryLog) -> Self {
        Self {
            classifier: CategoryClassifier::new(config.rules()),
            composer: ResponseComposer::new(config.templates()),
            config,
            signature: Signature::default(),
            clock: Box::new(LocalClock),
            history: Mutex::new(history),
        }
    }

    /// Loads configuration and history from the locations in `settings`.
    /// Load-time corruption of either is logged and replaced by an empty default.
    pub fn from_settings(settings: &Settings) -> Self {
        let config = ConfigStore::new(&settings.config_file).load();
        let history = HistoryLog::load(Box::new(JsonFileHistoryStore::new(&settings.history_file)));

        Self::new(config, history).with_signature(settings.signature.clone())
    }

    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = signature;
        self
    }

    pub fn with_picker(mut self, picker: Box<dyn TemplatePicker>) -> Self {
        self.composer = ResponseComposer::with_picker(self.config.templates(), picker);
        self
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// Classifies, composes and logs `message`, returning the plain reply.
    #[instrument(skip(self))]
    pub fn generate_and_log_response(&self, message: &str) -> Result<String, AppError> {
        self.respond(message).map(|outcome| outcome.response.plain)
    }

    /// Like `generate_and_log_response` but returns every intermediate result.
    ///
    /// Either the whole pipeline succeeds and one exchange is recorded, or nothing is.
    pub fn respond(&self, message: &str) -> Result<ResponseOutcome, AppError> {
        let categories = self.classifier.classify(message);
        let body = self.composer.compose(message, &categories);

        let timestamp = self.clock.now();
        let label = Category::join(&categories);
        let response = RenderedResponse::assemble(&body, &self.signature, &label, &timestamp);

        let exchange = {
            let mut history = self.history.lock().map_err(|e| {
                error!("History lock poisoned: {}", e);
                AppError::processing(format!("History unavailable: {}", e))
            })?;
            history.log_and_persist(message, &categories, &response.plain, &timestamp)?
        };

        info!("Replied to message (categories: {})", label);

        Ok(ResponseOutcome {
            categories,
            body,
            response,
            exchange,
        })
    }

    /// Copy of the recorded exchanges, oldest first.
    pub fn history(&self) -> Result<Vec<Exchange>, AppError> {
        self.history
            .lock()
            .map(|h| h.records().to_vec())
            .map_err(|e| AppError::processing(format!("History unavailable: {}", e)))
    }
}
