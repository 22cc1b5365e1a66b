use std::sync::Arc;

use crate::careers::catalog::default_catalog;
use crate::careers::matcher::{CareerMatcher, DistanceCareerMatcher};
use crate::config::Config;
use crate::models::career::Career;
use crate::models::quiz::Question;
use crate::quiz::bank::default_bank;
use crate::quiz::session::{SampleSettings, SessionStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Static question bank, loaded once at startup.
    pub bank: Arc<Vec<Question>>,
    /// Static career catalog. Its order breaks ranking ties.
    pub catalog: Arc<Vec<Career>>,
    /// Pluggable career matcher. Default: DistanceCareerMatcher.
    pub matcher: Arc<dyn CareerMatcher>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            bank: Arc::new(default_bank()),
            catalog: Arc::new(default_catalog()),
            matcher: Arc::new(DistanceCareerMatcher),
            sessions: SessionStore::default(),
        }
    }

    pub fn sample_settings(&self) -> SampleSettings {
        SampleSettings {
            question_count: self.config.quiz_question_count,
            per_category_cap: self.config.quiz_per_category_cap,
        }
    }
}
