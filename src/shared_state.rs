use chrono::{DateTime, Utc};

use crate::models::preferences::Locale;
use crate::services::messages::RenderContext;
use crate::services::preferences::Preferences;

#[derive(Clone, Debug)]
pub struct AppState {
    /// Persisted language/theme pair
    pub preferences: Preferences,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences,
            started_at: Utc::now(),
        }
    }

    /// Rendering context for one request: an explicit `?lang=` wins over the
    /// stored language.
    pub fn render_context(&self, lang: Option<Locale>) -> RenderContext {
        RenderContext::new(lang.unwrap_or_else(|| self.preferences.language()))
    }

    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}
