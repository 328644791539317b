use serde::Serialize;
use utoipa::ToSchema;

use crate::models::preferences::SitePreferences;

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub preferences: SitePreferences,
}
