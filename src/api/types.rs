use serde::Serialize;

/// Body of update and delete responses.
#[derive(Debug, Serialize)]
pub struct ChangesResponse {
    pub changes: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthLiveResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
}

#[derive(Debug, Serialize)]
pub struct HealthReadyResponse {
    pub status: &'static str,
    pub database: bool,
}
