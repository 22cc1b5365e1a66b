use serde::Serialize;

use crate::models::quiz::ProfileScores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Low,
    Moderate,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Career {
    pub title: String,
    pub description: String,
    /// Ideal trait profile for this career, each value 0–100.
    pub requirements: ProfileScores,
    pub salary: String,
    pub market_demand: Rating,
    pub work_life_balance: Rating,
    pub job_security: Rating,
}

/// A career annotated with its closeness to a user profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerMatch {
    #[serde(flatten)]
    pub career: Career,
    pub match_score: u32, // 0 – 100
}
