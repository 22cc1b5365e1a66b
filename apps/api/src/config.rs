use anyhow::{ensure, Context, Result};
use chrono::Duration;

/// Largest accepted `SESSION_TTL_MINUTES` (one year).
pub const MAX_SESSION_TTL_MINUTES: i64 = 60 * 24 * 365;

/// Application configuration loaded from environment variables.
/// Every key has a default; startup fails on values that do not parse or are out of range.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Number of questions sampled per quiz session.
    pub quiz_question_count: usize,
    /// Upper bound on questions drawn from a single category before top-up.
    pub quiz_per_category_cap: usize,
    /// Reject unknown categories, question references and options instead of ignoring them.
    pub strict_validation: bool,
    /// Sessions older than this are pruned whenever a new session is created.
    pub session_ttl_minutes: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            quiz_question_count: 12,
            quiz_per_category_cap: 3,
            strict_validation: false,
            session_ttl_minutes: 120,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Session lifetime, clamped to `1..=MAX_SESSION_TTL_MINUTES` minutes.
    pub fn session_ttl(&self) -> Duration {
        Duration::minutes(self.session_ttl_minutes.clamp(1, MAX_SESSION_TTL_MINUTES))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let session_ttl_minutes = parse_or(
            &lookup,
            "SESSION_TTL_MINUTES",
            defaults.session_ttl_minutes,
        )?;
        ensure!(
            (1..=MAX_SESSION_TTL_MINUTES).contains(&session_ttl_minutes),
            "SESSION_TTL_MINUTES must be between 1 and {MAX_SESSION_TTL_MINUTES}, got {session_ttl_minutes}"
        );

        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            quiz_question_count: parse_or(
                &lookup,
                "QUIZ_QUESTION_COUNT",
                defaults.quiz_question_count,
            )?,
            quiz_per_category_cap: parse_or(
                &lookup,
                "QUIZ_PER_CATEGORY_CAP",
                defaults.quiz_per_category_cap,
            )?,
            strict_validation: parse_or(&lookup, "STRICT_VALIDATION", defaults.strict_validation)?,
            session_ttl_minutes,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
