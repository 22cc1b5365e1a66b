// Quiz flow: question sampling, profile scoring and per-session state.
// Scoring is pure; only `session` holds mutable state.

pub mod bank;
pub mod handlers;
pub mod sampler;
pub mod scorer;
pub mod session;
