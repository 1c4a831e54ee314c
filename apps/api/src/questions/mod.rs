//! Dynamic question supply: prompt construction, the provider's
//! primary/blended/fallback assembly logic, and the session-facing HTTP
//! handlers.

pub mod handlers;
pub mod prompts;
pub mod provider;
