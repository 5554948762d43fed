//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain checks and ports to accomplish the two
//! user-facing flows: building a squad pick by pick, and saving it.

pub mod draft_session;
pub mod team_service;

pub use draft_session::DraftSession;
pub use team_service::TeamService;
