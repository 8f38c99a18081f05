// Two-tier handler architecture:
// Public (no auth) → Protected (bearer token required)

pub mod protected;
pub mod public;
