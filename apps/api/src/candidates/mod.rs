// Candidate pool: synthetic generation from uploads, triage, dashboard stats,
// rejection notices.

pub mod generator;
pub mod handlers;
pub mod notifications;
pub mod stats;
pub mod store;
