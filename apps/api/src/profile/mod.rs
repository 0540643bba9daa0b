// Candidate profile: the wizard's collected fields and their persistence.

pub mod handlers;
pub mod models;
pub mod store;
