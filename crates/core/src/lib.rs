//! Domain logic for the Mum.entum backend.
//!
//! Everything in this crate is free of I/O. Persistence is reached only
//! through the [`store::OnboardingStore`] port, which the `db` crate
//! implements against PostgreSQL.

pub mod dashboard;
pub mod error;
pub mod health_tracking;
pub mod onboarding;
pub mod profile;
pub mod projection;
pub mod question;
pub mod resolver;
pub mod store;
pub mod treatment;
pub mod types;
