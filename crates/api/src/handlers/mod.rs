pub mod action_items;
pub mod dashboard;
pub mod health_tracking;
pub mod onboarding;
pub mod profile;
pub mod treatment;
