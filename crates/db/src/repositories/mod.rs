//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod action_item_repo;
pub mod baby_metric_repo;
pub mod health_tracking_repo;
pub mod notification_repo;
pub mod profile_repo;
pub mod question_repo;
pub mod response_repo;
pub mod treatment_repo;

pub use action_item_repo::ActionItemRepo;
pub use baby_metric_repo::BabyMetricRepo;
pub use health_tracking_repo::HealthTrackingRepo;
pub use notification_repo::NotificationRepo;
pub use profile_repo::ProfileRepo;
pub use question_repo::QuestionRepo;
pub use response_repo::ResponseRepo;
pub use treatment_repo::TreatmentRepo;
