/// Catalog primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Users are owned by the external identity provider and keyed by its UUID.
pub type UserId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
