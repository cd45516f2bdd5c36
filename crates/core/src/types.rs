/// User ids are the UUIDs issued by the auth provider.
pub type UserId = uuid::Uuid;

/// Seeker and company profile primary keys.
pub type ProfileId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
