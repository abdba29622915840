use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Student record.
///
/// `id` is the storage-local surrogate key and never leaves the backend's
/// scope; `uuid` is the public-facing identifier, assigned at persist time
/// and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i32,
    pub uuid: String,
    pub name: String,
    pub email_address: String,
    pub created_at: DateTime<Utc>,
}
