use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// The unique identifier for this user.
    pub id: i64,

    /// The user's display name.
    pub name: String,

    /// The user's email address, if one is on record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A hypermedia link advertising a related resource.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Link {
    /// The relation of the target to the current resource.
    pub rel: String,

    /// The URI of the target.
    pub href: String,
}

/// A single user together with the operations reachable from it.
///
/// Returned by the get-by-id endpoint; carries one `all-users` link back to
/// the collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserEntity {
    #[serde(flatten)]
    pub user: User,

    pub links: Vec<Link>,
}
