use crate::utils::datetime::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub leader_id: Uuid,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: Uuid,
    pub team_id: Uuid,
    pub user_id: Uuid,
    pub joined_at: Timestamp,
    /// Joined from the `profiles` table when the query asks for it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profiles: Option<Profile>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub email: String,
    pub full_name: String,
}

impl TeamMember {
    /// Name to show for the member, falling back to the email address
    pub fn display_name(&self) -> Option<&str> {
        self.profiles.as_ref().map(|p| {
            if p.full_name.trim().is_empty() {
                p.email.as_str()
            } else {
                p.full_name.as_str()
            }
        })
    }
}
