use serde::{Deserialize, Serialize};

use ecosprout_core::{Entity, MemberId, ValueObject};

/// Optional contact channels for a team member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ValueObject for SocialLinks {}

impl SocialLinks {
    /// `mailto:` link for the email channel, if present.
    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|email| format!("mailto:{email}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image: String,
    #[serde(default)]
    pub social: SocialLinks,
}

impl Entity for TeamMember {
    type Id = MemberId;

    fn id(&self) -> &MemberId {
        &self.id
    }
}
