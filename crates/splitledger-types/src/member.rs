//! Participants and the groups they share expenses in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{GroupId, MemberId};

/// A group participant. The display name is metadata only; the
/// balance engine keys everything on [`MemberId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Member {
    #[must_use]
    pub fn new(id: impl Into<MemberId>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Name for display, falling back to the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(self.id.as_str())
    }
}

impl From<&str> for Member {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<MemberId> for Member {
    fn from(id: MemberId) -> Self {
        Self { id, name: None }
    }
}

/// An expense-sharing group with a fixed roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    #[serde(default)]
    pub members: Vec<Member>,
    pub created_at: DateTime<Utc>,
}

impl Group {
    #[must_use]
    pub fn new(id: impl Into<GroupId>, name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            members,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn has_member(&self, id: &MemberId) -> bool {
        self.members.iter().any(|m| &m.id == id)
    }

    /// Look up a member's display name, falling back to the raw id.
    #[must_use]
    pub fn member_name<'a>(&'a self, id: &'a MemberId) -> &'a str {
        self.members
            .iter()
            .find(|m| &m.id == id)
            .map_or(id.as_str(), Member::display_name)
    }
}
