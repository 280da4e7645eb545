//! Actors performing state-changing operations.
//!
//! The engine never decides who may do what. Role gating happens in front of
//! it; the engine only records the actor so the decision can be audited.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a member within the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorRole {
    /// Organization president.
    President,
    /// Organization secretary.
    Secretary,
    /// Reporter (keeps the books on behalf of the committee).
    Reporter,
    /// Treasurer.
    Treasurer,
    /// Ordinary member.
    Member,
}

impl ActorRole {
    /// Returns the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::President => "president",
            Self::Secretary => "secretary",
            Self::Reporter => "reporter",
            Self::Treasurer => "treasurer",
            Self::Member => "member",
        }
    }

    /// Parses a role from a string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "president" => Some(Self::President),
            "secretary" => Some(Self::Secretary),
            "reporter" => Some(Self::Reporter),
            "treasurer" => Some(Self::Treasurer),
            "member" => Some(Self::Member),
            _ => None,
        }
    }

    /// Returns true for committee roles that hold office.
    #[must_use]
    pub fn is_office_bearer(&self) -> bool {
        !matches!(self, Self::Member)
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The member on whose behalf a call is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Member identifier in the external member registry.
    pub member_id: i64,
    /// Role held by the member at call time.
    pub role: ActorRole,
}

impl Actor {
    /// Creates a new actor.
    #[must_use]
    pub const fn new(member_id: i64, role: ActorRole) -> Self {
        Self { member_id, role }
    }
}
