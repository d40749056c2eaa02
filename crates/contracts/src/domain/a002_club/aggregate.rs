use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClubId(pub Uuid);

impl ClubId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for ClubId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Clubinho unit. `number` is the public identifier used by coordinators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub number: u32,
    pub name: String,
}

impl Club {
    pub fn new(number: u32, name: impl Into<String>) -> Self {
        Self {
            id: ClubId::new_v4(),
            number,
            name: name.into(),
        }
    }
}

/// Body of `POST /api/clubs`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubDto {
    pub number: u32,
    pub name: String,
}

/// Weekly attendance sheet ("pagela") sent by a club for an academic week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagelaSubmission {
    #[serde(rename = "clubId")]
    pub club_id: ClubId,
    pub year: i32,
    pub week: i32,
    #[serde(rename = "submittedAt", default = "Utc::now")]
    pub submitted_at: DateTime<Utc>,
}
