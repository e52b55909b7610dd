use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Unique pack identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackId(pub u32);

impl PackId {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Status
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackStatus {
    Enabled,
    Disabled,
}

impl PackStatus {
    pub fn from_disabled(disabled: bool) -> Self {
        if disabled {
            PackStatus::Disabled
        } else {
            PackStatus::Enabled
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PackStatus::Enabled => "Enabled",
            PackStatus::Disabled => "Disabled",
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A named, schedulable set of recurring queries applied to hosts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pack {
    pub id: PackId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub query_count: u32,
    #[serde(default)]
    pub total_hosts_count: u32,
    #[serde(default)]
    pub host_ids: Vec<u32>,
    #[serde(default)]
    pub label_ids: Vec<u32>,
    #[serde(default)]
    pub team_ids: Vec<u32>,
    #[serde(rename = "type", default)]
    pub pack_type: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pack {
    /// New enabled pack with no targets and no queries
    pub fn new_for_insert(id: PackId, name: String, description: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            description,
            platform: None,
            disabled: false,
            query_count: 0,
            total_hosts_count: 0,
            host_ids: Vec::new(),
            label_ids: Vec::new(),
            team_ids: Vec::new(),
            pack_type: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn status(&self) -> PackStatus {
        PackStatus::from_disabled(self.disabled)
    }

    /// Returns true when the status actually changed
    pub fn set_disabled(&mut self, disabled: bool, now: DateTime<Utc>) -> bool {
        if self.disabled == disabled {
            return false;
        }
        self.disabled = disabled;
        self.updated_at = now;
        true
    }
}
