//! Activity feed entries and client credentials.

use crate::model::{Entity, EntityKind};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Tone of an activity feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityKind {
    Success,
    Info,
    Warning,
    Neutral,
}

impl ActivityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Neutral => "neutral",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "success" => Some(Self::Success),
            "info" => Some(Self::Info),
            "warning" => Some(Self::Warning),
            "neutral" => Some(Self::Neutral),
            _ => None,
        }
    }
}

/// Decorative feed entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: String,
    pub message: String,
    /// Relative label such as `vor 2 Stunden`.
    pub timestamp: String,
    /// Serialized as `type` to match the dashboard's feed shape.
    #[serde(rename = "type")]
    pub kind: ActivityKind,
}

impl Entity for Activity {
    const KIND: EntityKind = EntityKind::Activity;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Access record shown in a client's credential vault.
///
/// Secrets are held as plain strings; this is sample data, not a secret
/// store. `Debug` output never prints them.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: String,
    pub system: String,
    /// Icon tag used by the vault UI, e.g. `ShoppingBag`.
    pub icon: String,
    pub username: String,
    pub password: String,
    pub api_key: Option<String>,
    pub notes: Option<String>,
    pub last_updated: String,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("system", &self.system)
            .field("icon", &self.icon)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("notes", &self.notes)
            .field("last_updated", &self.last_updated)
            .finish()
    }
}

impl Entity for Credential {
    const KIND: EntityKind = EntityKind::Credential;

    fn id(&self) -> &str {
        &self.id
    }
}
