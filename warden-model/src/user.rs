//! User records as exchanged with the user-management service.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::UserId;

/// A managed user account.
///
/// Only `id` and `name` carry meaning for the console. Every other profile
/// field the server sends is kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier (or a provisional one, see [`UserId`])
    pub id: UserId,
    /// Display name shown in the list
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Opaque profile fields passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Partial user as produced by the add/edit form.
///
/// Fields left as `None` are not touched when the draft is merged into an
/// existing [`User`]. An empty `email` or `role` clears that field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl User {
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: None,
            role: None,
            created_at: None,
            extra: BTreeMap::new(),
        }
    }

    /// Build a user from a form draft under the given identifier.
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let mut user = Self::new(id, String::new());
        user.merge(draft);
        user
    }

    /// Shallow merge: every field the draft sets replaces the current value.
    /// The identifier is never changed.
    pub fn merge(&mut self, draft: UserDraft) {
        let UserDraft {
            name,
            email,
            role,
            extra,
        } = draft;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = (!email.is_empty()).then_some(email);
        }
        if let Some(role) = role {
            self.role = (!role.is_empty()).then_some(role);
        }
        self.extra.extend(extra);
    }
}

impl UserDraft {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
