use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use strum::EnumIter;

/// Opaque backend identifier of a ticket.
pub type TicketId = String;

/// Lifecycle status of a support ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
pub enum TicketStatus {
    Open,
    #[serde(rename = "In progress")]
    InProgress,
    Closed,
}

impl TicketStatus {
    /// Status assumed for a response when neither a pending pick nor a
    /// server status is known.
    pub const RESPONSE_DEFAULT: Self = Self::InProgress;

    /// Return the wire value understood by the backend.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In progress",
            Self::Closed => "Closed",
        }
    }

    /// Human-facing label used in the status dropdown.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Open" => Ok(Self::Open),
            "In progress" => Ok(Self::InProgress),
            "Closed" => Ok(Self::Closed),
            _ => Err("unknown ticket status"),
        }
    }
}

/// The user who opened a ticket, as embedded in the ticket list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketAuthor {
    /// Display name of the author.
    pub username: String,
}

/// A support inquiry as returned by `GET /api/tickets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    #[serde(rename = "createdBy")]
    pub created_by: TicketAuthor,
    /// Once set the ticket is visible in the admin queue.
    #[serde(rename = "forwardToAdmin", default)]
    pub forward_to_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

/// Body of `PUT /api/tickets/{id}`.
///
/// Serializes to `{"status": ..}` for a plain status change and to
/// `{"response": .., "status": ..}` when a response is attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTicketRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    pub status: TicketStatus,
}

impl UpdateTicketRequest {
    /// Request that only moves the ticket to `status`.
    #[must_use]
    pub fn status(status: TicketStatus) -> Self {
        Self {
            response: None,
            status,
        }
    }

    /// Request that records a response alongside `status`.
    #[must_use]
    pub fn respond(response: impl Into<String>, status: TicketStatus) -> Self {
        Self {
            response: Some(response.into()),
            status,
        }
    }
}

/// Body of `PUT /api/tickets/{id}/forward`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForwardTicketRequest {
    #[serde(rename = "forwardToAdmin")]
    pub forward_to_admin: bool,
}

impl Default for ForwardTicketRequest {
    fn default() -> Self {
        Self {
            forward_to_admin: true,
        }
    }
}
