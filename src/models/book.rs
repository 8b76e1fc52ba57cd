//! Book model and related types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Age boundary for the `New`/`Old` listing filters, in minutes.
pub const TIME_WINDOW_MINUTES: i64 = 10;

/// Catalog record
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct Book {
    #[serde(rename = "ID")]
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub category: String,
    pub created_time: DateTime<Utc>,
    /// Id of the creating user, stored as text. A correlation key, not an
    /// ownership pointer.
    #[serde(rename = "CreatorID")]
    pub creator_id: String,
}

/// Create book request. Title, Author and Category are presence-checked by
/// the service; a client-supplied CreatorID is accepted and discarded.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "CreatorID")]
    pub creator_id: Option<String>,
}

/// Update book request. Absent fields are left untouched; CreatedTime and
/// CreatorID are not patchable.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
}

/// Query flags for the full catalog listing
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct BookQuery {
    /// "1" selects books created within the last 10 minutes
    pub new: Option<String>,
    /// "1" selects books created before that cutoff
    pub old: Option<String>,
}

/// Time-window filter decoded from the listing flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    New,
    Old,
}

impl TimeWindow {
    /// Decode the `New`/`Old` flags. `New` is evaluated first and `Old`
    /// overwrites it when both are set, matching the legacy API. Any value
    /// other than "1" leaves a flag unset.
    pub fn from_query(query: &BookQuery) -> Option<TimeWindow> {
        let mut window = None;
        if query.new.as_deref() == Some("1") {
            window = Some(TimeWindow::New);
        }
        if query.old.as_deref() == Some("1") {
            window = Some(TimeWindow::Old);
        }
        window
    }

    /// Cutoff instant separating "new" from "old" records
    pub fn cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::minutes(TIME_WINDOW_MINUTES)
    }
}
