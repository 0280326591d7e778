// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The asynchronous data-source boundary.
//!
//! Each screen performs exactly one fetch on mount: no retry, no debounce,
//! no cancellation on unmount. Join results arrive as nested rows and are
//! flattened into denormalized display fields before they enter the
//! entity store. Fetch failures become a per-section load state rather
//! than propagating; one failed section never blocks its siblings.

use guide_admin_domain::{Course, EntityId, LicenseRenewal, RenewalStatus};
use serde::Deserialize;
use std::future::Future;
use thiserror::Error;
use time::Date;
use time::format_description::well_known::Iso8601;

/// Errors crossing the fetch boundary.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The backend rejected or failed the request.
    #[error("Backend request failed: {0}")]
    Request(String),
    /// The response payload could not be decoded.
    #[error("Malformed payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The load state of one screen section.
///
/// Failures are scoped to the section that fetched; a composite screen
/// renders the failed section's error while its siblings continue.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// The initial fetch has not resolved yet.
    #[default]
    Loading,
    /// The fetch resolved and the store is populated.
    Ready,
    /// The fetch failed; the section shows a blocking error.
    Failed(String),
}

impl LoadState {
    /// Returns whether the section is ready to render.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns the failure message, if the load failed.
    #[must_use]
    pub const fn error_message(&self) -> Option<&String> {
        match self {
            Self::Failed(message) => Some(message),
            Self::Loading | Self::Ready => None,
        }
    }
}

/// The external data collaborator for one entity collection.
pub trait DataSource {
    /// The entity type this source produces.
    type Record;

    /// Fetches the full collection once.
    fn fetch(&self) -> impl Future<Output = Result<Vec<Self::Record>, FetchError>> + Send;
}

/// A joined instructor row nested inside a course payload.
#[derive(Debug, Clone, Deserialize)]
pub struct InstructorRow {
    /// The instructor's display name.
    pub name: String,
    /// The instructor's image URL.
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A course row as returned by the backend, before flattening.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseRow {
    /// The backend's numeric key.
    pub id: i64,
    /// The course title.
    pub course_name: String,
    /// The course description.
    pub course_description: String,
    /// Creation timestamp as an ISO 8601 string.
    #[serde(default)]
    pub created_at: Option<String>,
    /// The joined instructor record, if one is assigned.
    #[serde(default)]
    pub instructor: Option<InstructorRow>,
}

impl From<CourseRow> for Course {
    fn from(row: CourseRow) -> Self {
        let created_at: Option<Date> = row.created_at.as_deref().and_then(parse_backend_date);
        Self {
            id: EntityId::from(row.id),
            course_name: row.course_name,
            course_description: row.course_description,
            instructor_name: row.instructor.as_ref().map(|i| i.name.clone()),
            instructor_image: row.instructor.and_then(|i| i.image_url),
            created_at,
        }
    }
}

/// A license renewal row as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
pub struct RenewalRow {
    /// The backend key.
    pub id: String,
    /// The license holder's display name.
    pub user_name: String,
    /// License start date, display string.
    pub start_date: String,
    /// License expiry date, display string.
    pub expired_date: String,
    /// Renewal payment progress.
    pub payment: String,
    /// The renewal status, decoded from its wire string.
    pub status: RenewalStatus,
    /// Days until expiry; negative once expired.
    #[serde(default)]
    pub days_until_expiry: i64,
}

impl From<RenewalRow> for LicenseRenewal {
    fn from(row: RenewalRow) -> Self {
        Self {
            id: EntityId::new(row.id),
            user_name: row.user_name,
            start_date: row.start_date,
            expired_date: row.expired_date,
            payment: row.payment,
            status: row.status,
            days_until_expiry: row.days_until_expiry,
        }
    }
}

/// Decodes a course collection payload and flattens the instructor join.
///
/// # Errors
///
/// Returns `FetchError::Payload` if the payload is not a valid course
/// array.
pub fn parse_courses(payload: &str) -> Result<Vec<Course>, FetchError> {
    let rows: Vec<CourseRow> = serde_json::from_str(payload)?;
    Ok(rows.into_iter().map(Course::from).collect())
}

/// Decodes a license renewal collection payload.
///
/// # Errors
///
/// Returns `FetchError::Payload` if the payload is not a valid renewal
/// array or carries a status outside the renewal enum.
pub fn parse_renewals(payload: &str) -> Result<Vec<LicenseRenewal>, FetchError> {
    let rows: Vec<RenewalRow> = serde_json::from_str(payload)?;
    Ok(rows.into_iter().map(LicenseRenewal::from).collect())
}

// Backend timestamps that fail to parse degrade to an absent display
// date rather than failing the whole load.
fn parse_backend_date(raw: &str) -> Option<Date> {
    Date::parse(raw, &Iso8601::DEFAULT).ok()
}
