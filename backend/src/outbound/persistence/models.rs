//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. They exist solely to satisfy Diesel's
//! type requirements for queries and mutations.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{applications, feedback, jobs};

/// Row struct for reading from the jobs table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = jobs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct JobRow {
    pub id: Uuid,
    pub title: String,
    pub owner: String,
    pub applicant_count: i64,
    pub details: serde_json::Value,
    #[expect(dead_code, reason = "read for ordering only; never surfaced")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new job records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = jobs)]
pub(crate) struct NewJobRow<'a> {
    pub id: Uuid,
    pub title: &'a str,
    pub owner: &'a str,
    pub applicant_count: i64,
    pub details: &'a serde_json::Value,
}

/// Changeset struct for replacing existing job records on upsert.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = jobs)]
pub(crate) struct JobUpdate<'a> {
    pub title: &'a str,
    pub owner: &'a str,
    pub applicant_count: i64,
    pub details: &'a serde_json::Value,
}

/// Row struct for reading from the applications table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = applications)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ApplicationRow {
    pub id: Uuid,
    pub applicant: String,
    pub job_id: Uuid,
    pub category: Option<String>,
    pub details: serde_json::Value,
    #[expect(dead_code, reason = "read for ordering only; never surfaced")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for creating new application records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = applications)]
pub(crate) struct NewApplicationRow<'a> {
    pub id: Uuid,
    pub applicant: &'a str,
    pub job_id: Uuid,
    pub category: Option<&'a str>,
    pub details: &'a serde_json::Value,
}

/// Insertable struct for creating new feedback records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = feedback)]
pub(crate) struct NewFeedbackRow<'a> {
    pub id: Uuid,
    pub submitter: &'a str,
    pub message: &'a str,
}
