//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly; Diesel uses
//! them for compile-time query validation and type-safe SQL generation.

diesel::table! {
    /// Job postings.
    ///
    /// `applicant_count` is a derived counter incremented atomically by the
    /// application workflow; it is never computed from the applications
    /// table at read time.
    jobs (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Posting title, searched with ILIKE.
        title -> Varchar,
        /// Identity of the posting owner.
        owner -> Varchar,
        /// Derived count of applications referencing this job.
        applicant_count -> Int8,
        /// Opaque additional posting fields.
        details -> Jsonb,
        /// Record creation timestamp, used for stable listing order.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Job applications.
    ///
    /// A unique index on `(applicant, job_id)` enforces one application per
    /// identity and job; the repository maps its violation to a duplicate
    /// error. `job_id` carries no foreign key so deleting a job leaves its
    /// applications in place.
    applications (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Identity of the applicant.
        applicant -> Varchar,
        /// Identifier of the job applied to.
        job_id -> Uuid,
        /// Optional classification tag.
        category -> Nullable<Varchar>,
        /// Opaque additional payload.
        details -> Jsonb,
        /// Record creation timestamp, used for stable listing order.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Feedback messages.
    feedback (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Identity of the submitter.
        submitter -> Varchar,
        /// Free-text message.
        message -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}
