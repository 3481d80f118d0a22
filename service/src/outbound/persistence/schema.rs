//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation; regenerate with `diesel print-schema` when migrations
//! change the schema.

diesel::table! {
    /// User accounts table.
    ///
    /// The `id` column is the primary key (UUID v4), assigned by the
    /// service at creation and immutable thereafter.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Name supplied at creation.
        name -> Varchar,
        /// Contact email address.
        email -> Varchar,
        /// Credential stored as provided by the caller.
        password -> Varchar,
    }
}
