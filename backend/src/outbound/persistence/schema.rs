//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` when the migrations change.

diesel::table! {
    /// Registered identities. `email` is unique.
    users (id) {
        id -> Uuid,
        email -> Varchar,
        password_hash -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Car inventory.
    ///
    /// `status` is constrained to `Available`, `Rented` or `Maintenance`.
    cars (id) {
        id -> Uuid,
        model -> Varchar,
        car_type -> Varchar,
        year -> Int4,
        daily_rate -> Float8,
        status -> Varchar,
        description -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(users, cars);
