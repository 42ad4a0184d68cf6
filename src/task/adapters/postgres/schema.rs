//! Diesel schema for task persistence.

diesel::table! {
    /// Task records with owner reference and tombstone bookkeeping.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning account identifier.
        owner_id -> Uuid,
        /// Title.
        #[max_length = 255]
        title -> Varchar,
        /// Description.
        description -> Text,
        /// Completion flag.
        completed -> Bool,
        /// Tombstone flag.
        deleted -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last mutation timestamp.
        updated_at -> Timestamptz,
        /// Tombstone timestamp.
        deleted_at -> Nullable<Timestamptz>,
    }
}
