//! Diesel schema for account persistence.

diesel::table! {
    /// Account records with profile and tombstone bookkeeping.
    accounts (id) {
        /// Account identifier.
        id -> Uuid,
        /// Email address, unique across live and tombstoned rows.
        #[max_length = 255]
        email -> Varchar,
        /// First name.
        #[max_length = 255]
        first_name -> Varchar,
        /// Last name.
        #[max_length = 255]
        last_name -> Varchar,
        /// Phone number.
        #[max_length = 50]
        phone -> Varchar,
        /// Country.
        #[max_length = 100]
        country -> Varchar,
        /// Optional profile image reference.
        #[max_length = 512]
        profile_image -> Nullable<Varchar>,
        /// Email confirmation flag.
        email_confirmed -> Bool,
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
