//! Diesel schema for todo persistence.

diesel::table! {
    /// Todo records.
    todos (id) {
        /// Store-assigned identifier.
        id -> Int4,
        /// Trimmed title, 1 to 255 characters.
        title -> Text,
        /// Completion flag.
        completed -> Bool,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
