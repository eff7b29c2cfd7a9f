//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Hotel clients.
    clients (id) {
        id -> Int8,
        nom -> Varchar,
        prenom -> Varchar,
        email -> Varchar,
        telephone -> Varchar,
    }
}

diesel::table! {
    /// Hotel rooms.
    chambres (id) {
        id -> Int8,
        /// Free-text room category.
        #[sql_name = "type"]
        room_type -> Varchar,
        prix -> Float8,
        disponible -> Bool,
    }
}

diesel::table! {
    /// Reservations with optional client and room references.
    reservations (id) {
        id -> Int8,
        client_id -> Nullable<Int8>,
        chambre_id -> Nullable<Int8>,
        date_debut -> Date,
        date_fin -> Date,
        /// At most 1000 characters.
        preferences -> Varchar,
    }
}

diesel::joinable!(reservations -> clients (client_id));
diesel::joinable!(reservations -> chambres (chambre_id));

diesel::allow_tables_to_appear_in_same_query!(clients, chambres, reservations);
