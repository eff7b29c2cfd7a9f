//! Hotel client data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Store-assigned client identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(i64);

impl ClientId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client fields supplied on creation, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClient {
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
}

/// A persisted hotel client.
///
/// No uniqueness is enforced on any field other than the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    last_name: String,
    first_name: String,
    email: String,
    phone: String,
}

impl Client {
    /// Attach a store-assigned identifier to client fields.
    pub fn new(id: ClientId, fields: NewClient) -> Self {
        let NewClient {
            last_name,
            first_name,
            email,
            phone,
        } = fields;
        Self {
            id,
            last_name,
            first_name,
            email,
            phone,
        }
    }

    pub fn id(&self) -> ClientId {
        self.id
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}
