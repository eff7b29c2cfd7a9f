//! Error shared by every persistence gateway port.

use thiserror::Error;

/// Errors raised by repository adapters.
///
/// Adapters classify driver failures into these variants so the domain never
/// inspects driver error text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// The store could not be reached or a connection could not be obtained.
    #[error("persistence connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("persistence query failed: {message}")]
    Query { message: String },
    /// A foreign key did not resolve, or a referenced row is still in use.
    #[error("referential integrity violated on column {column}")]
    ReferentialIntegrity { column: String },
}

impl PersistenceError {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    pub fn referential_integrity(column: impl Into<String>) -> Self {
        Self::ReferentialIntegrity {
            column: column.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PersistenceError::connection("refused"), "refused")]
    #[case(PersistenceError::query("broken sql"), "broken sql")]
    #[case(PersistenceError::referential_integrity("client_id"), "client_id")]
    fn display_includes_context(#[case] error: PersistenceError, #[case] needle: &str) {
        assert!(error.to_string().contains(needle));
    }
}
