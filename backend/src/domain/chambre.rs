//! Hotel room (chambre) data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors raised by room constructors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChambreValidationError {
    InvalidPrice { value: f64 },
}

impl fmt::Display for ChambreValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPrice { value } => {
                write!(f, "room price must be finite and non-negative (got {value})")
            }
        }
    }
}

impl std::error::Error for ChambreValidationError {}

/// Store-assigned room identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChambreId(i64);

impl ChambreId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ChambreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Nightly room price. Always finite and `>= 0`.
///
/// # Examples
/// ```
/// use hotel_backend::domain::Price;
///
/// assert!(Price::try_new(120.5).is_ok());
/// assert!(Price::try_new(-1.0).is_err());
/// assert!(Price::try_new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Validate and wrap a price.
    pub fn try_new(value: f64) -> Result<Self, ChambreValidationError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ChambreValidationError::InvalidPrice { value });
        }
        Ok(Self(value))
    }

    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Room fields supplied on creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChambre {
    pub room_type: String,
    pub price: Price,
    pub available: bool,
}

/// A persisted hotel room.
#[derive(Debug, Clone, PartialEq)]
pub struct Chambre {
    id: ChambreId,
    room_type: String,
    price: Price,
    available: bool,
}

impl Chambre {
    /// Attach a store-assigned identifier to room fields.
    pub fn new(id: ChambreId, fields: NewChambre) -> Self {
        let NewChambre {
            room_type,
            price,
            available,
        } = fields;
        Self {
            id,
            room_type,
            price,
            available,
        }
    }

    pub fn id(&self) -> ChambreId {
        self.id
    }

    /// Free-text category such as `Standard` or `Suite`.
    pub fn room_type(&self) -> &str {
        &self.room_type
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn is_available(&self) -> bool {
        self.available
    }
}
