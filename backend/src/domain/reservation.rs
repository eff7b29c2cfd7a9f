//! Reservation data model.
//!
//! A reservation optionally references one client and one room. References
//! are resolved by the reservation service before anything is persisted, so
//! a [`NewReservation`] always carries full entities rather than bare ids.
//! Start and end dates are independent: no ordering between them is enforced.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Chambre, ChambreId, Client, ClientId};

/// Upper bound on the length of reservation preferences, in characters.
pub const MAX_PREFERENCES_CHARS: usize = 1000;

/// Validation errors raised by reservation constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationValidationError {
    PreferencesTooLong { max: usize, actual: usize },
}

impl fmt::Display for ReservationValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreferencesTooLong { max, actual } => write!(
                f,
                "preferences must be at most {max} characters (got {actual})"
            ),
        }
    }
}

impl std::error::Error for ReservationValidationError {}

/// Store-assigned reservation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(i64);

impl ReservationId {
    /// Wrap a raw identifier.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text guest preferences, bounded to [`MAX_PREFERENCES_CHARS`].
///
/// An absent value is represented as the empty string.
///
/// # Examples
/// ```
/// use hotel_backend::domain::Preferences;
///
/// let prefs = Preferences::try_new("sea view").expect("short enough");
/// assert_eq!(prefs.as_str(), "sea view");
/// assert!(Preferences::try_new("x".repeat(1001)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences(String);

impl Preferences {
    /// Validate and wrap a preferences string.
    pub fn try_new(value: impl Into<String>) -> Result<Self, ReservationValidationError> {
        let value = value.into();
        let actual = value.chars().count();
        if actual > MAX_PREFERENCES_CHARS {
            return Err(ReservationValidationError::PreferencesTooLong {
                max: MAX_PREFERENCES_CHARS,
                actual,
            });
        }
        Ok(Self(value))
    }

    /// Treat a missing value as empty preferences.
    pub fn from_optional(
        value: Option<String>,
    ) -> Result<Self, ReservationValidationError> {
        value.map_or_else(|| Ok(Self::default()), Self::try_new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Reservation candidate built by protocol adapters.
///
/// References are bare identifiers; the reservation service resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    pub client_id: Option<ClientId>,
    pub chambre_id: Option<ChambreId>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub preferences: Preferences,
}

impl ReservationDraft {
    /// Draft without client or room references.
    pub fn unassigned(start_date: NaiveDate, end_date: NaiveDate, preferences: Preferences) -> Self {
        Self {
            client_id: None,
            chambre_id: None,
            start_date,
            end_date,
            preferences,
        }
    }
}

/// Reservation with resolved references, ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub client: Option<Client>,
    pub chambre: Option<Chambre>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub preferences: Preferences,
}

/// A persisted reservation with its references attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    id: ReservationId,
    client: Option<Client>,
    chambre: Option<Chambre>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    preferences: Preferences,
}

impl Reservation {
    /// Attach a store-assigned identifier to resolved reservation fields.
    pub fn new(id: ReservationId, fields: NewReservation) -> Self {
        let NewReservation {
            client,
            chambre,
            start_date,
            end_date,
            preferences,
        } = fields;
        Self {
            id,
            client,
            chambre,
            start_date,
            end_date,
            preferences,
        }
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn client(&self) -> Option<&Client> {
        self.client.as_ref()
    }

    pub fn chambre(&self) -> Option<&Chambre> {
        self.chambre.as_ref()
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Replace every mutable field, keeping the identifier.
    pub fn replace(self, fields: NewReservation) -> Self {
        Self::new(self.id, fields)
    }

    /// Split into identifier and fields.
    pub fn into_parts(self) -> (ReservationId, NewReservation) {
        (
            self.id,
            NewReservation {
                client: self.client,
                chambre: self.chambre,
                start_date: self.start_date,
                end_date: self.end_date,
                preferences: self.preferences,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn preferences_accept_exactly_the_limit() {
        let value = "é".repeat(MAX_PREFERENCES_CHARS);
        let prefs = Preferences::try_new(value.clone()).expect("limit is inclusive");
        assert_eq!(prefs.as_str(), value);
    }

    #[rstest]
    fn preferences_reject_over_limit() {
        let err = Preferences::try_new("a".repeat(MAX_PREFERENCES_CHARS + 1))
            .expect_err("over limit");
        assert_eq!(
            err,
            ReservationValidationError::PreferencesTooLong {
                max: MAX_PREFERENCES_CHARS,
                actual: MAX_PREFERENCES_CHARS + 1,
            }
        );
    }

    #[rstest]
    fn missing_preferences_are_empty() {
        let prefs = Preferences::from_optional(None).expect("empty is valid");
        assert_eq!(prefs.as_str(), "");
    }

    #[rstest]
    fn replace_keeps_identifier() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid date");
        let original = Reservation::new(
            ReservationId::new(4),
            NewReservation {
                client: None,
                chambre: None,
                start_date: date,
                end_date: date,
                preferences: Preferences::try_new("A").expect("valid"),
            },
        );

        let replaced = original.replace(NewReservation {
            client: None,
            chambre: None,
            start_date: date,
            end_date: date,
            preferences: Preferences::default(),
        });

        assert_eq!(replaced.id(), ReservationId::new(4));
        assert_eq!(replaced.preferences().as_str(), "");
    }
}
