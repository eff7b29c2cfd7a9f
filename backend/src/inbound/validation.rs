//! Wire-level validation shared by the protocol adapters.
//!
//! Every adapter funnels its raw reservation fields through
//! [`ReservationFields::into_draft`], so a missing date, a malformed date or
//! over-long preferences produce the same [`Error`] on every facade.

use serde_json::json;

use crate::domain::{ChambreId, ClientId, Error, Preferences, ReservationDraft};
use crate::inbound::date_codec::parse_date;

/// Validation error codes placed in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidDate,
    InvalidIdentifier,
    PreferencesTooLong,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidDate => "invalid_date",
            Self::InvalidIdentifier => "invalid_identifier",
            Self::PreferencesTooLong => "preferences_too_long",
        }
    }
}

/// Wire field name, in the camelCase spelling used by every facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const DATE_DEBUT: Self = Self("dateDebut");
    pub(crate) const DATE_FIN: Self = Self("dateFin");
    pub(crate) const PREFERENCES: Self = Self("preferences");
    pub(crate) const ID: Self = Self("id");
    pub(crate) const CLIENT_ID: Self = Self("clientId");
    pub(crate) const CHAMBRE_ID: Self = Self("chambreId");

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, code: ValidationCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        ValidationCode::MissingField,
        format!("missing required field: {name}"),
    )
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!(
        "invalid date for {name}: '{value}', use YYYY-MM-DD"
    ))
    .with_details(json!({
        "field": name,
        "value": value,
        "code": ValidationCode::InvalidDate.as_str(),
    }))
}

/// Parse a required date, treating blank input as missing.
pub(crate) fn parse_required_date(
    field: FieldName,
    raw: Option<&str>,
) -> Result<chrono::NaiveDate, Error> {
    let raw = raw
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))?;
    parse_date(raw).map_err(|_| invalid_date_error(field, raw))
}

pub(crate) fn parse_preferences(raw: Option<String>) -> Result<Preferences, Error> {
    Preferences::from_optional(raw).map_err(|err| {
        field_error(
            FieldName::PREFERENCES,
            ValidationCode::PreferencesTooLong,
            err.to_string(),
        )
    })
}

/// Parse a textual identifier such as a GraphQL `ID` or SOAP element.
pub(crate) fn parse_identifier(field: FieldName, raw: &str) -> Result<i64, Error> {
    raw.trim().parse::<i64>().map_err(|_| {
        let name = field.as_str();
        Error::invalid_request(format!("{name} must be an integer identifier")).with_details(
            json!({
                "field": name,
                "value": raw,
                "code": ValidationCode::InvalidIdentifier.as_str(),
            }),
        )
    })
}

/// Raw reservation fields as they arrive on any wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ReservationFields {
    pub client_id: Option<i64>,
    pub chambre_id: Option<i64>,
    pub date_debut: Option<String>,
    pub date_fin: Option<String>,
    pub preferences: Option<String>,
}

impl ReservationFields {
    /// Validate wire fields into a draft for the orchestrator.
    pub(crate) fn into_draft(self) -> Result<ReservationDraft, Error> {
        let start_date = parse_required_date(FieldName::DATE_DEBUT, self.date_debut.as_deref())?;
        let end_date = parse_required_date(FieldName::DATE_FIN, self.date_fin.as_deref())?;
        let preferences = parse_preferences(self.preferences)?;
        Ok(ReservationDraft {
            client_id: self.client_id.map(ClientId::new),
            chambre_id: self.chambre_id.map(ChambreId::new),
            start_date,
            end_date,
            preferences,
        })
    }
}
