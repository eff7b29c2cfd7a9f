//! SOAP request envelope decoding.
//!
//! Element names are matched on their local part, so any namespace prefix
//! the client picks (`soapenv:`, `soap:`, `res:`...) is accepted.

use serde::Deserialize;
use thiserror::Error;

use crate::domain::Error;
use crate::inbound::validation::{FieldName, ReservationFields, missing_field_error, parse_identifier};

/// Failure to turn a request body into a known operation.
#[derive(Debug, Error)]
pub enum SoapRequestError {
    #[error("request body is not valid UTF-8")]
    NotUtf8,
    #[error("malformed SOAP request: {0}")]
    Malformed(#[from] quick_xml::de::DeError),
}

/// Reservation fields as sent in a SOAP payload. Every value is kept as text
/// so validation errors match the other facades.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationElement {
    pub id: Option<String>,
    pub date_debut: Option<String>,
    pub date_fin: Option<String>,
    pub preferences: Option<String>,
    pub client_id: Option<String>,
    pub chambre_id: Option<String>,
}

/// Payload of get and delete requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IdElement {
    pub id: Option<String>,
}

/// Operation selected by the first child of `Body`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SoapOperation {
    CreateReservationRequest(ReservationElement),
    GetReservationRequest(IdElement),
    UpdateReservationRequest(ReservationElement),
    DeleteReservationRequest(IdElement),
}

impl SoapOperation {
    /// Request element name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateReservationRequest(_) => "createReservationRequest",
            Self::GetReservationRequest(_) => "getReservationRequest",
            Self::UpdateReservationRequest(_) => "updateReservationRequest",
            Self::DeleteReservationRequest(_) => "deleteReservationRequest",
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Body")]
    body: Body,
}

#[derive(Debug, Deserialize)]
struct Body {
    #[serde(rename = "$value")]
    operation: SoapOperation,
}

/// Decode a (repaired) SOAP 1.1 envelope.
pub fn parse_envelope(xml: &str) -> Result<SoapOperation, SoapRequestError> {
    let envelope: Envelope = quick_xml::de::from_str(xml)?;
    Ok(envelope.body.operation)
}

fn optional_identifier(field: FieldName, raw: Option<&str>) -> Result<Option<i64>, Error> {
    raw.filter(|value| !value.trim().is_empty())
        .map(|value| parse_identifier(field, value))
        .transpose()
}

/// Required `id` element.
pub(crate) fn required_id(raw: Option<&str>) -> Result<i64, Error> {
    optional_identifier(FieldName::ID, raw)?.ok_or_else(|| missing_field_error(FieldName::ID))
}

impl ReservationElement {
    pub(crate) fn into_fields(self) -> Result<ReservationFields, Error> {
        Ok(ReservationFields {
            client_id: optional_identifier(FieldName::CLIENT_ID, self.client_id.as_deref())?,
            chambre_id: optional_identifier(FieldName::CHAMBRE_ID, self.chambre_id.as_deref())?,
            date_debut: self.date_debut,
            date_fin: self.date_fin,
            preferences: self.preferences,
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    const CREATE: &str = r#"<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/" xmlns:res="http://hotel.com/reservation/soap">
  <soapenv:Header/>
  <soapenv:Body>
    <res:createReservationRequest>
      <res:dateDebut>2024-01-10</res:dateDebut>
      <res:dateFin>2024-01-15</res:dateFin>
      <res:preferences>sea view &amp; quiet</res:preferences>
    </res:createReservationRequest>
  </soapenv:Body>
</soapenv:Envelope>"#;

    #[rstest]
    fn create_request_is_decoded() {
        let operation = parse_envelope(CREATE).expect("valid envelope");
        let SoapOperation::CreateReservationRequest(element) = operation else {
            panic!("expected create, got {operation:?}");
        };
        assert_eq!(element.date_debut.as_deref(), Some("2024-01-10"));
        assert_eq!(element.date_fin.as_deref(), Some("2024-01-15"));
        assert_eq!(element.preferences.as_deref(), Some("sea view & quiet"));
        assert!(element.id.is_none());
    }

    #[rstest]
    fn delete_request_carries_id() {
        let xml = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
<soap:Body><deleteReservationRequest xmlns="http://hotel.com/reservation/soap"><id>4</id></deleteReservationRequest></soap:Body>
</soap:Envelope>"#;
        let operation = parse_envelope(xml).expect("valid envelope");
        assert_eq!(
            operation,
            SoapOperation::DeleteReservationRequest(IdElement {
                id: Some("4".to_owned())
            })
        );
        assert_eq!(operation.name(), "deleteReservationRequest");
    }

    #[rstest]
    #[case("<soap:Envelope><soap:Body><cancelEverything/></soap:Body></soap:Envelope>")]
    #[case("<soap:Envelope><soap:Body>")]
    #[case("not xml")]
    fn unknown_or_broken_requests_are_malformed(#[case] xml: &str) {
        assert!(parse_envelope(xml).is_err());
    }

    #[rstest]
    fn reference_ids_must_be_numeric() {
        let element = ReservationElement {
            client_id: Some("abc".to_owned()),
            ..ReservationElement::default()
        };
        let err = element.into_fields().expect_err("bad id");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn missing_id_is_invalid(#[case] raw: Option<&str>) {
        let err = required_id(raw).expect_err("missing id");
        assert_eq!(err.details().expect("details")["code"], "missing_field");
    }
}
