//! SOAP response and fault rendering.

use quick_xml::errors::serialize::SeError;
use serde::Serialize;

use crate::domain::{Error, ErrorCode, Reservation};
use crate::inbound::date_codec::format_date;

/// Target namespace of reservation payloads.
pub const SERVICE_NAMESPACE: &str = "http://hotel.com/reservation/soap";
/// SOAP 1.1 envelope namespace.
pub const ENVELOPE_NAMESPACE: &str = "http://schemas.xmlsoap.org/soap/envelope/";

const REDACTED_MESSAGE: &str = "Internal server error";

/// Reservation fields echoed by create, get and update responses.
///
/// All fields are optional: a get for a missing id answers with an empty
/// element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_debut: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_fin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chambre_id: Option<i64>,
}

impl ReservationPayload {
    /// Payload with no reservation fields.
    pub fn empty() -> Self {
        Self {
            xmlns: SERVICE_NAMESPACE,
            ..Self::default()
        }
    }
}

impl From<&Reservation> for ReservationPayload {
    fn from(value: &Reservation) -> Self {
        Self {
            xmlns: SERVICE_NAMESPACE,
            id: Some(value.id().get()),
            date_debut: Some(format_date(value.start_date())),
            date_fin: Some(format_date(value.end_date())),
            preferences: Some(value.preferences().as_str().to_owned()),
            client_id: value.client().map(|client| client.id().get()),
            chambre_id: value.chambre().map(|chambre| chambre.id().get()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePayload {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    pub success: bool,
}

impl DeletePayload {
    pub fn succeeded() -> Self {
        Self {
            xmlns: SERVICE_NAMESPACE,
            success: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaultDetail {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    pub error: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fault {
    pub faultcode: &'static str,
    pub faultstring: String,
    pub detail: FaultDetail,
}

impl Fault {
    /// `soap:Client` for caller mistakes, `soap:Server` otherwise.
    pub fn fault_code(code: ErrorCode) -> &'static str {
        match code {
            ErrorCode::InvalidRequest | ErrorCode::NotFound | ErrorCode::ReferentialIntegrity => {
                "soap:Client"
            }
            ErrorCode::ServiceUnavailable | ErrorCode::InternalError => "soap:Server",
        }
    }
}

impl From<&Error> for Fault {
    fn from(value: &Error) -> Self {
        let message = if value.code() == ErrorCode::InternalError {
            REDACTED_MESSAGE.to_owned()
        } else {
            value.message().to_owned()
        };
        Self {
            faultcode: Self::fault_code(value.code()),
            faultstring: message.clone(),
            detail: FaultDetail {
                xmlns: SERVICE_NAMESPACE,
                error: value.code().as_str().to_owned(),
                message,
            },
        }
    }
}

/// Body content of a response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SoapResponse {
    #[serde(rename = "createReservationResponse")]
    Create(ReservationPayload),
    #[serde(rename = "getReservationResponse")]
    Get(ReservationPayload),
    #[serde(rename = "updateReservationResponse")]
    Update(ReservationPayload),
    #[serde(rename = "deleteReservationResponse")]
    Delete(DeletePayload),
    #[serde(rename = "soap:Fault")]
    Fault(Fault),
}

impl SoapResponse {
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Fault(_))
    }
}

#[derive(Serialize)]
#[serde(rename = "soap:Envelope")]
struct Envelope<'a> {
    #[serde(rename = "@xmlns:soap")]
    xmlns_soap: &'static str,
    #[serde(rename = "soap:Body")]
    body: Body<'a>,
}

#[derive(Serialize)]
struct Body<'a> {
    #[serde(rename = "$value")]
    content: &'a SoapResponse,
}

/// Serialise a response inside a SOAP 1.1 envelope.
pub fn render_envelope(response: &SoapResponse) -> Result<String, SeError> {
    quick_xml::se::to_string(&Envelope {
        xmlns_soap: ENVELOPE_NAMESPACE,
        body: Body { content: response },
    })
}
