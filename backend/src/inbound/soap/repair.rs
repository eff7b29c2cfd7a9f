//! Request body repair.
//!
//! Some SOAP clients send multipart preambles or other bytes before the
//! envelope. The body is cut at the first envelope marker so the XML parser
//! sees a well-formed document.

use tracing::{info, warn};

const ENVELOPE_MARKERS: [&str; 6] = [
    "<soapenv:Envelope",
    "<soap:Envelope",
    "<SOAP-ENV:Envelope",
    "<SOAP:Envelope",
    "<Envelope",
    "<",
];

/// Strip anything preceding the SOAP envelope.
///
/// Bodies that already start with markup (after whitespace) are returned
/// untouched, as are bodies with no markup at all.
///
/// # Examples
/// ```
/// use hotel_backend::inbound::soap::repair_body;
///
/// let raw = "--boundary\r\n\r\n<soap:Envelope/>";
/// assert_eq!(repair_body(raw), "<soap:Envelope/>");
/// ```
pub fn repair_body(raw: &str) -> &str {
    if raw.trim_start().starts_with('<') {
        return raw;
    }
    let found = ENVELOPE_MARKERS
        .iter()
        .find_map(|marker| raw.find(marker).map(|offset| (*marker, offset)));
    match found.and_then(|(marker, offset)| raw.get(offset..).map(|rest| (marker, offset, rest))) {
        Some((marker, offset, rest)) => {
            info!(marker, stripped_bytes = offset, "removed leading bytes before SOAP envelope");
            rest
        }
        None => {
            warn!("no XML found in SOAP request body");
            raw
        }
    }
}
