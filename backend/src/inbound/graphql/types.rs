//! GraphQL object and input types.

use async_graphql::{ID, InputObject, SimpleObject};

use crate::domain::{Chambre, Client, Error, Reservation};
use crate::inbound::date_codec::format_date;
use crate::inbound::validation::{FieldName, ReservationFields, parse_identifier};

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Client")]
pub struct ClientObject {
    pub id: ID,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
}

impl From<&Client> for ClientObject {
    fn from(value: &Client) -> Self {
        Self {
            id: ID::from(value.id().get().to_string()),
            nom: value.last_name().to_owned(),
            prenom: value.first_name().to_owned(),
            email: value.email().to_owned(),
            telephone: value.phone().to_owned(),
        }
    }
}

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Chambre")]
pub struct ChambreObject {
    pub id: ID,
    #[graphql(name = "type")]
    pub room_type: String,
    pub prix: f64,
    pub disponible: bool,
}

impl From<&Chambre> for ChambreObject {
    fn from(value: &Chambre) -> Self {
        Self {
            id: ID::from(value.id().get().to_string()),
            room_type: value.room_type().to_owned(),
            prix: value.price().get(),
            disponible: value.is_available(),
        }
    }
}

/// Reservation with its client and room attached.
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Reservation")]
pub struct ReservationObject {
    pub id: ID,
    pub client: Option<ClientObject>,
    pub chambre: Option<ChambreObject>,
    /// `YYYY-MM-DD`.
    pub date_debut: String,
    /// `YYYY-MM-DD`.
    pub date_fin: String,
    pub preferences: String,
}

impl From<&Reservation> for ReservationObject {
    fn from(value: &Reservation) -> Self {
        Self {
            id: ID::from(value.id().get().to_string()),
            client: value.client().map(ClientObject::from),
            chambre: value.chambre().map(ChambreObject::from),
            date_debut: format_date(value.start_date()),
            date_fin: format_date(value.end_date()),
            preferences: value.preferences().as_str().to_owned(),
        }
    }
}

/// Create or full-replace input.
#[derive(Debug, Clone, InputObject)]
pub struct ReservationInput {
    /// `YYYY-MM-DD`.
    pub date_debut: String,
    /// `YYYY-MM-DD`.
    pub date_fin: String,
    pub preferences: Option<String>,
    pub client_id: Option<ID>,
    pub chambre_id: Option<ID>,
}

impl ReservationInput {
    pub(crate) fn into_fields(self) -> Result<ReservationFields, Error> {
        let client_id = self
            .client_id
            .map(|id| parse_identifier(FieldName::CLIENT_ID, id.as_str()))
            .transpose()?;
        let chambre_id = self
            .chambre_id
            .map(|id| parse_identifier(FieldName::CHAMBRE_ID, id.as_str()))
            .transpose()?;
        Ok(ReservationFields {
            client_id,
            chambre_id,
            date_debut: Some(self.date_debut),
            date_fin: Some(self.date_fin),
            preferences: self.preferences,
        })
    }
}
