//! GraphQL schema roots.
//!
//! ```graphql
//! type Query {
//!   getReservation(id: ID!): Reservation!
//!   getAllReservations: [Reservation!]!
//! }
//! type Mutation {
//!   createReservation(input: ReservationInput!): Reservation!
//!   updateReservation(id: ID!, input: ReservationInput!): Reservation!
//!   deleteReservation(id: ID!): Boolean!
//! }
//! ```

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, ID, Object, Result as GqlResult, Schema};
use tracing::info;

use crate::domain::ports::ReservationOrchestrator;
use crate::domain::{EntityKind, Error, ReservationId};
use crate::inbound::validation::{FieldName, parse_identifier};

use super::error::to_graphql_error;
use super::types::{ReservationInput, ReservationObject};

/// Orchestrator handle stored in the schema data.
pub type SharedOrchestrator = Arc<dyn ReservationOrchestrator>;

pub type HotelSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema around an orchestrator.
pub fn build_schema(orchestrator: SharedOrchestrator) -> HotelSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(orchestrator)
        .finish()
}

fn orchestrator<'a>(ctx: &'a Context<'_>) -> GqlResult<&'a SharedOrchestrator> {
    ctx.data::<SharedOrchestrator>()
}

fn reservation_id(id: &ID) -> Result<ReservationId, Error> {
    parse_identifier(FieldName::ID, id.as_str()).map(ReservationId::new)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Fetch one reservation. An unknown id is reported as `NOT_FOUND`.
    async fn get_reservation(&self, ctx: &Context<'_>, id: ID) -> GqlResult<ReservationObject> {
        let orchestrator = orchestrator(ctx)?;
        let result = async {
            let id = reservation_id(&id)?;
            orchestrator
                .get_reservation(id)
                .await?
                .ok_or_else(|| Error::entity_not_found(EntityKind::Reservation, id.get()))
        }
        .await;
        result
            .map(|reservation| ReservationObject::from(&reservation))
            .map_err(|err| to_graphql_error(&err))
    }

    async fn get_all_reservations(&self, ctx: &Context<'_>) -> GqlResult<Vec<ReservationObject>> {
        let reservations = orchestrator(ctx)?
            .list_reservations()
            .await
            .map_err(|err| to_graphql_error(&err))?;
        Ok(reservations.iter().map(ReservationObject::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_reservation(
        &self,
        ctx: &Context<'_>,
        input: ReservationInput,
    ) -> GqlResult<ReservationObject> {
        let orchestrator = orchestrator(ctx)?;
        let result = async {
            let draft = input.into_fields()?.into_draft()?;
            orchestrator.create_reservation(draft).await
        }
        .await;
        let created = result.map_err(|err| to_graphql_error(&err))?;
        info!(id = %created.id(), "reservation created over GraphQL");
        Ok(ReservationObject::from(&created))
    }

    async fn update_reservation(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: ReservationInput,
    ) -> GqlResult<ReservationObject> {
        let orchestrator = orchestrator(ctx)?;
        let result = async {
            let id = reservation_id(&id)?;
            let draft = input.into_fields()?.into_draft()?;
            orchestrator.update_reservation(id, draft).await
        }
        .await;
        result
            .map(|updated| ReservationObject::from(&updated))
            .map_err(|err| to_graphql_error(&err))
    }

    /// Always `true` once the reservation is gone.
    async fn delete_reservation(&self, ctx: &Context<'_>, id: ID) -> GqlResult<bool> {
        let orchestrator = orchestrator(ctx)?;
        let result = async {
            let id = reservation_id(&id)?;
            orchestrator.delete_reservation(id).await
        }
        .await;
        result.map(|()| true).map_err(|err| to_graphql_error(&err))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::MockReservationOrchestrator;

    #[rstest]
    #[case("getReservation(id: ID!): Reservation!")]
    #[case("getAllReservations: [Reservation!]!")]
    #[case("createReservation(input: ReservationInput!): Reservation!")]
    #[case("deleteReservation(id: ID!): Boolean!")]
    fn exported_sdl_declares_root_fields(#[case] field: &str) {
        let sdl = build_schema(Arc::new(MockReservationOrchestrator::new())).sdl();
        assert!(sdl.contains(field), "missing `{field}` in:\n{sdl}");
    }
}
