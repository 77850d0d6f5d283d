use async_graphql::{Context, EmptySubscription, ID, Object, Schema};

use crate::model::{self, Entity};
use crate::store::{Store, StoreHandle, Table};

use super::types::*;

pub type RendezvousSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(store: StoreHandle) -> RendezvousSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

// Each resolver below takes the store lock exactly once, so a mutation is
// never observed half-applied.

fn list_all<M, G>(ctx: &Context<'_>) -> async_graphql::Result<Vec<G>>
where
    M: Entity,
    Store: Table<M>,
    G: From<M>,
{
    let records = store(ctx)?.read().list::<M>();
    Ok(records.into_iter().map(G::from).collect())
}

fn get_one<M, G>(ctx: &Context<'_>, id: &ID) -> async_graphql::Result<Option<G>>
where
    M: Entity,
    Store: Table<M>,
    G: From<M>,
{
    let record = store(ctx)?.read().get::<M>(id.as_str());
    Ok(record.map(G::from))
}

fn add_one<M, G>(ctx: &Context<'_>, data: M::New) -> async_graphql::Result<G>
where
    M: Entity,
    Store: Table<M>,
    G: From<M>,
{
    let record = store(ctx)?.write().add::<M>(data)?;
    Ok(record.into())
}

fn update_one<M, G>(ctx: &Context<'_>, id: &ID, patch: M::Patch) -> async_graphql::Result<G>
where
    M: Entity,
    Store: Table<M>,
    G: From<M>,
{
    let record = store(ctx)?.write().update::<M>(id.as_str(), patch)?;
    Ok(record.into())
}

fn delete_one<M, G>(ctx: &Context<'_>, id: &ID) -> async_graphql::Result<G>
where
    M: Entity,
    Store: Table<M>,
    G: From<M>,
{
    let record = store(ctx)?.write().delete::<M>(id.as_str())?;
    Ok(record.into())
}

fn delete_all<M>(ctx: &Context<'_>) -> async_graphql::Result<DeleteAllOutput>
where
    M: Entity,
    Store: Table<M>,
{
    let count = store(ctx)?.write().delete_all::<M>();
    Ok(DeleteAllOutput { count })
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All events in creation order
    async fn events(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Event>> {
        list_all::<model::Event, _>(ctx)
    }

    /// A single event by ID, or null
    async fn event(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<Event>> {
        get_one::<model::Event, _>(ctx, &id)
    }

    /// All locations in creation order
    async fn locations(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Location>> {
        list_all::<model::Location, _>(ctx)
    }

    /// A single location by ID, or null
    async fn location(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Location>> {
        get_one::<model::Location, _>(ctx, &id)
    }

    /// All users in creation order
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        list_all::<model::User, _>(ctx)
    }

    /// A single user by ID, or null
    async fn user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Option<User>> {
        get_one::<model::User, _>(ctx, &id)
    }

    /// All participants in creation order
    async fn participants(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Participant>> {
        list_all::<model::Participant, _>(ctx)
    }

    /// A single participant by ID, or null
    async fn participant(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Option<Participant>> {
        get_one::<model::Participant, _>(ctx, &id)
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a user
    async fn add_user(&self, ctx: &Context<'_>, data: AddUserInput) -> async_graphql::Result<User> {
        add_one::<model::User, _>(ctx, data.into())
    }

    /// Change some fields of a user
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateUserInput,
    ) -> async_graphql::Result<User> {
        update_one::<model::User, _>(ctx, &id, data.into())
    }

    /// Delete a user, returning it. Events and participants that point at
    /// it are left as they are.
    async fn delete_user(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<User> {
        delete_one::<model::User, _>(ctx, &id)
    }

    async fn delete_all_users(&self, ctx: &Context<'_>) -> async_graphql::Result<DeleteAllOutput> {
        delete_all::<model::User>(ctx)
    }

    /// Create an event. The user and location IDs are not checked.
    async fn add_event(
        &self,
        ctx: &Context<'_>,
        data: AddEventInput,
    ) -> async_graphql::Result<Event> {
        add_one::<model::Event, _>(ctx, data.into())
    }

    async fn update_event(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateEventInput,
    ) -> async_graphql::Result<Event> {
        update_one::<model::Event, _>(ctx, &id, data.into())
    }

    async fn delete_event(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Event> {
        delete_one::<model::Event, _>(ctx, &id)
    }

    async fn delete_all_events(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<DeleteAllOutput> {
        delete_all::<model::Event>(ctx)
    }

    /// Create a location
    async fn add_location(
        &self,
        ctx: &Context<'_>,
        data: AddLocationInput,
    ) -> async_graphql::Result<Location> {
        add_one::<model::Location, _>(ctx, data.into())
    }

    async fn update_location(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateLocationInput,
    ) -> async_graphql::Result<Location> {
        update_one::<model::Location, _>(ctx, &id, data.into())
    }

    async fn delete_location(&self, ctx: &Context<'_>, id: ID) -> async_graphql::Result<Location> {
        delete_one::<model::Location, _>(ctx, &id)
    }

    async fn delete_all_locations(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<DeleteAllOutput> {
        delete_all::<model::Location>(ctx)
    }

    /// Register a user as attending an event
    async fn add_participant(
        &self,
        ctx: &Context<'_>,
        data: AddParticipantInput,
    ) -> async_graphql::Result<Participant> {
        add_one::<model::Participant, _>(ctx, data.into())
    }

    async fn update_participant(
        &self,
        ctx: &Context<'_>,
        id: ID,
        data: UpdateParticipantInput,
    ) -> async_graphql::Result<Participant> {
        update_one::<model::Participant, _>(ctx, &id, data.into())
    }

    async fn delete_participant(
        &self,
        ctx: &Context<'_>,
        id: ID,
    ) -> async_graphql::Result<Participant> {
        delete_one::<model::Participant, _>(ctx, &id)
    }

    async fn delete_all_participants(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<DeleteAllOutput> {
        delete_all::<model::Participant>(ctx)
    }
}
