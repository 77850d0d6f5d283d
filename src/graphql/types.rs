use crate::model;
use crate::store::StoreHandle;
use async_graphql::{ComplexObject, Context, ID, InputObject, SimpleObject};

pub(super) fn store<'a>(ctx: &'a Context<'_>) -> async_graphql::Result<&'a StoreHandle> {
    ctx.data::<StoreHandle>()
}

#[derive(SimpleObject, Clone)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Event {
    pub id: ID,
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub location_id: ID,
    pub user_id: ID,
}

#[ComplexObject]
impl Event {
    /// The organising user, if it still exists
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let found = store(ctx)?.read().get::<model::User>(self.user_id.as_str());
        Ok(found.map(Into::into))
    }

    /// Where the event takes place, if the location still exists
    async fn location(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Location>> {
        let found = store(ctx)?
            .read()
            .get::<model::Location>(self.location_id.as_str());
        Ok(found.map(Into::into))
    }

    async fn participants(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Participant>> {
        let found = store(ctx)?.read().event_participants(self.id.as_str());
        Ok(found.into_iter().map(Into::into).collect())
    }
}

impl From<model::Event> for Event {
    fn from(e: model::Event) -> Self {
        Self {
            id: e.id.into(),
            title: e.title,
            desc: e.desc,
            date: e.date,
            from: e.from,
            to: e.to,
            location_id: e.location_id.into(),
            user_id: e.user_id.into(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Location {
    pub id: ID,
    pub name: String,
    pub desc: String,
    pub lat: String,
    pub lng: String,
}

impl From<model::Location> for Location {
    fn from(l: model::Location) -> Self {
        Self {
            id: l.id.into(),
            name: l.name,
            desc: l.desc,
            lat: l.lat,
            lng: l.lng,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: ID,
    pub username: String,
    pub email: String,
}

#[ComplexObject]
impl User {
    /// Events this user organises
    async fn events(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Event>> {
        let found = store(ctx)?.read().user_events(self.id.as_str());
        Ok(found.into_iter().map(Into::into).collect())
    }
}

impl From<model::User> for User {
    fn from(u: model::User) -> Self {
        Self {
            id: u.id.into(),
            username: u.username,
            email: u.email,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex, rename_fields = "snake_case")]
pub struct Participant {
    pub id: ID,
    pub user_id: ID,
    pub event_id: ID,
}

#[ComplexObject]
impl Participant {
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<User>> {
        let found = store(ctx)?.read().get::<model::User>(self.user_id.as_str());
        Ok(found.map(Into::into))
    }

    /// Username of the participating user, null once that user is gone
    async fn username(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<String>> {
        Ok(self.user(ctx).await?.map(|u| u.username))
    }
}

impl From<model::Participant> for Participant {
    fn from(p: model::Participant) -> Self {
        Self {
            id: p.id.into(),
            user_id: p.user_id.into(),
            event_id: p.event_id.into(),
        }
    }
}

#[derive(SimpleObject)]
pub struct DeleteAllOutput {
    pub count: usize,
}

#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct AddEventInput {
    pub title: String,
    pub desc: String,
    pub date: String,
    pub from: String,
    pub to: String,
    pub user_id: ID,
    pub location_id: ID,
}

impl From<AddEventInput> for model::NewEvent {
    fn from(input: AddEventInput) -> Self {
        Self {
            title: input.title,
            desc: input.desc,
            date: input.date,
            from: input.from,
            to: input.to,
            location_id: input.location_id.0,
            user_id: input.user_id.0,
        }
    }
}

#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct UpdateEventInput {
    pub title: Option<String>,
    pub desc: Option<String>,
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub location_id: Option<ID>,
    pub user_id: Option<ID>,
}

impl From<UpdateEventInput> for model::EventPatch {
    fn from(input: UpdateEventInput) -> Self {
        Self {
            title: input.title,
            desc: input.desc,
            date: input.date,
            from: input.from,
            to: input.to,
            location_id: input.location_id.map(|id| id.0),
            user_id: input.user_id.map(|id| id.0),
        }
    }
}

#[derive(InputObject)]
pub struct AddLocationInput {
    pub name: String,
    pub desc: String,
    pub lat: String,
    pub lng: String,
}

impl From<AddLocationInput> for model::NewLocation {
    fn from(input: AddLocationInput) -> Self {
        Self {
            name: input.name,
            desc: input.desc,
            lat: input.lat,
            lng: input.lng,
        }
    }
}

#[derive(InputObject)]
pub struct UpdateLocationInput {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
}

impl From<UpdateLocationInput> for model::LocationPatch {
    fn from(input: UpdateLocationInput) -> Self {
        Self {
            name: input.name,
            desc: input.desc,
            lat: input.lat,
            lng: input.lng,
        }
    }
}

#[derive(InputObject)]
pub struct AddUserInput {
    pub username: String,
    pub email: String,
}

impl From<AddUserInput> for model::NewUser {
    fn from(input: AddUserInput) -> Self {
        Self {
            username: input.username,
            email: input.email,
        }
    }
}

#[derive(InputObject)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl From<UpdateUserInput> for model::UserPatch {
    fn from(input: UpdateUserInput) -> Self {
        Self {
            username: input.username,
            email: input.email,
        }
    }
}

#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct AddParticipantInput {
    pub user_id: ID,
    pub event_id: ID,
}

impl From<AddParticipantInput> for model::NewParticipant {
    fn from(input: AddParticipantInput) -> Self {
        Self {
            user_id: input.user_id.0,
            event_id: input.event_id.0,
        }
    }
}

#[derive(InputObject)]
#[graphql(rename_fields = "snake_case")]
pub struct UpdateParticipantInput {
    pub user_id: Option<ID>,
    pub event_id: Option<ID>,
}

impl From<UpdateParticipantInput> for model::ParticipantPatch {
    fn from(input: UpdateParticipantInput) -> Self {
        Self {
            user_id: input.user_id.map(|id| id.0),
            event_id: input.event_id.map(|id| id.0),
        }
    }
}
