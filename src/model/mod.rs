//! Data models for rendezvous.
//!
//! Four flat record types, each with a creation payload and a partial-update
//! patch:
//!
//! - [`Event`]: something happening at a [`Location`], organised by a [`User`]
//! - [`Location`]: a named place with coordinates
//! - [`User`]: an account with a username and email
//! - [`Participant`]: a user's attendance of an event
//!
//! Foreign keys are plain id strings. Nothing checks that they point at an
//! existing record.

mod event;
mod location;
mod participant;
mod user;

pub use event::{Event, EventPatch, NewEvent};
pub use location::{Location, LocationPatch, NewLocation};
pub use participant::{NewParticipant, Participant, ParticipantPatch};
pub use user::{NewUser, User, UserPatch};

/// A record the store can hold.
pub trait Entity: Clone {
    /// Name used in errors and log fields.
    const KIND: &'static str;

    /// Payload for `add`, everything except the id.
    type New;

    /// Payload for `update`, every field optional.
    type Patch;

    fn create(id: String, data: Self::New) -> Self;

    fn id(&self) -> &str;

    /// Overwrite the fields present in `patch`, keep the rest.
    fn apply(&mut self, patch: Self::Patch);
}
