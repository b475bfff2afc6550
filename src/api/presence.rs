//! # Presence
//!
//! interface of the external cache tracking which users are in a room

use crate::errors::PresenceResult;

use super::{Callback, Subscription, User, UserId};

/// Cache of users currently present in a room, with their metadata.
#[async_trait::async_trait]
pub trait PresenceCache: Send + Sync {
	/// Fetch the initial user list and start tracking changes.
	async fn initialize(&self) -> PresenceResult<()>;

	/// The user running this widget, once initialized.
	fn local_user(&self) -> Option<User>;

	/// Lookup a present user.
	fn user(&self, id: &UserId) -> Option<User>;

	/// Register a handler for users leaving the room.
	fn on_leave(&self, handler: Callback<User>) -> Subscription;

	/// Register a handler for users changing their metadata (name, color...).
	fn on_change(&self, handler: Callback<User>) -> Subscription;

	/// Stop tracking and release resources.
	async fn destroy(&self) -> PresenceResult<()>;
}
