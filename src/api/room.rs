//! # Room
//!
//! The realtime room the widget synchronizes through. Rooms are provided by an external service:
//! message delivery, operational transform and conflict resolution all happen on its side.

use std::sync::Arc;

use crate::errors::OtError;

use super::{Callback, CursorMessage, Delta, MessageContext, PresenceCache, Subscription};

/// First document state delivered by an [OtSession], or why it couldn't be fetched.
pub type Snapshot = Result<Delta, OtError>;

/// A shared room, joined by all users editing the same document.
pub trait Room: Send + Sync {
	/// Open a named broadcast channel.
	fn channel(&self, name: &str) -> Arc<dyn Channel>;

	/// Open a named OT session.
	///
	/// `on_snapshot` is invoked once, possibly before this call returns, with the current
	/// document state.
	fn ot(&self, key: &str, on_snapshot: Callback<Snapshot>) -> Arc<dyn OtSession>;

	/// Presence cache tracking users in this room.
	fn presence(&self) -> Arc<dyn PresenceCache>;
}

/// Broadcast channel carrying cursor positions between room members.
pub trait Channel: Send + Sync {
	/// Register a handler for messages sent by other members.
	fn on_message(&self, handler: Callback<(CursorMessage, MessageContext)>) -> Subscription;

	/// Broadcast a message to all other members.
	fn message(&self, payload: CursorMessage);
}

/// Operational transform session for one document.
pub trait OtSession: Send + Sync {
	/// Register a handler for transformed remote deltas.
	fn on_update(&self, handler: Callback<Delta>) -> Subscription;

	/// Submit a local delta.
	fn update(&self, delta: Delta);
}
