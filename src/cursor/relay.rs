//! ### Cursor Relay
//! Keeps remote cursors in place and tells everyone else where ours is.

use std::sync::{Arc, Weak};

use crate::{
	api::{
		Callback, Channel, CursorMarker, CursorMessage, CursorModule, Editor, MessageContext,
		PresenceCache, Selection, Subscription, User,
	},
	widget::Hook,
};

/// Projects remote cursors onto the editor and broadcasts the local one.
///
/// Each remote user owns at most one marker in the [CursorModule]: any reposition removes the
/// previous marker before setting the new one. Messages are applied in delivery order, last one
/// wins.
pub struct CursorRelay {
	channel: Arc<dyn Channel>,
	presence: Arc<dyn PresenceCache>,
	cursors: Arc<dyn CursorModule>,
}

impl CursorRelay {
	pub fn new(channel: Arc<dyn Channel>, presence: Arc<dyn PresenceCache>, cursors: Arc<dyn CursorModule>) -> Self {
		Self { channel, presence, cursors }
	}

	/// Local selection moved: share where it ends.
	pub fn broadcast(&self, selection: Option<Selection>) {
		if let Some(range) = selection {
			self.channel.message(CursorMessage { index: range.end });
		}
	}

	/// A remote cursor message arrived.
	pub fn receive(&self, message: CursorMessage, context: MessageContext) {
		if self.presence.local_user().is_some_and(|me| me.id == context.user_id) {
			return tracing::debug!("ignoring own cursor echo");
		}
		match self.presence.user(&context.user_id) {
			Some(user) => self.move_cursor(&user, message.index),
			None => tracing::warn!("cursor message from unknown user {}", context.user_id),
		}
	}

	/// Place given user's marker at `index`, replacing any previous one.
	pub fn move_cursor(&self, user: &User, index: usize) {
		if self.cursors.cursor(&user.id).is_some() {
			self.cursors.remove_cursor(&user.id);
		}
		self.cursors.set_cursor(CursorMarker::new(user, index));
	}

	/// Drop given user's marker, if any.
	pub fn remove_cursor(&self, user: &User) {
		if self.cursors.cursor(&user.id).is_some() {
			self.cursors.remove_cursor(&user.id);
		}
	}

	/// Re-apply given user's marker where it is, picking up their new name and color.
	pub fn restyle_cursor(&self, user: &User) {
		if let Some(marker) = self.cursors.cursor(&user.id) {
			self.cursors.remove_cursor(&user.id);
			self.cursors.set_cursor(CursorMarker::new(user, marker.index));
		}
	}

	/// Register all cursor handlers. Handlers hold weak references: they stop working once this
	/// relay is dropped, and stop being called once the returned subscriptions are.
	pub(crate) fn attach(self: &Arc<Self>, editor: &dyn Editor) -> Vec<(Hook, Subscription)> {
		vec![
			(Hook::CursorMessage, self.channel.on_message(self.handler(
				|relay, (message, context): (CursorMessage, MessageContext)| relay.receive(message, context)
			))),
			(Hook::PresenceLeave, self.presence.on_leave(self.handler(
				|relay, user: User| relay.remove_cursor(&user)
			))),
			(Hook::PresenceChange, self.presence.on_change(self.handler(
				|relay, user: User| relay.restyle_cursor(&user)
			))),
			(Hook::SelectionChange, editor.on_selection_change(self.handler(
				|relay, selection: Option<Selection>| relay.broadcast(selection)
			))),
		]
	}

	fn handler<T: 'static>(self: &Arc<Self>, f: impl Fn(&CursorRelay, T) + Send + Sync + 'static) -> Callback<T> {
		let weak: Weak<CursorRelay> = Arc::downgrade(self);
		Callback::from(move |x: T| match weak.upgrade() {
			Some(relay) => f(&*relay, x),
			None => tracing::debug!("cursor relay dropped, ignoring event"),
		})
	}
}

impl std::fmt::Debug for CursorRelay {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CursorRelay").finish_non_exhaustive()
	}
}
