//! # Editor
//!
//! interface of the external rich text editor and of its cursor module

use std::sync::Arc;

use super::{Callback, Color, CursorMarker, Delta, Selection, Source, Subscription, UserId};

/// Options for the editor's authorship module, which highlights text by author.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Authorship {
	pub author: UserId,
	pub color: Color,
}

/// A rich text editor mounted by the [super::Host].
pub trait Editor: Send + Sync {
	/// Replace the whole document.
	fn set_contents(&self, delta: Delta);

	/// Apply a delta on top of the current document.
	fn update_contents(&self, delta: Delta);

	/// Register a handler for document changes, tagged with who caused them.
	fn on_text_change(&self, handler: Callback<(Delta, Source)>) -> Subscription;

	/// Register a handler for local selection changes. `None` means focus was lost.
	fn on_selection_change(&self, handler: Callback<Option<Selection>>) -> Subscription;

	/// Enable the authorship module.
	fn add_authorship(&self, authorship: Authorship);

	/// The multi cursor module.
	fn cursors(&self) -> Arc<dyn CursorModule>;

	/// Accept local input.
	fn enable(&self);

	/// Refuse local input.
	fn disable(&self);
}

/// Editor module rendering remote users' cursors.
pub trait CursorModule: Send + Sync {
	/// Currently rendered marker for given user.
	fn cursor(&self, user: &UserId) -> Option<CursorMarker>;

	/// Render a marker.
	fn set_cursor(&self, marker: CursorMarker);

	/// Remove the marker of given user.
	fn remove_cursor(&self, user: &UserId);
}
