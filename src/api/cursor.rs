//! ### Cursor
//! Represents the position of a remote user's cursor.

use super::user::{Color, User, UserId};

/// A remote user's cursor, as rendered by the editor's [super::CursorModule].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorMarker {
	/// User owning this cursor; at most one marker exists per user.
	pub user: UserId,
	/// Character index in the document.
	pub index: usize,
	/// Label shown next to the cursor, usually the user display name.
	pub label: String,
	/// Marker color.
	pub color: Color,
}

impl CursorMarker {
	/// Build a marker for given user, styled with their display name and color.
	pub fn new(user: &User, index: usize) -> Self {
		Self {
			user: user.id.clone(),
			index,
			label: user.display_name.clone(),
			color: user.color(),
		}
	}
}

/// A local selection, as reported by the editor. Indexes are in characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
	pub start: usize,
	pub end: usize,
}

impl Selection {
	pub fn new(start: usize, end: usize) -> Self {
		Self { start, end }
	}

	/// A caret without any selected text.
	pub fn caret(index: usize) -> Self {
		Self { start: index, end: index }
	}
}

/// Payload broadcast on the cursors channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct CursorMessage {
	pub index: usize,
}

/// Delivery metadata attached by the room to every channel message.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageContext {
	/// Sender of the message.
	pub user_id: UserId,
}
