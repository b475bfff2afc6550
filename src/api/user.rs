//! # User
//!
//! data structures for users present in a room

/// color used for cursors and authorship when a user has none
pub const DEFAULT_USER_COLOR: &str = "#aaaaaa";

/// opaque user identifier, as assigned by the presence collaborator
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(transparent))]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for UserId {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl From<String> for UserId {
	fn from(value: String) -> Self {
		Self(value)
	}
}

/// a css color, such as `#ff0000`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(transparent))]
pub struct Color(pub String);

impl Default for Color {
	fn default() -> Self {
		Self(DEFAULT_USER_COLOR.to_string())
	}
}

impl std::fmt::Display for Color {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Color {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

/// represents a user present in a room
///
/// owned by the presence collaborator: the widget only ever holds copies
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
	pub id: UserId,
	pub display_name: String,
	pub avatar_color: Option<Color>,
}

impl User {
	pub fn new(id: impl Into<UserId>, display_name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			display_name: display_name.into(),
			avatar_color: None,
		}
	}

	pub fn with_color(mut self, color: impl Into<Color>) -> Self {
		self.avatar_color = Some(color.into());
		self
	}

	/// the avatar color, falling back to [DEFAULT_USER_COLOR]
	pub fn color(&self) -> Color {
		self.avatar_color.clone().unwrap_or_default()
	}
}

impl PartialEq for User {
	fn eq(&self, other: &Self) -> bool {
		self.id.eq(&other.id)
	}
}

impl Eq for User {}
