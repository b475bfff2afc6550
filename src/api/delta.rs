//! # Delta
//!
//! an edit operation produced by the editor and consumed by the OT session (and vice versa)
//!
//! deltas are relayed verbatim: `cowrite` never parses, merges or transforms them

/// opaque edit operation
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(transparent))]
pub struct Delta(String);

impl Delta {
	pub fn new(payload: impl Into<String>) -> Self {
		Self(payload.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_inner(self) -> String {
		self.0
	}
}

/// who caused an editor text change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "lowercase"))]
pub enum Source {
	/// typed by the local user, must be shared
	User,
	/// applied programmatically, e.g. a remote delta
	Api,
	/// applied programmatically without emitting side effects
	Silent,
}
