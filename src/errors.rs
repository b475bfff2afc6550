//! ### Errors
//! Contains the crate's error types.

use crate::widget::State;

/// A boxed error coming from an external collaborator.
pub type ForeignError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Raised synchronously while building a [crate::RichTextEditor], before any side effect.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid room included in options: a room is required")]
	MissingRoom,

	#[error("invalid container included in options: a non-empty container id is required")]
	MissingContainerId,

	#[error("given widget container '{0}' does not exist")]
	ContainerNotFound(String),
}

pub type PresenceResult<T> = std::result::Result<T, PresenceError>;

/// Failure reported by a [crate::api::PresenceCache], carried verbatim.
#[derive(Debug, thiserror::Error)]
#[error("presence cache failed: {0}")]
pub struct PresenceError(#[source] pub ForeignError);

impl PresenceError {
	pub fn new(err: impl Into<ForeignError>) -> Self {
		Self(err.into())
	}
}

/// Failure delivered by an [crate::api::OtSession] instead of its first snapshot.
#[derive(Debug, thiserror::Error)]
#[error("could not fetch document snapshot: {0}")]
pub struct OtError(#[source] pub ForeignError);

impl OtError {
	pub fn new(err: impl Into<ForeignError>) -> Self {
		Self(err.into())
	}
}

pub type InitResult<T> = std::result::Result<T, InitError>;

#[derive(Debug, thiserror::Error)]
pub enum InitError {
	#[error(transparent)]
	Presence(#[from] PresenceError),

	#[error("presence cache has no local user")]
	NoLocalUser,

	#[error("cannot initialize widget while {0}")]
	InvalidState(State),
}
