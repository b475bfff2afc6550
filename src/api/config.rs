//! # Config
//! Data structure defining widget configuration

use std::{sync::Arc, time::Duration};

use crate::errors::{ConfigError, ConfigResult};

use super::{Format, Room};

/// how long an idle remote cursor stays visible, unless configured
pub const DEFAULT_CURSOR_TIMEOUT: Duration = Duration::from_millis(3000);

/// Configuration struct for a [crate::RichTextEditor]
#[derive(Clone, Default)]
pub struct Config {
	/// room to synchronize through, required
	pub room: Option<Arc<dyn Room>>,
	/// id of the host container to render into, required
	pub container_id: Option<String>,
	/// toolbar formats, in order, default [Format::DEFAULTS]
	pub formats: Option<Vec<Format>>,
	/// remote cursor idle timeout, default 3 seconds
	pub cursor_timeout: Option<Duration>,
}

impl Config {
	pub fn new(room: Arc<dyn Room>, container_id: impl Into<String>) -> Self {
		Self {
			room: Some(room),
			container_id: Some(container_id.into()),
			..Default::default()
		}
	}

	pub(crate) fn validate(&self) -> ConfigResult<()> {
		if self.room.is_none() {
			return Err(ConfigError::MissingRoom);
		}

		match self.container_id.as_deref() {
			None | Some("") => return Err(ConfigError::MissingContainerId),
			Some(_) => {},
		}

		Ok(())
	}

	#[inline]
	pub(crate) fn formats(&self) -> Vec<Format> {
		self.formats.clone().unwrap_or_else(|| Format::DEFAULTS.to_vec())
	}

	/// zero counts as unset
	#[inline]
	pub(crate) fn cursor_timeout(&self) -> Duration {
		self.cursor_timeout
			.filter(|t| !t.is_zero())
			.unwrap_or(DEFAULT_CURSOR_TIMEOUT)
	}
}

impl std::fmt::Debug for Config {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Config")
			.field("room", &self.room.as_ref().map(|_| "<room>"))
			.field("container_id", &self.container_id)
			.field("formats", &self.formats)
			.field("cursor_timeout", &self.cursor_timeout)
			.finish()
	}
}
