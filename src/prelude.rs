//! ### Prelude
//!
//! all-in-one renamed imports with `use cowrite::prelude::*`

pub use crate::errors::{
	ConfigError as CowriteConfigError,
	InitError as CowriteInitError,
	PresenceError as CowritePresenceError,
};

pub use crate::api::{
	Config as CowriteConfig,
	Delta as CowriteDelta,
	User as CowriteUser,
	Room as CowriteRoom,
	Channel as CowriteChannel,
	OtSession as CowriteOtSession,
	PresenceCache as CowritePresenceCache,
	Editor as CowriteEditor,
	CursorModule as CowriteCursorModule,
	Host as CowriteHost,
	Container as CowriteContainer,
	Subscription as CowriteSubscription,
};

pub use crate::{
	widget::RichTextEditor as CowriteRichTextEditor,
	widget::State as CowriteState,
	cursor::Relay as CowriteCursorRelay,
	sync::TextSync as CowriteTextSync,
};
