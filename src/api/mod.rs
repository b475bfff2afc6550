//! # API
//! These traits and structs describe the collaborators `cowrite` coordinates, and the data
//! exchanged between them.

/// subscription handles and boxed callbacks
pub mod subscription;

/// widget configuration
pub mod config;

/// data structure for remote users
pub mod user;

/// cursor markers, local selections and cursor channel payloads
pub mod cursor;

/// opaque edit operations
pub mod delta;

/// toolbar formats
pub mod format;

/// realtime room: channels and OT sessions
pub mod room;

/// external user-presence collaborator
pub mod presence;

/// external rich text editor
pub mod editor;

/// host document: containers and editor mounting
pub mod host;

pub use subscription::{Callback, Subscription};
pub use config::Config;
pub use user::{Color, User, UserId};
pub use cursor::{CursorMarker, CursorMessage, MessageContext, Selection};
pub use delta::{Delta, Source};
pub use format::Format;
pub use room::{Channel, OtSession, Room, Snapshot};
pub use presence::PresenceCache;
pub use editor::{Authorship, CursorModule, Editor};
pub use host::{Container, EditorOptions, Element, Host};
