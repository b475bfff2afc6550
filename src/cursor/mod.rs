//! ### Cursor
//! Every user in a room holds one cursor. Local cursor movements are broadcast on a dedicated
//! channel, remote ones are projected onto the editor's cursor module.

/// cursor relay implementation
pub mod relay;
pub use relay::CursorRelay as Relay;

/// name of the room channel carrying cursor positions
pub const CURSOR_CHANNEL: &str = "cursors";
