//! # cowrite
//! Collaborative cursors and operational-transform text sync for rich text editors.
//!
//! `cowrite` glues three external collaborators together:
//! * a rich text editor, described by [api::Editor] and its [api::CursorModule],
//! * a realtime room, described by [api::Room], providing channels and OT sessions,
//! * a presence cache, described by [api::PresenceCache], tracking who is online.
//!
//! The crate never looks inside an edit [api::Delta]: merge logic lives in the OT session, rendering
//! lives in the editor. What `cowrite` owns is the coordination between them: forwarding local
//! changes, applying remote ones, and keeping one cursor marker per remote user in the right place.
//!
//! ```no_run
//! # async fn run(host: std::sync::Arc<dyn cowrite::api::Host>, room: std::sync::Arc<dyn cowrite::api::Room>) -> Result<(), Box<dyn std::error::Error>> {
//! let widget = cowrite::RichTextEditor::new(host, cowrite::api::Config::new(room, "editor"))?;
//!
//! // enables local input once the first snapshot arrives
//! widget.initialize().await?;
//!
//! // ... later
//! widget.destroy().await;
//! # Ok(())
//! # }
//! ```

/// collaborator traits and data structures
pub mod api;

/// remote cursor projection and local cursor broadcast
pub mod cursor;

/// text synchronization between editor and OT session
pub mod sync;

/// the widget itself, sequencing everything else
pub mod widget;

/// crate error types
pub mod errors;

/// helpers and small extensions
pub mod ext;

/// all-in-one imports with `use cowrite::prelude::*`
pub mod prelude;

#[cfg(test)]
pub(crate) mod fake;

pub use widget::RichTextEditor;
pub use widget::State;
