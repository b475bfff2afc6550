//! # Host
//!
//! the document embedding the widget: where containers are found and editors get mounted

use std::{sync::Arc, time::Duration};

use super::{Editor, Format};

/// Something rendered inside a [Container].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Element {
	/// Toolbar with given formatting controls, in order.
	Toolbar(Vec<Format>),
	/// Empty surface the editor gets mounted on.
	Surface,
}

/// A host element the widget renders into.
pub trait Container: Send + Sync {
	fn add_class(&self, class: &str);

	fn append(&self, element: Element);

	fn child_count(&self) -> usize;

	/// Remove all children.
	fn clear(&self);
}

/// Options used to mount an [Editor].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorOptions {
	/// Formats of the toolbar rendered right before the editor surface.
	pub toolbar: Vec<Format>,
	/// How long an idle remote cursor stays visible.
	pub cursor_timeout: Duration,
	pub link_tooltip: bool,
	pub theme: String,
}

pub trait Host: Send + Sync {
	/// Find a container by id.
	fn container(&self, id: &str) -> Option<Arc<dyn Container>>;

	/// Mount a new editor on the last [Element::Surface] appended to `container`.
	fn mount_editor(&self, container: &Arc<dyn Container>, options: EditorOptions) -> Arc<dyn Editor>;
}
