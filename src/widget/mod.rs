//! ### Widget
//! A [RichTextEditor] renders an editor in a host container and keeps it synchronized with a
//! room: text through an OT session, cursors through a dedicated channel.

/// lifecycle state machine
pub mod state;
pub use state::State;

use std::sync::{Arc, Mutex, PoisonError};

use dashmap::DashMap;
use tokio_stream::wrappers::WatchStream;
use uuid::Uuid;

use crate::{
	api::{
		Authorship, Channel, Config, Container, Editor, EditorOptions, Element, Host,
		PresenceCache, Room, Subscription,
	},
	cursor::{self, CURSOR_CHANNEL},
	errors::{ConfigError, ConfigResult, InitError, InitResult},
	ext::BestEffort,
	sync::TextSync,
};

use state::Lifecycle;

/// css class added to the host container
pub const CONTAINER_CLASS: &str = "gi-rich-text-editor";

/// Every event handler the widget may keep registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Hook {
	CursorMessage,
	PresenceLeave,
	PresenceChange,
	SelectionChange,
	TextChange,
	OtUpdate,
}

impl Hook {
	const ALL: [Hook; 6] = [
		Hook::CursorMessage,
		Hook::PresenceLeave,
		Hook::PresenceChange,
		Hook::SelectionChange,
		Hook::TextChange,
		Hook::OtUpdate,
	];
}

/// A collaborative rich text editor widget.
///
/// Build it with [RichTextEditor::new], start it with [RichTextEditor::initialize] and tear it
/// down with [RichTextEditor::destroy]. Handles are cheap to clone and all refer to the same
/// widget.
#[derive(Debug, Clone)]
pub struct RichTextEditor(Arc<RichTextEditorInner>);

struct RichTextEditorInner {
	id: Uuid,
	container_id: String,
	room: Arc<dyn Room>,
	container: Arc<dyn Container>,
	editor: Arc<dyn Editor>,
	presence: Arc<dyn PresenceCache>,
	cursors: Arc<cursor::Relay>,
	text: Mutex<Option<Arc<TextSync>>>,
	state: Lifecycle,
	subscriptions: DashMap<Hook, Subscription>,
}

impl RichTextEditor {
	/// Validate configuration, render toolbar and editor into the container and prepare
	/// collaborators. Local input stays disabled until [RichTextEditor::initialize].
	pub fn new(host: Arc<dyn Host>, config: Config) -> ConfigResult<Self> {
		config.validate()?;
		let room = config.room.clone().ok_or(ConfigError::MissingRoom)?;
		let container_id = config.container_id.clone().ok_or(ConfigError::MissingContainerId)?;

		let container = host
			.container(&container_id)
			.ok_or_else(|| ConfigError::ContainerNotFound(container_id.clone()))?;

		container.add_class(CONTAINER_CLASS);
		let toolbar = config.formats();
		container.append(Element::Toolbar(toolbar.clone()));
		container.append(Element::Surface);
		let editor = host.mount_editor(&container, EditorOptions {
			toolbar,
			cursor_timeout: config.cursor_timeout(),
			link_tooltip: true,
			theme: "snow".to_string(),
		});

		let channel: Arc<dyn Channel> = room.channel(CURSOR_CHANNEL);
		let presence = room.presence();
		let cursors = Arc::new(cursor::Relay::new(channel, presence.clone(), editor.cursors()));

		editor.disable();

		let id = Uuid::new_v4();
		tracing::debug!("created widget {} in container '{}'", id, container_id);

		Ok(RichTextEditor(Arc::new(RichTextEditorInner {
			id,
			container_id,
			room,
			container,
			editor,
			presence,
			cursors,
			text: Mutex::new(None),
			state: Lifecycle::new(),
			subscriptions: DashMap::default(),
		})))
	}

	/// Start synchronizing.
	///
	/// Resolves once the presence cache is ready and all handlers are registered. Local input is
	/// enabled as soon as the first document snapshot is applied, which may happen before or
	/// after this returns.
	///
	/// Presence cache failures are returned as they are: the widget stays
	/// [State::Initializing] and this may be called again. Only one initialization runs at a time,
	/// calling this while another is pending fails with [State::Initializing].
	pub async fn initialize(&self) -> InitResult<()> {
		let inner = &self.0;
		let _pending = inner.state.begin_initialize().map_err(InitError::InvalidState)?;
		tracing::debug!("initializing widget {}", inner.id);

		inner.presence.initialize().await?;

		let Some(user) = inner.presence.local_user() else {
			return Err(InitError::NoLocalUser);
		};
		if inner.state.get() != State::Initializing {
			return Err(InitError::InvalidState(inner.state.get()));
		}

		inner.editor.add_authorship(Authorship {
			color: user.color(),
			author: user.id,
		});

		let text = TextSync::open(inner.room.as_ref(), inner.editor.clone(), inner.state.channel());
		for (hook, sub) in text.attach() {
			inner.subscriptions.insert(hook, sub);
		}
		*inner.text.lock().unwrap_or_else(PoisonError::into_inner) = Some(text);

		for (hook, sub) in inner.cursors.attach(inner.editor.as_ref()) {
			inner.subscriptions.insert(hook, sub);
		}

		if !inner.state.activate() {
			// destroyed while we were wiring up, don't leave handlers around
			inner.detach_all();
			return Err(InitError::InvalidState(inner.state.get()));
		}

		tracing::debug!("widget {} is active", inner.id);
		Ok(())
	}

	/// Stop synchronizing and clear the container.
	///
	/// Always completes: every cleanup step is best effort and failures are only logged.
	pub async fn destroy(&self) {
		let inner = &self.0;
		if inner.state.destroy() == State::Destroyed {
			return tracing::debug!("widget {} already destroyed", inner.id);
		}

		inner.detach_all();
		inner.editor.disable();
		inner.container.clear();
		inner.presence.destroy().await.or_warn("presence cache teardown");

		tracing::debug!("destroyed widget {}", inner.id);
	}

	/// Callback flavor of [RichTextEditor::initialize], run on the current tokio runtime.
	pub fn initialize_with(&self, cb: impl FnOnce(InitResult<()>) + Send + 'static) -> tokio::task::JoinHandle<()> {
		let this = self.clone();
		tokio::spawn(async move { cb(this.initialize().await) })
	}

	/// Callback flavor of [RichTextEditor::destroy], run on the current tokio runtime.
	pub fn destroy_with(&self, cb: impl FnOnce() + Send + 'static) -> tokio::task::JoinHandle<()> {
		let this = self.clone();
		tokio::spawn(async move {
			this.destroy().await;
			cb()
		})
	}

	/// Current lifecycle state.
	pub fn state(&self) -> State {
		self.0.state.get()
	}

	/// Stream of lifecycle states, starting from the current one.
	pub fn state_changes(&self) -> WatchStream<State> {
		WatchStream::new(self.0.state.channel())
	}

	/// Id of the container this widget renders into.
	pub fn container_id(&self) -> &str {
		&self.0.container_id
	}
}

impl RichTextEditorInner {
	fn detach_all(&self) {
		for hook in Hook::ALL {
			// dropped outside the shard lock, detaching may call into collaborators
			drop(self.subscriptions.remove(&hook));
		}
		let text = self.text.lock().unwrap_or_else(PoisonError::into_inner).take();
		drop(text);
	}
}

impl Drop for RichTextEditorInner {
	fn drop(&mut self) {
		if self.state.get() == State::Active {
			tracing::warn!("widget {} dropped without being destroyed", self.id);
			self.editor.disable();
		}
	}
}

impl std::fmt::Debug for RichTextEditorInner {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RichTextEditor")
			.field("id", &self.id)
			.field("container_id", &self.container_id)
			.field("state", &self.state.get())
			.field("hooks", &self.subscriptions.len())
			.finish_non_exhaustive()
	}
}
