//! ### Lifecycle
//! `Created → Initializing → Active → Destroyed`

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;

/// Lifecycle state of a [crate::RichTextEditor].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum State {
	/// Built and validated, not yet initialized.
	Created,
	/// Initialization started, or failed and may be retried.
	Initializing,
	/// Synchronizing text and cursors.
	Active,
	/// Torn down, can't be used anymore.
	Destroyed,
}

impl std::fmt::Display for State {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			State::Created => write!(f, "created"),
			State::Initializing => write!(f, "initializing"),
			State::Active => write!(f, "active"),
			State::Destroyed => write!(f, "destroyed"),
		}
	}
}

/// Current [State], observable through a watch channel, plus whether an initialization is
/// running right now.
#[derive(Debug)]
pub(crate) struct Lifecycle {
	state: watch::Sender<State>,
	pending: AtomicBool,
}

/// Marks an initialization as running until dropped.
#[must_use]
#[derive(Debug)]
pub(crate) struct PendingInit<'a>(&'a AtomicBool);

impl Drop for PendingInit<'_> {
	fn drop(&mut self) {
		self.0.store(false, Ordering::Release);
	}
}

impl Lifecycle {
	pub(crate) fn new() -> Self {
		let (state, _) = watch::channel(State::Created);
		Self { state, pending: AtomicBool::new(false) }
	}

	pub(crate) fn get(&self) -> State {
		*self.state.borrow()
	}

	pub(crate) fn channel(&self) -> watch::Receiver<State> {
		self.state.subscribe()
	}

	/// enter [State::Initializing], unless active, destroyed or already being initialized
	pub(crate) fn begin_initialize(&self) -> Result<PendingInit<'_>, State> {
		let mut refused = None;
		self.state.send_if_modified(|state| match state {
			State::Created => {
				*state = State::Initializing;
				true
			},
			State::Initializing => false,
			State::Active | State::Destroyed => {
				refused = Some(*state);
				false
			},
		});
		if let Some(state) = refused {
			return Err(state);
		}
		if self.pending.swap(true, Ordering::AcqRel) {
			return Err(State::Initializing);
		}
		Ok(PendingInit(&self.pending))
	}

	/// enter [State::Active]: fails only if destroyed in the meantime
	pub(crate) fn activate(&self) -> bool {
		self.state.send_if_modified(|state| match state {
			State::Initializing => {
				*state = State::Active;
				true
			},
			_ => false,
		})
	}

	/// enter [State::Destroyed] unconditionally, returning previous state
	pub(crate) fn destroy(&self) -> State {
		self.state.send_replace(State::Destroyed)
	}
}
