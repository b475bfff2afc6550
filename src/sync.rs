//! ### Sync
//! Relays deltas between the editor and the room's OT session.
//!
//! Only changes typed by the local user travel outward: remote deltas applied to the editor come
//! back as [Source::Api] text changes and must not be echoed.

use std::sync::{Arc, Weak};

use tokio::sync::watch;

use crate::{
	api::{Callback, Delta, Editor, OtSession, Room, Snapshot, Source, Subscription},
	widget::{Hook, State},
};

/// name of the OT session holding the document
pub const OT_KEY: &str = "quill-ot";

/// Text synchronization between one editor and one OT session.
pub struct TextSync {
	editor: Arc<dyn Editor>,
	ot: Arc<dyn OtSession>,
}

impl TextSync {
	/// Open the document's OT session. Its first snapshot replaces the editor content and enables
	/// local input, unless the widget got destroyed in the meantime.
	pub(crate) fn open(room: &dyn Room, editor: Arc<dyn Editor>, state: watch::Receiver<State>) -> Arc<Self> {
		let weak = Arc::downgrade(&editor);
		let ot = room.ot(OT_KEY, Callback::from(move |snapshot: Snapshot| {
			apply_snapshot(&weak, &state, snapshot)
		}));
		Arc::new(TextSync { editor, ot })
	}

	/// The editor content changed.
	pub fn local_change(&self, delta: Delta, source: Source) {
		if source == Source::User {
			self.ot.update(delta);
		}
	}

	/// The OT session transformed a remote delta.
	pub fn remote_change(&self, delta: Delta) {
		self.editor.update_contents(delta);
	}

	pub(crate) fn attach(self: &Arc<Self>) -> Vec<(Hook, Subscription)> {
		let weak = Arc::downgrade(self);
		let _weak = weak.clone();
		vec![
			(Hook::TextChange, self.editor.on_text_change(Callback::from(
				move |(delta, source): (Delta, Source)| match weak.upgrade() {
					Some(sync) => sync.local_change(delta, source),
					None => tracing::debug!("text sync dropped, local change not shared"),
				}
			))),
			(Hook::OtUpdate, self.ot.on_update(Callback::from(
				move |delta: Delta| match _weak.upgrade() {
					Some(sync) => sync.remote_change(delta),
					None => tracing::debug!("text sync dropped, remote change not applied"),
				}
			))),
		]
	}
}

fn apply_snapshot(editor: &Weak<dyn Editor>, state: &watch::Receiver<State>, snapshot: Snapshot) {
	if *state.borrow() == State::Destroyed {
		return tracing::debug!("snapshot arrived after destroy, ignoring");
	}
	let Some(editor) = editor.upgrade() else {
		return tracing::debug!("snapshot arrived after editor was dropped, ignoring");
	};
	match snapshot {
		Ok(delta) => {
			editor.set_contents(delta);
			editor.enable();
			tracing::debug!("document snapshot applied, local input enabled");
		},
		Err(e) => tracing::error!("local input stays disabled: {}", e),
	}
}

impl std::fmt::Debug for TextSync {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TextSync").finish_non_exhaustive()
	}
}
