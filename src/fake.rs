//! In-memory collaborators, recording everything they are asked to do.

use std::{
	collections::VecDeque,
	sync::{
		atomic::{AtomicBool, AtomicUsize, Ordering},
		Arc, Mutex,
	},
};

use dashmap::DashMap;
use tokio::sync::Notify;
use uuid::Uuid;

use crate::{
	api::{
		Authorship, Callback, Channel, Container, CursorMarker, CursorMessage, CursorModule, Delta,
		Editor, EditorOptions, Element, Host, MessageContext, OtSession, PresenceCache, Room,
		Selection, Snapshot, Source, Subscription, User, UserId,
	},
	errors::{PresenceError, PresenceResult},
};

/// handlers registered for one event
pub(crate) struct Handlers<T>(Arc<DashMap<Uuid, Arc<Callback<T>>>>);

impl<T: Clone + 'static> Handlers<T> {
	pub(crate) fn new() -> Self {
		Self(Arc::new(DashMap::new()))
	}

	pub(crate) fn subscribe(&self, cb: Callback<T>) -> Subscription {
		let id = Uuid::new_v4();
		self.0.insert(id, Arc::new(cb));
		let map = Arc::downgrade(&self.0);
		Subscription::new(move || {
			if let Some(map) = map.upgrade() {
				map.remove(&id);
			}
		})
	}

	pub(crate) fn emit(&self, x: T) {
		let handlers: Vec<Arc<Callback<T>>> = self.0.iter().map(|e| e.value().clone()).collect();
		for handler in handlers {
			handler.call(x.clone());
		}
	}

	pub(crate) fn len(&self) -> usize {
		self.0.len()
	}
}

fn locked<T: Clone>(m: &Mutex<T>) -> T {
	m.lock().expect("poisoned fake state").clone()
}

pub(crate) struct FakeChannel {
	handlers: Handlers<(CursorMessage, MessageContext)>,
	sent: Mutex<Vec<CursorMessage>>,
}

impl FakeChannel {
	fn new() -> Self {
		Self { handlers: Handlers::new(), sent: Mutex::default() }
	}

	pub(crate) fn deliver(&self, message: CursorMessage, context: MessageContext) {
		self.handlers.emit((message, context));
	}

	pub(crate) fn sent(&self) -> Vec<CursorMessage> {
		locked(&self.sent)
	}

	pub(crate) fn listeners(&self) -> usize {
		self.handlers.len()
	}
}

impl Channel for FakeChannel {
	fn on_message(&self, handler: Callback<(CursorMessage, MessageContext)>) -> Subscription {
		self.handlers.subscribe(handler)
	}

	fn message(&self, payload: CursorMessage) {
		self.sent.lock().expect("poisoned fake state").push(payload);
	}
}

pub(crate) struct FakeOt {
	key: Mutex<Option<String>>,
	on_snapshot: Mutex<Option<Arc<Callback<Snapshot>>>>,
	handlers: Handlers<Delta>,
	updates: Mutex<Vec<Delta>>,
}

impl FakeOt {
	fn new() -> Self {
		Self {
			key: Mutex::default(),
			on_snapshot: Mutex::default(),
			handlers: Handlers::new(),
			updates: Mutex::default(),
		}
	}

	pub(crate) fn key(&self) -> Option<String> {
		locked(&self.key)
	}

	/// deliver the first snapshot to whoever opened this session
	pub(crate) fn snapshot(&self, snapshot: Snapshot) {
		let cb = self.on_snapshot.lock().expect("poisoned fake state").clone();
		if let Some(cb) = cb {
			cb.call(snapshot);
		}
	}

	/// deliver a transformed remote delta
	pub(crate) fn deliver(&self, delta: Delta) {
		self.handlers.emit(delta);
	}

	pub(crate) fn updates(&self) -> Vec<Delta> {
		locked(&self.updates)
	}

	pub(crate) fn listeners(&self) -> usize {
		self.handlers.len()
	}
}

impl OtSession for FakeOt {
	fn on_update(&self, handler: Callback<Delta>) -> Subscription {
		self.handlers.subscribe(handler)
	}

	fn update(&self, delta: Delta) {
		self.updates.lock().expect("poisoned fake state").push(delta);
	}
}

pub(crate) struct FakePresence {
	users: DashMap<UserId, User>,
	local: Mutex<Option<UserId>>,
	init_failures: Mutex<VecDeque<String>>,
	init_gate: Mutex<Option<Arc<Notify>>>,
	fail_destroy: AtomicBool,
	init_calls: AtomicUsize,
	destroy_calls: AtomicUsize,
	leave: Handlers<User>,
	change: Handlers<User>,
}

impl FakePresence {
	fn new() -> Self {
		Self {
			users: DashMap::new(),
			local: Mutex::default(),
			init_failures: Mutex::default(),
			init_gate: Mutex::default(),
			fail_destroy: AtomicBool::new(false),
			init_calls: AtomicUsize::new(0),
			destroy_calls: AtomicUsize::new(0),
			leave: Handlers::new(),
			change: Handlers::new(),
		}
	}

	pub(crate) fn join(&self, user: User) {
		self.users.insert(user.id.clone(), user);
	}

	pub(crate) fn set_local(&self, id: &str) {
		*self.local.lock().expect("poisoned fake state") = Some(UserId::from(id));
	}

	pub(crate) fn leave(&self, id: &str) {
		let user = self.users
			.remove(&UserId::from(id))
			.map(|(_, user)| user)
			.unwrap_or_else(|| User::new(id, id));
		self.leave.emit(user);
	}

	pub(crate) fn change(&self, user: User) {
		self.join(user.clone());
		self.change.emit(user);
	}

	pub(crate) fn fail_next_init(&self, reason: &str) {
		self.init_failures.lock().expect("poisoned fake state").push_back(reason.to_string());
	}

	/// from now on `initialize` waits until the returned gate is notified
	pub(crate) fn hold_init(&self) -> Arc<Notify> {
		let gate = Arc::new(Notify::new());
		*self.init_gate.lock().expect("poisoned fake state") = Some(gate.clone());
		gate
	}

	pub(crate) fn fail_destroy(&self) {
		self.fail_destroy.store(true, Ordering::SeqCst);
	}

	pub(crate) fn init_calls(&self) -> usize {
		self.init_calls.load(Ordering::SeqCst)
	}

	pub(crate) fn destroy_calls(&self) -> usize {
		self.destroy_calls.load(Ordering::SeqCst)
	}

	pub(crate) fn listeners(&self) -> usize {
		self.leave.len() + self.change.len()
	}
}

#[async_trait::async_trait]
impl PresenceCache for FakePresence {
	async fn initialize(&self) -> PresenceResult<()> {
		self.init_calls.fetch_add(1, Ordering::SeqCst);
		if let Some(gate) = locked(&self.init_gate) {
			gate.notified().await;
		}
		let failure = self.init_failures.lock().expect("poisoned fake state").pop_front();
		match failure {
			Some(reason) => Err(PresenceError::new(reason)),
			None => Ok(()),
		}
	}

	fn local_user(&self) -> Option<User> {
		let id = locked(&self.local)?;
		self.user(&id)
	}

	fn user(&self, id: &UserId) -> Option<User> {
		self.users.get(id).map(|u| u.value().clone())
	}

	fn on_leave(&self, handler: Callback<User>) -> Subscription {
		self.leave.subscribe(handler)
	}

	fn on_change(&self, handler: Callback<User>) -> Subscription {
		self.change.subscribe(handler)
	}

	async fn destroy(&self) -> PresenceResult<()> {
		self.destroy_calls.fetch_add(1, Ordering::SeqCst);
		if self.fail_destroy.load(Ordering::SeqCst) {
			return Err(PresenceError::new("room already left"));
		}
		Ok(())
	}
}

pub(crate) struct FakeRoom {
	pub(crate) channel: Arc<FakeChannel>,
	pub(crate) ot: Arc<FakeOt>,
	pub(crate) presence: Arc<FakePresence>,
	channels: Mutex<Vec<String>>,
	auto_snapshot: Option<Delta>,
}

impl FakeRoom {
	pub(crate) fn new() -> Arc<Self> {
		Arc::new(Self {
			channel: Arc::new(FakeChannel::new()),
			ot: Arc::new(FakeOt::new()),
			presence: Arc::new(FakePresence::new()),
			channels: Mutex::default(),
			auto_snapshot: None,
		})
	}

	/// a room delivering given snapshot as soon as the OT session is opened
	pub(crate) fn with_snapshot(delta: Delta) -> Arc<Self> {
		Arc::new(Self {
			channel: Arc::new(FakeChannel::new()),
			ot: Arc::new(FakeOt::new()),
			presence: Arc::new(FakePresence::new()),
			channels: Mutex::default(),
			auto_snapshot: Some(delta),
		})
	}

	pub(crate) fn channels(&self) -> Vec<String> {
		locked(&self.channels)
	}
}

impl Room for FakeRoom {
	fn channel(&self, name: &str) -> Arc<dyn Channel> {
		self.channels.lock().expect("poisoned fake state").push(name.to_string());
		self.channel.clone()
	}

	fn ot(&self, key: &str, on_snapshot: Callback<Snapshot>) -> Arc<dyn OtSession> {
		*self.ot.key.lock().expect("poisoned fake state") = Some(key.to_string());
		*self.ot.on_snapshot.lock().expect("poisoned fake state") = Some(Arc::new(on_snapshot));
		if let Some(delta) = self.auto_snapshot.clone() {
			self.ot.snapshot(Ok(delta));
		}
		self.ot.clone()
	}

	fn presence(&self) -> Arc<dyn PresenceCache> {
		self.presence.clone()
	}
}

/// cursor module which, unlike a real one, happily renders duplicate markers
#[derive(Default)]
pub(crate) struct FakeCursors {
	markers: Mutex<Vec<CursorMarker>>,
	removals: AtomicUsize,
}

impl FakeCursors {
	pub(crate) fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub(crate) fn get(&self, user: &str) -> Option<CursorMarker> {
		self.cursor(&UserId::from(user))
	}

	pub(crate) fn count(&self, user: &str) -> usize {
		let id = UserId::from(user);
		locked(&self.markers).iter().filter(|m| m.user == id).count()
	}

	pub(crate) fn len(&self) -> usize {
		locked(&self.markers).len()
	}

	pub(crate) fn removals(&self) -> usize {
		self.removals.load(Ordering::SeqCst)
	}
}

impl CursorModule for FakeCursors {
	fn cursor(&self, user: &UserId) -> Option<CursorMarker> {
		locked(&self.markers).into_iter().find(|m| &m.user == user)
	}

	fn set_cursor(&self, marker: CursorMarker) {
		self.markers.lock().expect("poisoned fake state").push(marker);
	}

	fn remove_cursor(&self, user: &UserId) {
		self.removals.fetch_add(1, Ordering::SeqCst);
		self.markers.lock().expect("poisoned fake state").retain(|m| &m.user != user);
	}
}

/// editor which echoes every applied delta as an [Source::Api] text change
pub(crate) struct FakeEditor {
	enabled: AtomicBool,
	contents: Mutex<Option<Delta>>,
	updates: Mutex<Vec<Delta>>,
	authorship: Mutex<Option<Authorship>>,
	text: Handlers<(Delta, Source)>,
	selection: Handlers<Option<Selection>>,
	cursors: Arc<FakeCursors>,
}

impl FakeEditor {
	pub(crate) fn new() -> Arc<Self> {
		Self::with_cursors(FakeCursors::new())
	}

	pub(crate) fn with_cursors(cursors: Arc<FakeCursors>) -> Arc<Self> {
		Arc::new(Self {
			enabled: AtomicBool::new(true),
			contents: Mutex::default(),
			updates: Mutex::default(),
			authorship: Mutex::default(),
			text: Handlers::new(),
			selection: Handlers::new(),
			cursors,
		})
	}

	/// the local user typed something
	pub(crate) fn type_text(&self, delta: Delta, source: Source) {
		self.text.emit((delta, source));
	}

	/// the local user moved the selection
	pub(crate) fn select(&self, selection: Option<Selection>) {
		self.selection.emit(selection);
	}

	pub(crate) fn is_enabled(&self) -> bool {
		self.enabled.load(Ordering::SeqCst)
	}

	pub(crate) fn contents(&self) -> Option<Delta> {
		locked(&self.contents)
	}

	pub(crate) fn updates(&self) -> Vec<Delta> {
		locked(&self.updates)
	}

	pub(crate) fn authorship(&self) -> Option<Authorship> {
		locked(&self.authorship)
	}

	pub(crate) fn cursor_module(&self) -> Arc<FakeCursors> {
		self.cursors.clone()
	}

	pub(crate) fn listeners(&self) -> usize {
		self.text.len() + self.selection.len()
	}
}

impl Editor for FakeEditor {
	fn set_contents(&self, delta: Delta) {
		*self.contents.lock().expect("poisoned fake state") = Some(delta.clone());
		self.text.emit((delta, Source::Api));
	}

	fn update_contents(&self, delta: Delta) {
		self.updates.lock().expect("poisoned fake state").push(delta.clone());
		self.text.emit((delta, Source::Api));
	}

	fn on_text_change(&self, handler: Callback<(Delta, Source)>) -> Subscription {
		self.text.subscribe(handler)
	}

	fn on_selection_change(&self, handler: Callback<Option<Selection>>) -> Subscription {
		self.selection.subscribe(handler)
	}

	fn add_authorship(&self, authorship: Authorship) {
		*self.authorship.lock().expect("poisoned fake state") = Some(authorship);
	}

	fn cursors(&self) -> Arc<dyn CursorModule> {
		self.cursors.clone()
	}

	fn enable(&self) {
		self.enabled.store(true, Ordering::SeqCst);
	}

	fn disable(&self) {
		self.enabled.store(false, Ordering::SeqCst);
	}
}

#[derive(Default)]
pub(crate) struct FakeContainer {
	children: Mutex<Vec<Element>>,
	classes: Mutex<Vec<String>>,
}

impl FakeContainer {
	pub(crate) fn children(&self) -> Vec<Element> {
		locked(&self.children)
	}

	pub(crate) fn classes(&self) -> Vec<String> {
		locked(&self.classes)
	}
}

impl Container for FakeContainer {
	fn add_class(&self, class: &str) {
		self.classes.lock().expect("poisoned fake state").push(class.to_string());
	}

	fn append(&self, element: Element) {
		self.children.lock().expect("poisoned fake state").push(element);
	}

	fn child_count(&self) -> usize {
		locked(&self.children).len()
	}

	fn clear(&self) {
		self.children.lock().expect("poisoned fake state").clear();
	}
}

/// host with a single `editor` container
pub(crate) struct FakeHost {
	pub(crate) container: Arc<FakeContainer>,
	pub(crate) editor: Arc<FakeEditor>,
	mounted: Mutex<Vec<EditorOptions>>,
}

impl FakeHost {
	pub(crate) const CONTAINER_ID: &'static str = "editor";

	pub(crate) fn new() -> Arc<Self> {
		Arc::new(Self {
			container: Arc::new(FakeContainer::default()),
			editor: FakeEditor::new(),
			mounted: Mutex::default(),
		})
	}

	pub(crate) fn mounted(&self) -> Vec<EditorOptions> {
		locked(&self.mounted)
	}
}

impl Host for FakeHost {
	fn container(&self, id: &str) -> Option<Arc<dyn Container>> {
		if id == Self::CONTAINER_ID {
			Some(self.container.clone())
		} else {
			None
		}
	}

	fn mount_editor(&self, _container: &Arc<dyn Container>, options: EditorOptions) -> Arc<dyn Editor> {
		self.mounted.lock().expect("poisoned fake state").push(options);
		self.editor.clone()
	}
}
