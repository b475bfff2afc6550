//! # Subscription
//!
//! Event handlers are registered on collaborators with boxed [Callback]s. Every registration hands
//! back a [Subscription]: dropping it detaches the handler, so there is no `off` call to forget.

/// Type wrapper for Boxed dynamic callback.
pub struct Callback<T>(pub Box<dyn Sync + Send + Fn(T)>);

impl<T> Callback<T> {
	pub fn call(&self, x: T) {
		self.0(x)
	}
}

impl<T> std::fmt::Debug for Callback<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Callback {{ {:p} }}", self.0)
	}
}

impl<T, X: Sync + Send + Fn(T) + 'static> From<X> for Callback<T> {
	fn from(value: X) -> Self {
		Self(Box::new(value))
	}
}

/// Handle to a registered event handler.
///
/// The handler stays attached for as long as this handle lives. Dropping it (or calling
/// [Subscription::release]) runs the collaborator's detach routine exactly once.
#[must_use = "dropping a Subscription immediately detaches its handler"]
pub struct Subscription(Option<Box<dyn FnOnce() + Send + Sync>>);

impl Subscription {
	/// Create a handle which runs `detach` when released.
	pub fn new(detach: impl FnOnce() + Send + Sync + 'static) -> Self {
		Self(Some(Box::new(detach)))
	}

	/// A handle with nothing to detach, for collaborators which never fire the event.
	pub fn detached() -> Self {
		Self(None)
	}

	/// Detach the handler now.
	pub fn release(self) {
		drop(self)
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(detach) = self.0.take() {
			detach();
		}
	}
}

impl std::fmt::Debug for Subscription {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Subscription")
			.field(&if self.0.is_some() { "attached" } else { "detached" })
			.finish()
	}
}
