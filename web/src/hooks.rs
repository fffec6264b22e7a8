use std::future::Future;

use dioxus::prelude::*;
use types::Loadable;

/// Backend data owned by one view.
///
/// Fetches are spawned in the calling component's scope, so they are dropped
/// along with the view and late responses never land.
pub struct Fetched<T: 'static> {
    pub state: Signal<Loadable<T>>,
    label: &'static str,
}

impl<T: 'static> Clone for Fetched<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for Fetched<T> {}

impl<T: 'static> Fetched<T> {
    /// Store a fetch result. Failures are logged and otherwise swallowed: the
    /// previous value stays and the loading flag clears.
    pub fn settle(mut self, result: api::Result<T>) {
        if let Err(error) = &result {
            tracing::error!(%error, resource = self.label, "fetch failed");
        }
        self.state.write().resolve(result);
    }
}

/// Fetch once on mount.
///
/// Later results, such as the list reloaded after a create, go through
/// [`Fetched::settle`].
pub fn use_fetched<T, F, Fut>(label: &'static str, fetch: F) -> Fetched<T>
where
    T: Default + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = api::Result<T>> + 'static,
{
    let state = use_signal(Loadable::<T>::default);
    let fetched = Fetched { state, label };

    use_effect(move || {
        let request = fetch();
        spawn(async move { fetched.settle(request.await) });
    });

    fetched
}
