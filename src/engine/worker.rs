use poll_promise::Promise;
use std::future::Future;

/// `Send` on native, nothing on wasm32 (browser futures are single-threaded and `!Send`).
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send> MaybeSend for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSend for T {}

/// Run a request in the background and hand back a promise the UI polls each frame.
///
/// Native: a task on the ambient tokio runtime (entered in `main`).
/// WASM: a local future on the browser's microtask queue.
pub fn spawn_fetch<T, F>(future: F) -> Promise<T>
where
    T: Send + 'static,
    F: Future<Output = T> + MaybeSend + 'static,
{
    #[cfg(not(target_arch = "wasm32"))]
    let promise = Promise::spawn_async(future);

    #[cfg(target_arch = "wasm32")]
    let promise = Promise::spawn_local(future);

    promise
}
