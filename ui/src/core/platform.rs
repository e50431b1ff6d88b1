//! Platform glue.

/// Run a future off the current component lifecycle (web builds; native
/// export paths block instead, matching the panel code).
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: std::future::Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}
