use once_cell::sync::Lazy;

pub static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("Failed to build Tokio runtime")
});

/// Run `fut` on the shared runtime and hand its result to `on_done` on the
/// GTK main loop.
#[cfg(feature = "gui")]
pub fn run_async_to_main<T, Fut, F>(fut: Fut, on_done: F)
where
    T: Send + 'static,
    Fut: std::future::Future<Output = T> + Send + 'static,
    F: FnOnce(T) + 'static,
{
    let handle = RUNTIME.spawn(fut);
    glib::MainContext::default().spawn_local(async move {
        match handle.await {
            Ok(res) => on_done(res),
            Err(e) => log::error!("background task failed: {e}"),
        }
    });
}
