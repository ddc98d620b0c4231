use std::sync::mpsc;

/// Runs `work` on its own thread and posts the result to `tx`. The event
/// thread picks results up when it drains the receiving end.
pub(super) fn spawn_worker_action<T, W>(work: W, tx: mpsc::Sender<T>)
where
    T: Send + 'static,
    W: FnOnce() -> T + Send + 'static,
{
    let spawned = std::thread::Builder::new()
        .name("tabhome-worker".to_string())
        .spawn(move || {
            let result = work();
            let _ = tx.send(result);
        });
    if let Err(err) = spawned {
        tracing::error!(?err, "failed to spawn worker thread");
    }
}
