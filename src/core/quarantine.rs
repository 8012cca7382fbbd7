use crate::domain::ports::ObjectStore;

/// Moves an unprocessable source object into the failed-object
/// container under the same object id. Best-effort: every failure is
/// logged and swallowed, and a missing failed-container configuration
/// leaves the source object where it is.
pub async fn quarantine<S: ObjectStore>(
    store: &S,
    src_container: &str,
    object: &str,
    failed_container: Option<&str>,
) {
    let failed_container = match failed_container {
        Some(c) => c,
        None => {
            tracing::error!(
                object,
                "No failed-object container configured; leaving source object in place"
            );
            return;
        }
    };

    tracing::info!(object, failed_container, "Quarantining source object");

    if let Err(e) = store.copy(src_container, object, failed_container).await {
        tracing::error!(object, error = %e, "Failed to copy object to quarantine");
        return;
    }

    if let Err(e) = store.delete(src_container, object).await {
        tracing::error!(object, error = %e, "Failed to delete source object after quarantine copy");
    }
}
