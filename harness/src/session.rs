use herald::{ClientConfig, NotificationCenter, NotificationError, Platform};
use log::{info, warn};

/// Correlation data attached to every notification the harness sends:
/// the form's send count at the time.
pub type Center = NotificationCenter<usize>;

/// Start on the session bus unless running offline.
pub async fn start(offline: bool, config: ClientConfig) -> Result<Center, NotificationError> {
    if offline {
        info!("Offline mode, using the in-process notification server");
        return start_with(None, config).await;
    }

    match Platform::session().await {
        Ok(platform) => start_with(Some(platform), config).await,
        Err(e) => {
            warn!("Session bus unavailable ({}), falling back to the in-process server", e);
            start_with(None, config).await
        }
    }
}

/// Start on `preferred`, falling back to the in-process server when it
/// cannot be reached. A bus without a notification daemon only fails here,
/// at the first call.
pub async fn start_with(
    preferred: Option<Platform>,
    config: ClientConfig,
) -> Result<Center, NotificationError> {
    if let Some(platform) = preferred {
        match NotificationCenter::new(platform, config.clone()).await {
            Ok(center) => return Ok(center),
            Err(e) => warn!(
                "Notification service unavailable ({}), falling back to the in-process server",
                e
            ),
        }
    }
    NotificationCenter::new(Platform::in_memory().0, config).await
}
