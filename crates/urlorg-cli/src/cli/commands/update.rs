//! Startup check for a newer release. Never fails the session.

use urlorg_core::update;

pub async fn check_updates(repo: &str) {
    let repo = repo.to_string();
    let current = env!("CARGO_PKG_VERSION");
    let res =
        tokio::task::spawn_blocking(move || update::check_for_update(&repo, current)).await;
    match res {
        Ok(Ok(Some(latest))) => {
            tracing::warn!("newer version available: {} (running {})", latest, current);
            eprintln!(
                "Newer version of urlorg available: {}. Please consider updating your version.",
                latest
            );
        }
        Ok(Ok(None)) => tracing::debug!("urlorg {} is up to date", current),
        Ok(Err(e)) => tracing::error!("could not check for updates: {:#}", e),
        Err(e) => tracing::error!("update check task: {}", e),
    }
}
