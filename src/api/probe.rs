// Existence checks for hosted audio assets.
use crate::api::HTTP_CLIENT;

#[cfg(not(target_arch = "wasm32"))]
const PROBE_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(8);

/// Whether an asset answers a `HEAD` with a success status.
///
/// Any transport error (timeouts included) or non-success status counts as absent.
pub async fn asset_exists(url: &str) -> bool {
    if url.trim().is_empty() {
        return false;
    }
    let request = HTTP_CLIENT.head(url);
    #[cfg(not(target_arch = "wasm32"))]
    let request = request.timeout(PROBE_TIMEOUT);
    match request.send().await {
        Ok(response) if response.status().is_success() => true,
        Ok(response) => {
            tracing::debug!(url, status = response.status().as_u16(), "audio asset missing");
            false
        }
        Err(err) => {
            tracing::warn!(url, error = %err, "audio probe failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_url_is_never_probed() {
        assert!(!asset_exists("  ").await);
    }

    #[tokio::test]
    async fn unreachable_host_fails_closed() {
        assert!(!asset_exists("http://127.0.0.1:9/audio/18_66.mp3").await);
    }
}
