//! Building the directory from the remote feed, via the disk snapshot.

use super::cache::StationCache;
use super::client::StationClient;
use super::directory::{StationDirectory, parse_feed};
use super::error::StationError;

/// Load the station directory.
///
/// A fresh snapshot in `cache` is used as-is. Otherwise the feed is fetched
/// and the snapshot rewritten; failing to write it is logged and ignored.
pub async fn load_directory(
    client: &StationClient,
    cache: Option<&StationCache>,
) -> Result<StationDirectory, StationError> {
    if let Some(stations) = cache.and_then(|c| c.load(client.feed_url())) {
        tracing::debug!(count = stations.len(), "using cached station snapshot");
        return Ok(StationDirectory::from_stations(stations));
    }

    let feed = client.fetch_feed().await?;
    let stations = parse_feed(&feed);
    tracing::info!(count = stations.len(), "fetched station feed");

    if stations.is_empty() {
        tracing::warn!(url = client.feed_url(), "station feed contained no stations");
    } else if let Some(cache) = cache
        && let Err(e) = cache.save(client.feed_url(), &stations)
    {
        tracing::warn!(path = %cache.path().display(), "failed to save station snapshot: {}", e);
    }

    Ok(StationDirectory::from_stations(stations))
}
