use holiday_relay_infrastructure::MemoryPayloadCache;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Periodically sweeps expired payloads out of the memory cache.
///
/// Expired entries are already invisible to readers; the sweep only
/// reclaims memory between read-triggered removals.
pub struct CacheCompactionJob {
    cache: Arc<MemoryPayloadCache>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl CacheCompactionJob {
    pub fn new(cache: Arc<MemoryPayloadCache>, interval_secs: u64) -> Self {
        Self {
            cache,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// One sweep. The interval loop calls this on every tick.
    pub fn run_once(&self) -> usize {
        let removed = self.cache.compact();
        debug!(removed, cache_size = self.cache.len(), "Cache compaction tick");
        removed
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting cache compaction job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("CacheCompactionJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.run_once();
                    }
                }
            }
        });
    }
}
