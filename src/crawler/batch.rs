//! Bounded-concurrency batch of site runs
//!
//! Sites are independent: each run gets its own `ExtractionState`, so the
//! runner only bounds how many run at once. Results are collected in
//! completion order and every input URL yields exactly one `FinalResult`.

use crate::config::Config;
use crate::crawler::fetcher::Fetcher;
use crate::crawler::orchestrator::discover_site;
use crate::output::FinalResult;
use crate::render::Renderer;
use crate::Result;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Stops a batch from starting new site runs
///
/// Cancellation is cooperative: runs already in flight finish or time out
/// on their own.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Runs site discoveries on a bounded pool of workers
pub struct BatchRunner {
    max_workers: usize,
    fetcher: Fetcher,
    renderer: Arc<dyn Renderer>,
    cancel: CancelHandle,
}

impl BatchRunner {
    /// Creates a runner from configuration
    ///
    /// # Returns
    ///
    /// * `Ok(BatchRunner)` - Runner ready to process URLs
    /// * `Err(ScoutError)` - Failed to build the HTTP client
    pub fn new(config: &Config, renderer: Arc<dyn Renderer>) -> Result<Self> {
        let fetcher = Fetcher::new(&config.fetch, &config.user_agent)?;

        Ok(Self {
            max_workers: config.batch.max_workers.max(1),
            fetcher,
            renderer,
            cancel: CancelHandle::default(),
        })
    }

    /// A handle that cancels this runner's batches
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Runs every URL, returning one result per URL in completion order
    ///
    /// A failed or panicking site run yields an error result for its URL;
    /// sibling runs are unaffected. URLs not started before cancellation
    /// also yield error results.
    pub async fn run(&self, urls: Vec<String>) -> Vec<FinalResult> {
        let total = urls.len();
        tracing::info!(
            "Starting batch of {} sites with {} workers",
            total,
            self.max_workers
        );

        let semaphore = Arc::new(Semaphore::new(self.max_workers));
        let mut pending: BTreeMap<usize, String> = BTreeMap::new();
        let mut tasks = JoinSet::new();

        for (index, url) in urls.into_iter().enumerate() {
            pending.insert(index, url.clone());

            let semaphore = Arc::clone(&semaphore);
            let fetcher = self.fetcher.clone();
            let renderer = Arc::clone(&self.renderer);
            let cancel = self.cancel.clone();

            tasks.spawn(async move {
                let result = run_site(url, semaphore, fetcher, renderer, cancel).await;
                (index, result)
            });
        }

        let mut results = Vec::with_capacity(total);
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => {
                    pending.remove(&index);
                    results.push(result);
                    tracing::info!("Progress: {}/{} sites done", results.len(), total);
                }
                Err(e) => tracing::error!("Batch worker failed: {}", e),
            }
        }

        // Workers that died without reporting still owe a result
        for url in pending.into_values() {
            results.push(FinalResult::error(url.trim()));
        }

        results
    }
}

/// Runs one site on a worker slot, isolating panics
async fn run_site(
    url: String,
    semaphore: Arc<Semaphore>,
    fetcher: Fetcher,
    renderer: Arc<dyn Renderer>,
    cancel: CancelHandle,
) -> FinalResult {
    let Ok(_permit) = semaphore.acquire_owned().await else {
        return FinalResult::error(url.trim());
    };

    if cancel.is_cancelled() {
        tracing::debug!("Batch cancelled, skipping {}", url);
        return FinalResult::error(url.trim());
    }

    let site = url.clone();
    let handle = tokio::spawn(async move { discover_site(&site, fetcher, renderer).await });

    match handle.await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Site run for {} panicked: {}", url, e);
            FinalResult::error(url.trim())
        }
    }
}

/// Runs a batch with a fresh runner
///
/// # Arguments
///
/// * `config` - Fetch and batch settings
/// * `renderer` - Dynamic renderer shared by all runs
/// * `urls` - Seed URLs, one result each
pub async fn run_batch(
    config: &Config,
    renderer: Arc<dyn Renderer>,
    urls: Vec<String>,
) -> Result<Vec<FinalResult>> {
    let runner = BatchRunner::new(config, renderer)?;
    Ok(runner.run(urls).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DisabledRenderer;

    #[test]
    fn test_cancel_handle_shared() {
        let handle = CancelHandle::default();
        let clone = handle.clone();
        assert!(!clone.is_cancelled());
        handle.cancel();
        assert!(clone.is_cancelled());
    }

    #[tokio::test]
    async fn test_cancelled_batch_yields_error_results() {
        let runner = BatchRunner::new(&Config::default(), Arc::new(DisabledRenderer)).unwrap();
        runner.cancel_handle().cancel();

        let results = runner
            .run(vec![
                "https://a.edu.np".to_string(),
                "https://b.com.np".to_string(),
            ])
            .await;

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(FinalResult::is_error));
    }

    #[tokio::test]
    async fn test_invalid_urls_yield_error_results() {
        let results = run_batch(
            &Config::default(),
            Arc::new(DisabledRenderer),
            vec!["mailto:someone".to_string(), "".to_string()],
        )
        .await
        .unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(FinalResult::is_error));
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let results = run_batch(&Config::default(), Arc::new(DisabledRenderer), vec![])
            .await
            .unwrap();
        assert!(results.is_empty());
    }
}
