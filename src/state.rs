use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::config::Config;
use crate::error::{AppError, SourceError};
use crate::pipeline::ingest::SourceLocation;
use crate::pipeline::normalize::{normalize_gps, normalize_wellness};
use crate::pipeline::workload::WorkloadEngine;
use crate::types::{GpsTable, WellnessTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Gps,
    Wellness,
}

impl Dataset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Gps => "GPS",
            Dataset::Wellness => "wellness",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub loaded_at: Instant,
    pub ttl: Duration,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, ttl: Duration) -> Self {
        Self {
            value,
            loaded_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_fresh(&self, now: Instant) -> bool {
        now.duration_since(self.loaded_at) < self.ttl
    }
}

#[derive(Debug, Clone)]
enum Snapshot {
    Gps(Arc<GpsTable>),
    Wellness(Arc<WellnessTable>),
}

#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    client: reqwest::Client,
    cache: Arc<DashMap<Dataset, CacheEntry<Snapshot>>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            client: reqwest::Client::new(),
            cache: Arc::new(DashMap::new()),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn workload_engine(&self) -> WorkloadEngine {
        WorkloadEngine::new(self.config.acute_window_days, self.config.chronic_window_days)
    }

    pub async fn gps(&self) -> Result<Arc<GpsTable>, AppError> {
        if let Some(Snapshot::Gps(table)) = self.fresh(Dataset::Gps) {
            return Ok(table);
        }

        let raw = fetch(self.config.gps_source.as_ref(), Dataset::Gps, &self.client).await?;
        let table = Arc::new(normalize_gps(&raw));
        tracing::info!(
            "Loaded GPS sheet: {} of {} rows kept ({} with unparsed dates)",
            table.report.rows_kept,
            table.report.rows_read,
            table.report.unparsed_dates
        );
        self.store(Dataset::Gps, Snapshot::Gps(table.clone()), self.config.gps_cache_ttl);
        Ok(table)
    }

    pub async fn wellness(&self) -> Result<Arc<WellnessTable>, AppError> {
        if let Some(Snapshot::Wellness(table)) = self.fresh(Dataset::Wellness) {
            return Ok(table);
        }

        let raw = fetch(self.config.wellness_source.as_ref(), Dataset::Wellness, &self.client).await?;
        let table = Arc::new(normalize_wellness(&raw));
        tracing::info!(
            "Loaded wellness sheet: {} of {} rows kept",
            table.report.rows_kept,
            table.report.rows_read
        );
        self.store(
            Dataset::Wellness,
            Snapshot::Wellness(table.clone()),
            self.config.wellness_cache_ttl,
        );
        Ok(table)
    }

    pub fn invalidate(&self) -> usize {
        let dropped = self.cache.len();
        self.cache.clear();
        tracing::info!("Cache invalidated ({} snapshot(s) dropped)", dropped);
        dropped
    }

    pub fn is_cached(&self, dataset: Dataset) -> bool {
        self.fresh(dataset).is_some()
    }

    /// Stored entries, including stale ones not yet evicted.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn evict_expired(&self) {
        let now = Instant::now();
        self.cache.retain(|_, entry| entry.is_fresh(now));
        tracing::info!("Cache eviction complete. Current size: {}", self.cache_size());
    }

    fn fresh(&self, dataset: Dataset) -> Option<Snapshot> {
        let now = Instant::now();
        self.cache
            .get(&dataset)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| entry.value.clone())
    }

    // Concurrent reloads are not deduplicated; the last one to finish wins.
    fn store(&self, dataset: Dataset, snapshot: Snapshot, ttl: Duration) {
        self.cache.insert(dataset, CacheEntry::new(snapshot, ttl));
    }
}

async fn fetch(
    source: Option<&SourceLocation>,
    dataset: Dataset,
    client: &reqwest::Client,
) -> Result<crate::types::table::RawTable, SourceError> {
    let source = source.ok_or(SourceError::NotConfigured(dataset.as_str()))?;
    tracing::info!("Fetching {} sheet from {:?}", dataset.as_str(), source);
    source.fetch(client).await
}
