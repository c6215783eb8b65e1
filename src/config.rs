use std::path::PathBuf;
use std::time::Duration;

use crate::pipeline::ingest::SourceLocation;
use crate::pipeline::risk::BandingConfig;
use crate::types::risk::Polarity;
use crate::types::wellness::WellnessMetric;
use crate::types::workload::AcwrSource;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub gps_source: Option<SourceLocation>,
    pub wellness_source: Option<SourceLocation>,
    pub gps_cache_ttl: Duration,
    pub wellness_cache_ttl: Duration,
    pub eviction_interval: Duration,
    pub acwr_source: AcwrSource,
    pub acute_window_days: u32,
    pub chronic_window_days: u32,
    pub banding: BandingConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub program: Option<PathBuf>,
    pub args: Vec<String>,
    /// Passed after `args` as a single argument, so it may contain spaces.
    pub script: Option<PathBuf>,
    pub stdout_log: PathBuf,
    pub stderr_log: PathBuf,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            program: None,
            args: Vec::new(),
            script: None,
            stdout_log: PathBuf::from("log_r_output.txt"),
            stderr_log: PathBuf::from("log_r_error.txt"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            gps_source: None,
            wellness_source: None,
            gps_cache_ttl: Duration::from_secs(600),
            wellness_cache_ttl: Duration::from_secs(300),
            eviction_interval: Duration::from_secs(300),
            acwr_source: AcwrSource::Precomputed,
            acute_window_days: 7,
            chronic_window_days: 28,
            banding: BandingConfig::default(),
            sync: SyncConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env_parse("PORT").unwrap_or(defaults.port);

        let gps_source = env_string("GPS_CSV_URL")
            .or_else(|| env_string("GPS_CSV_PATH"))
            .map(|v| SourceLocation::parse(&v));
        let wellness_source = env_string("WELLNESS_CSV_URL")
            .or_else(|| env_string("WELLNESS_CSV_PATH"))
            .map(|v| SourceLocation::parse(&v));

        let gps_cache_ttl = env_parse("GPS_CACHE_TTL_SECONDS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.gps_cache_ttl);
        let wellness_cache_ttl = env_parse("WELLNESS_CACHE_TTL_SECONDS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.wellness_cache_ttl);
        let eviction_interval = env_parse("EVICTION_INTERVAL_SECONDS")
            .map(Duration::from_secs)
            .unwrap_or(defaults.eviction_interval);

        let acwr_source = env_string("ACWR_SOURCE")
            .and_then(|s| AcwrSource::from_str(&s))
            .unwrap_or(defaults.acwr_source);
        let acute_window_days = env_parse("ACUTE_WINDOW_DAYS").unwrap_or(defaults.acute_window_days);
        let chronic_window_days =
            env_parse("CHRONIC_WINDOW_DAYS").unwrap_or(defaults.chronic_window_days);

        let banding = env_string("WELLNESS_LOWER_IS_BETTER")
            .map(|list| parse_lower_is_better(&list))
            .unwrap_or_default();

        let sync = SyncConfig {
            program: env_string("SYNC_PROGRAM").map(PathBuf::from),
            args: env_string("SYNC_ARGS")
                .map(|s| s.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            script: env_string("SYNC_SCRIPT").map(PathBuf::from),
            stdout_log: env_string("SYNC_STDOUT_LOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.sync.stdout_log),
            stderr_log: env_string("SYNC_STDERR_LOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.sync.stderr_log),
        };

        Self {
            port,
            gps_source,
            wellness_source,
            gps_cache_ttl,
            wellness_cache_ttl,
            eviction_interval,
            acwr_source,
            acute_window_days,
            chronic_window_days,
            banding,
            sync,
        }
    }
}

pub fn parse_lower_is_better(list: &str) -> BandingConfig {
    list.split(',')
        .filter_map(WellnessMetric::from_str)
        .filter(|metric| WellnessMetric::ORDINALS.contains(metric))
        .fold(BandingConfig::default(), |config, metric| {
            config.with_polarity(metric, Polarity::LowerIsBetter)
        })
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}
