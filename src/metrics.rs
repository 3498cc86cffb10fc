//! Performance metrics and statistics tracking for the inference API.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;
use std::time::{Duration, Instant};
use tracing::info;

/// Metrics collector for the prediction endpoint
pub struct ApiMetrics {
    /// Total predict requests served successfully
    pub requests_served: AtomicU64,
    /// Total individual predictions returned (rows, not requests)
    pub predictions_made: AtomicU64,
    /// Total health checks served
    pub health_checks: AtomicU64,
    /// Total failed requests (any error class)
    pub failures: AtomicU64,
    /// Request processing times (in microseconds)
    request_times: RwLock<Vec<u64>>,
    /// Start time for rate calculation
    start_time: Instant,
}

impl ApiMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            requests_served: AtomicU64::new(0),
            predictions_made: AtomicU64::new(0),
            health_checks: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            request_times: RwLock::new(Vec::with_capacity(1000)),
            start_time: Instant::now(),
        }
    }

    /// Record a successful batch prediction
    pub fn record_predict(&self, processing_time: Duration, batch_size: usize) {
        self.requests_served.fetch_add(1, Ordering::Relaxed);
        self.predictions_made
            .fetch_add(batch_size as u64, Ordering::Relaxed);

        if let Ok(mut times) = self.request_times.write() {
            times.push(processing_time.as_micros() as u64);
            // Keep only last 10000 for memory efficiency
            if times.len() > 10000 {
                times.drain(0..5000);
            }
        }
    }

    /// Record a served health check
    pub fn record_health_check(&self) {
        self.health_checks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed request
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get request time statistics
    pub fn get_request_stats(&self) -> RequestStats {
        let times = self.request_times.read().unwrap();
        if times.is_empty() {
            return RequestStats::default();
        }

        let mut sorted: Vec<u64> = times.clone();
        sorted.sort();

        let sum: u64 = sorted.iter().sum();
        let count = sorted.len();

        RequestStats {
            count: count as u64,
            mean_us: sum / count as u64,
            p50_us: sorted[count / 2],
            p95_us: sorted[(count as f64 * 0.95) as usize],
            p99_us: sorted[(count as f64 * 0.99) as usize],
            max_us: *sorted.last().unwrap_or(&0),
        }
    }

    /// Get current throughput (requests per second)
    pub fn get_throughput(&self) -> f64 {
        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.requests_served.load(Ordering::Relaxed) as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print summary statistics
    pub fn print_summary(&self) {
        let requests = self.requests_served.load(Ordering::Relaxed);
        let predictions = self.predictions_made.load(Ordering::Relaxed);
        let health_checks = self.health_checks.load(Ordering::Relaxed);
        let failures = self.failures.load(Ordering::Relaxed);
        let stats = self.get_request_stats();

        info!(
            requests = requests,
            predictions = predictions,
            health_checks = health_checks,
            failures = failures,
            throughput = format!("{:.1} req/s", self.get_throughput()),
            mean_us = stats.mean_us,
            p50_us = stats.p50_us,
            p95_us = stats.p95_us,
            p99_us = stats.p99_us,
            "API metrics summary"
        );
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Request time statistics
#[derive(Debug, Default)]
pub struct RequestStats {
    pub count: u64,
    pub mean_us: u64,
    pub p50_us: u64,
    pub p95_us: u64,
    pub p99_us: u64,
    pub max_us: u64,
}

/// Real-time metrics reporter that prints periodic summaries
pub struct MetricsReporter {
    metrics: std::sync::Arc<ApiMetrics>,
    interval_secs: u64,
}

impl MetricsReporter {
    pub fn new(metrics: std::sync::Arc<ApiMetrics>, interval_secs: u64) -> Self {
        Self {
            metrics,
            interval_secs,
        }
    }

    /// Start the periodic reporting task
    pub async fn start(self) {
        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
        loop {
            interval.tick().await;
            self.metrics.print_summary();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_recording() {
        let metrics = ApiMetrics::new();

        metrics.record_predict(Duration::from_micros(100), 3);
        metrics.record_predict(Duration::from_micros(200), 1);
        metrics.record_health_check();
        metrics.record_failure();

        assert_eq!(metrics.requests_served.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.predictions_made.load(Ordering::Relaxed), 4);
        assert_eq!(metrics.health_checks.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.failures.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_request_stats() {
        let metrics = ApiMetrics::new();

        for us in [100, 200, 300, 400] {
            metrics.record_predict(Duration::from_micros(us), 1);
        }

        let stats = metrics.get_request_stats();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.mean_us, 250);
        assert_eq!(stats.max_us, 400);
    }

    #[test]
    fn test_empty_stats() {
        let metrics = ApiMetrics::new();
        let stats = metrics.get_request_stats();
        assert_eq!(stats.count, 0);
        assert_eq!(stats.mean_us, 0);
    }
}
