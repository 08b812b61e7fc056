// Statistics collection and reporting for script replay

use crate::error::Result;
use crate::models::{CsvMetricRow, Op, Outcome};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Per-run counters gathered from the replayed steps.
///
/// These describe the script (what was asked) and complement the cache's own
/// metrics (what the cache did).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplayStats {
    pub operations: u64,
    pub puts: u64,
    pub gets: u64,
    pub get_hits: u64,
    pub peeks: u64,
    pub peek_hits: u64,
    pub resizes: u64,
    pub dumps: u64,
    /// Puts dropped because the capacity was zero
    pub discarded_puts: u64,
    /// Entries removed by overflowing puts
    pub put_evictions: u64,
    /// Entries removed by shrinking resizes
    pub resize_evictions: u64,
    pub peak_len: usize,
}

impl ReplayStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one replayed step; `len` is the cache size after the step
    pub fn record(&mut self, op: &Op, outcome: &Outcome, len: usize) {
        self.operations += 1;
        match op {
            Op::Put { .. } => self.puts += 1,
            Op::Get { .. } => self.gets += 1,
            Op::Peek { .. } => self.peeks += 1,
            Op::Resize { .. } => self.resizes += 1,
            Op::Dump => self.dumps += 1,
        }
        match (op, outcome) {
            (Op::Get { .. }, Outcome::Lookup(Some(_))) => self.get_hits += 1,
            (Op::Peek { .. }, Outcome::Lookup(Some(_))) => self.peek_hits += 1,
            (_, Outcome::Stored { evicted: Some(_) }) => self.put_evictions += 1,
            (_, Outcome::Discarded) => self.discarded_puts += 1,
            (_, Outcome::Resized { evicted }) => self.resize_evictions += evicted.len() as u64,
            _ => {}
        }
        self.peak_len = self.peak_len.max(len);
    }

    /// Fraction of `get` operations that found their key
    pub fn get_hit_rate(&self) -> f64 {
        if self.gets == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.gets as f64
        }
    }

    /// Counters as `replay_*` metrics, in a stable order
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        let mut add = |name: &str, value: f64| {
            metrics.insert(format!("replay_{name}"), value);
        };
        add("operations", self.operations as f64);
        add("puts", self.puts as f64);
        add("gets", self.gets as f64);
        add("get_hits", self.get_hits as f64);
        add("get_hit_rate", self.get_hit_rate());
        add("peeks", self.peeks as f64);
        add("peek_hits", self.peek_hits as f64);
        add("resizes", self.resizes as f64);
        add("dumps", self.dumps as f64);
        add("discarded_puts", self.discarded_puts as f64);
        add("put_evictions", self.put_evictions as f64);
        add("resize_evictions", self.resize_evictions as f64);
        add("peak_len", self.peak_len as f64);
        metrics
    }
}

/// Everything reported at the end of a run.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    pub stats: ReplayStats,
    /// Metrics reported by the cache itself
    pub cache_metrics: BTreeMap<String, f64>,
    pub algorithm: &'static str,
    pub final_len: usize,
    pub final_capacity: usize,
    pub duration: Duration,
}

impl ReplayReport {
    /// Print a summary of the run
    pub fn print_summary(&self) {
        let stats = &self.stats;
        println!();
        println!("Replay Summary");
        println!("==============");
        println!(
            "Operations: {} ({} put, {} get, {} peek, {} resize, {} dump)",
            stats.operations, stats.puts, stats.gets, stats.peeks, stats.resizes, stats.dumps
        );
        println!(
            "Get hit rate: {:.2}% ({} of {})",
            stats.get_hit_rate() * 100.0,
            stats.get_hits,
            stats.gets
        );
        println!(
            "Evictions: {} on put, {} on resize",
            stats.put_evictions, stats.resize_evictions
        );
        if stats.discarded_puts > 0 {
            println!("Puts discarded at capacity 0: {}", stats.discarded_puts);
        }
        println!(
            "Final size: {} / {} (peak {})",
            self.final_len, self.final_capacity, stats.peak_len
        );
        println!("Elapsed: {:.2?}", self.duration);

        println!();
        println!("{} cache metrics", self.algorithm);
        println!("{}", "-".repeat(self.algorithm.len() + 14));
        for (name, value) in &self.cache_metrics {
            println!("{name:<20} {}", format_value(*value));
        }
    }

    /// Rows written by [`export_csv`](Self::export_csv): replay counters
    /// first, then the cache metrics prefixed with the algorithm name.
    pub fn csv_rows(&self) -> Vec<CsvMetricRow> {
        let mut rows: Vec<CsvMetricRow> = self
            .stats
            .to_btreemap()
            .into_iter()
            .map(|(metric, value)| CsvMetricRow { metric, value })
            .collect();
        rows.push(CsvMetricRow {
            metric: "replay_final_len".to_string(),
            value: self.final_len as f64,
        });
        rows.push(CsvMetricRow {
            metric: "replay_final_capacity".to_string(),
            value: self.final_capacity as f64,
        });
        let prefix = self.algorithm.to_lowercase();
        rows.extend(self.cache_metrics.iter().map(|(name, value)| CsvMetricRow {
            metric: format!("{prefix}_{name}"),
            value: *value,
        }));
        rows
    }

    /// Export the report as `metric,value` CSV
    pub fn export_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in self.csv_rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Whole numbers print without decimals, rates with four.
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.4}")
    }
}
