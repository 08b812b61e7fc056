//! Replay engine
//!
//! Drives an [`LruCache<String, String>`] through a stream of script
//! operations, turning each cache result into an [`Outcome`].

use crate::error::Result;
use crate::models::{Op, Outcome, Step};
use crate::stats::{ReplayReport, ReplayStats};
use resizable_lru::metrics::CacheMetrics;
use resizable_lru::{LruCache, LruCacheConfig};
use std::time::Instant;
use tracing::{debug, info};

/// Replays operations against a single cache
pub struct ReplayRunner {
    cache: LruCache<String, String>,
    stats: ReplayStats,
}

impl ReplayRunner {
    /// Create a runner whose cache starts empty with `capacity` slots
    pub fn new(capacity: usize) -> Self {
        let config = LruCacheConfig::new(capacity);
        Self {
            cache: LruCache::init(config, None),
            stats: ReplayStats::new(),
        }
    }

    pub fn cache(&self) -> &LruCache<String, String> {
        &self.cache
    }

    pub fn stats(&self) -> &ReplayStats {
        &self.stats
    }

    /// Apply one operation and record it
    pub fn apply(&mut self, op: &Op) -> Outcome {
        let outcome = match op {
            Op::Put { key, value } => self.put(key, value),
            Op::Get { key } => Outcome::Lookup(self.cache.get(key.as_str()).cloned()),
            Op::Peek { key } => Outcome::Lookup(self.cache.peek(key.as_str()).cloned()),
            Op::Resize { capacity } => {
                let evicted = self.cache.resize(*capacity);
                info!(
                    capacity = *capacity,
                    evicted = evicted.len(),
                    len = self.cache.len(),
                    "Cache resized"
                );
                Outcome::Resized { evicted }
            }
            Op::Dump => {
                let mut entries: Vec<(String, String)> = self
                    .cache
                    .dump()
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect();
                entries.sort();
                Outcome::Dumped(entries)
            }
        };
        self.stats.record(op, &outcome, self.cache.len());
        outcome
    }

    fn put(&mut self, key: &str, value: &str) -> Outcome {
        if self.cache.cap() == 0 {
            debug!(key, "Put discarded, capacity is zero");
            return Outcome::Discarded;
        }
        let existed = self.cache.contains(key);
        match self.cache.put(key.to_string(), value.to_string()) {
            Some((_, previous)) if existed => Outcome::Updated { previous },
            Some(evicted) => {
                debug!(key, evicted = %evicted.0, "Put evicted least recently used entry");
                Outcome::Stored {
                    evicted: Some(evicted),
                }
            }
            None => Outcome::Stored { evicted: None },
        }
    }

    /// Replay a whole script, calling `on_step` after every operation.
    ///
    /// Stops at the first parse or I/O error; operations before it have
    /// already been applied.
    pub fn run<I, F>(mut self, script: I, mut on_step: F) -> Result<ReplayReport>
    where
        I: IntoIterator<Item = Result<(usize, Op)>>,
        F: FnMut(&Step),
    {
        let start = Instant::now();
        info!(capacity = self.cache.cap(), "Starting replay");

        for item in script {
            let (line, op) = item?;
            let outcome = self.apply(&op);
            debug!(line, op = %op, "Applied operation");
            on_step(&Step { line, op, outcome });
        }

        let report = ReplayReport {
            cache_metrics: self.cache.metrics(),
            algorithm: self.cache.algorithm_name(),
            final_len: self.cache.len(),
            final_capacity: self.cache.cap(),
            duration: start.elapsed(),
            stats: self.stats,
        };
        info!(
            operations = report.stats.operations,
            final_len = report.final_len,
            "Replay finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReplayError;
    use crate::script::ScriptReader;
    use std::io::Cursor;

    fn put(key: &str, value: &str) -> Op {
        Op::Put {
            key: key.into(),
            value: value.into(),
        }
    }

    fn get(key: &str) -> Op {
        Op::Get { key: key.into() }
    }

    fn replay(script: &str, capacity: usize) -> Result<(Vec<String>, ReplayReport)> {
        let mut transcript = Vec::new();
        let report = ReplayRunner::new(capacity).run(ScriptReader::new(Cursor::new(script)), |step| {
            transcript.extend(step.transcript())
        })?;
        Ok((transcript, report))
    }

    #[test]
    fn test_apply_put_get_and_eviction() {
        let mut runner = ReplayRunner::new(2);
        assert_eq!(runner.apply(&put("a", "1")), Outcome::Stored { evicted: None });
        assert_eq!(runner.apply(&put("b", "2")), Outcome::Stored { evicted: None });
        assert_eq!(runner.apply(&get("a")), Outcome::Lookup(Some("1".into())));
        assert_eq!(
            runner.apply(&put("c", "3")),
            Outcome::Stored {
                evicted: Some(("b".into(), "2".into()))
            }
        );
        assert_eq!(runner.apply(&get("b")), Outcome::Lookup(None));
        assert_eq!(runner.stats().put_evictions, 1);
    }

    #[test]
    fn test_apply_update_reports_previous_value() {
        let mut runner = ReplayRunner::new(2);
        runner.apply(&put("a", "1"));
        assert_eq!(
            runner.apply(&put("a", "2")),
            Outcome::Updated {
                previous: "1".into()
            }
        );
        assert_eq!(runner.cache().len(), 1);
    }

    #[test]
    fn test_apply_at_zero_capacity_discards() {
        let mut runner = ReplayRunner::new(0);
        assert_eq!(runner.apply(&put("a", "1")), Outcome::Discarded);
        assert_eq!(runner.apply(&get("a")), Outcome::Lookup(None));
        assert_eq!(runner.stats().discarded_puts, 1);
    }

    #[test]
    fn test_dump_is_sorted_and_read_only() {
        let mut runner = ReplayRunner::new(3);
        for (k, v) in [("c", "3"), ("a", "1"), ("b", "2")] {
            runner.apply(&put(k, v));
        }
        let lru_before = runner.cache().peek_lru().map(|(k, _)| k.clone());
        assert_eq!(
            runner.apply(&Op::Dump),
            Outcome::Dumped(vec![
                ("a".into(), "1".into()),
                ("b".into(), "2".into()),
                ("c".into(), "3".into()),
            ])
        );
        assert_eq!(runner.cache().peek_lru().map(|(k, _)| k.clone()), lru_before);
    }

    #[test]
    fn test_full_script_transcript() {
        let script = "\
# start empty
resize 2
put a 1
put b 2
get a
put c 3
peek b
resize 1
get a
put d NULL
get d
dump
";
        let (transcript, report) = replay(script, 0).unwrap();
        assert_eq!(
            transcript,
            vec![
                "resize 2",
                "put a 1",
                "put b 2",
                "get a -> \"1\"",
                "put c 3 (evicted b)",
                "peek b -> (absent)",
                "resize 1 (evicted a)",
                "get a -> (absent)",
                "put d NULL (evicted c)",
                "get d -> \"NULL\"",
                "d NULL",
            ]
        );
        assert_eq!(report.final_len, 1);
        assert_eq!(report.final_capacity, 1);
        assert_eq!(report.algorithm, "LRU");
        assert_eq!(report.stats.operations, 11);
        assert_eq!(report.cache_metrics["evictions"], 3.0);
    }

    #[test]
    fn test_stored_absent_text_differs_from_a_miss() {
        let script = "resize 2\nput k (absent)\nget k\nget missing\n";
        let (transcript, report) = replay(script, 0).unwrap();
        assert_eq!(transcript[2], "get k -> \"(absent)\"");
        assert_eq!(transcript[3], "get missing -> (absent)");
        assert_ne!(transcript[2], transcript[3]);
        assert_eq!(report.stats.get_hits, 1);
    }

    #[test]
    fn test_put_value_whitespace_survives_replay() {
        let script = "resize 1\nput t  padded  \nget t\n";
        let (transcript, _) = replay(script, 0).unwrap();
        assert_eq!(transcript[2], "get t -> \" padded  \"");
    }

    #[test]
    fn test_run_stops_at_parse_error() {
        let mut seen = 0;
        let result = ReplayRunner::new(1).run(
            ScriptReader::new(Cursor::new("put a 1\nresize -2\nget a\n")),
            |_| seen += 1,
        );
        assert!(matches!(result, Err(ReplayError::Parse { line: 2, .. })));
        assert_eq!(seen, 1);
    }
}
