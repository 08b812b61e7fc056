//! Random script generation
//!
//! Produces replayable scripts with a skewed key popularity: a small set of
//! hot keys receives most of the traffic, the rest is spread uniformly over
//! the cold keys. Optionally interleaves `resize` operations so that shrinking
//! and growing are exercised under load.

use crate::error::{ReplayError, Result};
use crate::models::Op;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Parameters for generating a script
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptConfig {
    /// Number of operations to emit (excluding the leading resize and final dump)
    pub operations: usize,
    /// Number of distinct keys
    pub unique_keys: usize,
    /// Percentage of keys considered "hot"
    pub hot_keys_percent: u8,
    /// Percentage of traffic going to hot keys
    pub hot_traffic_percent: u8,
    /// Percentage of operations that are puts; the rest are lookups
    pub put_percent: u8,
    /// Emit a resize every N operations (0 = never)
    pub resize_every: usize,
    /// Lower bound for generated capacities
    pub min_capacity: usize,
    /// Upper bound for generated capacities
    pub max_capacity: usize,
    /// RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            operations: 10_000,
            unique_keys: 1_000,
            hot_keys_percent: 20,
            hot_traffic_percent: 80,
            put_percent: 30,
            resize_every: 0,
            min_capacity: 100,
            max_capacity: 100,
            seed: None,
        }
    }
}

impl ScriptConfig {
    /// Reject settings that cannot produce a meaningful script
    pub fn validate(&self) -> Result<()> {
        if self.unique_keys == 0 {
            return Err(ReplayError::InvalidConfig(
                "at least one key is required".to_string(),
            ));
        }
        for (name, pct) in [
            ("hot keys", self.hot_keys_percent),
            ("hot traffic", self.hot_traffic_percent),
            ("put", self.put_percent),
        ] {
            if pct > 100 {
                return Err(ReplayError::InvalidConfig(format!(
                    "{name} percentage must be at most 100, got {pct}"
                )));
            }
        }
        if self.min_capacity > self.max_capacity {
            return Err(ReplayError::InvalidConfig(format!(
                "min capacity {} exceeds max capacity {}",
                self.min_capacity, self.max_capacity
            )));
        }
        Ok(())
    }

    fn hot_key_count(&self) -> usize {
        let hot = self.unique_keys * self.hot_keys_percent as usize / 100;
        hot.clamp(1, self.unique_keys)
    }
}

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub seed: u64,
    pub lines: usize,
    pub puts: usize,
    pub lookups: usize,
    pub resizes: usize,
}

/// Generator for random replay scripts
pub struct ScriptGenerator {
    config: ScriptConfig,
    seed: u64,
}

impl ScriptGenerator {
    /// Create a generator, validating the configuration
    pub fn new(config: ScriptConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self { config, seed })
    }

    /// Seed actually used, so unseeded runs can be reproduced
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate the operations in order. The script opens with a resize to a
    /// starting capacity and ends with a dump.
    pub fn operations(&self) -> Vec<Op> {
        let cfg = &self.config;
        let mut rng = StdRng::seed_from_u64(self.seed);
        let hot_keys = self.config.hot_key_count();
        let mut ops = Vec::with_capacity(cfg.operations + 2);

        ops.push(Op::Resize {
            capacity: self.pick_capacity(&mut rng),
        });

        for i in 1..=cfg.operations {
            if cfg.resize_every > 0 && i % cfg.resize_every == 0 {
                ops.push(Op::Resize {
                    capacity: self.pick_capacity(&mut rng),
                });
                continue;
            }

            let key = format!("key_{}", self.pick_key(&mut rng, hot_keys));
            let roll = rng.gen_range(0..100u8);
            let op = if roll < cfg.put_percent {
                Op::Put {
                    key,
                    value: format!("v{}", rng.gen_range(0..1_000_000u32)),
                }
            } else if rng.gen_bool(0.9) {
                Op::Get { key }
            } else {
                Op::Peek { key }
            };
            ops.push(op);
        }

        ops.push(Op::Dump);
        ops
    }

    fn pick_capacity(&self, rng: &mut StdRng) -> usize {
        rng.gen_range(self.config.min_capacity..=self.config.max_capacity)
    }

    /// Hot keys are `0..hot`, cold keys `hot..unique_keys`
    fn pick_key(&self, rng: &mut StdRng, hot: usize) -> usize {
        let cold = self.config.unique_keys - hot;
        let to_hot = cold == 0 || rng.gen_range(0..100u8) < self.config.hot_traffic_percent;
        if to_hot {
            rng.gen_range(0..hot)
        } else {
            hot + rng.gen_range(0..cold)
        }
    }

    /// Write the script to any writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<GenerationSummary> {
        let cfg = &self.config;
        writeln!(
            writer,
            "# generated: ops={} keys={} hot_keys={}% hot_traffic={}% puts={}% seed={}",
            cfg.operations,
            cfg.unique_keys,
            cfg.hot_keys_percent,
            cfg.hot_traffic_percent,
            cfg.put_percent,
            self.seed
        )?;

        let mut summary = GenerationSummary {
            seed: self.seed,
            lines: 0,
            puts: 0,
            lookups: 0,
            resizes: 0,
        };
        for op in self.operations() {
            match op {
                Op::Put { .. } => summary.puts += 1,
                Op::Get { .. } | Op::Peek { .. } => summary.lookups += 1,
                Op::Resize { .. } => summary.resizes += 1,
                Op::Dump => {}
            }
            writeln!(writer, "{op}")?;
            summary.lines += 1;
        }
        writer.flush()?;
        Ok(summary)
    }

    /// Write the script to a file
    pub fn generate<P: AsRef<Path>>(&self, path: P) -> Result<GenerationSummary> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        let summary = self.write_to(&mut writer)?;
        info!(
            path = %path.display(),
            lines = summary.lines,
            seed = summary.seed,
            "Script written"
        );
        Ok(summary)
    }
}
