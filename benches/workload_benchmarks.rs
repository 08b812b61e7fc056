// Mixed workload benchmarks over a reproducible Zipf-like key stream
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use resizable_lru::config::LruCacheConfig;
use resizable_lru::LruCache;

// Benchmark configuration
const CACHE_SIZE: usize = 1_000;
const NUM_OPERATIONS: usize = 10_000;

fn make_lru<K: std::hash::Hash + Eq + Clone, V>(cap: usize) -> LruCache<K, V> {
    let config = LruCacheConfig { capacity: cap };
    LruCache::init(config, None)
}

// Simple linear congruential generator for reproducible benchmarks
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(1103515245).wrapping_add(12345) & 0x7fffffff;
        self.state
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() as f64) / (0x7fffffff as f64)
    }
}

// Helper function to generate Zipf-like distribution
fn zipf_sample(n: usize, skew: f64) -> Vec<usize> {
    let mut rng = SimpleRng::new(42);

    let mut norm: f64 = 0.0;
    for i in 1..=n {
        norm += 1.0 / (i as f64).powf(skew);
    }

    // Inverse transform sampling
    let mut samples = Vec::with_capacity(NUM_OPERATIONS);
    for _ in 0..NUM_OPERATIONS {
        let u: f64 = rng.next_f64();
        let mut sum: f64 = 0.0;
        let mut sample: usize = 1;

        while sample <= n {
            sum += 1.0 / (sample as f64).powf(skew) / norm;
            if sum >= u {
                break;
            }
            sample += 1;
        }

        samples.push(sample.saturating_sub(1) % n);
    }

    samples
}

fn benchmark_workloads(c: &mut Criterion) {
    let samples = zipf_sample(CACHE_SIZE * 2, 0.8);

    let mut group = c.benchmark_group("Cache Mixed Access");

    group.bench_function("LRU 25% put / 75% get", |b| {
        b.iter(|| {
            let mut cache = make_lru(CACHE_SIZE);
            for &idx in &samples {
                if idx % 4 == 0 {
                    black_box(cache.put(idx, idx));
                } else {
                    black_box(cache.get(&idx));
                }
            }
        });
    });

    group.bench_function("LRU with periodic resize", |b| {
        b.iter(|| {
            let mut cache = make_lru(CACHE_SIZE);
            for (op, &idx) in samples.iter().enumerate() {
                if op % 1_000 == 999 {
                    // Alternate between half and full capacity
                    let cap = if (op / 1_000) % 2 == 0 {
                        CACHE_SIZE / 2
                    } else {
                        CACHE_SIZE
                    };
                    black_box(cache.resize(cap));
                } else if idx % 4 == 0 {
                    black_box(cache.put(idx, idx));
                } else {
                    black_box(cache.get(&idx));
                }
            }
        });
    });

    group.bench_function("LRU string keys", |b| {
        let keys: Vec<String> = samples.iter().map(|idx| format!("key:{idx}")).collect();
        b.iter(|| {
            let mut cache: LruCache<String, usize> = make_lru(CACHE_SIZE);
            for (key, &idx) in keys.iter().zip(&samples) {
                if idx % 4 == 0 {
                    black_box(cache.put(key.clone(), idx));
                } else {
                    black_box(cache.get(key.as_str()));
                }
            }
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_workloads);
criterion_main!(benches);
