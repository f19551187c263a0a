use anyhow::{Context, Result};
use serde::Serialize;

/// One record in the source CSV layout (with an extra `Code` column).
#[derive(Serialize)]
struct SampleRecord<'a> {
    #[serde(rename = "Entity")]
    entity: &'a str,
    #[serde(rename = "Code")]
    code: &'a str,
    #[serde(rename = "Year")]
    year: i64,
    /// Empty for a missing measurement.
    #[serde(rename = "Annual CO₂ emissions (per capita)")]
    emission: Option<f64>,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // (entity, code, emission in 1950, yearly growth)
    let entities = [
        ("Canada", "CAN", 10.2, 0.08),
        ("France", "FRA", 5.9, 0.01),
        ("India", "IND", 0.2, 0.03),
        ("Kenya", "KEN", 0.1, 0.004),
        ("Norway", "NOR", 4.1, 0.05),
        ("World", "", 1.9, 0.03),
    ];
    let years = 1950..=2022;

    let output_path = "co-emissions-per-capita sample.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let mut written = 0usize;
    for &(entity, code, base, growth) in &entities {
        for year in years.clone() {
            let trend = base + growth * (year - 1950) as f64;
            // Roughly 2% missing and 1% non-positive values, which the importer drops.
            let roll = rng.next_f64();
            let emission = if roll < 0.02 {
                None
            } else if roll < 0.03 {
                Some(0.0)
            } else {
                Some((trend + rng.gauss(0.0, 0.05 * trend)).max(0.001))
            };

            writer
                .serialize(SampleRecord {
                    entity,
                    code,
                    year,
                    emission,
                })
                .context("writing CSV record")?;
            written += 1;
        }
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {written} rows for {} entities to {output_path}", entities.len());
    Ok(())
}
