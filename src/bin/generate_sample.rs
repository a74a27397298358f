use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xorshift64*)
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

fn write_measurements(path: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let samples = ["Sample_A", "Sample_B", "Sample_C"];
    let operators = ["Alice", "Bob", ""];

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["measurement_id", "sample", "concentration", "operator", "valid"])?;

    let mut rows = 0;
    for id in 0..500 {
        let conc = (rng.next_f64() * 5.0 * 1000.0).round() / 1000.0;
        writer.write_record([
            id.to_string(),
            rng.pick(&samples).to_string(),
            conc.to_string(),
            rng.pick(&operators).to_string(),
            (rng.next_f64() > 0.1).to_string(),
        ])?;
        rows += 1;
    }
    writer.flush()?;
    Ok(rows)
}

fn write_cities(path: &Path) -> Result<usize> {
    let cities = [
        ("Berlin", "Germany", 3_645_000, 891.8),
        ("Lisbon", "Portugal", 545_000, 100.05),
        ("Osaka", "Japan", 2_750_000, 225.2),
        ("Quito, Centro", "Ecuador", 2_011_000, 372.4),
    ];

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["city", "country", "population", "area_km2"])?;
    for (city, country, population, area) in cities {
        writer.write_record([
            city.to_string(),
            country.to_string(),
            population.to_string(),
            area.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(cities.len())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("csv_out"));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    let n = write_measurements(&out_dir.join("measurements.csv"), &mut rng)?;
    println!("Wrote {n} rows to measurements.csv");

    let n = write_cities(&out_dir.join("cities.csv"))?;
    println!("Wrote {n} rows to cities.csv");

    // Second data row is one field short; loading it must fail.
    fs::write(out_dir.join("broken.csv"), "a,b,c\n1,2,3\n4,5\n")
        .context("writing broken.csv")?;
    println!("Wrote malformed broken.csv");

    fs::write(out_dir.join("README.txt"), "Not a CSV file; the browser ignores it.\n")
        .context("writing README.txt")?;

    println!("Sample files are in {}", out_dir.display());
    Ok(())
}
