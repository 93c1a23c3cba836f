use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use log::info;

const OUTPUT_PATH: &str = "courselist.dat";

/// Course titles per academic year (year 1 first).
const TITLES: [&[&str]; 4] = [
    &[
        "Classical Physics",
        "Mathematics for Physicists 1",
        "Introduction to Programming",
        "Laboratory Skills",
    ],
    &[
        "Electromagnetism",
        "Quantum Mechanics",
        "Thermal Physics",
        "Mathematics for Physicists 2",
    ],
    &[
        "Condensed Matter",
        "Nuclear and Particle Physics",
        "Computational Physics",
    ],
    &["Advanced Quantum Field Theory", "Research Project"],
];

/// Small deterministic generator (splitmix64) so the sample file is
/// identical on every run.
struct SplitMix(u64);

impl SplitMix {
    fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + (hi - lo) * unit
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut rng = SplitMix(2024);
    let file = File::create(OUTPUT_PATH)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;
    let mut out = BufWriter::new(file);

    let mut written = 0;
    for (idx, titles) in TITLES.iter().enumerate() {
        let year = idx as i32 + 1;
        for (n, title) in titles.iter().enumerate() {
            let code = year * 10_000 + 100 + n as i32 * 11;
            let mark = (rng.uniform(45.0, 95.0) * 10.0).round() / 10.0;
            writeln!(out, "{mark:.1} {code} {title}")?;
            written += 1;
        }
    }

    // Lines the reader is expected to skip.
    writeln!(out, "not-a-mark 10999 Broken Mark")?;
    writeln!(out, "61.0 code Broken Code")?;
    writeln!(out)?;

    out.flush().context("writing sample file")?;
    info!("wrote {written} courses to {OUTPUT_PATH}");
    println!("Wrote {written} courses (plus 3 malformed lines) to {OUTPUT_PATH}");
    Ok(())
}
