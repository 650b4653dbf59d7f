use std::io::Write;

/// Minimal deterministic PRNG: LCG-seeded xoshiro-style state with a
/// `(s1 * 5).rotl(7) * 9` output step. Not canonical xoshiro256**.
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

/// Two superposed sines plus noise, clamped into `i16`.
fn sample_at(i: usize, rng: &mut SimpleRng) -> i16 {
    let t = i as f64 / 1000.0;
    let signal = 8000.0 * (2.0 * std::f64::consts::PI * 3.0 * t).sin()
        + 2500.0 * (2.0 * std::f64::consts::PI * 17.0 * t).sin();
    let noisy = signal + rng.gauss(0.0, 300.0);
    noisy.round().clamp(i16::MIN as f64, i16::MAX as f64) as i16
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    // 20 000 samples = 40 000 bytes, inside the default 50 KiB limit.
    let n_samples = 20_000;
    let bytes: Vec<u8> = (0..n_samples)
        .flat_map(|i| sample_at(i, &mut rng).to_ne_bytes())
        .collect();

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_data.bin".to_string());
    let mut file = std::fs::File::create(&output_path)?;
    file.write_all(&bytes)?;

    println!("Wrote {n_samples} samples ({} bytes) to {output_path}", bytes.len());
    Ok(())
}
