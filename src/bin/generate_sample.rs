//! Writes a small deterministic `master.csv` so the dashboard can be tried
//! without the real dataset. The GDP column is emitted with thousands
//! separators, exactly like the original file, to exercise normalization.

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

/// `1234567` → `"1,234,567"`.
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn generation_for(birth_year: i32) -> &'static str {
    match birth_year {
        ..=1927 => "G.I. Generation",
        1928..=1945 => "Silent",
        1946..=1964 => "Boomers",
        1965..=1980 => "Generation X",
        1981..=1996 => "Millenials",
        _ => "Generation Z",
    }
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let countries: [(&str, f64, u64); 6] = [
        // name, baseline rate per 100k, GDP per capita
        ("Albania", 4.0, 2_500),
        ("Brazil", 6.0, 8_000),
        ("France", 16.0, 35_000),
        ("Japan", 19.0, 38_000),
        ("Sweden", 13.0, 45_000),
        ("United States", 12.0, 50_000),
    ];
    let age_bands: [(&str, i32); 6] = [
        ("5-14 years", 10),
        ("15-24 years", 20),
        ("25-34 years", 30),
        ("35-54 years", 45),
        ("55-74 years", 65),
        ("75+ years", 80),
    ];
    let sexes = ["male", "female"];

    let output_path = "master.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "country",
            "year",
            "sex",
            "age",
            "suicides_no",
            "population",
            "suicides/100k pop",
            "country-year",
            "HDI for year",
            "gdp_for_year ($)",
            "gdp_per_capita ($)",
            "generation",
        ])
        .expect("Failed to write header");

    let mut rows = 0usize;
    for (country, base_rate, gdp_per_capita) in countries {
        for year in 1990..=2015 {
            let population_base = 200_000.0 + rng.next_f64() * 2_000_000.0;
            let gdp_for_year = gdp_per_capita * population_base as u64 * 12;

            for sex in sexes {
                // Male rates run well above female rates in the real data.
                let sex_factor = if sex == "male" { 1.8 } else { 0.5 };

                for (age, mid_age) in age_bands {
                    let population = (population_base / age_bands.len() as f64) as u64;
                    let rate = (base_rate * sex_factor + rng.gauss(0.0, 2.0)).max(0.0);
                    let suicides_no = (rate * population as f64 / 100_000.0).round() as u64;
                    let hdi = 0.6 + (gdp_per_capita as f64).log10() / 20.0;

                    writer
                        .write_record([
                            country.to_string(),
                            year.to_string(),
                            sex.to_string(),
                            age.to_string(),
                            suicides_no.to_string(),
                            population.to_string(),
                            format!("{rate:.2}"),
                            format!("{country}{year}"),
                            format!("{hdi:.3}"),
                            group_thousands(gdp_for_year),
                            gdp_per_capita.to_string(),
                            generation_for(year - mid_age).to_string(),
                        ])
                        .expect("Failed to write row");
                    rows += 1;
                }
            }
        }
    }

    writer.flush().expect("Failed to flush output file");
    println!("Wrote {rows} rows to {output_path}");
}
