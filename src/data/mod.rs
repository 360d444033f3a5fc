/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///   master.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  trim headers, normalize GDP → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, distinct values per dimension
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  resolve selections, AND across dimensions → row indices
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  group-by mean/sum, sort, top-N → chart tables
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;

#[cfg(test)]
pub mod testutil {
    use super::model::{Dataset, Record, Sex};

    fn row(
        country: &str,
        year: i32,
        sex: Sex,
        age: &str,
        suicides_no: u64,
        generation: &str,
    ) -> Record {
        // Rates chosen so the per-row rate equals suicides_no, which keeps
        // single-row group means easy to assert against.
        Record {
            country: country.to_string(),
            year,
            sex,
            age: age.to_string(),
            suicides_no,
            population: suicides_no * 100_000,
            suicides_per_100k: suicides_no as f64,
            country_year: format!("{country}{year}"),
            hdi_for_year: None,
            gdp_for_year: Some(1_000_000.0),
            gdp_per_capita: 1_000.0,
            generation: generation.to_string(),
        }
    }

    /// The three-row dataset used across data-layer tests:
    /// (US, 2010, male, 5), (US, 2010, female, 3), (FR, 2010, male, 2).
    pub fn small_dataset() -> Dataset {
        Dataset::from_records(vec![
            row("United States", 2010, Sex::Male, "15-24 years", 5, "Millenials"),
            row("United States", 2010, Sex::Female, "15-24 years", 3, "Millenials"),
            row("France", 2010, Sex::Male, "15-24 years", 2, "Generation X"),
        ])
    }

    /// Two rows whose lexical key order disagrees with their mean order for
    /// both the age and generation dimensions: "15-24 years"/"Boomers" carry
    /// the low rate, "75+ years"/"Silent" the high one.
    pub fn rate_spread_dataset() -> Dataset {
        Dataset::from_records(vec![
            row("United States", 2010, Sex::Male, "15-24 years", 1, "Boomers"),
            row("United States", 2010, Sex::Female, "75+ years", 99, "Silent"),
        ])
    }
}
