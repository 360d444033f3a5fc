use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Sex – binary category as recorded in the source data
// ---------------------------------------------------------------------------

/// Sex category exactly as the dataset records it. Variant order matches the
/// labels' alphabetical order, which is the group key order charts use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Female => write!(f, "female"),
            Sex::Male => write!(f, "male"),
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single demographic observation (one row of the source file).
///
/// Field names follow the CSV headers after whitespace trimming; the
/// comma-grouped GDP column is normalized to a plain float by the loader.
#[derive(Debug, Clone, Deserialize)]
pub struct Record {
    pub country: String,
    pub year: i32,
    pub sex: Sex,
    /// Age band in 5-year-ish intervals, e.g. `15-24 years`. Kept as text.
    pub age: String,
    pub suicides_no: u64,
    pub population: u64,
    #[serde(rename = "suicides/100k pop")]
    pub suicides_per_100k: f64,
    #[serde(rename = "country-year")]
    pub country_year: String,
    /// Human Development Index; missing for many country-years.
    #[serde(rename = "HDI for year")]
    pub hdi_for_year: Option<f64>,
    /// Total GDP in US dollars. The raw column uses thousands separators
    /// (`"1,234,567.0"`) and may be absent entirely.
    #[serde(
        rename = "gdp_for_year ($)",
        default,
        deserialize_with = "crate::data::loader::comma_grouped_f64"
    )]
    pub gdp_for_year: Option<f64>,
    #[serde(rename = "gdp_per_capita ($)")]
    pub gdp_per_capita: f64,
    pub generation: String,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed distinct values for each
/// filterable dimension. Built once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All rows in file order.
    pub records: Vec<Record>,
    /// Distinct years present in the data, ascending.
    pub years: BTreeSet<i32>,
    /// Distinct sex categories present in the data.
    pub sexes: BTreeSet<Sex>,
    /// Distinct country names present in the data, ascending.
    pub countries: BTreeSet<String>,
}

impl Dataset {
    /// Build the dimension indices from the loaded rows.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut years = BTreeSet::new();
        let mut sexes = BTreeSet::new();
        let mut countries = BTreeSet::new();

        for rec in &records {
            years.insert(rec.year);
            sexes.insert(rec.sex);
            countries.insert(rec.country.clone());
        }

        Dataset {
            records,
            years,
            sexes,
            countries,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Indices of every row, for the aggregates that ignore the sidebar
    /// filters (top-10 country totals and the generation share).
    pub fn all_indices(&self) -> Vec<usize> {
        (0..self.records.len()).collect()
    }
}
