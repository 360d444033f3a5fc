use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

use super::model::{Dataset, Record};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong while loading the dataset. All of these are
/// fatal at startup; there is no degraded mode with a partial dashboard.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open dataset file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reading CSV header row")]
    Header(#[source] csv::Error),
    #[error("dataset is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("malformed row {row}")]
    Row {
        row: usize,
        #[source]
        source: csv::Error,
    },
}

/// Columns every later grouping/aggregation step relies on. `gdp_for_year ($)`
/// is deliberately absent: the file is accepted without it and the
/// normalization step is skipped.
const REQUIRED_COLUMNS: &[&str] = &[
    "country",
    "year",
    "sex",
    "age",
    "suicides_no",
    "population",
    "suicides/100k pop",
    "country-year",
    "HDI for year",
    "gdp_per_capita ($)",
    "generation",
];

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the dataset from a CSV file on disk.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_dataset(file)
}

/// Parse the dataset from any reader. Header names are whitespace-trimmed
/// before anything else looks at them, matching files exported with stray
/// spaces around column names.
pub fn read_dataset<R: Read>(input: R) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(input);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == *col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<Record>().enumerate() {
        let rec = result.map_err(|source| LoadError::Row {
            // +2: one for the header line, one for 1-based numbering
            row: row_no + 2,
            source,
        })?;
        records.push(rec);
    }

    log::debug!("parsed {} rows", records.len());
    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// GDP normalization
// ---------------------------------------------------------------------------

/// Deserialize a comma-grouped currency string (`"2,156,624,900"`) into a
/// float. Empty cells and a missing column both become `None`.
pub fn comma_grouped_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) => {
            let cleaned = s.replace(',', "");
            let trimmed = cleaned.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(serde::de::Error::custom)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Sex;

    const HEADER: &str = "country,year,sex,age,suicides_no,population,\
suicides/100k pop,country-year,HDI for year,\"gdp_for_year ($)\",\
\"gdp_per_capita ($)\",generation";

    fn parse(csv_text: &str) -> Dataset {
        read_dataset(csv_text.as_bytes()).expect("dataset should parse")
    }

    #[test]
    fn parses_a_full_row() {
        let text = format!(
            "{HEADER}\n\
             Albania,1987,male,15-24 years,21,312900,6.71,Albania1987,0.777,\
             \"2,156,624,900\",796,Generation X\n"
        );
        let ds = parse(&text);
        assert_eq!(ds.len(), 1);
        let rec = &ds.records[0];
        assert_eq!(rec.country, "Albania");
        assert_eq!(rec.year, 1987);
        assert_eq!(rec.sex, Sex::Male);
        assert_eq!(rec.suicides_no, 21);
        assert_eq!(rec.hdi_for_year, Some(0.777));
        assert_eq!(rec.gdp_for_year, Some(2_156_624_900.0));
        assert_eq!(rec.generation, "Generation X");
    }

    #[test]
    fn gdp_thousands_separators_are_stripped() {
        let text = format!(
            "{HEADER}\n\
             Albania,1987,female,25-34 years,4,257200,1.56,Albania1987,,\
             \"1,234,567.0\",796,Boomers\n"
        );
        let ds = parse(&text);
        assert_eq!(ds.records[0].gdp_for_year, Some(1_234_567.0));
        assert_eq!(ds.records[0].hdi_for_year, None);
    }

    #[test]
    fn missing_gdp_column_is_tolerated() {
        let text = "country,year,sex,age,suicides_no,population,\
suicides/100k pop,country-year,HDI for year,\"gdp_per_capita ($)\",generation\n\
Albania,1987,male,15-24 years,21,312900,6.71,Albania1987,0.777,796,Generation X\n";
        let ds = parse(text);
        assert_eq!(ds.records[0].gdp_for_year, None);
    }

    #[test]
    fn header_whitespace_is_trimmed() {
        let text = " country ,year, sex ,age,suicides_no,population,\
suicides/100k pop,country-year,HDI for year,\"gdp_for_year ($)\",\
\"gdp_per_capita ($)\", generation \n\
Albania,1987,male,15-24 years,21,312900,6.71,Albania1987,0.777,\
\"2,156,624,900\",796,Generation X\n";
        let ds = parse(text);
        assert_eq!(ds.records[0].country, "Albania");
        assert_eq!(ds.records[0].generation, "Generation X");
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let text = "country,year,age,suicides_no,population,\
suicides/100k pop,country-year,HDI for year,\"gdp_per_capita ($)\",generation\n";
        let err = read_dataset(text.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("sex")));
    }

    #[test]
    fn malformed_row_reports_line_number() {
        let text = format!(
            "{HEADER}\n\
             Albania,not-a-year,male,15-24 years,21,312900,6.71,Albania1987,,\
             \"2,156,624,900\",796,Generation X\n"
        );
        let err = read_dataset(text.as_bytes()).unwrap_err();
        match err {
            LoadError::Row { row, .. } => assert_eq!(row, 2),
            other => panic!("expected row error, got {other:?}"),
        }
    }

    #[test]
    fn distinct_dimension_values_are_indexed() {
        let text = format!(
            "{HEADER}\n\
             Albania,1987,male,15-24 years,21,312900,6.71,Albania1987,,\"1\",796,Generation X\n\
             France,1988,female,25-34 years,4,257200,1.56,France1988,,\"2\",900,Boomers\n\
             France,1987,male,35-54 years,9,274300,3.28,France1987,,\"2\",900,Silent\n"
        );
        let ds = parse(&text);
        assert_eq!(ds.years.iter().copied().collect::<Vec<_>>(), vec![1987, 1988]);
        assert_eq!(ds.sexes.len(), 2);
        assert_eq!(
            ds.countries.iter().cloned().collect::<Vec<_>>(),
            vec!["Albania".to_string(), "France".to_string()]
        );
    }
}
