use std::collections::BTreeMap;

use super::model::{Dataset, Record, Sex};

// ---------------------------------------------------------------------------
// Generic group-by reductions
// ---------------------------------------------------------------------------

/// Arithmetic mean of `metric` per group key, over the rows named by
/// `indices`. Groups only exist where at least one row landed, so the mean
/// never divides by zero; keys come back in ascending order.
pub fn mean_by<K, KF, MF>(dataset: &Dataset, indices: &[usize], key: KF, metric: MF) -> Vec<(K, f64)>
where
    K: Ord,
    KF: Fn(&Record) -> K,
    MF: Fn(&Record) -> f64,
{
    let mut acc: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        let entry = acc.entry(key(rec)).or_insert((0.0, 0));
        entry.0 += metric(rec);
        entry.1 += 1;
    }
    acc.into_iter()
        .map(|(k, (sum, n))| (k, sum / n as f64))
        .collect()
}

/// Sum of `metric` per group key, ascending key order.
pub fn sum_by<K, KF, MF>(dataset: &Dataset, indices: &[usize], key: KF, metric: MF) -> Vec<(K, f64)>
where
    K: Ord,
    KF: Fn(&Record) -> K,
    MF: Fn(&Record) -> f64,
{
    let mut acc: BTreeMap<K, f64> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        *acc.entry(key(rec)).or_insert(0.0) += metric(rec);
    }
    acc.into_iter().collect()
}

/// Re-order a table descending by its value.
pub fn sorted_desc<K>(mut table: Vec<(K, f64)>) -> Vec<(K, f64)> {
    table.sort_by(|a, b| b.1.total_cmp(&a.1));
    table
}

/// Keep the `n` largest entries (table must already be sorted descending).
pub fn top_n<K>(mut table: Vec<(K, f64)>, n: usize) -> Vec<(K, f64)> {
    table.truncate(n);
    table
}

// ---------------------------------------------------------------------------
// The dashboard's aggregates
// ---------------------------------------------------------------------------

/// Mean suicides/100k per year, ascending by year.
pub fn mean_rate_by_year(dataset: &Dataset, indices: &[usize]) -> Vec<(i32, f64)> {
    mean_by(dataset, indices, |r| r.year, |r| r.suicides_per_100k)
}

/// Mean suicides/100k per sex, in key order.
pub fn mean_rate_by_sex(dataset: &Dataset, indices: &[usize]) -> Vec<(Sex, f64)> {
    mean_by(dataset, indices, |r| r.sex, |r| r.suicides_per_100k)
}

/// Mean suicides/100k per age band, sorted descending for the bar chart.
pub fn mean_rate_by_age(dataset: &Dataset, indices: &[usize]) -> Vec<(String, f64)> {
    sorted_desc(mean_by(
        dataset,
        indices,
        |r| r.age.clone(),
        |r| r.suicides_per_100k,
    ))
}

/// Mean suicides/100k per generation, sorted descending for the bar chart.
pub fn mean_rate_by_generation(dataset: &Dataset, indices: &[usize]) -> Vec<(String, f64)> {
    sorted_desc(mean_by(
        dataset,
        indices,
        |r| r.generation.clone(),
        |r| r.suicides_per_100k,
    ))
}

/// Top 10 countries by summed suicide counts, descending.
pub fn top_countries_by_total(dataset: &Dataset, indices: &[usize]) -> Vec<(String, f64)> {
    top_n(
        sorted_desc(sum_by(
            dataset,
            indices,
            |r| r.country.clone(),
            |r| r.suicides_no as f64,
        )),
        10,
    )
}

/// Top 10 countries by mean suicides/100k, descending.
pub fn top_countries_by_rate(dataset: &Dataset, indices: &[usize]) -> Vec<(String, f64)> {
    top_n(
        sorted_desc(mean_by(
            dataset,
            indices,
            |r| r.country.clone(),
            |r| r.suicides_per_100k,
        )),
        10,
    )
}

/// Mean suicides/100k per (year, sex) pair, feeding the heatmap.
pub fn mean_rate_by_year_sex(dataset: &Dataset, indices: &[usize]) -> Vec<((i32, Sex), f64)> {
    mean_by(
        dataset,
        indices,
        |r| (r.year, r.sex),
        |r| r.suicides_per_100k,
    )
}

/// Total suicide counts per generation, feeding the share pie.
pub fn total_by_generation(dataset: &Dataset, indices: &[usize]) -> Vec<(String, f64)> {
    sum_by(
        dataset,
        indices,
        |r| r.generation.clone(),
        |r| r.suicides_no as f64,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filtered_indices;
    use crate::data::testutil::{rate_spread_dataset, small_dataset};

    #[test]
    fn sum_by_country_ranks_us_over_fr() {
        // [(US,2010,male,5), (US,2010,female,3), (FR,2010,male,2)]
        let ds = small_dataset();
        let table = top_countries_by_total(&ds, &ds.all_indices());
        assert_eq!(
            table,
            vec![
                ("United States".to_string(), 8.0),
                ("France".to_string(), 2.0),
            ]
        );
    }

    #[test]
    fn mean_by_sex_over_filtered_us_rows() {
        let ds = small_dataset();
        let countries = ["United States".to_string()].into_iter().collect();
        let rows = filtered_indices(&ds, &ds.years, &ds.sexes, &countries);
        assert_eq!(rows.len(), 2);

        let table = mean_rate_by_sex(&ds, &rows);
        // One row per group, so the mean is the row's own rate.
        assert_eq!(table.len(), 2);
        let male = table.iter().find(|(s, _)| *s == Sex::Male).unwrap();
        let female = table.iter().find(|(s, _)| *s == Sex::Female).unwrap();
        assert!((male.1 - 5.0).abs() < 1e-12);
        assert!((female.1 - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_view_yields_empty_filtered_aggregates_only() {
        let ds = small_dataset();
        let years = [1999].into_iter().collect();
        let rows = filtered_indices(&ds, &years, &ds.sexes, &ds.countries);
        assert!(rows.is_empty());

        assert!(mean_rate_by_year(&ds, &rows).is_empty());
        assert!(mean_rate_by_year_sex(&ds, &rows).is_empty());
        // The unfiltered aggregates ignore the sidebar and stay populated.
        assert!(!top_countries_by_total(&ds, &ds.all_indices()).is_empty());
        assert!(!total_by_generation(&ds, &ds.all_indices()).is_empty());
    }

    #[test]
    fn group_sizes_cover_the_whole_source() {
        let ds = small_dataset();
        let all = ds.all_indices();
        let mut counted = 0usize;
        for (country, _) in sum_by(&ds, &all, |r| r.country.clone(), |_| 0.0) {
            counted += all
                .iter()
                .filter(|&&i| ds.records[i].country == country)
                .count();
        }
        assert_eq!(counted, ds.len());
    }

    #[test]
    fn age_means_are_sorted_descending_not_lexically() {
        let ds = rate_spread_dataset();
        let table = mean_rate_by_age(&ds, &ds.all_indices());
        // "15-24 years" sorts first lexically but carries the smaller mean.
        assert_eq!(
            table,
            vec![
                ("75+ years".to_string(), 99.0),
                ("15-24 years".to_string(), 1.0),
            ]
        );
    }

    #[test]
    fn generation_means_are_sorted_descending_not_lexically() {
        let ds = rate_spread_dataset();
        let table = mean_rate_by_generation(&ds, &ds.all_indices());
        assert_eq!(
            table,
            vec![("Silent".to_string(), 99.0), ("Boomers".to_string(), 1.0)]
        );
    }

    #[test]
    fn top_n_is_capped_and_non_increasing() {
        let ds = small_dataset();
        let table = top_countries_by_rate(&ds, &ds.all_indices());
        assert!(table.len() <= 10);
        for pair in table.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn year_sex_pairs_are_grouped_jointly() {
        let ds = small_dataset();
        let table = mean_rate_by_year_sex(&ds, &ds.all_indices());
        // 2010×male covers US and FR rows; 2010×female only the US one.
        assert_eq!(table.len(), 2);
        let male = table
            .iter()
            .find(|((_, s), _)| *s == Sex::Male)
            .expect("male group");
        assert!((male.1 - (5.0 + 2.0) / 2.0).abs() < 1e-12);
    }
}
