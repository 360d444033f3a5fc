use std::collections::BTreeSet;

use super::model::{Dataset, Sex};

// ---------------------------------------------------------------------------
// Selection – per-dimension filter state
// ---------------------------------------------------------------------------

/// What the user has chosen for one filterable dimension.
///
/// `All` means "every distinct value the dataset holds" and is a distinct
/// variant rather than a sentinel value mixed into the set, so the filtering
/// code never has to compare against a magic string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Ord + Clone> {
    All,
    Explicit(BTreeSet<T>),
}

impl<T: Ord + Clone> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Ord + Clone> Selection<T> {
    /// Resolve to the effective value set.
    ///
    /// `All` becomes the dimension's full distinct-value set; an explicit
    /// choice is returned verbatim, even when it names values the dataset
    /// never saw (those simply match zero rows downstream).
    pub fn resolve(&self, distinct: &BTreeSet<T>) -> BTreeSet<T> {
        match self {
            Selection::All => distinct.clone(),
            Selection::Explicit(chosen) => chosen.clone(),
        }
    }

    /// Whether `value` is currently selected (`All` selects everything).
    pub fn is_selected(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Explicit(chosen) => chosen.contains(value),
        }
    }

    /// Flip one value. Unchecking a value while `All` is active first
    /// materializes the full set so the remaining values stay selected.
    pub fn toggle(&mut self, value: &T, distinct: &BTreeSet<T>) {
        let mut chosen = match std::mem::replace(self, Selection::All) {
            Selection::All => distinct.clone(),
            Selection::Explicit(chosen) => chosen,
        };
        if !chosen.remove(value) {
            chosen.insert(value.clone());
        }
        *self = Selection::Explicit(chosen);
    }

    /// Back to selecting everything.
    pub fn select_all(&mut self) {
        *self = Selection::All;
    }

    /// Select nothing. Downstream this yields an empty filtered view, which
    /// renders as empty charts rather than an error.
    pub fn select_none(&mut self) {
        *self = Selection::Explicit(BTreeSet::new());
    }

    /// `(selected, total)` counts for the sidebar section headers.
    pub fn summary(&self, distinct: &BTreeSet<T>) -> (usize, usize) {
        let selected = match self {
            Selection::All => distinct.len(),
            Selection::Explicit(chosen) => chosen.len(),
        };
        (selected, distinct.len())
    }
}

// ---------------------------------------------------------------------------
// Row filtering
// ---------------------------------------------------------------------------

/// Return indices of rows whose (year, sex, country) all fall inside the
/// resolved filter sets. AND across dimensions, OR within a set; an empty
/// set for any dimension therefore selects nothing.
pub fn filtered_indices(
    dataset: &Dataset,
    years: &BTreeSet<i32>,
    sexes: &BTreeSet<Sex>,
    countries: &BTreeSet<String>,
) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            years.contains(&rec.year)
                && sexes.contains(&rec.sex)
                && countries.contains(&rec.country)
        })
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
