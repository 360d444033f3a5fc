use crate::data::filter::{filtered_indices, Selection};
use crate::data::model::{Dataset, Sex};
use crate::views::Page;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is owned here, loaded once in `main` and read-only for the
/// lifetime of the process; everything else is per-session selection state.
pub struct AppState {
    /// The immutable dataset.
    pub dataset: Dataset,

    /// Which page the central panel shows.
    pub page: Page,

    /// Per-dimension filter selections, all defaulting to "All".
    pub year_filter: Selection<i32>,
    pub sex_filter: Selection<Sex>,
    pub country_filter: Selection<String>,

    /// Indices of rows passing the current filters (cached).
    pub visible_indices: Vec<usize>,
}

impl AppState {
    /// Wrap a freshly loaded dataset with everything selected.
    pub fn new(dataset: Dataset) -> Self {
        let visible_indices = dataset.all_indices();
        Self {
            dataset,
            page: Page::Home,
            year_filter: Selection::All,
            sex_filter: Selection::All,
            country_filter: Selection::All,
            visible_indices,
        }
    }

    /// Recompute `visible_indices` after a filter change. Resolution turns
    /// each selection into its effective value set first, so "All" always
    /// tracks exactly the values present in the data.
    pub fn refilter(&mut self) {
        let years = self.year_filter.resolve(&self.dataset.years);
        let sexes = self.sex_filter.resolve(&self.dataset.sexes);
        let countries = self.country_filter.resolve(&self.dataset.countries);
        self.visible_indices = filtered_indices(&self.dataset, &years, &sexes, &countries);
        log::trace!(
            "refilter: {} of {} rows visible",
            self.visible_indices.len(),
            self.dataset.len()
        );
    }
}
