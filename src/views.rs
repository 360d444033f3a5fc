use std::collections::BTreeMap;

use crate::data::aggregate;
use crate::data::model::{Dataset, Sex};

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// The three fixed pages of the dashboard, selected in the sidebar.
/// Being an enum, there is no "unknown page" branch to fall through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    KpiDashboard,
    OtherReports,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Home, Page::KpiDashboard, Page::OtherReports];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::KpiDashboard => "KPI's Dashboard",
            Page::OtherReports => "Other Reports",
        }
    }
}

// ---------------------------------------------------------------------------
// Chart views
// ---------------------------------------------------------------------------

/// Year/sex grid behind the density heatmap. Axes list only the values that
/// actually occur in the source rows; missing cells stay unpainted.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapGrid {
    pub years: Vec<i32>,
    pub sexes: Vec<Sex>,
    pub cells: BTreeMap<(i32, Sex), f64>,
}

impl HeatmapGrid {
    fn from_pairs(pairs: Vec<((i32, Sex), f64)>) -> Self {
        let mut years = Vec::new();
        let mut sexes = Vec::new();
        let cells: BTreeMap<(i32, Sex), f64> = pairs.into_iter().collect();
        for (year, sex) in cells.keys() {
            if years.last() != Some(year) {
                years.push(*year);
            }
            if !sexes.contains(sex) {
                sexes.push(*sex);
            }
        }
        sexes.sort();
        HeatmapGrid { years, sexes, cells }
    }
}

/// One chart: an aggregate table already shaped for its visual.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    /// (x, y) points, here year vs. mean rate.
    Line(Vec<[f64; 2]>),
    /// Labelled bars in render order.
    Bar(Vec<(String, f64)>),
    /// Labelled slices; rendered as a donut.
    Pie(Vec<(String, f64)>),
    Heatmap(HeatmapGrid),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub title: &'static str,
    /// Axis / value caption, e.g. "suicides/100k pop".
    pub value_label: &'static str,
    pub body: ChartBody,
}

/// Build the ordered chart list for a page.
///
/// `visible` is the filtered view (row indices). Two views intentionally
/// ignore it and read the whole dataset instead: the country totals bar and
/// the generation share pie. The source dashboard behaves this way even
/// though sibling charts on the same page honor the filters; preserved here
/// for fidelity (see DESIGN.md).
pub fn views_for(page: Page, dataset: &Dataset, visible: &[usize]) -> Vec<ChartView> {
    match page {
        // Home renders tables, not charts.
        Page::Home => Vec::new(),

        Page::KpiDashboard => vec![
            ChartView {
                title: "Suicide Trend Over Time",
                value_label: "suicides/100k pop",
                body: ChartBody::Line(
                    aggregate::mean_rate_by_year(dataset, visible)
                        .into_iter()
                        .map(|(year, mean)| [f64::from(year), mean])
                        .collect(),
                ),
            },
            ChartView {
                title: "Top 10 Countries by Total Suicides",
                value_label: "suicides_no",
                body: ChartBody::Bar(aggregate::top_countries_by_total(
                    dataset,
                    &dataset.all_indices(),
                )),
            },
            ChartView {
                title: "Suicide by Sex",
                value_label: "suicides/100k pop",
                body: ChartBody::Bar(
                    aggregate::mean_rate_by_sex(dataset, visible)
                        .into_iter()
                        .map(|(sex, mean)| (sex.to_string(), mean))
                        .collect(),
                ),
            },
            ChartView {
                title: "Suicide by Age",
                value_label: "suicides/100k pop",
                body: ChartBody::Bar(aggregate::mean_rate_by_age(dataset, visible)),
            },
            ChartView {
                title: "Top 10 Countries by Suicide Rate",
                value_label: "suicides/100k pop",
                body: ChartBody::Bar(aggregate::top_countries_by_rate(dataset, visible)),
            },
        ],

        Page::OtherReports => vec![
            ChartView {
                title: "Suicides per 100k by Generation",
                value_label: "suicides/100k pop",
                body: ChartBody::Bar(aggregate::mean_rate_by_generation(dataset, visible)),
            },
            ChartView {
                title: "Share of Total Suicides by Generation",
                value_label: "suicides_no",
                body: ChartBody::Pie(aggregate::total_by_generation(
                    dataset,
                    &dataset.all_indices(),
                )),
            },
            ChartView {
                title: "Year & Sex Heatmap",
                value_label: "suicides/100k pop",
                body: ChartBody::Heatmap(HeatmapGrid::from_pairs(
                    aggregate::mean_rate_by_year_sex(dataset, visible),
                )),
            },
        ],
    }
}

// ---------------------------------------------------------------------------
// Home page glossary
// ---------------------------------------------------------------------------

/// Static column descriptions shown on the Home page.
pub fn column_glossary() -> &'static [(&'static str, &'static str)] {
    &[
        ("country", "Name of the country."),
        ("year", "Year of the recorded data."),
        ("sex", "Gender category: male or female."),
        ("age", "Age group in 5-year intervals."),
        (
            "suicides_no",
            "Total number of suicides in that demographic group.",
        ),
        ("population", "Population count for the same group."),
        ("suicides/100k pop", "Suicides per 100,000 people."),
        ("country-year", "Combined key of country and year."),
        (
            "HDI for year",
            "Human Development Index for that year (if available).",
        ),
        ("gdp_for_year ($)", "Total GDP for the year in US dollars."),
        ("gdp_per_capita ($)", "GDP per person in US dollars."),
        (
            "generation",
            "Generation label (e.g., Generation X, Boomers, etc.).",
        ),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::testutil::{rate_spread_dataset, small_dataset};

    #[test]
    fn other_reports_has_three_views_in_order() {
        let ds = small_dataset();
        let views = views_for(Page::OtherReports, &ds, &ds.all_indices());
        assert_eq!(views.len(), 3);
        assert!(matches!(views[0].body, ChartBody::Bar(_)));
        assert!(matches!(views[1].body, ChartBody::Pie(_)));
        assert!(matches!(views[2].body, ChartBody::Heatmap(_)));
        assert_eq!(views[0].title, "Suicides per 100k by Generation");
        assert_eq!(views[1].title, "Share of Total Suicides by Generation");
        assert_eq!(views[2].title, "Year & Sex Heatmap");
    }

    #[test]
    fn kpi_dashboard_has_five_views_in_order() {
        let ds = small_dataset();
        let views = views_for(Page::KpiDashboard, &ds, &ds.all_indices());
        let titles: Vec<_> = views.iter().map(|v| v.title).collect();
        assert_eq!(
            titles,
            vec![
                "Suicide Trend Over Time",
                "Top 10 Countries by Total Suicides",
                "Suicide by Sex",
                "Suicide by Age",
                "Top 10 Countries by Suicide Rate",
            ]
        );
        assert!(matches!(views[0].body, ChartBody::Line(_)));
    }

    #[test]
    fn home_produces_no_charts() {
        let ds = small_dataset();
        assert!(views_for(Page::Home, &ds, &ds.all_indices()).is_empty());
    }

    #[test]
    fn unfiltered_views_ignore_an_empty_filtered_view() {
        let ds = small_dataset();
        let views = views_for(Page::OtherReports, &ds, &[]);
        match (&views[0].body, &views[1].body, &views[2].body) {
            (ChartBody::Bar(gen_mean), ChartBody::Pie(gen_total), ChartBody::Heatmap(grid)) => {
                assert!(gen_mean.is_empty());
                assert!(!gen_total.is_empty());
                assert!(grid.cells.is_empty());
            }
            other => panic!("unexpected bodies: {other:?}"),
        }
    }

    #[test]
    fn age_and_generation_bars_render_descending_by_mean() {
        let ds = rate_spread_dataset();
        let visible = ds.all_indices();

        let kpi = views_for(Page::KpiDashboard, &ds, &visible);
        let ChartBody::Bar(age_bars) = &kpi[3].body else {
            panic!("expected a bar chart for the by-age view");
        };
        let other = views_for(Page::OtherReports, &ds, &visible);
        let ChartBody::Bar(gen_bars) = &other[0].body else {
            panic!("expected a bar chart for the by-generation view");
        };

        for bars in [age_bars, gen_bars] {
            assert!(bars.len() > 1);
            for pair in bars.windows(2) {
                assert!(pair[0].1 >= pair[1].1);
            }
        }
        // Key order and mean order disagree in this fixture, so the sort
        // is actually observable.
        assert_eq!(age_bars[0].0, "75+ years");
        assert_eq!(gen_bars[0].0, "Silent");
    }

    #[test]
    fn glossary_covers_all_twelve_columns() {
        assert_eq!(column_glossary().len(), 12);
    }
}
