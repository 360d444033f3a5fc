use std::collections::BTreeSet;

use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::Selection;
use crate::state::AppState;
use crate::views::Page;

// ---------------------------------------------------------------------------
// Left side panel – page selector and filter widgets
// ---------------------------------------------------------------------------

/// Render the sidebar: the page radio plus one collapsible filter section
/// per dimension. Any change re-runs the whole filter pipeline.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Pages");
    for page in Page::ALL {
        ui.selectable_value(&mut state.page, page, page.title());
    }
    ui.separator();

    ui.heading("Filters");
    ui.separator();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // Field borrows are disjoint: each section mutates one selection
            // while reading the dataset's distinct values.
            changed |= filter_section(
                ui,
                "Select Year(s)",
                &mut state.year_filter,
                &state.dataset.years,
            );
            changed |= filter_section(
                ui,
                "Select Sex",
                &mut state.sex_filter,
                &state.dataset.sexes,
            );
            changed |= filter_section(
                ui,
                "Select Countries",
                &mut state.country_filter,
                &state.dataset.countries,
            );
        });

    if changed {
        state.refilter();
    }
}

/// One multi-select filter widget: All/None shortcuts plus a checkbox per
/// distinct value. Returns whether the selection changed this frame.
fn filter_section<T>(
    ui: &mut Ui,
    label: &str,
    selection: &mut Selection<T>,
    distinct: &BTreeSet<T>,
) -> bool
where
    T: Ord + Clone + ToString,
{
    let mut changed = false;
    let (n_selected, n_total) = selection.summary(distinct);
    let header_text = format!("{label}  ({n_selected}/{n_total})");

    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    selection.select_all();
                    changed = true;
                }
                if ui.small_button("None").clicked() {
                    selection.select_none();
                    changed = true;
                }
            });

            for value in distinct {
                let mut checked = selection.is_selected(value);
                if ui.checkbox(&mut checked, value.to_string()).changed() {
                    selection.toggle(value, distinct);
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: app title and a row-count summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Suicide Data Insights");
        ui.separator();
        ui.label(format!(
            "{} rows loaded, {} match the current filters",
            state.dataset.len(),
            state.visible_indices.len()
        ));
        ui.separator();
        ui.label(format!(
            "{} countries · {}–{}",
            state.dataset.countries.len(),
            state.dataset.years.first().copied().unwrap_or_default(),
            state.dataset.years.last().copied().unwrap_or_default(),
        ));
    });
}
