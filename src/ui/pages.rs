use eframe::egui::{CollapsingHeader, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::Record;
use crate::state::AppState;
use crate::ui::charts;
use crate::views::{self, Page};

/// How many rows the Home page previews.
const PREVIEW_ROWS: usize = 10;

const PREVIEW_HEADERS: [&str; 12] = [
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
];

// ---------------------------------------------------------------------------
// Central panel dispatch
// ---------------------------------------------------------------------------

/// Render the active page. The entire page is rebuilt from the current
/// filtered view on every frame; nothing is cached across interactions.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    match state.page {
        Page::Home => home_page(ui, state),
        Page::KpiDashboard | Page::OtherReports => chart_page(ui, state),
    }
}

// ---------------------------------------------------------------------------
// Home page – row preview + glossary
// ---------------------------------------------------------------------------

fn home_page(ui: &mut Ui, state: &AppState) {
    ui.heading("Global Suicide Analysis Dashboard");
    ui.label("Welcome! Use the sidebar to filter the data and navigate between pages.");
    ui.add_space(8.0);

    ui.strong(format!(
        "First {} rows of the filtered data",
        PREVIEW_ROWS.min(state.visible_indices.len())
    ));
    ui.push_id("row_preview", |ui: &mut Ui| {
        preview_table(ui, state);
    });

    ui.add_space(12.0);
    CollapsingHeader::new(RichText::new("Dataset column descriptions").strong())
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.push_id("glossary", |ui: &mut Ui| {
                glossary_table(ui);
            });
        });
}

fn preview_table(ui: &mut Ui, state: &AppState) {
    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), PREVIEW_HEADERS.len())
        .header(20.0, |mut header| {
            for name in PREVIEW_HEADERS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for &idx in state.visible_indices.iter().take(PREVIEW_ROWS) {
                let rec = &state.dataset.records[idx];
                body.row(18.0, |mut row| {
                    for cell in record_cells(rec) {
                        row.col(|ui| {
                            ui.label(cell.clone());
                        });
                    }
                });
            }
        });
}

fn record_cells(rec: &Record) -> [String; 12] {
    [
        rec.country.clone(),
        rec.year.to_string(),
        rec.sex.to_string(),
        rec.age.clone(),
        rec.suicides_no.to_string(),
        rec.population.to_string(),
        format!("{:.2}", rec.suicides_per_100k),
        rec.country_year.clone(),
        rec.hdi_for_year
            .map(|v| format!("{v:.3}"))
            .unwrap_or_else(|| "–".to_string()),
        rec.gdp_for_year
            .map(|v| format!("{v:.0}"))
            .unwrap_or_else(|| "–".to_string()),
        format!("{:.0}", rec.gdp_per_capita),
        rec.generation.clone(),
    ]
}

fn glossary_table(ui: &mut Ui) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().resizable(true))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Column Name");
            });
            header.col(|ui| {
                ui.strong("Description");
            });
        })
        .body(|mut body| {
            for (name, description) in views::column_glossary() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(*name);
                    });
                    row.col(|ui| {
                        ui.label(*description);
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Chart pages – the fixed view sequence for the selected page
// ---------------------------------------------------------------------------

fn chart_page(ui: &mut Ui, state: &AppState) {
    ui.heading(state.page.title());

    let chart_views = views::views_for(state.page, &state.dataset, &state.visible_indices);

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (i, view) in chart_views.iter().enumerate() {
                ui.add_space(10.0);
                ui.strong(view.title);
                charts::render(ui, i, view);
            }
        });
}
