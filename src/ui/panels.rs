use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::status_color;
use crate::data::model::Facet;
use crate::data::summary::{Summary, STATUS_OFFROAD, STATUS_ONROAD};
use crate::state::{AppState, ChartKind};
use crate::ui::{charts, table};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: record counts and the display-mode toggle.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("View", |ui: &mut Ui| {
            let mut always_show = state.always_show_unfiltered;
            if ui
                .checkbox(&mut always_show, "Show all records when no filter is set")
                .changed()
            {
                state.set_always_show_unfiltered(always_show);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!("{} records loaded", state.dataset.len()));
        if let Some(results) = &state.results {
            ui.separator();
            ui.label(format!("{} matching", results.summary.total));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter sidebar. Facet options always come from the full
/// dataset so the selectors stay stable while the view narrows.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Registration search ----
            ui.strong("Registration No.");
            if ui
                .text_edit_singleline(&mut state.criteria.registration_search)
                .changed()
            {
                changed = true;
            }
            ui.separator();

            // ---- Per-facet selectors (collapsible) ----
            for facet in Facet::ALL {
                let options = state.dataset.facets.values(facet).to_vec();
                let n_selected = state.criteria.selection(facet).len();
                let header_text = if n_selected == 0 {
                    format!("{}  (any)", facet.label())
                } else {
                    format!("{}  ({}/{})", facet.label(), n_selected, options.len())
                };

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(facet.label())
                    .default_open(false)
                    .show(ui, |ui: &mut Ui| {
                        if ui.small_button("Clear").clicked() {
                            state.criteria.selection_mut(facet).clear();
                            changed = true;
                        }

                        let selected = state.criteria.selection_mut(facet);
                        for value in &options {
                            let mut checked = selected.contains(value);
                            if ui.checkbox(&mut checked, value.as_str()).changed() {
                                if checked {
                                    selected.insert(value.clone());
                                } else {
                                    selected.remove(value);
                                }
                                changed = true;
                            }
                        }
                    });
            }

            ui.separator();
            if ui.button("Clear all filters").clicked() {
                state.criteria.clear();
                changed = true;
            }
        });

    if changed {
        state.refilter();
    }
}

// ---------------------------------------------------------------------------
// Central panel – table, counters, charts
// ---------------------------------------------------------------------------

pub fn dashboard(ui: &mut Ui, state: &mut AppState) {
    let AppState {
        dataset,
        results,
        chart,
        ..
    } = state;

    // Prompt state of the show-only-when-filtered mode.
    let Some(results) = results else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Set a filter in the sidebar to view vehicle records.");
        });
        return;
    };

    ui.heading("Filtered Vehicle Records");
    ui.add_space(4.0);

    metrics_row(ui, &results.summary);
    ui.separator();

    table::records_table(ui, dataset, results);
    ui.separator();

    ui.heading("Visual Insights");
    if results.is_empty() {
        ui.label("No matching records found. Try adjusting your filters or search term.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        for kind in ChartKind::ALL {
            ui.selectable_value(chart, kind, kind.label());
        }
    });
    charts::chart(ui, *chart, results);
}

fn metrics_row(ui: &mut Ui, summary: &Summary) {
    ui.columns(3, |cols: &mut [Ui]| {
        metric(&mut cols[0], "Total Vehicles", summary.total, Color32::LIGHT_BLUE);
        metric(
            &mut cols[1],
            "Onroad Vehicles",
            summary.onroad,
            status_color(STATUS_ONROAD),
        );
        metric(
            &mut cols[2],
            "Offroad Vehicles",
            summary.offroad,
            status_color(STATUS_OFFROAD),
        );
    });
}

fn metric(ui: &mut Ui, label: &str, value: usize, color: Color32) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(label);
        ui.heading(RichText::new(value.to_string()).size(24.0).color(color));
    });
}
