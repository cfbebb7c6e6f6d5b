use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::loader::CORE_COLUMNS;
use crate::data::model::VehicleDataset;
use crate::data::summary::FilteredResult;

// ---------------------------------------------------------------------------
// Record table (central panel)
// ---------------------------------------------------------------------------

/// Render the filtered records: the six interpreted columns followed by the
/// passthrough columns. Missing cells render blank.
pub fn records_table(ui: &mut Ui, dataset: &VehicleDataset, results: &FilteredResult) {
    let n_columns = CORE_COLUMNS.len() + dataset.extra_columns.len();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(true)
        .max_scroll_height(320.0)
        .columns(Column::auto().at_least(80.0), n_columns)
        .header(20.0, |mut header| {
            let titles = CORE_COLUMNS
                .iter()
                .copied()
                .chain(dataset.extra_columns.iter().map(String::as_str));
            for title in titles {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, results.indices.len(), |mut row| {
                let rec = &dataset.records[results.indices[row.index()]];

                row.col(|ui| {
                    ui.label(rec.reg_no.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(rec.vehicle_type.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(rec.status.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    ui.label(rec.allotted_to.as_deref().unwrap_or(""));
                });
                row.col(|ui| {
                    let text = rec
                        .odometer_closing
                        .map(|v| format!("{v}"))
                        .unwrap_or_default();
                    ui.label(text);
                });
                row.col(|ui| {
                    let text = rec
                        .year_of_manufacture
                        .map(|y| y.to_string())
                        .unwrap_or_default();
                    ui.label(text);
                });
                for name in &dataset.extra_columns {
                    let text = rec.extra.get(name).map(ToString::to_string).unwrap_or_default();
                    row.col(|ui| {
                        ui.label(text);
                    });
                }
            });
        });
}
