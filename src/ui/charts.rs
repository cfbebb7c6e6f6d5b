use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints};

use crate::color::{generate_palette, status_color};
use crate::data::summary::FilteredResult;
use crate::state::ChartKind;

// ---------------------------------------------------------------------------
// Insight charts (central panel)
// ---------------------------------------------------------------------------

/// Render the selected frequency chart for the current result.
pub fn chart(ui: &mut Ui, kind: ChartKind, results: &FilteredResult) {
    match kind {
        ChartKind::ByVehicleType => {
            let palette = generate_palette(results.by_vehicle_type.len());
            category_bars(ui, "chart_by_vehicle_type", &results.by_vehicle_type, |i, _| {
                palette[i]
            });
        }
        ChartKind::ByStatus => {
            category_bars(ui, "chart_by_status", &results.by_status, |_, label| {
                status_color(label)
            });
        }
        ChartKind::ByYear => year_line(ui, &results.by_year),
    }
}

/// One bar per category at integer x positions, labelled via the axis
/// formatter so non-integer grid marks stay blank.
fn category_bars(
    ui: &mut Ui,
    id: &str,
    counts: &[(String, usize)],
    color: impl Fn(usize, &str) -> Color32,
) {
    let labels: Vec<String> = counts.iter().map(|(label, _)| label.clone()).collect();
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (label, n))| {
            Bar::new(i as f64, *n as f64)
                .name(label)
                .width(0.6)
                .fill(color(i, label))
        })
        .collect();

    Plot::new(id)
        .height(280.0)
        .y_axis_label("Vehicles")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let rounded = mark.value.round();
            if rounded < 0.0 || (mark.value - rounded).abs() > 1e-6 {
                return String::new();
            }
            labels.get(rounded as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

fn year_line(ui: &mut Ui, counts: &[(i32, usize)]) {
    let points: PlotPoints = counts
        .iter()
        .map(|&(year, n)| [year as f64, n as f64])
        .collect();

    Plot::new("chart_by_year")
        .height(280.0)
        .x_axis_label("Year of Manufacture")
        .y_axis_label("Vehicles")
        .x_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name("Vehicles").width(1.5));
        });
}
