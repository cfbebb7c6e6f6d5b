use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::summary::{STATUS_OFFROAD, STATUS_ONROAD};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues. Used to
/// colour the bars of the category charts.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Status colours
// ---------------------------------------------------------------------------

/// Fixed semantic colours for the status chart: green for on-road, red for
/// off-road, grey for anything outside the expected domain.
pub fn status_color(status: &str) -> Color32 {
    match status {
        STATUS_ONROAD => Color32::from_rgb(0x2e, 0xa0, 0x4e),
        STATUS_OFFROAD => Color32::from_rgb(0xc9, 0x3c, 0x3c),
        _ => Color32::GRAY,
    }
}
