//! UI layer: egui rendering only, no filtering logic of its own.

pub mod charts;
pub mod panels;
pub mod table;
