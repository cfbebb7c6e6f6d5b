//! Writes a synthetic `Cleaned_Vehicle_Deployment.xlsx` for trying out the
//! dashboard, mirroring the quirks of the production sheet: a duplicate
//! header embedded as the first data row, "N/A" odometer cells, and the
//! occasional blank status or year.

use rust_xlsxwriter::{Workbook, XlsxError};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

const HEADERS: [&str; 7] = [
    "Reg No",
    "Vehicle Type",
    "Onroad/Offroad",
    "Allotted To",
    "Odometer (Closing SPR)",
    "Year of Manufacture",
    "Remarks",
];

const VEHICLE_TYPES: [&str; 5] = ["Jeep", "Car", "Motorcycle", "Bus", "Van"];
const UNITS: [&str; 5] = ["Traffic", "HQ", "Armed Reserve", "Coastal", "Cyber Cell"];
const SERIES: [&str; 4] = ["BS", "AB", "CD", "PQ"];

fn main() -> Result<(), XlsxError> {
    let mut rng = SimpleRng::new(42);
    let n_vehicles = 120u32;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sheet1")?;

    for (col, h) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *h)?;
    }
    // The production export repeats the header as the first data row; the
    // loader is expected to drop it, so the sample carries it too.
    for (col, h) in HEADERS.iter().enumerate() {
        sheet.write_string(1, col as u16, *h)?;
    }

    for i in 0..n_vehicles {
        let row = i + 2;

        let reg = format!(
            "KL {:02} {} {:04}",
            rng.below(15) + 1,
            SERIES[rng.below(SERIES.len() as u64) as usize],
            rng.below(9000) + 1000
        );
        sheet.write_string(row, 0, &reg)?;

        let vehicle_type = VEHICLE_TYPES[rng.below(VEHICLE_TYPES.len() as u64) as usize];
        sheet.write_string(row, 1, vehicle_type)?;

        // Mostly Onroad, some Offroad, a few blank status cells.
        let status = match rng.below(10) {
            0 => None,
            1..=3 => Some("Offroad"),
            _ => Some("Onroad"),
        };
        if let Some(status) = status {
            sheet.write_string(row, 2, status)?;
        }

        sheet.write_string(row, 3, UNITS[rng.below(UNITS.len() as u64) as usize])?;

        // Odometer: usually a number, sometimes the literal "N/A".
        if rng.below(8) == 0 {
            sheet.write_string(row, 4, "N/A")?;
        } else {
            sheet.write_number(row, 4, (rng.below(180_000) + 5_000) as f64)?;
        }

        // Year: occasionally blank.
        if rng.below(12) != 0 {
            sheet.write_number(row, 5, (2005 + rng.below(19)) as f64)?;
        }

        if rng.below(5) == 0 {
            sheet.write_string(row, 6, "serviced")?;
        }
    }

    let output_path = "Cleaned_Vehicle_Deployment.xlsx";
    workbook.save(output_path)?;

    println!("Wrote {n_vehicles} vehicle records to {output_path}");
    Ok(())
}
