use super::CutoffTable;
use crate::calculators::calendar::YearMonth;
use crate::calculators::recruitment::domain::Specialty;

/// Column order of [`PUBLISHED_ROUNDS`].
const COLUMNS: [Specialty; 8] = [
    Specialty::General,
    Specialty::Electronics,
    Specialty::ChemicalDefense,
    Specialty::Medical,
    Specialty::Mechanical,
    Specialty::Driving,
    Specialty::Maintenance,
    Specialty::Communications,
];

/// Army technical-track first-round cutoffs as published per round.
const PUBLISHED_ROUNDS: &[(i32, u32, [f32; 8])] = &[
    (2024, 2, [97.0, 95.0, 76.0, 105.0, 71.0, 91.0, 70.0, 72.0]),
    (2024, 4, [95.0, 85.0, 76.0, 111.0, 69.0, 89.0, 57.0, 70.0]),
    (2024, 5, [95.0, 93.0, 75.0, 111.0, 64.0, 88.0, 56.0, 71.0]),
    (2024, 6, [95.0, 91.0, 75.0, 109.0, 69.0, 87.0, 70.0, 70.0]),
    (2024, 7, [95.0, 92.0, 75.0, 109.0, 66.0, 88.0, 63.0, 71.0]),
    (2024, 8, [95.0, 92.0, 74.0, 113.0, 62.0, 90.0, 55.0, 67.0]),
    (2024, 9, [96.0, 93.0, 85.0, 113.0, 69.0, 91.0, 63.0, 81.0]),
    (2024, 11, [99.0, 98.0, 82.0, 115.0, 86.0, 92.0, 83.0, 92.0]),
    (2024, 12, [99.0, 91.0, 82.0, 115.0, 92.0, 92.0, 83.0, 93.0]),
    (2025, 1, [99.0, 92.0, 85.0, 115.0, 90.0, 93.0, 75.0, 94.0]),
    (2025, 3, [99.0, 96.0, 77.0, 115.0, 89.0, 93.0, 72.0, 93.0]),
];

impl CutoffTable {
    /// The built-in dataset of published rounds.
    pub fn published() -> Self {
        let mut table = Self::new();
        for (year, month, scores) in PUBLISHED_ROUNDS {
            let round = YearMonth::from_parts(*year, *month);
            for (specialty, score) in COLUMNS.iter().zip(scores) {
                table.insert(round, *specialty, *score);
            }
        }
        table
    }
}
