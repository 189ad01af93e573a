use crate::classification::{ClassificationBand, ClassificationTable, ClassificationTables};

pub const HEALTH_SCORE: &str = "healthScore";
pub const HEART_RATE: &str = "heartRate";
pub const BLOOD_PRESSURE_SYS: &str = "bloodPressureSys";
pub const BLOOD_PRESSURE_DIA: &str = "bloodPressureDia";
pub const VO2_MAX: &str = "vo2Max";
pub const BMI: &str = "bmi";

const RED: &str = "#dc2626";
const ORANGE: &str = "#f97316";
const GREEN: &str = "#16a34a";
const DARK_GREEN: &str = "#15803d";
const BLUE: &str = "#2563eb";

fn band(min: f64, max: Option<f64>, label: &str, color: &str) -> ClassificationBand {
    ClassificationBand::new(Some(min), max, label, color)
}

// Boundaries are inclusive on both ends and deliberately left as deployed
// (e.g. 12 is "Needs Attention", 74.995 falls between bands).
pub fn tables() -> ClassificationTables {
    ClassificationTables::from([
        (
            HEALTH_SCORE.to_string(),
            ClassificationTable::new(vec![
                band(0.0, Some(12.0), "Needs Attention", RED),
                band(12.0, Some(74.99), "Average", ORANGE),
                band(75.0, Some(89.99), "Good", GREEN),
                band(90.0, None, "Excellent", DARK_GREEN),
            ]),
        ),
        (
            HEART_RATE.to_string(),
            ClassificationTable::new(vec![
                band(0.0, Some(59.0), "Below Normal", BLUE),
                band(60.0, Some(100.0), "Normal", GREEN),
                band(101.0, None, "Elevated", RED),
            ]),
        ),
        (
            BLOOD_PRESSURE_SYS.to_string(),
            ClassificationTable::new(vec![
                band(0.0, Some(89.0), "Low", BLUE),
                band(90.0, Some(120.0), "Ideal", GREEN),
                band(121.0, Some(139.0), "Elevated", ORANGE),
                band(140.0, None, "Hypertension", RED),
            ]),
        ),
        (
            BLOOD_PRESSURE_DIA.to_string(),
            ClassificationTable::new(vec![
                band(0.0, Some(59.0), "Low", BLUE),
                band(60.0, Some(80.0), "Ideal", GREEN),
                band(81.0, Some(90.0), "Elevated", ORANGE),
                band(91.0, None, "Hypertension", RED),
            ]),
        ),
        (
            VO2_MAX.to_string(),
            ClassificationTable::new(vec![
                band(0.0, Some(30.0), "Low", RED),
                band(31.0, Some(45.0), "Average", ORANGE),
                band(46.0, Some(60.0), "Good", GREEN),
                band(61.0, None, "Excellent", DARK_GREEN),
            ]),
        ),
        (
            BMI.to_string(),
            ClassificationTable::new(vec![
                band(0.0, Some(18.4), "Underweight", BLUE),
                band(18.5, Some(24.9), "Healthy", GREEN),
                band(25.0, Some(29.9), "Overweight", ORANGE),
                band(30.0, None, "Obese", RED),
            ]),
        ),
    ])
}
