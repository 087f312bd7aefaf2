use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiBand {
    Underweight,
    Healthy,
    Overweight,
}

impl fmt::Display for BmiBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiBand::Underweight => "Underweight",
            BmiBand::Healthy => "Healthy",
            BmiBand::Overweight => "Overweight",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bmi {
    /// Rounded to one decimal
    pub value: f64,
    pub band: BmiBand,
}

/// Body mass index from weight in kilograms and height in centimeters.
/// Returns `None` for non-positive or non-finite inputs.
pub fn bmi(weight_kg: f64, height_cm: f64) -> Option<Bmi> {
    if !(weight_kg.is_finite() && height_cm.is_finite()) || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }

    let meters = height_cm / 100.0;
    let value = (weight_kg / (meters * meters) * 10.0).round() / 10.0;
    let band = if value < 18.5 {
        BmiBand::Underweight
    } else if value < 25.0 {
        BmiBand::Healthy
    } else {
        BmiBand::Overweight
    };

    Some(Bmi { value, band })
}
