/// Employee-matching blend: semantic similarity against the required-skill
/// query, plus remaining availability. Availability keeps enough weight that
/// a fully allocated perfect-skill employee does not always win.
pub const EMPLOYEE_WEIGHTS: Weights = Weights {
    similarity: 0.7,
    availability: 0.3,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub similarity: f64,
    pub availability: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.similarity + self.availability
    }
}

/// Resume-ranking explanation bands, on the percent composite scale.
/// Lower bounds are inclusive: exactly 70.0 is "excellent".
pub const EXCELLENT_BAND_MIN: f64 = 70.0;
pub const GOOD_BAND_MIN: f64 = 50.0;

/// How many matched skills each band names in its explanation.
pub const EXCELLENT_SKILLS_NAMED: usize = 5;
pub const GOOD_SKILLS_NAMED: usize = 4;
pub const MODERATE_SKILLS_NAMED: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_weights_sum_to_one() {
        assert!((EMPLOYEE_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bands_are_ordered() {
        assert!(EXCELLENT_BAND_MIN > GOOD_BAND_MIN);
        assert!(EXCELLENT_SKILLS_NAMED > GOOD_SKILLS_NAMED);
        assert!(GOOD_SKILLS_NAMED > MODERATE_SKILLS_NAMED);
    }
}
