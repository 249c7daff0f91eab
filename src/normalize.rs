/// Mean observed frequency over the window as a fraction of the maximum.
///
/// Normally in (0, 1]. Not clamped: a core reading above its nominal max
/// gives a factor above 1, and the overshoot ends up in the idle share.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationFactor(pub f64);

impl NormalizationFactor {
    pub const UNIT: NormalizationFactor = NormalizationFactor(1.0);

    pub fn value(self) -> f64 {
        self.0
    }
}

pub fn normalize(first_current: f64, second_current: f64, max: f64) -> NormalizationFactor {
    NormalizationFactor((first_current + second_current) / max / 2.0)
}

#[cfg(test)]
mod tests {
    use similar_asserts::assert_eq;
    use test_log::test;

    use super::*;

    #[test]
    fn mean_of_both_readings_over_max() {
        assert_eq!(normalize(1500.0, 1500.0, 2000.0), NormalizationFactor(0.75));
        assert_eq!(normalize(1000.0, 3000.0, 4000.0), NormalizationFactor(0.5));
    }

    #[test]
    fn readings_above_max_are_not_clamped() {
        assert_eq!(normalize(3000.0, 3000.0, 2000.0).value(), 1.5);
    }
}
