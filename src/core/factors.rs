use crate::models::{FactorSet, FactorWeights, Gender, Profile};

pub const FACTOR_MIN: f64 = 0.0;
pub const FACTOR_MAX: f64 = 100.0;

/// Weights applied when the subject is male
pub const MALE_SUBJECT_WEIGHTS: FactorWeights = FactorWeights {
    age: 0.20,
    income: 0.15,
    height: 0.15,
    children: 0.20,
    relocation: 0.15,
    profession: 0.10,
    values: 0.05,
};

/// Weights applied when the subject is female
pub const FEMALE_SUBJECT_WEIGHTS: FactorWeights = FactorWeights {
    age: 0.18,
    income: 0.18,
    height: 0.12,
    children: 0.22,
    relocation: 0.15,
    profession: 0.10,
    values: 0.05,
};

/// The seven compatibility dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    Age,
    Income,
    Height,
    Children,
    Relocation,
    Profession,
    Values,
}

impl Factor {
    pub const ALL: [Factor; 7] = [
        Factor::Age,
        Factor::Income,
        Factor::Height,
        Factor::Children,
        Factor::Relocation,
        Factor::Profession,
        Factor::Values,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Factor::Age => "age",
            Factor::Income => "income",
            Factor::Height => "height",
            Factor::Children => "children",
            Factor::Relocation => "relocation",
            Factor::Profession => "profession",
            Factor::Values => "values",
        }
    }
}

impl FactorSet {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Age => self.age,
            Factor::Income => self.income,
            Factor::Height => self.height,
            Factor::Children => self.children,
            Factor::Relocation => self.relocation,
            Factor::Profession => self.profession,
            Factor::Values => self.values,
        }
    }

    /// Clamp every factor into [0, 100]. NaN collapses to the floor.
    pub fn clamped(self) -> Self {
        Self {
            age: clamp_factor(self.age),
            income: clamp_factor(self.income),
            height: clamp_factor(self.height),
            children: clamp_factor(self.children),
            relocation: clamp_factor(self.relocation),
            profession: clamp_factor(self.profession),
            values: clamp_factor(self.values),
        }
    }

    /// Weighted aggregate, summed in declaration order
    pub fn weighted_sum(&self, weights: &FactorWeights) -> f64 {
        self.age * weights.age
            + self.income * weights.income
            + self.height * weights.height
            + self.children * weights.children
            + self.relocation * weights.relocation
            + self.profession * weights.profession
            + self.values * weights.values
    }
}

impl FactorWeights {
    pub fn for_subject(gender: Gender) -> &'static FactorWeights {
        match gender {
            Gender::Male => &MALE_SUBJECT_WEIGHTS,
            Gender::Female => &FEMALE_SUBJECT_WEIGHTS,
        }
    }
}

#[inline]
fn clamp_factor(value: f64) -> f64 {
    if value.is_nan() {
        return FACTOR_MIN;
    }
    value.clamp(FACTOR_MIN, FACTOR_MAX)
}

/// Five-tier annual income bucket (boundaries at 500k, 1M, 1.5M, 2M)
pub fn income_band(income: u64) -> u8 {
    match income {
        0..=499_999 => 1,
        500_000..=999_999 => 2,
        1_000_000..=1_499_999 => 3,
        1_500_000..=1_999_999 => 4,
        _ => 5,
    }
}

/// Seniority inferred from the designation title
pub fn career_level(profile: &Profile) -> u8 {
    let designation = profile.designation.to_lowercase();
    if ["lead", "manager", "senior"]
        .iter()
        .any(|word| designation.contains(word))
    {
        3
    } else if ["developer", "analyst"]
        .iter()
        .any(|word| designation.contains(word))
    {
        2
    } else {
        1
    }
}

/// `numerator / denominator` with the zero-income cases pinned down:
/// 0/0 is parity and x/0 is unbounded.
pub fn income_ratio(numerator: u64, denominator: u64) -> f64 {
    match (numerator, denominator) {
        (0, 0) => 1.0,
        (_, 0) => f64::INFINITY,
        (n, d) => n as f64 / d as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_vectors_sum_to_one() {
        assert!((MALE_SUBJECT_WEIGHTS.total() - 1.0).abs() < 1e-9);
        assert!((FEMALE_SUBJECT_WEIGHTS.total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_income_band_boundaries() {
        assert_eq!(income_band(0), 1);
        assert_eq!(income_band(499_999), 1);
        assert_eq!(income_band(500_000), 2);
        assert_eq!(income_band(999_999), 2);
        assert_eq!(income_band(1_000_000), 3);
        assert_eq!(income_band(1_500_000), 4);
        assert_eq!(income_band(2_000_000), 5);
        assert_eq!(income_band(u64::MAX), 5);
    }

    #[test]
    fn test_clamped_bounds_values() {
        let factors = FactorSet {
            age: -12.0,
            income: 140.0,
            height: f64::NAN,
            children: 50.0,
            relocation: 100.0,
            profession: 0.0,
            values: f64::INFINITY,
        }
        .clamped();

        assert_eq!(factors.age, 0.0);
        assert_eq!(factors.income, 100.0);
        assert_eq!(factors.height, 0.0);
        assert_eq!(factors.children, 50.0);
        assert_eq!(factors.values, 100.0);
    }

    #[test]
    fn test_income_ratio_zero_cases() {
        assert_eq!(income_ratio(0, 0), 1.0);
        assert!(income_ratio(10, 0).is_infinite());
        assert_eq!(income_ratio(0, 10), 0.0);
        assert!((income_ratio(700_000, 1_000_000) - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_factor_lookup_matches_fields() {
        let factors = FactorSet {
            age: 1.0,
            income: 2.0,
            height: 3.0,
            children: 4.0,
            relocation: 5.0,
            profession: 6.0,
            values: 7.0,
        };
        let collected: Vec<f64> = Factor::ALL.iter().map(|f| factors.get(*f)).collect();
        assert_eq!(collected, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(Factor::Relocation.name(), "relocation");
    }
}
