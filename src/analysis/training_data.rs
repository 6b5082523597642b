//! Labeled archetypes the classifier is fitted on
//!
//! Five hand-written examples per tier. Feature order follows
//! [`FeatureVector`]: savings rate, food, entertainment, transport, expense
//! ratio (all percent of income).

use super::features::FeatureVector;
use super::tier::Tier;

/// One labeled training example
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Archetype {
    pub features: FeatureVector,
    pub tier: Tier,
}

const fn row(s: f64, f: f64, e: f64, t: f64, x: f64, tier: Tier) -> Archetype {
    Archetype {
        features: FeatureVector::new(s, f, e, t, x),
        tier,
    }
}

/// The fixed training table
pub const TRAINING_SET: [Archetype; 25] = [
    // Overspending
    row(-50.0, 45.0, 30.0, 20.0, 150.0, Tier::Critical),
    row(-100.0, 50.0, 35.0, 25.0, 200.0, Tier::Critical),
    row(-30.0, 40.0, 28.0, 18.0, 130.0, Tier::Critical),
    row(-80.0, 48.0, 32.0, 22.0, 180.0, Tier::Critical),
    row(-200.0, 55.0, 40.0, 30.0, 250.0, Tier::Critical),
    // Low savings
    row(5.0, 38.0, 22.0, 18.0, 95.0, Tier::NeedsImprovement),
    row(8.0, 35.0, 20.0, 15.0, 92.0, Tier::NeedsImprovement),
    row(10.0, 40.0, 25.0, 20.0, 90.0, Tier::NeedsImprovement),
    row(12.0, 36.0, 23.0, 16.0, 88.0, Tier::NeedsImprovement),
    row(15.0, 42.0, 24.0, 19.0, 85.0, Tier::NeedsImprovement),
    // Average budgeting
    row(20.0, 30.0, 15.0, 12.0, 80.0, Tier::Moderate),
    row(25.0, 28.0, 18.0, 14.0, 75.0, Tier::Moderate),
    row(22.0, 32.0, 16.0, 13.0, 78.0, Tier::Moderate),
    row(28.0, 29.0, 17.0, 11.0, 72.0, Tier::Moderate),
    row(24.0, 31.0, 14.0, 15.0, 76.0, Tier::Moderate),
    // Decent savings
    row(35.0, 25.0, 12.0, 10.0, 65.0, Tier::Good),
    row(38.0, 23.0, 10.0, 9.0, 62.0, Tier::Good),
    row(32.0, 27.0, 13.0, 11.0, 68.0, Tier::Good),
    row(40.0, 24.0, 11.0, 8.0, 60.0, Tier::Good),
    row(36.0, 26.0, 9.0, 12.0, 64.0, Tier::Good),
    // High savings
    row(45.0, 20.0, 8.0, 7.0, 55.0, Tier::Excellent),
    row(50.0, 18.0, 6.0, 6.0, 50.0, Tier::Excellent),
    row(48.0, 22.0, 7.0, 5.0, 52.0, Tier::Excellent),
    row(42.0, 19.0, 10.0, 8.0, 58.0, Tier::Excellent),
    row(55.0, 17.0, 5.0, 4.0, 45.0, Tier::Excellent),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_examples_per_tier() {
        for tier in Tier::ALL {
            let count = TRAINING_SET.iter().filter(|a| a.tier == tier).count();
            assert_eq!(count, 5, "tier {:?}", tier);
        }
    }

    #[test]
    fn test_archetype_bounds() {
        for a in TRAINING_SET.iter().filter(|a| a.tier == Tier::Critical) {
            assert!(a.features.get(0) < 0.0);
            assert!(a.features.get(4) >= 130.0);
        }
        for a in TRAINING_SET.iter().filter(|a| a.tier == Tier::Excellent) {
            assert!(a.features.get(0) >= 42.0);
            assert!(a.features.get(4) <= 58.0);
        }
    }
}
