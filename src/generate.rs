use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::preference::Preferences;

/// Shape of randomly generated bar instances.
///
/// Every generated customer accepts between one and `max_accepted` distinct
/// drinks out of `drinks`, so the instance always has a cover.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomPreferences {
    pub customers: u32,
    pub drinks: u32,
    pub max_accepted: usize,
}

impl Default for RandomPreferences {
    fn default() -> Self {
        RandomPreferences {
            customers: 6,
            drinks: 8,
            max_accepted: 3,
        }
    }
}

impl RandomPreferences {
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Preferences<u32, u32> {
        let menu: Vec<u32> = (0..self.drinks.max(1)).collect();
        let max_accepted = self.max_accepted.clamp(1, menu.len());
        (0..self.customers)
            .map(|customer| {
                let count = rng.gen_range(1..=max_accepted);
                let accepted: Vec<u32> = menu.choose_multiple(&mut *rng, count).copied().collect();
                (customer, accepted)
            })
            .collect()
    }

    pub fn seeded(&self, seed: u64) -> Preferences<u32, u32> {
        let mut rng = SmallRng::seed_from_u64(seed);
        self.generate(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomPreferences;

    #[test]
    fn test_generate_shape() {
        let shape = RandomPreferences {
            customers: 20,
            drinks: 5,
            max_accepted: 10,
        };
        let preferences = shape.seeded(7);

        assert_eq!(preferences.len(), 20);
        assert!(preferences.validate().is_ok());
        for (_, drinks) in preferences.iter() {
            assert!(!drinks.is_empty() && drinks.len() <= 5);
            assert!(drinks.iter().all(|drink| *drink < 5));
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let shape = RandomPreferences::default();
        assert_eq!(shape.seeded(42), shape.seeded(42));
    }

    #[test]
    fn test_degenerate_menu() {
        let shape = RandomPreferences {
            customers: 3,
            drinks: 0,
            max_accepted: 0,
        };
        let preferences = shape.seeded(1);

        assert!(preferences.iter().all(|(_, drinks)| drinks.len() == 1));
    }
}
