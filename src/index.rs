use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

use crate::model::entity::Id;
use crate::model::preference::Preferences;

/// Drinks mapped to the customers who accept them.
///
/// Built once from a [`Preferences`] and read-only afterwards.
pub struct InvertedIndex<'a, C, D> {
    customers_by_drink: BTreeMap<&'a D, BTreeSet<&'a C>>,
}

impl<'a, C: Id, D: Id> InvertedIndex<'a, C, D> {
    pub fn build(preferences: &'a Preferences<C, D>) -> InvertedIndex<'a, C, D> {
        let mut customers_by_drink = BTreeMap::new();
        for (customer, drinks) in preferences.iter() {
            for drink in drinks {
                customers_by_drink
                    .entry(drink)
                    .or_insert_with(BTreeSet::new)
                    .insert(customer);
            }
        }
        InvertedIndex { customers_by_drink }
    }

    pub fn len(&self) -> usize {
        self.customers_by_drink.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers_by_drink.is_empty()
    }

    pub fn customers_of(&self, drink: &D) -> Option<&BTreeSet<&'a C>> {
        self.customers_by_drink.get(drink)
    }

    /// Number of customers `drink` satisfies; zero for unknown drinks.
    pub fn popularity(&self, drink: &D) -> usize {
        self.customers_of(drink).map_or(0, BTreeSet::len)
    }

    /// All drinks, most popular first. Equal popularity keeps identifier order.
    pub fn by_popularity(&self) -> Vec<(&'a D, &BTreeSet<&'a C>)> {
        self.customers_by_drink
            .iter()
            .map(|(drink, customers)| (*drink, customers))
            .sorted_by(|(_, c1), (_, c2)| c2.len().cmp(&c1.len()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::InvertedIndex;
    use crate::model::preference::Preferences;

    #[test]
    fn test_build() {
        let preferences = Preferences::from([
            (0, vec![0, 3]),
            (1, vec![1, 4]),
            (2, vec![5, 6]),
            (3, vec![4, 5]),
            (4, vec![3, 5]),
            (5, vec![2, 6]),
        ]);
        let index = InvertedIndex::build(&preferences);

        assert_eq!(index.len(), 7);
        assert_eq!(index.customers_of(&5), Some(&BTreeSet::from([&2, &3, &4])));
        assert_eq!(index.popularity(&0), 1);
        assert_eq!(index.popularity(&42), 0);
    }

    #[test]
    fn test_by_popularity_breaks_ties_by_drink() {
        let preferences = Preferences::from([
            (0, vec![0, 1, 3, 6]),
            (1, vec![1, 4, 7]),
            (2, vec![2, 4, 7, 5]),
            (3, vec![3, 2, 5]),
            (4, vec![5, 8]),
        ]);
        let index = InvertedIndex::build(&preferences);
        let ranked: Vec<u32> = index
            .by_popularity()
            .into_iter()
            .map(|(drink, _)| *drink)
            .collect();

        assert_eq!(ranked, vec![5, 1, 2, 3, 4, 7, 0, 6, 8]);
    }

    #[test]
    fn test_empty() {
        let preferences = Preferences::<u32, u32>::from([(0, vec![])]);
        assert!(InvertedIndex::build(&preferences).is_empty());
    }
}
