pub mod entity {
    use std::fmt::Debug;

    /// Bound shared by customer and drink identifiers.
    pub trait Id: Ord + Clone + Debug {}

    impl<T: Ord + Clone + Debug> Id for T {}
}


pub mod preference {
    use std::collections::{BTreeMap, BTreeSet};

    use super::entity::Id;
    use crate::error::CoverError;

    /// Which drinks each customer will accept.
    ///
    /// A customer's drinks are kept as a set, so repeated entries in an input
    /// list collapse into one.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Preferences<C, D> {
        accepted: BTreeMap<C, BTreeSet<D>>,
    }

    impl<C: Id, D: Id> Default for Preferences<C, D> {
        fn default() -> Self {
            Preferences::new()
        }
    }

    impl<C: Id, D: Id> Preferences<C, D> {
        pub fn new() -> Preferences<C, D> {
            Preferences {
                accepted: BTreeMap::new(),
            }
        }

        /// Sets the accepted drinks of `customer`, returning the previous set if any.
        pub fn insert<I>(&mut self, customer: C, drinks: I) -> Option<BTreeSet<D>>
        where
            I: IntoIterator<Item = D>,
        {
            self.accepted.insert(customer, drinks.into_iter().collect())
        }

        pub fn len(&self) -> usize {
            self.accepted.len()
        }

        pub fn is_empty(&self) -> bool {
            self.accepted.is_empty()
        }

        pub fn customers(&self) -> impl Iterator<Item = &C> {
            self.accepted.keys()
        }

        pub fn accepted(&self, customer: &C) -> Option<&BTreeSet<D>> {
            self.accepted.get(customer)
        }

        pub fn iter(&self) -> impl Iterator<Item = (&C, &BTreeSet<D>)> {
            self.accepted.iter()
        }

        /// Every drink accepted by at least one customer.
        pub fn universe(&self) -> BTreeSet<&D> {
            self.accepted.values().flatten().collect()
        }

        /// True when every customer accepts at least one drink of `option`.
        pub fn is_satisfied_by(&self, option: &[&D]) -> bool {
            self.accepted
                .values()
                .all(|drinks| option.iter().any(|drink| drinks.contains(*drink)))
        }

        /// Number of customers that accept none of the drinks in `option`.
        pub fn uncovered_by(&self, option: &[&D]) -> usize {
            self.accepted
                .values()
                .filter(|drinks| !option.iter().any(|drink| drinks.contains(*drink)))
                .count()
        }

        /// Rejects inputs for which no cover can exist.
        pub fn validate(&self) -> Result<(), CoverError<C>> {
            if self.is_empty() {
                return Err(CoverError::EmptyInput);
            }
            match self.accepted.iter().find(|(_, drinks)| drinks.is_empty()) {
                Some((customer, _)) => Err(CoverError::UnsatisfiableCustomer(customer.clone())),
                None => Ok(()),
            }
        }
    }

    impl<C: Id, D: Id, I> FromIterator<(C, I)> for Preferences<C, D>
    where
        I: IntoIterator<Item = D>,
    {
        fn from_iter<T: IntoIterator<Item = (C, I)>>(iter: T) -> Self {
            let mut preferences = Preferences::new();
            for (customer, drinks) in iter {
                preferences.insert(customer, drinks);
            }
            preferences
        }
    }

    impl<C: Id, D: Id, I, const N: usize> From<[(C, I); N]> for Preferences<C, D>
    where
        I: IntoIterator<Item = D>,
    {
        fn from(entries: [(C, I); N]) -> Self {
            entries.into_iter().collect()
        }
    }
}

pub mod cover {
    use std::collections::BTreeSet;

    use super::entity::Id;
    use super::preference::Preferences;

    /// Witness set of drinks chosen by a solver.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Cover<D> {
        drinks: BTreeSet<D>,
    }

    impl<D: Id> Cover<D> {
        pub fn new(drinks: BTreeSet<D>) -> Cover<D> {
            Cover { drinks }
        }

        pub fn len(&self) -> usize {
            self.drinks.len()
        }

        pub fn is_empty(&self) -> bool {
            self.drinks.is_empty()
        }

        pub fn contains(&self, drink: &D) -> bool {
            self.drinks.contains(drink)
        }

        pub fn iter(&self) -> impl Iterator<Item = &D> {
            self.drinks.iter()
        }

        pub fn into_inner(self) -> BTreeSet<D> {
            self.drinks
        }

        /// True when every customer of `preferences` accepts a drink of this cover.
        pub fn covers<C: Id>(&self, preferences: &Preferences<C, D>) -> bool {
            preferences
                .iter()
                .all(|(_, accepted)| !accepted.is_disjoint(&self.drinks))
        }
    }

    impl<D: Id> FromIterator<D> for Cover<D> {
        fn from_iter<T: IntoIterator<Item = D>>(iter: T) -> Self {
            Cover::new(iter.into_iter().collect())
        }
    }
}
