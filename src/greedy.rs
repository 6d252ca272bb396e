use std::collections::BTreeSet;

use tracing::{debug, instrument, trace};

use crate::error::CoverError;
use crate::index::InvertedIndex;
use crate::model::cover::Cover;
use crate::model::entity::Id;
use crate::model::preference::Preferences;

struct State<'a, C, D> {
    served: BTreeSet<&'a C>,
    selected: BTreeSet<D>,
}

impl<'a, C: Id, D: Id> State<'a, C, D> {
    fn new() -> State<'a, C, D> {
        State {
            served: BTreeSet::new(),
            selected: BTreeSet::new(),
        }
    }

    /// Serves `customers` with `drink`, keeping the drink only if someone new was served.
    fn offer(&mut self, drink: &D, customers: &BTreeSet<&'a C>) -> bool {
        let n_served = self.served.len();
        self.served.extend(customers.iter().copied());
        if self.served.len() > n_served {
            self.selected.insert(drink.clone());
            true
        } else {
            false
        }
    }
}

/// Picks drinks in order of popularity until every customer is served.
///
/// The result is a valid cover but not always a minimum one.
#[instrument(skip_all, fields(customers = preferences.len()))]
pub fn greedy_cover<C: Id, D: Id>(
    preferences: &Preferences<C, D>,
) -> Result<Cover<D>, CoverError<C>> {
    preferences.validate()?;

    let index = InvertedIndex::build(preferences);
    let n_customers = preferences.len();
    let mut ranked = index.by_popularity().into_iter();
    let mut state = State::new();

    while state.served.len() < n_customers {
        let Some((drink, customers)) = ranked.next() else {
            return Err(CoverError::NoFeasibleCover {
                uncovered: n_customers - state.served.len(),
            });
        };
        if state.offer(drink, customers) {
            debug!(?drink, served = state.served.len(), "Selected drink");
        } else {
            trace!(?drink, "Skipped drink");
        }
    }

    debug!(drinks = state.selected.len(), "Greedy cover complete");
    Ok(Cover::new(state.selected))
}

/// Size of the greedy cover.
pub fn minimal_drinks_greedy<C: Id, D: Id>(
    preferences: &Preferences<C, D>,
) -> Result<usize, CoverError<C>> {
    greedy_cover(preferences).map(|cover| cover.len())
}
