use itertools::Itertools;
use tracing::{debug, instrument};

use crate::error::CoverError;
use crate::model::cover::Cover;
use crate::model::entity::Id;
use crate::model::preference::Preferences;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExactParams {
    /// Largest combination size to try. `None` searches up to the natural bound.
    pub max_combination_size: Option<usize>,
}

/// Smallest set of drinks serving every customer.
pub fn exact_cover<C: Id, D: Id>(
    preferences: &Preferences<C, D>,
) -> Result<Cover<D>, CoverError<C>> {
    exact_cover_with(preferences, &ExactParams::default(), || false)
}

/// Tries every combination of drinks, smallest first, and returns the first
/// one that serves all customers.
///
/// `should_stop` is polled before each combination is tested; once it returns
/// `true` the search ends with [`CoverError::Interrupted`].
#[instrument(skip_all, fields(customers = preferences.len()))]
pub fn exact_cover_with<C, D, F>(
    preferences: &Preferences<C, D>,
    params: &ExactParams,
    mut should_stop: F,
) -> Result<Cover<D>, CoverError<C>>
where
    C: Id,
    D: Id,
    F: FnMut() -> bool,
{
    preferences.validate()?;

    let universe = preferences.universe().into_iter().collect_vec();
    // One drink per customer always suffices, as does the whole universe.
    let natural_bound = preferences.len().min(universe.len());
    let bound = params
        .max_combination_size
        .map_or(natural_bound, |limit| limit.min(natural_bound));
    let mut tested = 0u64;

    for size in 1..=bound {
        debug!(size, tested, "Searching combinations");
        for option in universe.iter().copied().combinations(size) {
            if should_stop() {
                return Err(CoverError::Interrupted {
                    combination_size: size,
                    tested,
                });
            }
            tested += 1;
            if preferences.is_satisfied_by(&option) {
                debug!(size, tested, "Found minimal cover");
                return Ok(option.into_iter().cloned().collect());
            }
        }
    }

    if bound < natural_bound {
        Err(CoverError::SizeLimitReached { limit: bound })
    } else {
        Err(CoverError::NoFeasibleCover {
            uncovered: preferences.uncovered_by(&universe),
        })
    }
}

/// Size of the minimum cover.
pub fn minimal_drinks_exact<C: Id, D: Id>(
    preferences: &Preferences<C, D>,
) -> Result<usize, CoverError<C>> {
    exact_cover(preferences).map(|cover| cover.len())
}
