use super::types::FilterOptions;
use crate::catalog::store::LabStore;

/// Facets describe what is available to narrow further, so they reflect the
/// whole dataset, not the current text or discipline filters. The one
/// exception is the state->city cascade: selecting a state narrows the city
/// list to that state, clearing it widens the list back to global.
pub fn filter_options(store: &LabStore, state: Option<&str>) -> FilterOptions {
    FilterOptions {
        states: store.states().to_vec(),
        cities: store.cities_in(state),
        disciplines: store.disciplines().to_vec(),
    }
}
