//! Per-category owner resolution for the detail view.

use drivedocs_models::{FileOwners, ResolvedContext};

/// A document's owners, narrowed to the entities present in the current
/// context, grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnerView {
    pub drivers: Vec<String>,
    pub vehicles: Vec<String>,
    pub trailers: Vec<String>,
    pub groups: Vec<String>,
}

impl OwnerView {
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
            && self.vehicles.is_empty()
            && self.trailers.is_empty()
            && self.groups.is_empty()
    }
}

fn intersect(owners: &[String], known: &[String]) -> Vec<String> {
    owners.iter().filter(|owner| known.contains(owner)).cloned().collect()
}

/// Intersect each owner category with the corresponding context entities,
/// preserving the owner-list order.
pub fn resolve_owners(owners: &FileOwners, context: &ResolvedContext) -> OwnerView {
    let drivers: Vec<String> =
        if context.driver.is_empty() { Vec::new() } else { vec![context.driver.clone()] };
    let vehicles: Vec<String> = context.vehicle.iter().cloned().collect();

    OwnerView {
        drivers: intersect(&owners.drivers, &drivers),
        vehicles: intersect(&owners.vehicles, &vehicles),
        trailers: intersect(&owners.trailers, &context.trailer_names()),
        groups: intersect(&owners.groups, &context.groups),
    }
}
