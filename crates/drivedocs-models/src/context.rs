//! The resolved session context, derived once per fetch cycle.

use crate::entity::Trailer;

/// Placeholder the backend contract uses for a missing vehicle.
pub const NO_VEHICLE_LABEL: &str = "none";

/// Everything the document pipeline needs to know about the current driver,
/// vehicle, trailers and groups.
///
/// Immutable once computed. Built by the resolver in the core crate and
/// threaded explicitly through tagging and rendering; there is no shared
/// mutable session record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedContext {
    /// Driver display label; empty when no user record resolved.
    pub driver: String,
    /// Vehicle display label; `None` when no device is selected or the
    /// selected device did not resolve.
    pub vehicle: Option<String>,
    pub trailers: Vec<Trailer>,
    /// Deduplicated group names, first-seen order preserved.
    pub groups: Vec<String>,
}

impl ResolvedContext {
    /// Fallback context when resolution fails; the document fetch will then
    /// surface its own validation error.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Vehicle label as sent on the wire: the `none` placeholder stands in
    /// for a missing vehicle.
    pub fn vehicle_label(&self) -> &str {
        self.vehicle.as_deref().unwrap_or(NO_VEHICLE_LABEL)
    }

    pub fn trailer_names(&self) -> Vec<String> {
        self.trailers.iter().map(|t| t.name.clone()).collect()
    }

    /// The ordered tag list sent to the file-listing endpoint: vehicle,
    /// driver, trailers, groups.
    pub fn query_tags(&self) -> Vec<String> {
        let mut tags = Vec::with_capacity(2 + self.trailers.len() + self.groups.len());
        tags.push(self.vehicle_label().to_string());
        tags.push(self.driver.clone());
        tags.extend(self.trailer_names());
        tags.extend(self.groups.iter().cloned());
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_tags_follow_vehicle_driver_trailer_group_order() {
        let context = ResolvedContext {
            driver: "Dana Reyes".into(),
            vehicle: Some("Truck 7 (G9X000001)".into()),
            trailers: vec![Trailer { id: "t1".into(), name: "Flatbed 3".into() }],
            groups: vec!["Fleet A".into(), "Night Shift".into()],
        };
        assert_eq!(
            context.query_tags(),
            vec![
                "Truck 7 (G9X000001)".to_string(),
                "Dana Reyes".to_string(),
                "Flatbed 3".to_string(),
                "Fleet A".to_string(),
                "Night Shift".to_string(),
            ]
        );
    }

    #[test]
    fn missing_vehicle_uses_placeholder() {
        let context = ResolvedContext::empty();
        assert_eq!(context.vehicle_label(), "none");
        assert_eq!(context.query_tags()[0], "none");
    }
}
