//! Document association tagging.

use drivedocs_models::{DriveFile, ResolvedContext};

/// Compute the display labels of the entities associated with a document.
///
/// Per raw tag: a vehicle match takes priority over a driver match; trailer
/// and group checks run unconditionally, so one tag may associate more than
/// one category. Identical displayed strings are collapsed to the first
/// occurrence; distinct strings are never merged. Pure and idempotent.
pub fn tag_associations(file: &DriveFile, context: &ResolvedContext) -> Vec<String> {
    let mut associated: Vec<String> = Vec::new();
    let mut push = |label: &str| {
        if !associated.iter().any(|existing| existing == label) {
            associated.push(label.to_string());
        }
    };

    for tag in &file.tags {
        if context.vehicle.as_deref() == Some(tag.as_str()) {
            push(tag);
        } else if !context.driver.is_empty() && context.driver == *tag {
            push(tag);
        }

        for trailer in &context.trailers {
            if trailer.name == *tag {
                push(&trailer.name);
            }
        }

        for group in &context.groups {
            if group == tag {
                push(group);
            }
        }
    }

    associated
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivedocs_models::{FileOwners, Trailer};

    fn context() -> ResolvedContext {
        ResolvedContext {
            driver: "Dana Reyes".into(),
            vehicle: Some("Truck 7 (G9X000001)".into()),
            trailers: vec![Trailer { id: "t1".into(), name: "Flatbed 3".into() }],
            groups: vec!["Fleet A".into(), "Night Shift".into()],
        }
    }

    fn file_with_tags(tags: &[&str]) -> DriveFile {
        DriveFile {
            id: "f1".into(),
            file_name: "manual.pdf".into(),
            path: "acme/manual.pdf".into(),
            expiry_date: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            owners: FileOwners::default(),
        }
    }

    #[test]
    fn tags_resolve_to_each_category() {
        let file = file_with_tags(&[
            "Truck 7 (G9X000001)",
            "Dana Reyes",
            "Flatbed 3",
            "Fleet A",
            "unrelated-id",
        ]);
        assert_eq!(
            tag_associations(&file, &context()),
            vec!["Truck 7 (G9X000001)", "Dana Reyes", "Flatbed 3", "Fleet A"]
        );
    }

    #[test]
    fn identical_strings_are_collapsed() {
        // A trailer and a group sharing a name both match the same tag.
        let mut ctx = context();
        ctx.groups.push("Flatbed 3".into());
        let file = file_with_tags(&["Flatbed 3", "Flatbed 3"]);
        assert_eq!(tag_associations(&file, &ctx), vec!["Flatbed 3"]);
    }

    #[test]
    fn empty_driver_label_never_matches() {
        let mut ctx = context();
        ctx.driver = String::new();
        let file = file_with_tags(&[""]);
        assert!(tag_associations(&file, &ctx).is_empty());
    }

    #[test]
    fn missing_vehicle_does_not_claim_placeholder_tag() {
        let mut ctx = context();
        ctx.vehicle = None;
        let file = file_with_tags(&["none"]);
        assert!(tag_associations(&file, &ctx).is_empty());
    }

    #[test]
    fn tagging_is_idempotent() {
        let file = file_with_tags(&["Fleet A", "Dana Reyes"]);
        let ctx = context();
        let first = tag_associations(&file, &ctx);
        let second = tag_associations(&file, &ctx);
        assert_eq!(first, second);
    }
}
