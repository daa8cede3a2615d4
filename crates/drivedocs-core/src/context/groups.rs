//! Group membership flattening.

use drivedocs_models::{Device, Group, GroupRef, User};

/// Flatten the groups relevant to the current context into display names.
///
/// Collection order is fixed: device groups first, then the user's driver,
/// report, private-user and security memberships. Ids with no catalog match
/// are dropped silently; a name never appears twice even when distinct ids
/// map to it. Total — absent device and absent user yield `[]`.
pub fn flatten_groups(
    device: Option<&Device>,
    user: Option<&User>,
    catalog: &[Group],
) -> Vec<String> {
    let mut ids: Vec<&str> = Vec::new();

    if let Some(device) = device {
        ids.extend(device.groups.iter().map(|g| g.id.as_str()));
    }

    if let Some(user) = user {
        let categories: [&Option<Vec<GroupRef>>; 4] = [
            &user.driver_groups,
            &user.report_groups,
            &user.private_user_groups,
            &user.security_groups,
        ];
        for category in categories {
            if let Some(refs) = category {
                ids.extend(refs.iter().map(|g| g.id.as_str()));
            }
        }
    }

    let mut names = Vec::new();
    for id in ids {
        if let Some(group) = catalog.iter().find(|g| g.id == id)
            && !names.contains(&group.name)
        {
            names.push(group.name.clone());
        }
    }
    names
}
