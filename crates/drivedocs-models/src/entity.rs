//! Entities resolved from the host platform's typed collections.

use serde::{Deserialize, Serialize};

/// Reference to a group by id, as embedded in device/user records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRef {
    pub id: String,
}

/// Full group record from the group catalog. Ids are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}

/// A vehicle record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: String,
    pub name: String,
    pub serial_number: String,
    #[serde(default)]
    pub groups: Vec<GroupRef>,
}

impl Device {
    /// Display label shown to the driver and used in the tag namespace.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.serial_number)
    }
}

/// A driver record with its four independent group-membership categories.
///
/// Each category may be absent on the wire; absence means "no memberships",
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub driver_groups: Option<Vec<GroupRef>>,
    #[serde(default)]
    pub report_groups: Option<Vec<GroupRef>>,
    #[serde(default)]
    pub private_user_groups: Option<Vec<GroupRef>>,
    #[serde(default)]
    pub security_groups: Option<Vec<GroupRef>>,
}

impl User {
    pub fn label(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A trailer record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trailer {
    pub id: String,
    pub name: String,
}

/// Bare entity reference used inside join records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
}

/// Join record attaching a trailer to a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerAttachment {
    pub device: EntityRef,
    pub trailer: EntityRef,
}
