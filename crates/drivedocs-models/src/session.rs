use serde::{Deserialize, Serialize};

/// Credentials for one authenticated driver session.
///
/// Supplied by the host platform, immutable for the lifetime of a fetch
/// cycle, and passed through unchanged to every remote call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub database: String,
    pub session_id: String,
    pub user_name: String,
    pub server: String,
}

/// Sentinel the host page state uses when no vehicle is selected.
pub const NO_DEVICE_SENTINEL: &str = "NoDeviceId";

/// The vehicle selected in page state, if any.
///
/// Replaces the host platform's `"NoDeviceId"` magic string with an explicit
/// tagged absence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeviceSelection {
    #[default]
    None,
    Selected(String),
}

impl DeviceSelection {
    /// Parse the raw device id exposed by host page state.
    pub fn from_page_state(raw: &str) -> Self {
        if raw.is_empty() || raw == NO_DEVICE_SENTINEL {
            Self::None
        } else {
            Self::Selected(raw.to_string())
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Selected(id) => Some(id),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_maps_to_no_selection() {
        assert_eq!(DeviceSelection::from_page_state("NoDeviceId"), DeviceSelection::None);
        assert_eq!(DeviceSelection::from_page_state(""), DeviceSelection::None);
    }

    #[test]
    fn real_id_is_selected() {
        let selection = DeviceSelection::from_page_state("b42");
        assert_eq!(selection.id(), Some("b42"));
        assert!(!selection.is_none());
    }

    #[test]
    fn session_serializes_camel_case() {
        let session = SessionInfo {
            database: "acme".into(),
            session_id: "s-1".into(),
            user_name: "driver@acme.com".into(),
            server: "my.geotab.example".into(),
        };
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["sessionId"], "s-1");
        assert_eq!(value["userName"], "driver@acme.com");
    }
}
