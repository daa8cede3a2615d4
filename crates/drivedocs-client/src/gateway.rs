//! Host-platform entity gateway.
//!
//! The platform exposes typed `Get` queries over its entity collections
//! (User, Device, Group, TrailerAttachment, Trailer), batched into one
//! round trip via `ExecuteMultiCall`. Results come back positionally, one
//! JSON array per query.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use drivedocs_models::SessionInfo;

use crate::error::{ClientError, Result};

/// One typed `Get` against the platform's entity collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityQuery {
    DeviceById(String),
    UserByName(String),
    TrailerAttachmentsByDevice(String),
    TrailerById(String),
    AllGroups,
}

impl EntityQuery {
    /// Wire form of the call, as the platform's multi-call endpoint expects.
    pub fn to_call(&self) -> Value {
        match self {
            Self::DeviceById(id) => json!({
                "method": "Get",
                "params": { "typeName": "Device", "search": { "id": id } },
            }),
            Self::UserByName(name) => json!({
                "method": "Get",
                "params": { "typeName": "User", "search": { "name": name } },
            }),
            Self::TrailerAttachmentsByDevice(device_id) => json!({
                "method": "Get",
                "params": {
                    "typeName": "TrailerAttachment",
                    "search": { "deviceSearch": { "id": device_id } },
                },
            }),
            Self::TrailerById(id) => json!({
                "method": "Get",
                "params": { "typeName": "Trailer", "search": { "id": id } },
            }),
            Self::AllGroups => json!({
                "method": "Get",
                "params": { "typeName": "Group" },
            }),
        }
    }
}

/// Batched access to the platform's entity collections.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Execute the queries in one round trip. The result vector is
    /// positional: `results[i]` is the entity array for `queries[i]`.
    async fn multi_call(&self, queries: &[EntityQuery]) -> Result<Vec<Value>>;
}

/// reqwest-backed gateway speaking the platform's JSON-RPC dialect.
pub struct HttpGateway {
    client: Client,
    session: SessionInfo,
}

impl HttpGateway {
    pub fn new(session: SessionInfo) -> Self {
        Self { client: Client::new(), session }
    }

    pub fn with_client(client: Client, session: SessionInfo) -> Self {
        Self { client, session }
    }

    fn endpoint(&self) -> String {
        format!("https://{}/apiv1", self.session.server)
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn multi_call(&self, queries: &[EntityQuery]) -> Result<Vec<Value>> {
        let body = json!({
            "method": "ExecuteMultiCall",
            "params": {
                "calls": queries.iter().map(EntityQuery::to_call).collect::<Vec<_>>(),
                "credentials": {
                    "database": self.session.database,
                    "sessionId": self.session.session_id,
                    "userName": self.session.user_name,
                },
            },
        });

        let response = self.client.post(self.endpoint()).json(&body).send().await?;
        let status = response.status().as_u16();
        let payload: Value = response.json().await?;

        if let Some(error) = payload.get("error") {
            let message = error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown gateway error")
                .to_string();
            tracing::error!(status, %message, "gateway multi-call failed");
            return Err(ClientError::Api { status, message });
        }

        let results: Vec<Value> = match payload.get("result") {
            Some(result) => serde_json::from_value(result.clone())?,
            None => return Err(ClientError::MalformedResponse("missing result".into())),
        };

        if results.len() != queries.len() {
            return Err(ClientError::MalformedResponse(format!(
                "expected {} result sets, got {}",
                queries.len(),
                results.len()
            )));
        }

        Ok(results)
    }
}

/// Decode the first entity of a positional result set, if any.
///
/// `Get` always answers with an array; an empty array means the entity was
/// not found, which is not an error.
pub fn first_entity<T: DeserializeOwned>(value: &Value) -> Option<T> {
    value
        .as_array()
        .and_then(|entities| entities.first())
        .and_then(|entity| serde_json::from_value(entity.clone()).ok())
}

/// Decode a whole positional result set.
pub fn entities<T: DeserializeOwned>(value: &Value) -> Result<Vec<T>> {
    Ok(serde_json::from_value(value.clone())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drivedocs_models::{Group, User};

    #[test]
    fn attachment_query_nests_device_search() {
        let call = EntityQuery::TrailerAttachmentsByDevice("b42".into()).to_call();
        assert_eq!(call["params"]["typeName"], "TrailerAttachment");
        assert_eq!(call["params"]["search"]["deviceSearch"]["id"], "b42");
    }

    #[test]
    fn group_query_has_no_search() {
        let call = EntityQuery::AllGroups.to_call();
        assert_eq!(call["params"]["typeName"], "Group");
        assert!(call["params"].get("search").is_none());
    }

    #[test]
    fn first_entity_of_empty_set_is_none() {
        assert!(first_entity::<User>(&json!([])).is_none());
    }

    #[test]
    fn entities_decodes_full_set() {
        let value = json!([
            { "id": "g1", "name": "Fleet A" },
            { "id": "g2", "name": "Night Shift" },
        ]);
        let groups: Vec<Group> = entities(&value).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[1].name, "Night Shift");
    }
}
