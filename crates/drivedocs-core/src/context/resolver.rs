//! Session/context resolution.
//!
//! At most two gateway round trips: one batch for the device/user/attachment/
//! group lookups, then one batch resolving discovered trailer attachments to
//! full trailer records. Both must complete before the document fetch is
//! issued, since the fetch's query tags depend on the resolved context.

use serde_json::Value;

use drivedocs_client::{ClientError, EntityQuery, Gateway, entities, first_entity};
use drivedocs_models::{
    Device, DeviceSelection, Group, ResolvedContext, SessionInfo, Trailer, TrailerAttachment, User,
};

use crate::context::flatten_groups;
use crate::error::CoreError;

fn result_at(results: &[Value], index: usize) -> Result<&Value, CoreError> {
    results.get(index).ok_or_else(|| {
        ClientError::MalformedResponse(format!("missing result set at position {index}")).into()
    })
}

/// Resolve the driver's session context for one fetch cycle.
///
/// With no device selected the first batch is `{user, groups}`; with a
/// selected device it is `{device, user, attachments, groups}`. An empty
/// `Get` result for the device or user means that entity is absent, not an
/// error. A device with zero trailer attachments skips the second batch.
pub async fn resolve_context(
    gateway: &dyn Gateway,
    session: &SessionInfo,
    selection: &DeviceSelection,
) -> Result<ResolvedContext, CoreError> {
    let mut queries = Vec::with_capacity(4);
    if let Some(device_id) = selection.id() {
        queries.push(EntityQuery::DeviceById(device_id.to_string()));
        queries.push(EntityQuery::UserByName(session.user_name.clone()));
        queries.push(EntityQuery::TrailerAttachmentsByDevice(device_id.to_string()));
        queries.push(EntityQuery::AllGroups);
    } else {
        queries.push(EntityQuery::UserByName(session.user_name.clone()));
        queries.push(EntityQuery::AllGroups);
    }

    let results = gateway.multi_call(&queries).await?;

    let (device, user, attachments, catalog): (
        Option<Device>,
        Option<User>,
        Vec<TrailerAttachment>,
        Vec<Group>,
    ) = if selection.is_none() {
        (
            None,
            first_entity(result_at(&results, 0)?),
            Vec::new(),
            entities(result_at(&results, 1)?)?,
        )
    } else {
        (
            first_entity(result_at(&results, 0)?),
            first_entity(result_at(&results, 1)?),
            entities(result_at(&results, 2)?)?,
            entities(result_at(&results, 3)?)?,
        )
    };

    let trailers = resolve_trailers(gateway, &attachments).await?;

    tracing::debug!(
        device = device.is_some(),
        user = user.is_some(),
        trailers = trailers.len(),
        groups = catalog.len(),
        "resolved session context"
    );

    let groups = flatten_groups(device.as_ref(), user.as_ref(), &catalog);

    Ok(ResolvedContext {
        driver: user.as_ref().map(User::label).unwrap_or_default(),
        vehicle: device.as_ref().map(Device::label),
        trailers,
        groups,
    })
}

async fn resolve_trailers(
    gateway: &dyn Gateway,
    attachments: &[TrailerAttachment],
) -> Result<Vec<Trailer>, CoreError> {
    if attachments.is_empty() {
        return Ok(Vec::new());
    }

    let queries: Vec<EntityQuery> = attachments
        .iter()
        .map(|attachment| EntityQuery::TrailerById(attachment.trailer.id.clone()))
        .collect();

    let results = gateway.multi_call(&queries).await?;
    Ok(results.iter().filter_map(first_entity::<Trailer>).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// In-memory gateway: queues one canned result vector per expected
    /// batch and records the queries it was given.
    struct FakeGateway {
        responses: Mutex<Vec<Vec<Value>>>,
        calls: Mutex<Vec<Vec<EntityQuery>>>,
    }

    impl FakeGateway {
        fn new(responses: Vec<Vec<Value>>) -> Self {
            Self { responses: Mutex::new(responses), calls: Mutex::new(Vec::new()) }
        }

        fn calls(&self) -> Vec<Vec<EntityQuery>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Gateway for FakeGateway {
        async fn multi_call(&self, queries: &[EntityQuery]) -> drivedocs_client::Result<Vec<Value>> {
            self.calls.lock().unwrap().push(queries.to_vec());
            let mut responses = self.responses.lock().unwrap();
            if responses.is_empty() {
                return Err(ClientError::Api { status: 500, message: "no response queued".into() });
            }
            Ok(responses.remove(0))
        }
    }

    fn session() -> SessionInfo {
        SessionInfo {
            database: "acme".into(),
            session_id: "s-1".into(),
            user_name: "dana@acme.com".into(),
            server: "my.geotab.example".into(),
        }
    }

    fn user_json() -> Value {
        json!([{ "firstName": "Dana", "lastName": "Reyes", "driverGroups": [{ "id": "g1" }] }])
    }

    fn catalog_json() -> Value {
        json!([
            { "id": "g1", "name": "Fleet A" },
            { "id": "g2", "name": "Depot West" },
        ])
    }

    #[tokio::test]
    async fn no_device_uses_two_queries_and_no_trailer_batch() {
        let gateway = FakeGateway::new(vec![vec![user_json(), catalog_json()]]);

        let context = resolve_context(&gateway, &session(), &DeviceSelection::None).await.unwrap();

        assert_eq!(context.driver, "Dana Reyes");
        assert_eq!(context.vehicle, None);
        assert!(context.trailers.is_empty());
        assert_eq!(context.groups, vec!["Fleet A"]);

        let calls = gateway.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            vec![
                EntityQuery::UserByName("dana@acme.com".into()),
                EntityQuery::AllGroups,
            ]
        );
    }

    #[tokio::test]
    async fn selected_device_resolves_trailers_in_second_batch() {
        let batch_one = vec![
            json!([{ "id": "b1", "name": "Truck 7", "serialNumber": "G9X000001", "groups": [{ "id": "g2" }] }]),
            user_json(),
            json!([
                { "device": { "id": "b1" }, "trailer": { "id": "t1" } },
                { "device": { "id": "b1" }, "trailer": { "id": "t2" } },
            ]),
            catalog_json(),
        ];
        let batch_two = vec![
            json!([{ "id": "t1", "name": "Flatbed 3" }]),
            json!([{ "id": "t2", "name": "Reefer 1" }]),
        ];
        let gateway = FakeGateway::new(vec![batch_one, batch_two]);

        let selection = DeviceSelection::Selected("b1".into());
        let context = resolve_context(&gateway, &session(), &selection).await.unwrap();

        assert_eq!(context.vehicle.as_deref(), Some("Truck 7 (G9X000001)"));
        assert_eq!(context.trailer_names(), vec!["Flatbed 3", "Reefer 1"]);
        assert_eq!(context.groups, vec!["Depot West", "Fleet A"]);

        let calls = gateway.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].len(), 4);
        assert_eq!(
            calls[1],
            vec![EntityQuery::TrailerById("t1".into()), EntityQuery::TrailerById("t2".into())]
        );
    }

    #[tokio::test]
    async fn device_with_no_attachments_skips_second_batch() {
        let batch_one = vec![
            json!([{ "id": "b1", "name": "Truck 7", "serialNumber": "G9X000001" }]),
            user_json(),
            json!([]),
            catalog_json(),
        ];
        let gateway = FakeGateway::new(vec![batch_one]);

        let selection = DeviceSelection::Selected("b1".into());
        let context = resolve_context(&gateway, &session(), &selection).await.unwrap();

        assert!(context.trailers.is_empty());
        assert_eq!(gateway.calls().len(), 1);
    }

    #[tokio::test]
    async fn unresolved_user_yields_empty_driver_label() {
        let gateway = FakeGateway::new(vec![vec![json!([]), catalog_json()]]);

        let context = resolve_context(&gateway, &session(), &DeviceSelection::None).await.unwrap();

        assert_eq!(context.driver, "");
        assert!(context.groups.is_empty());
    }

    #[tokio::test]
    async fn gateway_failure_propagates() {
        let gateway = FakeGateway::new(vec![]);
        let result = resolve_context(&gateway, &session(), &DeviceSelection::None).await;
        assert!(matches!(result, Err(CoreError::Client(_))));
    }
}
