//! Build the session and remote services from flags, environment and the
//! config file. Flags win over the config file.

use std::sync::Arc;

use anyhow::{Context, Result};

use drivedocs_client::{DEFAULT_DOCS_BASE_URL, DocStore, Gateway, HttpDocStore, HttpGateway};
use drivedocs_core::{DocumentService, EulaGate};
use drivedocs_models::{DeviceSelection, SessionInfo};

use crate::cli::Cli;
use crate::config::CliConfig;

pub struct App {
    pub session: SessionInfo,
    pub selection: DeviceSelection,
    pub gateway: Arc<dyn Gateway>,
    pub service: DocumentService,
    pub gate: EulaGate,
}

fn required(flag: Option<&String>, fallback: Option<&String>, name: &str) -> Result<String> {
    flag.or(fallback)
        .cloned()
        .with_context(|| format!("missing {name} (flag, DRIVEDOCS_* env var or config file)"))
}

pub fn prepare(cli: &Cli, config: &CliConfig) -> Result<App> {
    let session = SessionInfo {
        server: required(cli.server.as_ref(), config.session.server.as_ref(), "--server")?,
        database: required(cli.database.as_ref(), config.session.database.as_ref(), "--database")?,
        session_id: required(
            cli.session_id.as_ref(),
            config.session.session_id.as_ref(),
            "--session-id",
        )?,
        user_name: required(cli.username.as_ref(), config.session.username.as_ref(), "--username")?,
    };

    let device = cli
        .device
        .clone()
        .or_else(|| config.session.device.clone())
        .unwrap_or_default();
    let selection = DeviceSelection::from_page_state(&device);

    let docs_url = cli
        .docs_url
        .clone()
        .or_else(|| config.endpoints.docs_url.clone())
        .unwrap_or_else(|| DEFAULT_DOCS_BASE_URL.to_string());

    tracing::debug!(
        database = %session.database,
        user = %session.user_name,
        device = ?selection,
        "prepared session"
    );

    let gateway: Arc<dyn Gateway> = Arc::new(HttpGateway::new(session.clone()));
    let store: Arc<dyn DocStore> = Arc::new(HttpDocStore::new(docs_url));

    Ok(App {
        selection,
        gateway: gateway.clone(),
        gate: EulaGate::new(store.clone(), session.clone()),
        service: DocumentService::new(gateway, store, session.clone()),
        session,
    })
}
