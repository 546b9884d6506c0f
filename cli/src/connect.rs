use crate::args::Cli;
use firecheck_cli::{CLIConfiguration, CLIError, Result};
use firecheck_link::{AuthProvider, DocStoreClient, ServiceAccountKey};
use std::time::Duration;

/// Build the document-store client from CLI arguments, the key file, and
/// the configuration file.
///
/// Resolution priority for each setting: CLI flags > key file > config
/// file > built-in default. The client is constructed here once and
/// handed to the probe; nothing is kept in process-wide state.
pub fn build_client(cli: &Cli, config: &CLIConfiguration) -> Result<DocStoreClient> {
    let key = ServiceAccountKey::from_file(&cli.key)
        .map_err(|e| CLIError::ConfigurationError(format!("Failed to load key: {}", e)))?;

    let server = config.resolved_server();

    let project_id = cli.project.clone().unwrap_or_else(|| key.project_id.clone());
    let database = cli
        .database
        .clone()
        .unwrap_or_else(|| key.database().to_string());

    let base_url = cli
        .url
        .clone()
        .or_else(|| key.server_url.clone())
        .or_else(|| server.url.clone());

    let token = cli
        .token
        .clone()
        .or_else(|| key.token.clone())
        .or_else(|| config.auth.as_ref().and_then(|a| a.token.clone()));
    let auth = match token {
        Some(token) => AuthProvider::bearer_token(token),
        None => AuthProvider::none(),
    };

    let timeout = cli.timeout.unwrap_or(server.timeout);
    let connection_timeout = cli.connection_timeout.unwrap_or(server.connection_timeout);

    log::debug!(
        "[CONNECT] Resolved project '{}' database '{}' endpoint {:?}",
        project_id,
        database,
        base_url
    );

    let mut builder = DocStoreClient::builder()
        .project_id(project_id)
        .database(database)
        .auth(auth)
        .timeout(Duration::from_secs(timeout))
        .connect_timeout(Duration::from_secs(connection_timeout));

    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }

    builder.build().map_err(CLIError::from)
}
