//! Catalog gateway boundary: credentials, the upload trait, and the spool
//! implementation.
//!
//! The real catalog service sits behind an external SDK and is not
//! reimplemented here. The pipeline talks to a [`CatalogGateway`], and the
//! in-repo [`SpoolGateway`] stages authenticated batches on disk in the exact
//! wire shape the service accepts, answering with deterministic guid
//! assignments so downstream tooling can be exercised end to end.

use std::{collections::BTreeMap, env, path::Path, path::PathBuf};

use log::{debug, info};
use serde::Deserialize;
use uuid::Uuid;

use crate::{config::RunConfig, error::IngestError, wire, wire::WireEntity};

pub const ENV_TENANT_ID: &str = "CATALOG_TENANT_ID";
pub const ENV_CLIENT_ID: &str = "CATALOG_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "CATALOG_CLIENT_SECRET";
pub const ENV_ACCOUNT_NAME: &str = "CATALOG_ACCOUNT_NAME";

/// Service-principal credentials for the catalog account.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub account_name: String,
}

impl Credentials {
    /// Resolves credentials from the optional run config, falling back to
    /// environment variables field by field. Missing or empty values fail
    /// with an [`IngestError::Authentication`] naming every absent variable.
    pub fn resolve(config: Option<&RunConfig>) -> Result<Self, IngestError> {
        let mut missing = Vec::new();
        let tenant_id = pick(config.and_then(|c| c.tenant_id.clone()), ENV_TENANT_ID);
        let client_id = pick(config.and_then(|c| c.client_id.clone()), ENV_CLIENT_ID);
        let client_secret = pick(
            config.and_then(|c| c.client_secret.clone()),
            ENV_CLIENT_SECRET,
        );
        let account_name = pick(config.and_then(|c| c.account_name.clone()), ENV_ACCOUNT_NAME);

        for (value, name) in [
            (&tenant_id, ENV_TENANT_ID),
            (&client_id, ENV_CLIENT_ID),
            (&client_secret, ENV_CLIENT_SECRET),
            (&account_name, ENV_ACCOUNT_NAME),
        ] {
            if value.is_none() {
                missing.push(name);
            }
        }
        if !missing.is_empty() {
            return Err(IngestError::Authentication {
                missing: missing.join(", "),
            });
        }

        Ok(Credentials {
            tenant_id: tenant_id.unwrap_or_default(),
            client_id: client_id.unwrap_or_default(),
            client_secret: client_secret.unwrap_or_default(),
            account_name: account_name.unwrap_or_default(),
        })
    }
}

fn pick(configured: Option<String>, env_name: &str) -> Option<String> {
    configured
        .or_else(|| env::var(env_name).ok())
        .filter(|value| !value.trim().is_empty())
}

/// Server response to an upload: synthetic negative guids mapped to the
/// identifiers the catalog assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadResult {
    pub guid_assignments: BTreeMap<i64, Uuid>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawUploadResponse {
    guid_assignments: BTreeMap<String, Uuid>,
}

impl UploadResult {
    /// Parses the gateway's JSON response shape,
    /// `{"guidAssignments": {"-1": "<uuid>", …}}`.
    pub fn from_response(body: &str) -> Result<Self, IngestError> {
        let raw: RawUploadResponse =
            serde_json::from_str(body).map_err(|err| IngestError::Upload {
                message: format!("unparseable upload response: {err}"),
            })?;
        let mut guid_assignments = BTreeMap::new();
        for (key, assigned) in raw.guid_assignments {
            let synthetic: i64 = key.parse().map_err(|_| IngestError::Upload {
                message: format!("non-numeric synthetic guid '{key}' in upload response"),
            })?;
            guid_assignments.insert(synthetic, assigned);
        }
        Ok(UploadResult { guid_assignments })
    }
}

pub trait CatalogGateway {
    fn upload(&mut self, batch: &[WireEntity]) -> Result<UploadResult, IngestError>;
}

/// Gateway implementation that spools authenticated batches to a local file.
pub struct SpoolGateway {
    credentials: Credentials,
    spool: PathBuf,
}

impl SpoolGateway {
    /// Opens an authenticated session against the spool destination.
    /// Credentials must already be resolved; this validates the account name
    /// and records where batches land.
    pub fn authenticate(credentials: Credentials, spool: &Path) -> Result<Self, IngestError> {
        if credentials.account_name.trim().is_empty() {
            return Err(IngestError::Authentication {
                missing: ENV_ACCOUNT_NAME.to_string(),
            });
        }
        debug!(
            "Authenticated spool session for account '{}' (tenant {})",
            credentials.account_name, credentials.tenant_id
        );
        Ok(SpoolGateway {
            credentials,
            spool: spool.to_path_buf(),
        })
    }

    pub fn spool_path(&self) -> &Path {
        &self.spool
    }

    /// Deterministic stand-in for a server-assigned guid, derived from the
    /// account and qualified name so repeated spools agree.
    fn assigned_guid(&self, entity: &WireEntity) -> Uuid {
        let seed = format!(
            "{}/{}",
            self.credentials.account_name, entity.qualified_name
        );
        Uuid::new_v5(&Uuid::NAMESPACE_URL, seed.as_bytes())
    }
}

impl CatalogGateway for SpoolGateway {
    fn upload(&mut self, batch: &[WireEntity]) -> Result<UploadResult, IngestError> {
        wire::save_batch(&self.spool, batch).map_err(|err| IngestError::Upload {
            message: format!("spooling batch to {:?}: {err}", self.spool),
        })?;
        let mut guid_assignments = BTreeMap::new();
        for entity in batch {
            guid_assignments.insert(entity.guid, self.assigned_guid(entity));
        }
        info!(
            "Spooled {} entity(ies) to {:?}",
            batch.len(),
            self.spool
        );
        Ok(UploadResult { guid_assignments })
    }
}
