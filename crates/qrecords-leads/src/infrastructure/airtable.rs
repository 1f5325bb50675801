//! Airtable API client
//!
//! Stores demo request leads as rows of an Airtable table.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};
use url::Url;

use crate::config::AirtableConfig;
use crate::domain::services::CrmRecord;
use crate::ports::outbound::{DispatchError, LeadRecordGateway};

#[derive(Serialize)]
struct CreateRecordRequest<'a> {
    fields: &'a CrmRecord,
}

/// Airtable lead gateway
pub struct AirtableClient {
    config: AirtableConfig,
    client: Client,
}

impl AirtableClient {
    pub fn new(config: AirtableConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: AirtableConfig, client: Client) -> Self {
        Self { config, client }
    }

    /// `{base}/v0/{baseId}/{table}`, the table name percent-encoded as one segment.
    fn table_url(&self, base_id: &str) -> Result<Url, DispatchError> {
        let mut url = Url::parse(self.config.api_base_url.trim_end_matches('/'))?;
        url.path_segments_mut()
            .map_err(|()| DispatchError::Unavailable(format!("{} cannot be a base URL", self.config.api_base_url)))?
            .pop_if_empty()
            .extend(["v0", base_id, self.config.table_name.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl LeadRecordGateway for AirtableClient {
    async fn create_lead(&self, record: &CrmRecord) -> Result<(), DispatchError> {
        let api_key = self.config.api_key()?;
        let url = self.table_url(self.config.base_id()?)?;
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(&CreateRecordRequest { fields: record })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(DispatchError::Rejected { service: "airtable", status, body });
        }

        info!(table = %self.config.table_name, "Lead stored in Airtable");
        Ok(())
    }
}
