use crate::domain::dataset::{DatasetRef, FileDescriptor};
use crate::domain::ports::FileLister;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

/// Where the public dataset files live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GcsConfig {
    pub endpoint: String,
    pub bucket: String,
    /// Object-name root that dataset directories hang off.
    pub info_root: String,
    pub timeout_secs: u64,
}

impl Default for GcsConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://storage.googleapis.com".to_string(),
            bucket: "tfds-data".to_string(),
            info_root: "dataset_info".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ObjectsPage {
    #[serde(default)]
    items: Vec<ObjectEntry>,
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ObjectEntry {
    name: String,
    // The JSON API encodes uint64 as a string.
    #[serde(default)]
    size: Option<String>,
}

/// Lists dataset files in a public GCS bucket through the JSON API.
pub struct GcsLister {
    config: GcsConfig,
    client: OnceLock<Client>,
}

impl GcsLister {
    pub fn new(config: GcsConfig) -> Self {
        Self {
            config,
            client: OnceLock::new(),
        }
    }

    pub fn config(&self) -> &GcsConfig {
        &self.config
    }

    fn objects_url(&self) -> String {
        format!(
            "{}/storage/v1/b/{}/o",
            self.config.endpoint.trim_end_matches('/'),
            self.config.bucket
        )
    }

    fn client(&self) -> Result<&Client> {
        if let Some(client) = self.client.get() {
            return Ok(client);
        }
        let built = Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .user_agent(concat!("dataset-testkit/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(self.client.get_or_init(|| built))
    }

    fn fetch_page(&self, prefix: &str, page_token: Option<&str>) -> Result<ObjectsPage> {
        let url = self.objects_url();
        let mut request = self
            .client()?
            .get(&url)
            .query(&[("prefix", prefix), ("fields", "items(name,size),nextPageToken")]);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }
        request
            .send()
            .and_then(|resp| resp.error_for_status())
            .with_context(|| format!("Failed to list {} under prefix {}", url, prefix))?
            .json::<ObjectsPage>()
            .with_context(|| format!("Failed to parse object listing from {}", url))
    }
}

impl Default for GcsLister {
    fn default() -> Self {
        Self::new(GcsConfig::default())
    }
}

/// Keep entries strictly below `prefix`; the prefix object itself is a
/// directory placeholder.
fn descriptors_from_page(prefix: &str, page: ObjectsPage) -> Vec<FileDescriptor> {
    page.items
        .into_iter()
        .filter(|item| item.name.starts_with(prefix) && item.name.len() > prefix.len())
        .map(|item| FileDescriptor {
            size: item.size.as_deref().and_then(|s| s.parse().ok()),
            path: item.name,
        })
        .collect()
}

impl FileLister for GcsLister {
    fn list(&self, dataset: &DatasetRef) -> Result<Vec<FileDescriptor>> {
        let prefix = dataset.prefix_under(&self.config.info_root);
        let mut files = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut page = self.fetch_page(&prefix, page_token.as_deref())?;
            page_token = page.next_page_token.take();
            files.extend(descriptors_from_page(&prefix, page));
            if page_token.is_none() {
                break;
            }
        }
        tracing::debug!(bucket = %self.config.bucket, %prefix, count = files.len(), "listed GCS objects");
        Ok(files)
    }

    fn name(&self) -> &str {
        "gcs"
    }
}
