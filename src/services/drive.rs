// src/services/drive.rs
// DOCUMENTATION: Google Drive integration
// PURPOSE: Derive embeddable URLs from cached file ids and expose the small
// slice of the Drive REST API needed for storage maintenance

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::BackendError;

const EMBED_BASE_URL: &str = "https://lh3.googleusercontent.com/u/0/d";
const FOLDER_BASE_URL: &str = "https://drive.google.com/drive/folders";

/// Strip the file id out of a drive download URL.
///
/// Download URLs carry the id between "id=" and "&export=download". A string
/// without the prefix is treated as starting at the id (callers may pass a
/// bare id through unchanged); a string without the suffix runs to the end.
pub fn extract_file_id(url: &str) -> Option<String> {
    let start = url.find("id=").map(|idx| idx + "id=".len()).unwrap_or(0);
    let end = url.find("&export=download").unwrap_or(url.len());

    if start > end {
        return None;
    }

    let id = &url[start..end];
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}

/// Embeddable image URL for a cached drive file id.
/// Reads never touch the drive service - the id was cached at write time.
pub fn image_url(file_id: &str) -> String {
    format!("{}/{}", EMBED_BASE_URL, file_id)
}

/// Browser URL for a drive folder (event photo dumps)
pub fn folder_url(folder_id: &str) -> String {
    format!("{}/{}", FOLDER_BASE_URL, folder_id)
}

/// File metadata returned by the Drive API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriveFile {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "mimeType")]
    pub mime_type: Option<String>,
}

/// Response from the Drive file listing endpoint
#[derive(Debug, Deserialize)]
struct DriveFileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

/// Google Drive API client
/// DOCUMENTATION: Handles authentication and API calls to the Drive v3 API.
/// All operations are maintenance-path only; the serving path works entirely
/// off cached ids.
pub struct DriveClient {
    /// HTTP client for making requests
    client: Client,
    /// Drive API key
    api_key: String,
    /// Base URL for the Drive API
    base_url: String,
}

impl DriveClient {
    /// Create new Drive API client
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://www.googleapis.com/drive/v3".to_string(),
        }
    }

    /// List files, optionally restricted to one parent folder
    pub async fn list_files(&self, folder: Option<&str>) -> Result<Vec<DriveFile>, BackendError> {
        let url = format!("{}/files", self.base_url);

        let mut params = vec![
            ("key".to_string(), self.api_key.clone()),
            ("fields".to_string(), "files(id,name,mimeType)".to_string()),
        ];
        if let Some(folder) = folder {
            params.push(("q".to_string(), format!("'{}' in parents", folder)));
        }

        log::debug!("Drive file listing: folder={:?}", folder);

        let response = self.get_with_retry(&url, &params).await?;
        let listing: DriveFileList = response.json().await.map_err(|e| {
            log::error!("Failed to parse Drive listing: {}", e);
            BackendError::ExternalApiError(format!("Parse error: {}", e))
        })?;

        log::info!("Drive listing returned {} files", listing.files.len());
        Ok(listing.files)
    }

    /// Fetch metadata for a single file
    pub async fn get_file(&self, file_id: &str) -> Result<DriveFile, BackendError> {
        let url = format!("{}/files/{}", self.base_url, file_id);
        let params = vec![
            ("key".to_string(), self.api_key.clone()),
            ("fields".to_string(), "id,name,mimeType".to_string()),
        ];

        let response = self.get_with_retry(&url, &params).await?;
        response.json().await.map_err(|e| {
            log::error!("Failed to parse Drive file metadata: {}", e);
            BackendError::ExternalApiError(format!("Parse error: {}", e))
        })
    }

    /// Delete a file from the drive
    pub async fn delete_file(&self, file_id: &str) -> Result<(), BackendError> {
        let url = format!("{}/files/{}", self.base_url, file_id);

        let response = self
            .client
            .delete(&url)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                log::error!("Drive delete request failed: {}", e);
                BackendError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        let status = response.status();
        if status.is_success() {
            log::info!("Deleted drive file: {}", file_id);
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        log::error!("Drive delete error {} for {}: {}", status, file_id, body);
        Err(Self::map_status(status, file_id, body))
    }

    /// GET with a single retry on transport failure.
    /// The Drive calls are pure maintenance operations, so one retry and
    /// surfacing the error is enough - there is no state to reconcile.
    async fn get_with_retry(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<reqwest::Response, BackendError> {
        let mut attempt = self.client.get(url).query(params).send().await;

        if let Err(e) = &attempt {
            log::warn!("Drive request failed, retrying once: {}", e);
            attempt = self.client.get(url).query(params).send().await;
        }

        let response = attempt.map_err(|e| {
            log::error!("Drive request failed: {}", e);
            BackendError::ExternalApiError(format!("Request failed: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Drive API error {}: {}", status, body);
            return Err(Self::map_status(status, url, body));
        }

        Ok(response)
    }

    fn map_status(status: reqwest::StatusCode, subject: &str, body: String) -> BackendError {
        match status.as_u16() {
            404 => BackendError::NotFound(format!("Drive file '{}'", subject)),
            429 => BackendError::RateLimitExceeded,
            _ => BackendError::ExternalApiError(format!("API error {}: {}", status, body)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_download_url() {
        let url = "https://drive.google.com/uc?id=1AbCdEfGh&export=download";
        assert_eq!(extract_file_id(url), Some("1AbCdEfGh".to_string()));
    }

    #[test]
    fn bare_id_passes_through() {
        assert_eq!(extract_file_id("1AbCdEfGh"), Some("1AbCdEfGh".to_string()));
    }

    #[test]
    fn missing_suffix_runs_to_end() {
        assert_eq!(
            extract_file_id("https://drive.google.com/uc?id=1AbCdEfGh"),
            Some("1AbCdEfGh".to_string())
        );
    }

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(extract_file_id(""), None);
        assert_eq!(extract_file_id("id=&export=download"), None);
    }

    #[test]
    fn derived_urls() {
        assert_eq!(
            image_url("1AbCdEfGh"),
            "https://lh3.googleusercontent.com/u/0/d/1AbCdEfGh"
        );
        assert_eq!(
            folder_url("folder123"),
            "https://drive.google.com/drive/folders/folder123"
        );
    }
}
