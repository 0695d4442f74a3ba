use crate::{AuthorityError, IdentityAuthority};

use chat_core::{RemoteIdentity, SubjectId};

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, StatusCode};

/// Identity authority reached over HTTP at `GET {base_url}/users/{id}`.
#[derive(Clone)]
pub struct HttpIdentityAuthority {
    client: Client,
    base_url: String,
}

impl HttpIdentityAuthority {
    #[track_caller]
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AuthorityError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthorityError::transport(format!("failed to build client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl IdentityAuthority for HttpIdentityAuthority {
    async fn get_identity(&self, subject_id: SubjectId) -> Result<RemoteIdentity, AuthorityError> {
        let url = format!("{}/users/{}", self.base_url, subject_id);
        debug!("Fetching identity {subject_id} from {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AuthorityError::transport(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<RemoteIdentity>()
                .await
                .map_err(|e| AuthorityError::transport(format!("invalid identity body: {e}"))),
            StatusCode::NOT_FOUND => Err(AuthorityError::not_found(subject_id)),
            status => Err(AuthorityError::transport(format!(
                "unexpected status {status}"
            ))),
        }
    }
}
