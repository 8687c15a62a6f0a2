//! Atelier Client Implementation

use crate::error::{Result, SdkError};
use crate::types::{
    CreateNotionRequest, CreateWorkshopRequest, GetByIdRequest, HealthResponse,
    ListWorkshopsRequest, Notion, Workshop,
};
use jsonrpsee::core::client::ClientT;
use jsonrpsee::core::params::ObjectParams;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Atelier catalog client
///
/// # Example
///
/// ```no_run
/// use atelier_sdk::AtelierClient;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AtelierClient::connect("http://127.0.0.1:3000").await?;
/// let docker = client.create_notion("Docker").await?;
/// let workshop = client
///     .create_workshop("DevOps 101", vec![docker.id.clone()])
///     .await?;
/// assert_eq!(workshop.notions[0].name, "Docker");
/// # Ok(())
/// # }
/// ```
pub struct AtelierClient {
    client: HttpClient,
}

impl AtelierClient {
    /// Connect to the Atelier daemon
    ///
    /// * `url` - RPC endpoint URL (e.g., `http://127.0.0.1:3000`)
    pub async fn connect(url: impl AsRef<str>) -> Result<Self> {
        let url = url.as_ref();

        let client = HttpClientBuilder::default()
            .request_timeout(Duration::from_secs(30))
            .build(url)
            .map_err(|e| SdkError::Connection(format!("Failed to create client: {}", e)))?;

        Ok(Self { client })
    }

    /// Create a notion. The daemon trims the name.
    pub async fn create_notion(&self, name: impl Into<String>) -> Result<Notion> {
        let request = CreateNotionRequest { name: name.into() };
        self.call("notions.create.v1", &request).await
    }

    /// All notions, in creation order
    pub async fn list_notions(&self) -> Result<Vec<Notion>> {
        self.call("notions.list.v1", &serde_json::json!({})).await
    }

    /// Fetch a notion; `Ok(None)` when no notion has this ID
    pub async fn get_notion(&self, id: impl Into<String>) -> Result<Option<Notion>> {
        let request = GetByIdRequest { id: id.into() };
        absent_as_none(self.call("notions.get.v1", &request).await)
    }

    /// Create a workshop referencing existing notions by ID.
    ///
    /// References are stored as given; only those that resolve come back in
    /// the returned workshop.
    pub async fn create_workshop(
        &self,
        name: impl Into<String>,
        notions: Vec<String>,
    ) -> Result<Workshop> {
        let request = CreateWorkshopRequest {
            name: name.into(),
            notions,
        };
        self.call("workshops.create.v1", &request).await
    }

    /// Up to `limit` workshops (daemon default: 100)
    pub async fn list_workshops(&self, limit: Option<u32>) -> Result<Vec<Workshop>> {
        let request = ListWorkshopsRequest { limit };
        self.call("workshops.list.v1", &request).await
    }

    /// Fetch a workshop; `Ok(None)` when no workshop has this ID
    pub async fn get_workshop(&self, id: impl Into<String>) -> Result<Option<Workshop>> {
        let request = GetByIdRequest { id: id.into() };
        absent_as_none(self.call("workshops.get.v1", &request).await)
    }

    /// Daemon liveness
    pub async fn health(&self) -> Result<HealthResponse> {
        self.call("system.health.v1", &serde_json::json!({})).await
    }

    async fn call<P, R>(&self, method: &str, params: &P) -> Result<R>
    where
        P: Serialize,
        R: serde::de::DeserializeOwned,
    {
        let params = object_params(params)?;
        let response: R = self.client.request(method, params).await?;
        Ok(response)
    }
}

/// Params go over the wire as a single named object
fn object_params<P: Serialize>(params: &P) -> Result<ObjectParams> {
    let Value::Object(fields) = serde_json::to_value(params)? else {
        return Err(SdkError::Other("RPC params must serialize to an object".to_string()));
    };

    let mut object = ObjectParams::new();
    for (key, value) in fields {
        object.insert(&key, value)?;
    }
    Ok(object)
}

fn absent_as_none<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::code;

    #[test]
    fn test_list_request_omits_missing_limit() {
        let value = serde_json::to_value(ListWorkshopsRequest::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));

        let value = serde_json::to_value(ListWorkshopsRequest { limit: Some(2) }).unwrap();
        assert_eq!(value, serde_json::json!({ "limit": 2 }));
    }

    #[test]
    fn test_object_params_rejects_non_objects() {
        assert!(object_params(&serde_json::json!({ "id": "x" })).is_ok());
        assert!(matches!(
            object_params(&vec![1, 2]),
            Err(SdkError::Other(_))
        ));
    }

    #[test]
    fn test_absent_as_none() {
        let missing: Result<u8> = Err(SdkError::Rpc {
            code: code::NOT_FOUND,
            message: "Workshop not found".into(),
            details: None,
        });
        assert!(absent_as_none(missing).unwrap().is_none());

        let invalid: Result<u8> = Err(SdkError::Rpc {
            code: code::INVALID_IDENTIFIER,
            message: "Invalid ID format".into(),
            details: None,
        });
        assert!(absent_as_none(invalid).is_err());

        assert_eq!(absent_as_none(Ok(7u8)).unwrap(), Some(7));
    }
}
