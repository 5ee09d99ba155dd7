//! GraphQL client with bearer-token injection
//!
//! Every request re-reads the token store, so a token written or cleared
//! by another command takes effect on the next call. A 401 clears the
//! stored token before the error is returned.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::{ApiError, GraphqlError};
use super::queries;
use super::transport::{HttpResponse, HttpTransport, Transport};
use super::types::{
    Launch, LaunchData, LaunchVariables, LaunchesData, LaunchesVariables, RocketInfo, RocketsData,
};
use crate::storage::TokenStore;

/// Envelope of every GraphQL response
#[derive(Debug, Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GraphqlRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
    operation_name: &'a str,
}

pub struct GraphqlClient {
    endpoint: String,
    transport: Box<dyn Transport>,
    tokens: Option<TokenStore>,
}

impl GraphqlClient {
    /// Client over HTTP for `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ApiError> {
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(endpoint, Box::new(transport)))
    }

    pub fn with_transport(endpoint: impl Into<String>, transport: Box<dyn Transport>) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
            tokens: None,
        }
    }

    /// Attach the bearer token from `tokens` to every request
    pub fn with_token_store(mut self, tokens: TokenStore) -> Self {
        self.tokens = Some(tokens);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Recent launches; `limit` is omitted from the variables when `None`
    pub fn launches(&self, limit: Option<u32>) -> Result<Vec<Launch>, ApiError> {
        let variables = LaunchesVariables {
            limit: limit.map(i64::from),
        };
        let data: LaunchesData =
            self.query(queries::GET_LAUNCHES_OP, queries::GET_LAUNCHES, &variables)?;
        Ok(data.launches)
    }

    /// A single launch, `None` if the server does not know the ID
    pub fn launch(&self, id: &str) -> Result<Option<Launch>, ApiError> {
        let variables = LaunchVariables { id: id.to_string() };
        let data: LaunchData = self.query(queries::GET_LAUNCH_OP, queries::GET_LAUNCH, &variables)?;
        Ok(data.launch)
    }

    pub fn rockets(&self) -> Result<Vec<RocketInfo>, ApiError> {
        let data: RocketsData = self.query(
            queries::GET_ROCKETS_OP,
            queries::GET_ROCKETS,
            &serde_json::json!({}),
        )?;
        Ok(data.rockets)
    }

    /// Sends `document` with `variables` and decodes the `data` object
    pub fn query<V, T>(&self, operation: &str, document: &str, variables: &V) -> Result<T, ApiError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(GraphqlRequest {
            query: document,
            variables,
            operation_name: operation,
        })
        .map_err(|e| ApiError::Parse(e.to_string()))?;

        let response = self
            .transport
            .post(&self.endpoint, &self.headers(), &body)?;

        self.handle_response(response)
    }

    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![("Content-Type".to_string(), "application/json".to_string())];

        // An unreadable token file is treated like no token
        let token = self
            .tokens
            .as_ref()
            .and_then(|store| store.read().ok().flatten());
        if let Some(token) = token {
            headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        }

        headers
    }

    fn handle_response<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        match response.status {
            401 => {
                if let Some(store) = &self.tokens {
                    // Clearing is best effort; the user is sent to log in either way
                    let _ = store.clear();
                }
                return Err(ApiError::Unauthorized);
            }
            200..=299 => {}
            status => {
                return Err(ApiError::Network {
                    status: Some(status),
                    message: format!("Response not successful: received status code {}", status),
                });
            }
        }

        let parsed: GraphqlResponse<T> = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Parse(e.to_string()))?;

        if !parsed.errors.is_empty() {
            return Err(ApiError::GraphQl(parsed.errors));
        }

        parsed
            .data
            .ok_or_else(|| ApiError::Parse("response has no data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::graphql::error::TransportError;
    use tempfile::TempDir;

    /// Records the last request and replays a canned response
    struct FakeTransport {
        response: Result<HttpResponse, String>,
        seen: Arc<Mutex<Vec<(Vec<(String, String)>, serde_json::Value)>>>,
    }

    impl Transport for FakeTransport {
        fn post(
            &self,
            _url: &str,
            headers: &[(String, String)],
            body: &serde_json::Value,
        ) -> Result<HttpResponse, TransportError> {
            self.seen
                .lock()
                .unwrap()
                .push((headers.to_vec(), body.clone()));
            self.response.clone().map_err(TransportError)
        }
    }

    type Seen = Arc<Mutex<Vec<(Vec<(String, String)>, serde_json::Value)>>>;

    fn client(status: u16, body: serde_json::Value) -> (GraphqlClient, Seen) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let transport = FakeTransport {
            response: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            seen: Arc::clone(&seen),
        };
        (
            GraphqlClient::with_transport("http://test/graphql", Box::new(transport)),
            seen,
        )
    }

    fn launches_body() -> serde_json::Value {
        serde_json::json!({
            "data": {
                "launches": [{
                    "id": "1",
                    "mission_name": "FalconSat",
                    "launch_date_local": "2006-03-25T10:30:00+12:00",
                    "launch_success": false,
                    "rocket": { "rocket_name": "Falcon 1", "rocket_type": "Merlin A" },
                    "links": { "mission_patch_small": null, "wikipedia": null }
                }]
            }
        })
    }

    fn header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
        headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn launches_sends_document_and_limit() {
        let (client, seen) = client(200, launches_body());

        let launches = client.launches(Some(12)).unwrap();
        assert_eq!(launches.len(), 1);
        assert_eq!(launches[0].mission_name, "FalconSat");

        let seen = seen.lock().unwrap();
        let body = &seen[0].1;
        assert_eq!(body["operationName"], "GetLaunches");
        assert_eq!(body["variables"]["limit"], 12);
        assert!(body["query"].as_str().unwrap().contains("mission_name"));
    }

    #[test]
    fn no_authorization_header_without_token() {
        let (client, seen) = client(200, launches_body());
        client.launches(None).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(header(&seen[0].0, "authorization"), None);
        assert_eq!(seen[0].1["variables"], serde_json::json!({}));
    }

    #[test]
    fn bearer_token_is_attached() {
        let dir = TempDir::new().unwrap();
        let tokens = TokenStore::new(dir.path());
        tokens.write("abc123").unwrap();

        let (client, seen) = client(200, launches_body());
        let client = client.with_token_store(tokens);
        client.launches(None).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(header(&seen[0].0, "authorization"), Some("Bearer abc123"));
    }

    #[test]
    fn unauthorized_clears_token() {
        let dir = TempDir::new().unwrap();
        let tokens = TokenStore::new(dir.path());
        tokens.write("expired").unwrap();

        let (client, _) = client(401, serde_json::json!({}));
        let client = client.with_token_store(tokens.clone());

        let err = client.launches(None).unwrap_err();
        assert!(err.requires_login());
        assert_eq!(tokens.read().unwrap(), None);
    }

    #[test]
    fn server_error_status_is_network_error() {
        let (client, _) = client(503, serde_json::json!({}));
        let err = client.launches(None).unwrap_err();
        assert!(matches!(err, ApiError::Network { status: Some(503), .. }));
    }

    #[test]
    fn graphql_errors_are_reported() {
        let (client, _) = client(
            200,
            serde_json::json!({
                "data": null,
                "errors": [{ "message": "Cannot query field \"launches\"" }]
            }),
        );

        match client.launches(None).unwrap_err() {
            ApiError::GraphQl(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].message.contains("Cannot query field"));
            }
            other => panic!("expected GraphQL error, got {:?}", other),
        }
    }

    #[test]
    fn missing_data_is_parse_error() {
        let (client, _) = client(200, serde_json::json!({}));
        assert!(matches!(client.launches(None).unwrap_err(), ApiError::Parse(_)));
    }

    #[test]
    fn transport_failure_is_network_error() {
        let transport = FakeTransport {
            response: Err("connection refused".to_string()),
            seen: Arc::new(Mutex::new(Vec::new())),
        };
        let client = GraphqlClient::with_transport("http://test/graphql", Box::new(transport));

        let err = client.rockets().unwrap_err();
        assert!(matches!(err, ApiError::Network { status: None, .. }));
    }

    #[test]
    fn launch_by_id_may_be_missing() {
        let (client, seen) = client(200, serde_json::json!({ "data": { "launch": null } }));

        assert_eq!(client.launch("999").unwrap(), None);
        assert_eq!(seen.lock().unwrap()[0].1["variables"]["id"], "999");
    }
}
