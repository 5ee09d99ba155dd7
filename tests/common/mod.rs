//! Mock GraphQL endpoint for exercising the client over real HTTP

#![allow(dead_code)]

use serde_json::Value;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockBuilder, MockServer, Request, ResponseTemplate};

pub const LAUNCHES_BODY: &str = r#"{"data":{"launches":[{"id":"109","mission_name":"CRS-21","launch_date_local":"2020-12-06T11:17:00-05:00","launch_success":true,"rocket":{"rocket_name":"Falcon 9","rocket_type":"FT"},"links":{"wikipedia":"https://en.wikipedia.org/wiki/SpaceX_CRS-21"}}]}}"#;

/// A wiremock server driven by its own runtime, so the blocking client
/// and the binary under test can talk to it from plain `#[test]`s
pub struct MockApi {
    server: Option<MockServer>,
    runtime: Runtime,
}

impl MockApi {
    pub fn start() -> Self {
        // Keep system proxies away from loopback requests
        std::env::set_var("NO_PROXY", "127.0.0.1,localhost");

        let runtime = Runtime::new().unwrap();
        let server = runtime.block_on(MockServer::start());
        Self {
            server: Some(server),
            runtime,
        }
    }

    /// Answers every `POST /graphql` with `status` and a JSON `body`
    pub fn respond(status: u16, body: &str) -> Self {
        let api = Self::start();
        api.mount(graphql().respond_with(json_response(status, body)).expect(1));
        api
    }

    pub fn mount(&self, mock: Mock) {
        self.runtime.block_on(mock.mount(self.server()));
    }

    pub fn url(&self) -> String {
        format!("{}/graphql", self.server().uri())
    }

    pub fn requests(&self) -> Vec<Request> {
        self.runtime
            .block_on(self.server().received_requests())
            .unwrap_or_default()
    }

    /// The single request received, parsed as a GraphQL body
    pub fn only_body(&self) -> Value {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests[0].body_json().unwrap()
    }

    fn server(&self) -> &MockServer {
        self.server.as_ref().unwrap()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        // Expectations are verified as the server drops
        let _guard = self.runtime.enter();
        self.server.take();
    }
}

/// Matches the client's `POST /graphql`
pub fn graphql() -> MockBuilder {
    Mock::given(method("POST")).and(path("/graphql"))
}

pub fn json_response(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body, "application/json")
}

/// An endpoint nothing listens on
pub fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/graphql", addr)
}
