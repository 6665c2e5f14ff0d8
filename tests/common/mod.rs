//! Shared testing utilities for wfctl CLI tests.

use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};

const ISOLATED_VARS: [&str; 4] =
    ["WFCTL_CONFIG", "WFCTL_ADDRESS", "WFCTL_NAMESPACE", "WFCTL_API_KEY"];
const BATCH_PATH: &str = r"^/api/v1/namespaces/default/batch-operations/[0-9a-f-]{36}$";

/// Client identity the CLI reports when run as `tester` on this machine.
#[allow(dead_code)]
pub fn cli_identity() -> String {
    let host = hostname::get().expect("Failed to read hostname");
    format!("wfctl:tester@{}", host.to_string_lossy())
}

/// Isolated CLI environment pointed at a mock workflow service.
#[allow(dead_code)]
pub struct TestContext {
    server: ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        Self { server: Server::new() }
    }

    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }

    /// Build a `wfctl` command wired to the mock server with a fixed user.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("wfctl").expect("Failed to locate wfctl binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        let url = self.server.url();
        cmd.env("USER", "tester").env("RUST_LOG", "off").args(["--address", url.as_str()]);
        cmd
    }

    /// Mock the count endpoint for the `default` namespace.
    pub fn mock_count(&mut self, count: u64, hits: usize) -> Mock {
        self.server
            .mock("GET", "/api/v1/namespaces/default/workflow-count")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(format!(r#"{{"count": "{}"}}"#, count))
            .expect(hits)
            .create()
    }

    /// Mock any batch submission in the `default` namespace whose body contains `body`.
    pub fn mock_batch(&mut self, body: serde_json::Value, hits: usize) -> Mock {
        self.server
            .mock("POST", mockito::Matcher::Regex(BATCH_PATH.into()))
            .match_body(mockito::Matcher::PartialJson(body))
            .with_status(200)
            .with_body("{}")
            .expect(hits)
            .create()
    }
}
