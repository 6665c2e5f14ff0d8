//! Workflow service client implementation using reqwest.

use std::time::Duration;

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::domain::{
    AppError, BatchOperation, BatchRequest, ClientConfig, ExecutionRef, Payloads, ServiceError,
};
use crate::ports::{ExecutionRequest, SignalRequest, WorkflowService};

const DEFAULT_STATUS_MESSAGE: &str = "Workflow service request failed";

/// HTTP transport for the orchestration service's JSON API.
///
/// Every method performs a single request. Nothing is retried here or in any
/// wrapper: batch submission is keyed by a caller-generated job ID.
#[derive(Clone)]
pub struct HttpWorkflowService {
    address: Url,
    api_key: Option<String>,
    client: Client,
}

impl std::fmt::Debug for HttpWorkflowService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpWorkflowService")
            .field("address", &self.address)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpWorkflowService {
    /// Create a new HTTP client from the given configuration.
    pub fn new(config: &ClientConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { address: config.address.clone(), api_key: config.api_key.clone(), client })
    }

    fn endpoint(&self, namespace: &str, segments: &[&str]) -> Result<Url, ServiceError> {
        let mut url = self.address.clone();
        {
            let mut path = url.path_segments_mut().map_err(|_| {
                ServiceError::transport(format!("address cannot be a base URL: {}", self.address))
            })?;
            path.pop_if_empty().extend(["api", "v1", "namespaces", namespace]).extend(segments);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match &self.api_key {
            Some(key) => builder.bearer_auth(key),
            None => builder,
        }
    }

    fn send(&self, builder: RequestBuilder) -> Result<String, ServiceError> {
        let response = builder.send().map_err(request_error)?;

        let status = response.status();
        let body_text = response.text().map_err(request_error)?;
        debug!(status = status.as_u16(), "workflow service responded");

        if status.is_success() {
            return Ok(body_text);
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(ServiceError::status(status.as_u16(), message))
    }

    fn post_json<T: Serialize>(&self, url: Url, body: &T) -> Result<(), ServiceError> {
        self.send(self.request(Method::POST, url).json(body)).map(|_| ())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WorkflowExecutionBody<'a> {
    workflow_id: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    run_id: &'a str,
}

impl<'a> From<&'a ExecutionRef> for WorkflowExecutionBody<'a> {
    fn from(execution: &'a ExecutionRef) -> Self {
        Self { workflow_id: &execution.workflow_id, run_id: &execution.run_id }
    }
}

#[derive(Debug, Serialize)]
struct PayloadsBody<'a> {
    payloads: &'a Payloads,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignalBody<'a> {
    namespace: &'a str,
    workflow_execution: WorkflowExecutionBody<'a>,
    signal_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<PayloadsBody<'a>>,
    identity: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecutionBody<'a> {
    namespace: &'a str,
    workflow_execution: WorkflowExecutionBody<'a>,
    identity: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StartBatchBody<'a> {
    namespace: &'a str,
    job_id: &'a str,
    visibility_query: &'a str,
    reason: &'a str,
    #[serde(flatten)]
    operation: BatchOperationBody<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum BatchOperationBody<'a> {
    SignalOperation {
        signal: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        input: Option<PayloadsBody<'a>>,
        identity: &'a str,
    },
    CancellationOperation {
        identity: &'a str,
    },
    TerminationOperation {
        identity: &'a str,
    },
    DeletionOperation {
        identity: &'a str,
    },
}

impl<'a> From<&'a BatchOperation> for BatchOperationBody<'a> {
    fn from(operation: &'a BatchOperation) -> Self {
        match operation {
            BatchOperation::Signal { signal, input, identity } => {
                BatchOperationBody::SignalOperation {
                    signal: signal.as_str(),
                    input: payloads_body(input),
                    identity: identity.as_str(),
                }
            }
            BatchOperation::Cancel { identity } => {
                BatchOperationBody::CancellationOperation { identity: identity.as_str() }
            }
            BatchOperation::Terminate { identity } => {
                BatchOperationBody::TerminationOperation { identity: identity.as_str() }
            }
            BatchOperation::Delete { identity } => {
                BatchOperationBody::DeletionOperation { identity: identity.as_str() }
            }
        }
    }
}

fn payloads_body(payloads: &Payloads) -> Option<PayloadsBody<'_>> {
    (!payloads.is_empty()).then_some(PayloadsBody { payloads })
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    #[serde(default)]
    count: Option<CountValue>,
}

/// Protobuf JSON renders 64-bit integers as strings; accept both forms.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountValue {
    Number(u64),
    Text(String),
}

/// A timeout while sending or while reading the body counts as deadline expiry.
fn request_error(e: reqwest::Error) -> ServiceError {
    if e.is_timeout() {
        ServiceError::deadline_exceeded(format!("request deadline exceeded: {}", e))
    } else {
        ServiceError::transport(format!("HTTP request failed: {}", e))
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl WorkflowService for HttpWorkflowService {
    fn count_workflows(&self, namespace: &str, query: &str) -> Result<u64, ServiceError> {
        let mut url = self.endpoint(namespace, &["workflow-count"])?;
        url.query_pairs_mut().append_pair("query", query);

        let body = self.send(self.request(Method::GET, url))?;
        let response: CountResponse = serde_json::from_str(&body).map_err(|e| {
            ServiceError::decode(200, format!("Failed to parse count response: {}", e))
        })?;

        match response.count {
            None => Ok(0),
            Some(CountValue::Number(count)) => Ok(count),
            Some(CountValue::Text(raw)) => raw.parse().map_err(|_| {
                ServiceError::decode(200, format!("Invalid workflow count: {}", raw))
            }),
        }
    }

    fn signal_workflow(&self, request: &SignalRequest) -> Result<(), ServiceError> {
        let url = self.endpoint(
            &request.namespace,
            &["workflows", &request.execution.workflow_id, "signal", &request.signal_name],
        )?;
        let body = SignalBody {
            namespace: &request.namespace,
            workflow_execution: (&request.execution).into(),
            signal_name: &request.signal_name,
            input: payloads_body(&request.input),
            identity: &request.identity,
        };
        self.post_json(url, &body)
    }

    fn cancel_workflow(&self, request: &ExecutionRequest) -> Result<(), ServiceError> {
        let url = self.endpoint(
            &request.namespace,
            &["workflows", &request.execution.workflow_id, "cancel"],
        )?;
        self.post_json(url, &execution_body(request))
    }

    fn terminate_workflow(&self, request: &ExecutionRequest) -> Result<(), ServiceError> {
        let url = self.endpoint(
            &request.namespace,
            &["workflows", &request.execution.workflow_id, "terminate"],
        )?;
        self.post_json(url, &execution_body(request))
    }

    fn delete_workflow(&self, request: &ExecutionRequest) -> Result<(), ServiceError> {
        let mut url =
            self.endpoint(&request.namespace, &["workflows", &request.execution.workflow_id])?;
        if !request.execution.run_id.is_empty() {
            url.query_pairs_mut().append_pair("execution.runId", &request.execution.run_id);
        }
        self.send(self.request(Method::DELETE, url)).map(|_| ())
    }

    fn start_batch_operation(&self, request: &BatchRequest) -> Result<(), ServiceError> {
        let url = self.endpoint(&request.namespace, &["batch-operations", &request.job_id])?;
        let body = StartBatchBody {
            namespace: &request.namespace,
            job_id: &request.job_id,
            visibility_query: &request.visibility_query,
            reason: &request.reason,
            operation: (&request.operation).into(),
        };
        self.post_json(url, &body)
    }
}

fn execution_body(request: &ExecutionRequest) -> ExecutionBody<'_> {
    ExecutionBody {
        namespace: &request.namespace,
        workflow_execution: (&request.execution).into(),
        identity: &request.identity,
    }
}
