//! Sending bulk payloads to the search service.

use reqwest::blocking::Client;
use reqwest::header;
use serde_json::Value;

use super::{BulkError, BulkPayload, IndexerConfig, CONTENT_TYPE};

/// Something that accepts bulk payloads.
pub trait BulkTransport {
    fn post_bulk(&mut self, payload: BulkPayload) -> Result<BulkResponse, BulkError>;
}

impl<'a, T: BulkTransport> BulkTransport for &'a mut T {
    fn post_bulk(&mut self, payload: BulkPayload) -> Result<BulkResponse, BulkError> {
        (**self).post_bulk(payload)
    }
}

/// Posts payloads to `<base-url>/_bulk` over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &IndexerConfig) -> Result<HttpTransport, BulkError> {
        let client = Client::builder().build()?;
        Ok(HttpTransport::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &IndexerConfig) -> HttpTransport {
        HttpTransport {
            client,
            endpoint: config.bulk_url(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl BulkTransport for HttpTransport {
    fn post_bulk(&mut self, payload: BulkPayload) -> Result<BulkResponse, BulkError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, CONTENT_TYPE)
            .body(payload.into_bytes())
            .send()?;

        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(BulkResponse::new(status, body))
    }
}

/// The raw answer to a bulk request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkResponse {
    status: u16,
    body: String,
}

impl BulkResponse {
    pub fn new<S: Into<String>>(status: u16, body: S) -> BulkResponse {
        BulkResponse {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Fail unless the request succeeded and no item reported an error.
    ///
    /// A status of 300 or above is a failure, as is a JSON body with a truthy
    /// `errors` member. A success status with a body that is not a JSON
    /// object is reported as an invalid response.
    pub fn check(self) -> Result<(), BulkError> {
        if self.status >= 300 {
            return Err(BulkError::Rejected {
                status: self.status,
                body: self.body,
            });
        }

        let failed = match serde_json::from_str::<Value>(&self.body) {
            Ok(Value::Object(ref map)) => map.get("errors").map_or(false, truthy),
            _ => {
                return Err(BulkError::InvalidResponse {
                    status: self.status,
                    body: self.body,
                })
            }
        };

        if failed {
            return Err(BulkError::Rejected {
                status: self.status,
                body: self.body,
            });
        }
        Ok(())
    }
}

fn truthy(value: &Value) -> bool {
    match *value {
        Value::Null => false,
        Value::Bool(b) => b,
        Value::Number(ref n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(ref s) => !s.is_empty(),
        Value::Array(ref a) => !a.is_empty(),
        Value::Object(ref o) => !o.is_empty(),
    }
}
