// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! A `Channel` that talks to a service endpoint over HTTP(S).

use futures::future::{self, TryFutureExt};
use hyper::client::{Client, HttpConnector};
use hyper::header::{HeaderValue, CONTENT_TYPE};
use hyper::{self, Body, Method, StatusCode};
use hyper_tls::HttpsConnector;
use log::debug;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;
use tokio::runtime::{self, Runtime};
use url::Url;

use super::{Channel, Message, MessageHeader};
use crate::curse::util::futures::into_future_trait;
use crate::curse::{Error, Future, Result};

// Names the service operation a request is addressed to:
const SOAP_ACTION: &str = "SOAPAction";

/// The request envelope as it goes on the wire.
#[derive(Serialize)]
struct RequestEnvelope<'a> {
    #[serde(rename = "Header")]
    header: &'a [MessageHeader],
    #[serde(rename = "Body")]
    body: &'a Value,
}

/// A reply envelope. A fault replaces the body when the service rejects the
/// call.
#[derive(Deserialize)]
struct ReplyEnvelope {
    #[serde(rename = "Header", default)]
    header: Vec<MessageHeader>,
    #[serde(rename = "Body", default)]
    body: Value,
    #[serde(rename = "Fault", default)]
    fault: Option<Fault>,
}

#[derive(Deserialize)]
struct Fault {
    #[serde(rename = "Code")]
    code: String,
    #[serde(rename = "Reason")]
    reason: String,
}

impl Fault {
    fn into_error(self) -> Error {
        Error::fault(self.code, self.reason)
    }
}

/// Sends each message as a JSON envelope `POST`ed to a single endpoint.
///
/// Calls are synchronous: every `send` blocks on its own single-threaded
/// runtime until the reply has been read.
pub struct HttpChannel {
    endpoint: Url,
    http_client: Client<HttpsConnector<HttpConnector>>,
    runtime: Runtime,
}

impl HttpChannel {
    /// Create a new channel to the given service endpoint.
    pub fn new(endpoint: Url) -> Result<Self> {
        let runtime = runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        // The runtime only runs inside `send`, so idle pooled connections
        // would never be driven between calls:
        let http_client = Client::builder()
            .pool_max_idle_per_host(0)
            .build(HttpsConnector::new());
        Ok(Self {
            endpoint,
            http_client,
            runtime,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Make a single request to the endpoint, resolving to the decoded reply.
    ///
    /// `send` should be preferred; this is the non-blocking building block it
    /// waits on.
    ///
    /// # Arguments
    ///
    /// * `message` - The request; its headers and body form the envelope and
    ///       its action is sent as the `SOAPAction` HTTP header
    pub fn request(&self, message: Message) -> Future<Message> {
        let client = self.http_client.clone();
        let url = self.endpoint.clone();
        let action = message.action().to_string();

        let request = Self::build_request(&url, &message);
        let request = match request {
            Ok(request) => request,
            Err(err) => return into_future_trait(future::err(err)),
        };

        debug!(
            "curse:request<{action}:{url}>:headers = {count}",
            action = action,
            url = url,
            count = message.headers().len()
        );

        let f = client
            .request(request)
            .map_err(Into::<Error>::into)
            .and_then(|response| {
                let status_code = response.status();
                hyper::body::to_bytes(response.into_body())
                    .map_ok(move |body| (status_code, body))
                    .map_err(Into::<Error>::into)
            })
            .and_then(move |(status_code, body)| {
                // Reply bodies carry session tokens; only their size is logged:
                debug!(
                    "curse:request<{action}:{url}>:reply = {status} ({length} bytes)",
                    action = action,
                    url = url,
                    status = status_code,
                    length = body.len()
                );
                future::ready(Self::decode_reply(action, status_code, &body))
            });

        into_future_trait(f)
    }

    fn build_request(url: &Url, message: &Message) -> Result<hyper::Request<Body>> {
        let envelope = RequestEnvelope {
            header: message.headers(),
            body: message.body(),
        };
        let payload = serde_json::to_vec(&envelope)?;
        let uri = url.as_str().parse::<hyper::Uri>()?;
        let action = HeaderValue::from_str(&format!("\"{}\"", message.action()))?;

        let request = hyper::Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(SOAP_ACTION, action)
            .body(Body::from(payload))?;
        Ok(request)
    }

    fn decode_reply(action: String, status_code: StatusCode, body: &[u8]) -> Result<Message> {
        if status_code.is_client_error() || status_code.is_server_error() {
            // Faults are commonly delivered with a 500 status:
            if let Ok(ReplyEnvelope {
                fault: Some(fault), ..
            }) = serde_json::from_slice::<ReplyEnvelope>(body)
            {
                return Err(fault.into_error());
            }
            return Err(Error::api_error(
                status_code,
                String::from_utf8_lossy(body),
            ));
        }

        let envelope: ReplyEnvelope = serde_json::from_slice(body)
            .map_err(|err| Error::unexpected_reply(action.as_str(), err.to_string()))?;

        if let Some(fault) = envelope.fault {
            return Err(fault.into_error());
        }

        Ok(Message::new(format!("{}Response", action), envelope.body).with_headers(envelope.header))
    }
}

impl Channel for HttpChannel {
    fn send(&self, request: Message) -> Result<Message> {
        self.runtime.block_on(self.request(request))
    }
}
