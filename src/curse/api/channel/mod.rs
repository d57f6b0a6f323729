// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Request/reply messaging with a service endpoint.
//!
//! A `Channel` sends one request `Message` and hands back the reply. Channels
//! compose: `attach` wraps any channel so that every request it sends carries
//! the session's authentication header.

mod auth;
mod http;

use serde;
use serde_derive::{Deserialize, Serialize};
use serde_json::Value;

use crate::curse::Result;

pub use self::auth::{
    attach, AuthTokenChannel, AUTHENTICATION_TOKEN_HEADER, AUTHENTICATION_TOKEN_NAMESPACE,
};
pub use self::http::HttpChannel;

/// A named, namespaced header carried alongside a message body.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MessageHeader {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Namespace")]
    namespace: String,
    #[serde(rename = "Content")]
    content: Value,
}

impl MessageHeader {
    pub fn new<N, S>(name: N, namespace: S, content: Value) -> Self
    where
        N: Into<String>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            content,
        }
    }

    /// Builds a header whose content is the serialized form of `payload`.
    pub fn from_payload<N, S, P>(name: N, namespace: S, payload: &P) -> Result<Self>
    where
        N: Into<String>,
        S: Into<String>,
        P: serde::Serialize,
    {
        Ok(Self::new(name, namespace, serde_json::to_value(payload)?))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn is(&self, name: &str, namespace: &str) -> bool {
        self.name == name && self.namespace == namespace
    }
}

/// A single request or reply exchanged over a `Channel`.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    action: String,
    headers: Vec<MessageHeader>,
    body: Value,
}

impl Message {
    pub fn new<A: Into<String>>(action: A, body: Value) -> Self {
        Self {
            action: action.into(),
            headers: vec![],
            body,
        }
    }

    /// Builds a message whose body is the serialized form of `payload`.
    pub fn with_payload<A, P>(action: A, payload: &P) -> Result<Self>
    where
        A: Into<String>,
        P: serde::Serialize,
    {
        Ok(Self::new(action, serde_json::to_value(payload)?))
    }

    pub(crate) fn with_headers(mut self, headers: Vec<MessageHeader>) -> Self {
        self.headers = headers;
        self
    }

    pub fn action(&self) -> &str {
        &self.action
    }

    pub fn headers(&self) -> &[MessageHeader] {
        &self.headers
    }

    /// Every header matching the given name and namespace, in send order.
    pub fn headers_named<'a>(
        &'a self,
        name: &'a str,
        namespace: &'a str,
    ) -> impl Iterator<Item = &'a MessageHeader> + 'a {
        self.headers.iter().filter(move |h| h.is(name, namespace))
    }

    /// Appends a header. Existing headers are never replaced.
    pub fn add_header(&mut self, header: MessageHeader) {
        self.headers.push(header);
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_body(self) -> Value {
        self.body
    }
}

/// Something that can deliver a request message and return its reply.
///
/// Any `Fn(Message) -> Result<Message>` is a channel, which keeps decorators
/// and test doubles small.
pub trait Channel {
    fn send(&self, request: Message) -> Result<Message>;
}

impl<F> Channel for F
where
    F: Fn(Message) -> Result<Message>,
{
    fn send(&self, request: Message) -> Result<Message> {
        self(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn closures_are_channels() {
        let echo = |request: Message| -> Result<Message> {
            Ok(Message::new("urn:test/EchoResponse", request.into_body()))
        };

        let reply = echo
            .send(Message::new("urn:test/Echo", json!({ "id": 5 })))
            .unwrap();

        assert_eq!(reply.action(), "urn:test/EchoResponse");
        assert_eq!(reply.body(), &json!({ "id": 5 }));
    }

    #[test]
    fn headers_are_appended_and_looked_up_by_name_and_namespace() {
        let mut message = Message::new("urn:test/Echo", Value::Null);
        message.add_header(MessageHeader::new("Marker", "urn:a", json!(1)));
        message.add_header(MessageHeader::new("Marker", "urn:b", json!(2)));
        message.add_header(MessageHeader::new("Marker", "urn:a", json!(3)));

        let found: Vec<&Value> = message
            .headers_named("Marker", "urn:a")
            .map(MessageHeader::content)
            .collect();

        assert_eq!(found, vec![&json!(1), &json!(3)]);
        assert_eq!(message.headers().len(), 3);
    }

    #[test]
    fn payload_headers_serialize_their_content() {
        #[derive(serde_derive::Serialize)]
        struct Marker {
            value: u8,
        }

        let header = MessageHeader::from_payload("Marker", "urn:a", &Marker { value: 9 }).unwrap();

        assert_eq!(header.name(), "Marker");
        assert_eq!(header.namespace(), "urn:a");
        assert_eq!(header.content(), &json!({ "value": 9 }));
    }
}
