// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Session authentication for outgoing requests.

use log::debug;

use super::{Channel, Message, MessageHeader};
use crate::curse::model::{AuthenticationToken, Session};
use crate::curse::Result;

// Curse session authentication header:
pub const AUTHENTICATION_TOKEN_HEADER: &str = "AuthenticationToken";
pub const AUTHENTICATION_TOKEN_NAMESPACE: &str = "urn:Curse.FriendsService:v1";

/// A channel that adds the session's `AuthenticationToken` header to every
/// request before handing it to the wrapped channel.
///
/// The header is serialized once, when the decorator is built. Requests are
/// otherwise passed through untouched, as are replies.
pub struct AuthTokenChannel<C> {
    inner: C,
    token: AuthenticationToken,
    header: MessageHeader,
}

/// Wraps `channel` so that every request sent through the result carries the
/// authentication header for `session`.
///
/// The channel is consumed: authenticated calls go through the returned value
/// only, and decorating twice means explicitly wrapping the result again.
pub fn attach<C: Channel>(channel: C, session: &Session) -> Result<AuthTokenChannel<C>> {
    AuthTokenChannel::new(channel, AuthenticationToken::from(session))
}

impl<C: Channel> AuthTokenChannel<C> {
    pub fn new(inner: C, token: AuthenticationToken) -> Result<Self> {
        let header = MessageHeader::from_payload(
            AUTHENTICATION_TOKEN_HEADER,
            AUTHENTICATION_TOKEN_NAMESPACE,
            &token,
        )?;
        Ok(Self {
            inner,
            token,
            header,
        })
    }

    pub fn token(&self) -> &AuthenticationToken {
        &self.token
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwraps the decorated channel.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Channel> Channel for AuthTokenChannel<C> {
    fn send(&self, mut request: Message) -> Result<Message> {
        debug!(
            "curse:auth<{action}>:user = {user}",
            action = request.action(),
            user = self.token.user_id()
        );
        request.add_header(self.header.clone());
        self.inner.send(request)
    }
}
