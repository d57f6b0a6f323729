// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Functions to interact with the Curse login and addon services.

mod addon;
mod login;

pub use self::addon::AddOnService;
pub use self::login::LoginService;

use log::debug;
use serde;

use crate::curse::api::{Channel, Message};
use crate::curse::{Error, Result};

// Builds the action URI of an operation on a service contract:
macro_rules! action {
	($contract:expr, $operation:expr) => {
		format!("{}/{}", $contract, $operation)
	};
}

/// Make a single call to a service operation over `channel` and unwrap its
/// typed reply.
///
/// # Arguments
///
/// * `channel` - The channel the request is sent on
/// * `contract` - The service contract the operation belongs to
/// * `operation` - The operation name, e.g. `GetAddOn`
/// * `payload` - A json-serializable request body
fn invoke<C, P, Q>(channel: &C, contract: &str, operation: &str, payload: &P) -> Result<Q>
where
	C: Channel + ?Sized,
	P: serde::Serialize,
	Q: serde::de::DeserializeOwned,
{
	let action = action!(contract, operation);
	let request = Message::with_payload(action.as_str(), payload)?;

	debug!("curse:invoke<{action}>", action = action);

	let reply = channel.send(request)?;
	serde_json::from_value(reply.into_body())
		.map_err(|err| Error::unexpected_reply(action, err.to_string()))
}
