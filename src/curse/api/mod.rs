// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! The Curse login and addon service APIs.

pub mod channel;
mod client;
pub mod request;
pub mod response;

pub use self::channel::{attach, AuthTokenChannel, Channel, HttpChannel, Message, MessageHeader};
pub use self::client::{AddOnService, LoginService};

/// Objects with a Curse identifier implement this trait.
pub trait CurseId {
    type Id: Clone + PartialEq + Into<String>;

    /// Gets the Curse ID.
    fn id(&self) -> &Self::Id;
}

/// Objects with a Curse-designated name implement this trait.
pub trait CurseName {
    /// Gets the Curse-designated name.
    fn name(&self) -> &String;
}
