// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Errors raised while talking to the Curse services.
use std::{fmt, io, result};

use failure::{Backtrace, Context, Fail};

use crate::curse::model::{AddOnId, AuthenticationStatus};

/// Type alias for handling errors throughout the client
pub type Result<T> = result::Result<T, Error>;

/// An error that can occur while interacting with the Curse services
#[derive(Debug)]
pub struct Error {
    ctx: Context<ErrorKind>,
}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        self.ctx.get_context()
    }

    pub fn api_error<S: Into<String>>(status_code: hyper::StatusCode, message: S) -> Error {
        ErrorKind::ApiError {
            status_code,
            message: message.into(),
        }
        .into()
    }

    pub fn auth_failure(status: AuthenticationStatus) -> Error {
        ErrorKind::AuthFailure { status }.into()
    }

    pub fn fault<C: Into<String>, R: Into<String>>(code: C, reason: R) -> Error {
        ErrorKind::Fault {
            code: code.into(),
            reason: reason.into(),
        }
        .into()
    }

    pub fn unexpected_reply<A: Into<String>, M: Into<String>>(action: A, message: M) -> Error {
        ErrorKind::UnexpectedReply {
            action: action.into(),
            message: message.into(),
        }
        .into()
    }

    pub fn no_files_for_addon(addon_id: AddOnId) -> Error {
        ErrorKind::NoFilesForAddOn { addon_id }.into()
    }

    pub fn missing_input<S: Into<String>>(what: S) -> Error {
        ErrorKind::MissingInput { what: what.into() }.into()
    }

    pub fn env_parse_error<S: Into<String>>(value: S) -> Error {
        ErrorKind::EnvParseError {
            value: value.into(),
        }
        .into()
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.ctx.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.ctx.backtrace()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ctx.fmt(f)
    }
}

impl Clone for Error {
    fn clone(&self) -> Self {
        self.kind().clone().into()
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Fail)]
pub enum ErrorKind {
    #[fail(display = "authentication failed: {}", status)]
    AuthFailure { status: AuthenticationStatus },

    #[fail(display = "api error: {} {}", status_code, message)]
    ApiError {
        status_code: hyper::StatusCode,
        message: String,
    },

    #[fail(display = "service fault: {} {}", code, reason)]
    Fault { code: String, reason: String },

    #[fail(display = "unexpected reply to {}: {}", action, message)]
    UnexpectedReply { action: String, message: String },

    #[fail(display = "no files available for addon {}", addon_id)]
    NoFilesForAddOn { addon_id: AddOnId },

    #[fail(display = "no {} given", what)]
    MissingInput { what: String },

    #[fail(display = "invalid environment string: {}", value)]
    EnvParseError { value: String },

    #[fail(display = "io error: {}", error)]
    IoError { error: String },

    #[fail(display = "hyper error: {}", error)]
    HyperError { error: String },

    #[fail(display = "http error: {}", error)]
    HttpError { error: String },

    #[fail(display = "json serialization error: {}", error)]
    SerdeJsonError { error: String },

    #[fail(display = "invalid url: {}", error)]
    UrlParseError { error: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error::from(Context::new(kind))
    }
}
impl From<Context<ErrorKind>> for Error {
    fn from(ctx: Context<ErrorKind>) -> Error {
        Error { ctx }
    }
}

/// map from io errors
impl From<io::Error> for Error {
    fn from(error: io::Error) -> Error {
        Error::from(Context::new(ErrorKind::IoError {
            error: error.to_string(),
        }))
    }
}

/// map from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::from(Context::new(ErrorKind::SerdeJsonError {
            error: error.to_string(),
        }))
    }
}

/// map from hyper errors
impl From<hyper::Error> for Error {
    fn from(error: hyper::Error) -> Error {
        Error::from(Context::new(ErrorKind::HyperError {
            error: error.to_string(),
        }))
    }
}
impl From<hyper::http::uri::InvalidUri> for Error {
    fn from(error: hyper::http::uri::InvalidUri) -> Error {
        Error::from(Context::new(ErrorKind::HyperError {
            error: error.to_string(),
        }))
    }
}
impl From<hyper::http::Error> for Error {
    fn from(error: hyper::http::Error) -> Error {
        Error::from(Context::new(ErrorKind::HttpError {
            error: error.to_string(),
        }))
    }
}
impl From<hyper::header::InvalidHeaderValue> for Error {
    fn from(error: hyper::header::InvalidHeaderValue) -> Error {
        Error::from(Context::new(ErrorKind::HttpError {
            error: error.to_string(),
        }))
    }
}

/// map from url errors
impl From<url::ParseError> for Error {
    fn from(error: url::ParseError) -> Error {
        Error::from(Context::new(ErrorKind::UrlParseError {
            error: error.to_string(),
        }))
    }
}
