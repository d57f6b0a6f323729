// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! Library configuration options and environment definitions.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::curse::error::Error;

const PRODUCTION_LOGIN_URL: &str = "https://logins-v1.curseapp.net/login.svc";
const PRODUCTION_ADDON_URL: &str = "https://addons-v1.curseapp.net/AddOnService.svc";
const LOCAL_LOGIN_URL: &str = "http://localhost:8080/login.svc";
const LOCAL_ADDON_URL: &str = "http://localhost:8080/AddOnService.svc";

/// Defines the server environment the library is interacting with.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Environment {
    Local,
    Production,
}

// Only ever called with the constants above.
fn static_url(url: &'static str) -> Url {
    url.parse::<Url>()
        .unwrap_or_else(|_| panic!("Not a valid url: {}", url))
}

impl Environment {
    pub fn login_url(self) -> Url {
        use self::Environment::*;
        match self {
            Local => static_url(LOCAL_LOGIN_URL),
            Production => static_url(PRODUCTION_LOGIN_URL),
        }
    }

    pub fn addon_url(self) -> Url {
        use self::Environment::*;
        match self {
            Local => static_url(LOCAL_ADDON_URL),
            Production => static_url(PRODUCTION_ADDON_URL),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let printable = match *self {
            Environment::Local => "local",
            Environment::Production => "production",
        };

        write!(f, "{}", printable)
    }
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_ref() {
            "local" | "localhost" => Ok(Environment::Local),
            "prod" | "production" => Ok(Environment::Production),
            _ => Err(Error::env_parse_error(s)),
        }
    }
}

/// Configuration options for the Curse client.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Config {
    login_url: Url,
    addon_url: Url,
    api_key: Option<String>,
}

impl Config {
    pub fn new(env: Environment) -> Self {
        Self::with_endpoints(env.login_url(), env.addon_url())
    }

    /// Configuration for services running somewhere other than a known
    /// environment.
    pub fn with_endpoints(login_url: Url, addon_url: Url) -> Self {
        Self {
            login_url,
            addon_url,
            api_key: None,
        }
    }

    /// Sets the API key sent along with the session token.
    pub fn with_api_key<S: Into<String>>(self, api_key: S) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..self
        }
    }

    pub fn login_url(&self) -> &Url {
        &self.login_url
    }

    pub fn addon_url(&self) -> &Url {
        &self.addon_url
    }

    pub fn api_key(&self) -> Option<&String> {
        self.api_key.as_ref()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(Environment::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_names_parse_with_aliases() {
        assert_eq!("prod".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!(" Production ".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("localhost".parse::<Environment>().unwrap(), Environment::Local);
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn environment_round_trips_through_its_display_name() {
        for env in &[Environment::Local, Environment::Production] {
            assert_eq!(env.to_string().parse::<Environment>().unwrap(), *env);
        }
    }

    #[test]
    fn default_config_targets_production() {
        let config = Config::default();

        assert_eq!(config.login_url().as_str(), PRODUCTION_LOGIN_URL);
        assert_eq!(config.addon_url().as_str(), PRODUCTION_ADDON_URL);
        assert!(config.api_key().is_none());
    }

    #[test]
    fn api_key_is_optional() {
        let config = Config::new(Environment::Local).with_api_key("key-1");

        assert_eq!(config.api_key(), Some(&"key-1".to_string()));
        assert_eq!(config.login_url().host_str(), Some("localhost"));
    }
}
