// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

use std::io::{self, Write};
use std::process;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;

use curse_services::api::{HttpChannel, LoginService};
use curse_services::walkthrough::{self, Walkthrough};
use curse_services::Config;

fn main() {
    fmt()
        .with_writer(io::stderr)
        .with_max_level(LevelFilter::WARN)
        .init();

    let status = report(run(&Config::default()), &mut io::stderr());
    process::exit(status);
}

fn run(config: &Config) -> Result<(), failure::Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let credentials = walkthrough::read_credentials(&mut stdin.lock(), &mut stdout.lock())?;

    let login = LoginService::new(HttpChannel::new(config.login_url().clone())?);
    let addons = HttpChannel::new(config.addon_url().clone())?;

    Walkthrough::default()
        .with_api_key(config.api_key().cloned())
        .run(&login, addons, credentials, &mut stdout.lock())?;

    Ok(())
}

/// Writes a failure to `errors`, returning the process exit status.
fn report<W: Write>(result: Result<(), failure::Error>, errors: &mut W) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            // Nothing is left to report a failed write to:
            let _ = writeln!(errors, "{}", err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use curse_services::api::{Channel, Message};
    use curse_services::model::Credentials;

    fn refusing_login() -> LoginService<impl Channel> {
        LoginService::new(|_request: Message| -> curse_services::Result<Message> {
            Ok(Message::new(
                "LoginResponse",
                json!({ "LoginResult": { "Status": "InvalidCredentials" } }),
            ))
        })
    }

    #[test]
    fn success_exits_with_zero_and_reports_nothing() {
        let mut errors = vec![];

        assert_eq!(report(Ok(()), &mut errors), 0);
        assert!(errors.is_empty());
    }

    #[test]
    fn failed_login_exits_with_one_naming_the_step() {
        let addons = |_request: Message| -> curse_services::Result<Message> {
            panic!("no addon call is made after a failed login")
        };
        let result = Walkthrough::default()
            .run(
                &refusing_login(),
                addons,
                Credentials::new("alice", "wrong"),
                &mut io::sink(),
            )
            .map_err(failure::Error::from);
        let mut errors = vec![];

        assert_eq!(report(result, &mut errors), 1);
        assert_eq!(
            String::from_utf8(errors).unwrap(),
            "Login failed: authentication failed: InvalidCredentials\n"
        );
    }
}
