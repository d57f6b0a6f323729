// Copyright (c) 2018 Pennsieve, Inc. All Rights Reserved.

//! A guided tour of the addon service.
//!
//! Logs in, authenticates the addon channel with the resulting session, then
//! walks from an addon to its files and the changelog of its first file,
//! printing what it finds along the way. Each step feeds the next; the first
//! failure ends the tour.

use std::fmt;
use std::io::{BufRead, Write};
use std::result;

use failure::Fail;
use log::debug;

use crate::curse::api::{attach, AuthTokenChannel, Channel, CurseId, CurseName};
use crate::curse::api::{AddOnService, LoginService};
use crate::curse::model::{AddOnId, AuthenticationToken, Credentials, Session};
use crate::curse::{Error, Result};

/// A stage of the walkthrough.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Step {
    Login,
    Authorize,
    GetAddOn,
    GetAddOnDescription,
    GetAllFilesForAddOn,
    GetAddOnFile,
    GetChangeLog,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let printable = match *self {
            Step::Login => "Login",
            Step::Authorize => "Authorize",
            Step::GetAddOn => "GetAddOn",
            Step::GetAddOnDescription => "GetAddOnDescription",
            Step::GetAllFilesForAddOn => "GetAllFilesForAddOn",
            Step::GetAddOnFile => "GetAddOnFile",
            Step::GetChangeLog => "GetChangeLog",
        };

        write!(f, "{}", printable)
    }
}

/// The step a walkthrough stopped at, and why.
#[derive(Debug, Fail)]
#[fail(display = "{} failed: {}", step, error)]
pub struct WalkthroughError {
    step: Step,
    #[fail(cause)]
    error: Error,
}

impl WalkthroughError {
    pub fn step(&self) -> Step {
        self.step
    }

    pub fn error(&self) -> &Error {
        &self.error
    }
}

trait During<T> {
    fn during(self, step: Step) -> result::Result<T, WalkthroughError>;
}

impl<T, E: Into<Error>> During<T> for result::Result<T, E> {
    fn during(self, step: Step) -> result::Result<T, WalkthroughError> {
        self.map_err(|error| WalkthroughError {
            step,
            error: error.into(),
        })
    }
}

/// Prompts for and reads a username and a password, one line each.
///
/// Input is not masked. Only the line terminator is stripped.
pub fn read_credentials<R, W>(input: &mut R, output: &mut W) -> Result<Credentials>
where
    R: BufRead,
    W: Write,
{
    let username = prompt(input, output, "username")?;
    let password = prompt(input, output, "password")?;
    Ok(Credentials::new(username, password))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, what: &str) -> Result<String> {
    write!(output, "Curse {}: ", what)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(Error::missing_input(what));
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}

/// The fixed sequence of authenticated queries against one addon.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Walkthrough {
    addon_id: AddOnId,
    api_key: Option<String>,
}

impl Default for Walkthrough {
    fn default() -> Self {
        Walkthrough::new(AddOnId::PROGRESSIVE_AUTOMATION)
    }
}

impl Walkthrough {
    pub fn new(addon_id: AddOnId) -> Self {
        Self {
            addon_id,
            api_key: None,
        }
    }

    /// Sends `api_key` in the authentication header alongside the session.
    pub fn with_api_key<S: Into<String>>(self, api_key: Option<S>) -> Self {
        Self {
            api_key: api_key.map(Into::into),
            ..self
        }
    }

    pub fn addon_id(&self) -> AddOnId {
        self.addon_id
    }

    /// Run the walkthrough, writing one line per result to `out`.
    ///
    /// The credentials are consumed by the login. `addon_channel` is only
    /// used once the login has succeeded, and then only through the
    /// authenticated decorator built around it.
    pub fn run<L, A, W>(
        &self,
        login: &LoginService<L>,
        addon_channel: A,
        credentials: Credentials,
        out: &mut W,
    ) -> result::Result<(), WalkthroughError>
    where
        L: Channel,
        A: Channel,
        W: Write,
    {
        let session = login.authenticate(&credentials).during(Step::Login)?;
        drop(credentials);

        let channel = self.authorize(addon_channel, &session).during(Step::Authorize)?;
        let addons = AddOnService::new(channel);

        let addon = addons.get_add_on(self.addon_id).during(Step::GetAddOn)?;
        writeln!(
            out,
            "Addon: {}, {}, {}",
            addon.id(),
            addon.name(),
            addon.summary()
        )
        .during(Step::GetAddOn)?;

        let description = addons
            .get_add_on_description(*addon.id())
            .during(Step::GetAddOnDescription)?;
        writeln!(out, "Description for addon: {}", description)
            .during(Step::GetAddOnDescription)?;

        let files = addons
            .get_all_files_for_add_on(*addon.id())
            .during(Step::GetAllFilesForAddOn)?;
        for f in &files {
            writeln!(out, "File: {}, {}, {}", f.id(), f.file_date(), f.file_name())
                .during(Step::GetAllFilesForAddOn)?;
        }
        debug!("curse:walkthrough<{}>:files = {}", addon.id(), files.len());

        let first = files
            .first()
            .ok_or_else(|| Error::no_files_for_addon(*addon.id()))
            .during(Step::GetAllFilesForAddOn)?;

        let file = addons
            .get_add_on_file(*addon.id(), *first.id())
            .during(Step::GetAddOnFile)?;
        writeln!(
            out,
            "File: {}, {}, {}",
            file.id(),
            file.file_date(),
            file.file_name()
        )
        .during(Step::GetAddOnFile)?;

        let changelog = addons
            .get_change_log(*addon.id(), *file.id())
            .during(Step::GetChangeLog)?;
        writeln!(out, "Changelog: {}", changelog).during(Step::GetChangeLog)?;

        Ok(())
    }

    fn authorize<A: Channel>(
        &self,
        channel: A,
        session: &Session,
    ) -> Result<AuthTokenChannel<A>> {
        match self.api_key {
            None => attach(channel, session),
            Some(ref api_key) => AuthTokenChannel::new(
                channel,
                AuthenticationToken::from(session).with_api_key(Some(api_key.as_str())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::io::Cursor;
    use std::rc::Rc;

    use serde_json::{json, Value};

    use crate::curse::api::channel::{AUTHENTICATION_TOKEN_HEADER, AUTHENTICATION_TOKEN_NAMESPACE};
    use crate::curse::api::Message;
    use crate::curse::ErrorKind;

    type Calls = Rc<RefCell<Vec<Message>>>;

    fn operation(request: &Message) -> &str {
        request.action().rsplit('/').next().unwrap_or_default()
    }

    /// A login service that knows a single user, alice, whose password is
    /// "correct".
    fn login_service() -> LoginService<impl Channel> {
        LoginService::new(|request: Message| -> Result<Message> {
            let result = if request.body()["request"]["Password"] == "correct" {
                json!({ "Status": "Success", "Session": { "Token": "abc123", "UserID": 42 } })
            } else {
                json!({ "Status": "InvalidCredentials" })
            };
            Ok(Message::new("LoginResponse", json!({ "LoginResult": result })))
        })
    }

    /// An addon service for "Progressive Automation" listing `files`.
    ///
    /// Every call is recorded. Calls without the token header are refused.
    fn addon_service(files: Value) -> (Calls, impl Channel) {
        let calls: Calls = Rc::new(RefCell::new(vec![]));
        let log = Rc::clone(&calls);
        let channel = move |request: Message| -> Result<Message> {
            log.borrow_mut().push(request.clone());

            let authorized = request
                .headers_named(AUTHENTICATION_TOKEN_HEADER, AUTHENTICATION_TOKEN_NAMESPACE)
                .any(|h| h.content() == &json!({ "UserID": 42, "Token": "abc123" }));
            if !authorized {
                return Err(Error::fault("a:InvalidSecurity", "missing session"));
            }

            let file_id = &request.body()["fileID"];
            let body = match operation(&request) {
                "GetAddOn" => json!({ "GetAddOnResult": {
                    "Id": 220606, "Name": "Progressive Automation", "Summary": "..."
                } }),
                "GetAddOnDescription" => json!({ "GetAddOnDescriptionResult": "Automation mod" }),
                "GetAllFilesForAddOn" => json!({ "GetAllFilesForAddOnResult": files.clone() }),
                "GetAddOnFile" => json!({ "GetAddOnFileResult": {
                    "Id": file_id, "FileDate": "2020-01-01", "FileName": "pa-1.0.zip"
                } }),
                "GetChangeLog" => json!({ "GetChangeLogResult": "Initial release" }),
                other => panic!("unexpected operation {}", other),
            };
            Ok(Message::new(format!("{}Response", request.action()), body))
        };
        (calls, channel)
    }

    fn one_file() -> Value {
        json!([{ "Id": 1001, "FileDate": "2020-01-01", "FileName": "pa-1.0.zip" }])
    }

    fn operations(calls: &Calls) -> Vec<String> {
        calls
            .borrow()
            .iter()
            .map(|request| operation(request).to_string())
            .collect()
    }

    #[test]
    fn default_walkthrough_targets_progressive_automation() {
        let walkthrough = Walkthrough::default();

        assert_eq!(walkthrough.addon_id(), AddOnId::PROGRESSIVE_AUTOMATION);
        assert_eq!(walkthrough, Walkthrough::new(AddOnId::new(220_606)));
    }

    #[test]
    fn successful_walkthrough_prints_every_result() {
        let (calls, addons) = addon_service(one_file());
        let mut out = vec![];

        Walkthrough::default()
            .run(
                &login_service(),
                addons,
                Credentials::new("alice", "correct"),
                &mut out,
            )
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Addon: 220606, Progressive Automation, ...\n\
             Description for addon: Automation mod\n\
             File: 1001, 2020-01-01, pa-1.0.zip\n\
             File: 1001, 2020-01-01, pa-1.0.zip\n\
             Changelog: Initial release\n"
        );
        assert_eq!(
            operations(&calls),
            vec![
                "GetAddOn",
                "GetAddOnDescription",
                "GetAllFilesForAddOn",
                "GetAddOnFile",
                "GetChangeLog"
            ]
        );
    }

    #[test]
    fn failed_login_makes_no_addon_calls() {
        let (calls, addons) = addon_service(one_file());
        let mut out = vec![];

        let error = Walkthrough::default()
            .run(
                &login_service(),
                addons,
                Credentials::new("alice", "wrong"),
                &mut out,
            )
            .unwrap_err();

        assert_eq!(error.step(), Step::Login);
        assert_eq!(
            error.error().kind(),
            &ErrorKind::AuthFailure {
                status: crate::curse::model::AuthenticationStatus::InvalidCredentials
            }
        );
        assert_eq!(
            error.to_string(),
            "Login failed: authentication failed: InvalidCredentials"
        );
        assert!(calls.borrow().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn first_listed_file_is_followed_up() {
        let (calls, addons) = addon_service(json!([
            { "Id": 3000, "FileDate": "2021-05-01", "FileName": "pa-1.2.zip" },
            { "Id": 1001, "FileDate": "2020-01-01", "FileName": "pa-1.0.zip" }
        ]));
        let mut out = vec![];

        Walkthrough::default()
            .run(
                &login_service(),
                addons,
                Credentials::new("alice", "correct"),
                &mut out,
            )
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        let listed: Vec<&str> = output.lines().filter(|l| l.starts_with("File: ")).collect();
        assert_eq!(listed[0], "File: 3000, 2021-05-01, pa-1.2.zip");
        assert_eq!(listed[1], "File: 1001, 2020-01-01, pa-1.0.zip");

        let calls = calls.borrow();
        let detail = calls
            .iter()
            .find(|request| operation(request) == "GetAddOnFile")
            .unwrap();
        assert_eq!(detail.body(), &json!({ "addonID": 220606, "fileID": 3000 }));
    }

    #[test]
    fn empty_file_list_is_reported_without_fetching_a_file() {
        for files in vec![json!([]), Value::Null] {
            let (calls, addons) = addon_service(files);
            let mut out = vec![];

            let error = Walkthrough::default()
                .run(
                    &login_service(),
                    addons,
                    Credentials::new("alice", "correct"),
                    &mut out,
                )
                .unwrap_err();

            assert_eq!(error.step(), Step::GetAllFilesForAddOn);
            assert_eq!(
                error.error().kind(),
                &ErrorKind::NoFilesForAddOn {
                    addon_id: AddOnId::PROGRESSIVE_AUTOMATION
                }
            );
            assert_eq!(
                operations(&calls),
                vec!["GetAddOn", "GetAddOnDescription", "GetAllFilesForAddOn"]
            );
        }
    }

    #[test]
    fn transport_failure_stops_the_walkthrough_at_its_step() {
        let addons = |request: Message| -> Result<Message> {
            match operation(&request) {
                "GetAddOn" => Ok(Message::new(
                    "GetAddOnResponse",
                    json!({ "GetAddOnResult": { "Id": 220606, "Name": "Progressive Automation" } }),
                )),
                _ => Err(Error::api_error(
                    hyper::StatusCode::SERVICE_UNAVAILABLE,
                    "unavailable",
                )),
            }
        };
        let mut out = vec![];

        let error = Walkthrough::default()
            .run(
                &login_service(),
                addons,
                Credentials::new("alice", "correct"),
                &mut out,
            )
            .unwrap_err();

        assert_eq!(error.step(), Step::GetAddOnDescription);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Addon: 220606, Progressive Automation, \n"
        );
    }

    #[test]
    fn api_key_rides_along_with_the_session() {
        let calls: Calls = Rc::new(RefCell::new(vec![]));
        let log = Rc::clone(&calls);
        let addons = move |request: Message| -> Result<Message> {
            log.borrow_mut().push(request);
            Err(Error::fault("a:Stop", "stop after one call"))
        };

        let result = Walkthrough::default()
            .with_api_key(Some("key-1"))
            .run(
                &login_service(),
                addons,
                Credentials::new("alice", "correct"),
                &mut Vec::new(),
            );

        assert_eq!(result.unwrap_err().step(), Step::GetAddOn);
        assert_eq!(
            calls.borrow()[0].headers()[0].content(),
            &json!({ "UserID": 42, "Token": "abc123", "ApiKey": "key-1" })
        );
    }

    #[test]
    fn credentials_are_read_one_line_each() {
        let mut input = Cursor::new("alice\r\ncorrect\n");
        let mut prompts = vec![];

        let credentials = read_credentials(&mut input, &mut prompts).unwrap();

        assert_eq!(credentials, Credentials::new("alice", "correct"));
        assert_eq!(
            String::from_utf8(prompts).unwrap(),
            "Curse username: Curse password: "
        );
    }

    #[test]
    fn closed_input_is_reported() {
        let mut input = Cursor::new("alice\n");

        let error = read_credentials(&mut input, &mut Vec::new()).unwrap_err();

        assert_eq!(error.kind(), Error::missing_input("password").kind());
    }
}
