use crux_core::{render::render, Command};
use serde_valid::Validate;

use crate::config::{
    BANNER_DEFAULT_MS, BANNER_PROGRESS_MS, BANNER_SUCCESS_MS, CONNECT_POLL_INTERVAL_MS,
    CONNECT_STATUS_DELAY_MS,
};
use crate::events::{ConnectEvent, Event};
use crate::http_helpers::{START_WIFI_ENDPOINT, WIFI_STATUS_ENDPOINT};
use crate::model::Model;
use crate::types::{BannerKind, ConnectionStatus, Credentials, SubmitOutcome};
use crate::update::ui::show_message;
use crate::{after, http_get, http_post_form, render_if, Effect};

/// Handle connect flow events
pub fn handle(event: ConnectEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ConnectEvent::SelectNetwork { ssid, is_protected } => {
            if model.connect.is_connecting() {
                return Command::done();
            }
            if is_protected {
                model.connect.open_prompt(ssid);
                render()
            } else {
                connect(model, Credentials::new(ssid, "", false))
            }
        }

        ConnectEvent::PasswordChanged { password } => {
            render_if!(model.connect.set_password(password))
        }

        ConnectEvent::SubmitPassword => submit_prompt(model),

        ConnectEvent::PasswordEnter => {
            if model.connect.is_connecting() {
                return Command::done();
            }
            submit_prompt(model)
        }

        ConnectEvent::CancelPassword => {
            if model.connect.is_connecting() || model.connect.prompt().is_none() {
                return Command::done();
            }
            model.connect.close_prompt();
            render()
        }

        ConnectEvent::SubmitResponse { attempt, result } => {
            if !model.connect.is_current(attempt) {
                return Command::done();
            }
            match result {
                Ok(SubmitOutcome::Accepted(message)) => {
                    log::info!("Credentials accepted, waiting for connection");
                    Command::all([
                        show_message(model, message, BannerKind::Neutral, BANNER_DEFAULT_MS),
                        after!(
                            CONNECT_STATUS_DELAY_MS,
                            Event::Connect(ConnectEvent::StatusTick { attempt })
                        ),
                    ])
                }
                Ok(SubmitOutcome::Rejected(message)) => {
                    log::warn!("Credentials rejected: {message}");
                    give_up(model, message)
                }
                Err(e) => {
                    log::warn!("Submitting credentials failed: {e}");
                    give_up(model, "Connection failed")
                }
            }
        }

        ConnectEvent::StatusTick { attempt } => {
            if !model.connect.is_current(attempt) {
                return Command::done();
            }
            http_get!(
                Connect,
                ConnectEvent,
                WIFI_STATUS_ENDPOINT,
                StatusResponse,
                process_connection_status_response,
                attempt: attempt
            )
        }

        ConnectEvent::StatusResponse { attempt, result } => {
            if !model.connect.is_current(attempt) {
                log::debug!("Dropping connection status of stale attempt {attempt}");
                return Command::done();
            }
            handle_status(attempt, result, model)
        }
    }
}

fn handle_status(
    attempt: u64,
    result: Result<ConnectionStatus, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(ConnectionStatus::InProgress(message)) => Command::all([
            show_message(model, message, BannerKind::Neutral, BANNER_PROGRESS_MS),
            after!(
                CONNECT_POLL_INTERVAL_MS,
                Event::Connect(ConnectEvent::StatusTick { attempt })
            ),
        ]),
        Ok(ConnectionStatus::Connected(message)) => {
            log::info!("Connected: {message}");
            model.connect.finish();
            model.connect.close_prompt();
            show_message(model, message, BannerKind::Success, BANNER_SUCCESS_MS)
        }
        Ok(ConnectionStatus::Failed(message)) => {
            log::warn!("Connection failed: {message}");
            give_up(model, message)
        }
        Ok(ConnectionStatus::Unexpected(code)) => {
            give_up(model, format!("Unexpected response: {code}"))
        }
        Err(e) => {
            log::warn!("Connection status request failed: {e}");
            give_up(model, "Error checking connection status")
        }
    }
}

/// Submit the password typed into the open prompt, if any
fn submit_prompt(model: &mut Model) -> Command<Effect, Event> {
    let Some(prompt) = model.connect.prompt() else {
        return Command::done();
    };
    if !prompt.has_password() {
        return Command::done();
    }
    let credentials = Credentials::new(prompt.ssid(), prompt.password(), true);
    connect(model, credentials)
}

fn connect(model: &mut Model, credentials: Credentials) -> Command<Effect, Event> {
    if model.connect.is_connecting() {
        return Command::done();
    }
    if let Err(e) = credentials.validate() {
        log::warn!("Invalid credentials: {e}");
        return show_message(
            model,
            "Network name must be 1 to 32 characters",
            BannerKind::Error,
            BANNER_DEFAULT_MS,
        );
    }
    let Some(attempt) = model.connect.begin() else {
        return Command::done();
    };

    log::info!("Connecting to {} (attempt {attempt})", credentials.ssid);
    Command::all([
        render(),
        http_post_form!(
            Connect,
            ConnectEvent,
            START_WIFI_ENDPOINT,
            SubmitResponse,
            process_submit_response,
            attempt: attempt,
            body: credentials.to_form_body()
        ),
    ])
}

/// Terminal failure: show `message` as an error and re-enable the connect button
fn give_up(model: &mut Model, message: impl Into<String>) -> Command<Effect, Event> {
    model.connect.finish();
    show_message(model, message, BannerKind::Error, BANNER_DEFAULT_MS)
}
