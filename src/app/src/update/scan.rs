use crux_core::{render::render, Command};

use crate::config::{BANNER_DEFAULT_MS, SCAN_POLL_INTERVAL_MS};
use crate::events::{Event, ScanEvent};
use crate::http_helpers::{SCAN_STATUS_ENDPOINT, START_SCAN_ENDPOINT};
use crate::model::Model;
use crate::types::{BannerKind, ScanStatus};
use crate::update::ui::show_message;
use crate::{after, http_get, render_if, Effect};

const SCAN_FAILED_MESSAGE: &str = "Scan failed";

/// Page load: the device scans on boot, so poll its status right away
pub fn initialize(model: &mut Model) -> Command<Effect, Event> {
    match model.scan.begin() {
        Some(generation) => {
            log::info!("Checking scan status on load");
            Command::all([render(), poll_status(generation)])
        }
        None => Command::done(),
    }
}

/// Handle scan loop events
pub fn handle(event: ScanEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ScanEvent::Start => match model.scan.begin() {
            Some(generation) => {
                log::info!("Starting scan (run {generation})");
                Command::all([render(), request_scan(generation)])
            }
            None => {
                log::debug!("Scan already running");
                Command::done()
            }
        },

        ScanEvent::Cancel => {
            let cancelled = model.scan.cancel();
            if cancelled {
                log::info!("Scan cancelled");
            }
            render_if!(cancelled)
        }

        ScanEvent::StartResponse { generation, result } => {
            if !model.scan.is_current(generation) {
                return Command::done();
            }
            match result {
                Ok(()) => poll_status(generation),
                Err(e) => {
                    log::warn!("Start scan failed: {e}");
                    fail(model, SCAN_FAILED_MESSAGE)
                }
            }
        }

        ScanEvent::PollTick { generation } => {
            if model.scan.is_current(generation) {
                poll_status(generation)
            } else {
                Command::done()
            }
        }

        ScanEvent::RetryTick { generation } => {
            if model.scan.is_current(generation) {
                request_scan(generation)
            } else {
                Command::done()
            }
        }

        ScanEvent::StatusResponse { generation, result } => {
            if !model.scan.is_current(generation) {
                log::debug!("Dropping scan status of stale run {generation}");
                return Command::done();
            }
            handle_status(generation, result, model)
        }
    }
}

fn handle_status(
    generation: u64,
    result: Result<ScanStatus, String>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(ScanStatus::InProgress) => {
            model.scan.show_scanning();
            Command::all([
                render(),
                after!(
                    SCAN_POLL_INTERVAL_MS,
                    Event::Scan(ScanEvent::PollTick { generation })
                ),
            ])
        }
        Ok(ScanStatus::Completed(networks)) if networks.is_empty() => {
            if model.scan.record_empty_result() {
                log::info!("No networks found after {} attempts", model.scan.attempts());
                return render();
            }
            log::debug!("Empty scan result, attempt {}", model.scan.attempts());
            after!(
                SCAN_POLL_INTERVAL_MS,
                Event::Scan(ScanEvent::RetryTick { generation })
            )
        }
        Ok(ScanStatus::Completed(networks)) => {
            log::info!("Scan found {} networks", networks.len());
            model.scan.complete(networks);
            render()
        }
        Ok(ScanStatus::Failed(message)) => {
            if message.trim().is_empty() {
                fail(model, SCAN_FAILED_MESSAGE)
            } else {
                fail(model, message)
            }
        }
        Ok(ScanStatus::Unexpected(code)) => {
            fail(model, format!("Unexpected status code: {code}"))
        }
        Err(e) => {
            log::warn!("Scan status request failed: {e}");
            fail(model, SCAN_FAILED_MESSAGE)
        }
    }
}

fn fail(model: &mut Model, message: impl Into<String>) -> Command<Effect, Event> {
    model.scan.fail();
    show_message(model, message, BannerKind::Error, BANNER_DEFAULT_MS)
}

fn request_scan(generation: u64) -> Command<Effect, Event> {
    http_get!(
        Scan,
        ScanEvent,
        START_SCAN_ENDPOINT,
        StartResponse,
        process_start_scan_response,
        generation: generation
    )
}

fn poll_status(generation: u64) -> Command<Effect, Event> {
    http_get!(
        Scan,
        ScanEvent,
        SCAN_STATUS_ENDPOINT,
        StatusResponse,
        process_scan_status_response,
        generation: generation
    )
}
