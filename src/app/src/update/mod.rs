mod connect;
mod scan;
mod ui;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::{render_if, Effect};

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        Event::Initialize => scan::initialize(model),

        Event::Teardown => {
            let scan_stopped = model.scan.cancel();
            let connect_stopped = model.connect.cancel();
            if scan_stopped || connect_stopped {
                log::info!("Stopped running loops");
            }
            render_if!(scan_stopped || connect_stopped)
        }

        Event::Scan(event) => scan::handle(event, model),
        Event::Connect(event) => connect::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
