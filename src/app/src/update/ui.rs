use crux_core::{render::render, Command};

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::types::BannerKind;
use crate::{after, render_if, Effect};

/// Handle status banner events
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::DismissBanner => {
            let generation = model.banner.generation();
            render_if!(model.banner.expire(generation))
        }
        UiEvent::BannerExpired { generation } => render_if!(model.banner.expire(generation)),
    }
}

/// Show `text` in the banner and schedule its expiry after `millis`
///
/// A later call supersedes the pending expiry of an earlier one.
pub fn show_message(
    model: &mut Model,
    text: impl Into<String>,
    kind: BannerKind,
    millis: u64,
) -> Command<Effect, Event> {
    let generation = model.banner.show(text, kind);
    Command::all([
        render(),
        after!(
            millis,
            Event::Ui(UiEvent::BannerExpired { generation })
        ),
    ])
}
