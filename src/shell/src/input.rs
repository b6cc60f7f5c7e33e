//! Terminal commands and their mapping onto core events

use wifi_setup_core::{ConnectEvent, Event, NetworkListView, ScanEvent, UiEvent, ViewModel};

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Scan,
    Stop,
    /// 1-based row number
    Select(usize),
    Cancel,
    Dismiss,
    Password(String),
    Quit,
    Help,
    Empty,
    Unknown(String),
}

/// Parse a line; with the password prompt open every line except `:cancel`
/// and `:quit` is taken as the password.
pub fn parse_input(line: &str, prompt_open: bool) -> Input {
    let trimmed = line.trim();

    if prompt_open {
        return match trimmed {
            "" => Input::Empty,
            ":cancel" => Input::Cancel,
            ":quit" => Input::Quit,
            // passwords may start or end with spaces
            _ => Input::Password(line.trim_end_matches(['\r', '\n']).to_string()),
        };
    }

    match trimmed {
        "" => Input::Empty,
        "quit" | "exit" => Input::Quit,
        "cancel" => Input::Cancel,
        "scan" => Input::Scan,
        "stop" => Input::Stop,
        "ok" | "dismiss" => Input::Dismiss,
        "help" | "?" => Input::Help,
        other => match other.parse::<usize>() {
            Ok(row) if row > 0 => Input::Select(row),
            _ => Input::Unknown(other.to_string()),
        },
    }
}

/// Events to send for `input`, given what is currently on screen
///
/// `None` means the input does not translate into events.
pub fn to_events(input: Input, view: &ViewModel) -> Option<Vec<Event>> {
    let events = match input {
        Input::Scan => vec![Event::Scan(ScanEvent::Start)],
        Input::Stop => vec![Event::Scan(ScanEvent::Cancel)],
        Input::Select(row) => {
            let NetworkListView::Rows(rows) = &view.network_list else {
                return None;
            };
            let network = rows.get(row - 1)?;
            vec![Event::Connect(ConnectEvent::SelectNetwork {
                ssid: network.ssid.clone(),
                is_protected: network.is_protected,
            })]
        }
        Input::Cancel => vec![Event::Connect(ConnectEvent::CancelPassword)],
        Input::Dismiss => vec![Event::Ui(UiEvent::DismissBanner)],
        Input::Password(password) => vec![
            Event::Connect(ConnectEvent::PasswordChanged { password }),
            Event::Connect(ConnectEvent::PasswordEnter),
        ],
        Input::Quit => vec![Event::Teardown],
        Input::Help | Input::Empty | Input::Unknown(_) => return None,
    };
    Some(events)
}

pub const HELP: &str = "commands: scan | stop | <n> select network | cancel | ok | quit \
     (at the password prompt: :cancel | :quit)";
