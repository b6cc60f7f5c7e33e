use serde::{Deserialize, Serialize};

use crate::types::{ConnectionStatus, ScanStatus, SubmitOutcome};

/// Events that can happen in the app
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page load: enter the scan loop without asking the device for a new scan
    Initialize,
    /// Page teardown: stop every running loop
    Teardown,

    Scan(ScanEvent),
    Connect(ConnectEvent),
    Ui(UiEvent),
}

/// Scan loop events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// Scan button
    Start,
    Cancel,

    // Internal events, skipped from serialization
    #[serde(skip)]
    StartResponse {
        generation: u64,
        result: Result<(), String>,
    },
    #[serde(skip)]
    PollTick { generation: u64 },
    #[serde(skip)]
    RetryTick { generation: u64 },
    #[serde(skip)]
    StatusResponse {
        generation: u64,
        result: Result<ScanStatus, String>,
    },
}

/// Connect flow events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum ConnectEvent {
    /// Click on a network row
    SelectNetwork { ssid: String, is_protected: bool },
    /// Password field edited
    PasswordChanged { password: String },
    /// Connect button in the password prompt
    SubmitPassword,
    /// Enter key in the password field
    PasswordEnter,
    /// Cancel button in the password prompt
    CancelPassword,

    // Internal events, skipped from serialization
    #[serde(skip)]
    SubmitResponse {
        attempt: u64,
        result: Result<SubmitOutcome, String>,
    },
    #[serde(skip)]
    StatusTick { attempt: u64 },
    #[serde(skip)]
    StatusResponse {
        attempt: u64,
        result: Result<ConnectionStatus, String>,
    },
}

/// Status banner events
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Hide the banner right away
    DismissBanner,

    #[serde(skip)]
    BannerExpired { generation: u64 },
}
