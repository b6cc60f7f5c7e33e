//! View model handed to the shells
//!
//! Everything a shell needs to draw the page is precomputed here: placeholder
//! texts, icon keys, button labels. Shells never look at the `Model`.

use serde::{Deserialize, Serialize};

use crate::model::Model;
use crate::types::{
    BannerKind, Network, NetworkList, CONNECTING_LABEL, CONNECT_LABEL, LOCK_ICON, SCAN_ICON,
};

pub const SCANNING_TEXT: &str = "Scanning in progress...";
pub const NO_NETWORKS_TEXT: &str = "No networks found. Please try again later.";
pub const SCAN_FAILED_TEXT: &str = "Failed to scan networks";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ViewModel {
    pub scan_button: ScanButtonView,
    pub network_list: NetworkListView,
    pub password_prompt: Option<PasswordPromptView>,
    pub connect_button: ConnectButtonView,
    pub banner: BannerView,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScanButtonView {
    pub loading: bool,
    pub icon: String,
}

/// Content of the network list area
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NetworkListView {
    #[default]
    Empty,
    Placeholder {
        text: String,
        is_error: bool,
    },
    Rows(Vec<NetworkRow>),
}

/// One selectable network row
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRow {
    pub ssid: String,
    pub rssi: i32,
    pub rssi_label: String,
    pub signal_bucket: u8,
    pub signal_icon: String,
    pub is_protected: bool,
    /// `Some(LOCK_ICON)` for protected networks
    pub lock_icon: Option<String>,
}

impl From<&Network> for NetworkRow {
    fn from(network: &Network) -> Self {
        Self {
            ssid: network.ssid.clone(),
            rssi: network.rssi,
            rssi_label: format!("{}dBm", network.rssi),
            signal_bucket: network.signal_bucket(),
            signal_icon: network.signal_icon(),
            is_protected: network.is_protected,
            lock_icon: network.is_protected.then(|| LOCK_ICON.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordPromptView {
    pub ssid: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectButtonView {
    pub enabled: bool,
    pub label: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BannerView {
    pub text: String,
    pub kind: BannerKind,
    pub active: bool,
}

fn placeholder(text: &str, is_error: bool) -> NetworkListView {
    NetworkListView::Placeholder {
        text: text.to_string(),
        is_error,
    }
}

pub fn view(model: &Model) -> ViewModel {
    let network_list = match model.scan.list() {
        NetworkList::Idle => NetworkListView::Empty,
        NetworkList::Scanning => placeholder(SCANNING_TEXT, false),
        NetworkList::Networks(networks) => {
            NetworkListView::Rows(networks.iter().map(NetworkRow::from).collect())
        }
        NetworkList::NoNetworksFound => placeholder(NO_NETWORKS_TEXT, true),
        NetworkList::ScanFailed => placeholder(SCAN_FAILED_TEXT, true),
    };

    let connecting = model.connect.is_connecting();

    ViewModel {
        scan_button: ScanButtonView {
            loading: model.scan.is_scanning(),
            icon: SCAN_ICON.to_string(),
        },
        network_list,
        password_prompt: model.connect.prompt().map(|prompt| PasswordPromptView {
            ssid: prompt.ssid().to_string(),
            password: prompt.password().to_string(),
        }),
        connect_button: ConnectButtonView {
            enabled: !connecting,
            label: if connecting {
                CONNECTING_LABEL
            } else {
                CONNECT_LABEL
            }
            .to_string(),
        },
        banner: BannerView {
            text: model.banner.text().to_string(),
            kind: model.banner.kind(),
            active: model.banner.is_active(),
        },
    }
}
