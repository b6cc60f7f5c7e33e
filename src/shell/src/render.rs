use std::fmt::Write;

use wifi_setup_core::{BannerKind, NetworkListView, ViewModel};

/// Draw the view model as plain text
pub fn render_view(view: &ViewModel) -> String {
    let mut out = String::new();

    let scan_state = if view.scan_button.loading {
        "scanning"
    } else {
        "idle"
    };
    let _ = writeln!(out, "== Wi-Fi setup [{scan_state}] ==");

    match &view.network_list {
        NetworkListView::Empty => {
            let _ = writeln!(out, "  (no scan results, type 'scan')");
        }
        NetworkListView::Placeholder { text, is_error } => {
            let marker = if *is_error { "!" } else { "~" };
            let _ = writeln!(out, "  {marker} {text}");
        }
        NetworkListView::Rows(rows) => {
            for (index, row) in rows.iter().enumerate() {
                let lock = if row.lock_icon.is_some() { " [locked]" } else { "" };
                let _ = writeln!(
                    out,
                    "  {:>2}. {}{lock}  {}  [{}]",
                    index + 1,
                    row.ssid,
                    row.rssi_label,
                    "#".repeat(usize::from(row.signal_bucket)),
                );
            }
        }
    }

    if let Some(prompt) = &view.password_prompt {
        let _ = writeln!(
            out,
            "  Password for \"{}\" ({}), or ':cancel':",
            prompt.ssid, view.connect_button.label
        );
    } else if !view.connect_button.enabled {
        let _ = writeln!(out, "  {}", view.connect_button.label);
    }

    if view.banner.active {
        let kind = match view.banner.kind {
            BannerKind::Neutral => "info",
            BannerKind::Error => "error",
            BannerKind::Success => "success",
        };
        let _ = writeln!(out, "  [{kind}] {}", view.banner.text);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wifi_setup_core::{
        BannerView, ConnectButtonView, NetworkRow, PasswordPromptView, ScanButtonView,
    };

    #[test]
    fn placeholder_and_banner() {
        let view = ViewModel {
            scan_button: ScanButtonView {
                loading: true,
                icon: "wifi-find".to_string(),
            },
            network_list: NetworkListView::Placeholder {
                text: "Scanning in progress...".to_string(),
                is_error: false,
            },
            banner: BannerView {
                text: "Scan failed".to_string(),
                kind: BannerKind::Error,
                active: true,
            },
            ..Default::default()
        };

        let text = render_view(&view);

        assert!(text.contains("[scanning]"));
        assert!(text.contains("~ Scanning in progress..."));
        assert!(text.contains("[error] Scan failed"));
    }

    #[test]
    fn rows_are_numbered() {
        let view = ViewModel {
            network_list: NetworkListView::Rows(vec![NetworkRow {
                ssid: "HomeNet".to_string(),
                rssi: -61,
                rssi_label: "-61dBm".to_string(),
                signal_bucket: 2,
                signal_icon: "wifi-2".to_string(),
                is_protected: true,
                lock_icon: Some("lock-wifi".to_string()),
            }]),
            ..Default::default()
        };

        let text = render_view(&view);

        assert!(text.contains(" 1. HomeNet [locked]  -61dBm  [##]"));
    }

    #[test]
    fn prompt_and_connecting_label() {
        let view = ViewModel {
            password_prompt: Some(PasswordPromptView {
                ssid: "HomeNet".to_string(),
                password: String::new(),
            }),
            connect_button: ConnectButtonView {
                enabled: false,
                label: "connecting...".to_string(),
            },
            ..Default::default()
        };

        let text = render_view(&view);

        assert!(text.contains("Password for \"HomeNet\" (connecting...)"));
        assert!(!text.contains("[info]"));
    }
}
