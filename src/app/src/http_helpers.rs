//! HTTP helper functions for Crux Core
//!
//! Responses of the device agent are mapped into domain enums here, right at the
//! effect boundary, so update handlers only ever see `ScanStatus`,
//! `SubmitOutcome` and `ConnectionStatus`. The classification itself works on a
//! plain status code and body and is unit tested without `crux_http::Response`.
//!
//! `crux_http` reports 4xx and 5xx answers as `HttpError::Http`. Those still
//! carry the agent's status and body and are classified like any other answer;
//! only transport errors reach the handlers as `Err`.

use crux_http::{HttpError, Response};

use crate::types::{ConnectionStatus, Network, ScanStatus, SubmitOutcome};

/// Base URL for device agent endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` requires absolute URLs
/// and rejects relative paths. The browser shell strips it before calling
/// `fetch()`; the terminal shell replaces it with the configured device URL.
pub const BASE_URL: &str = "https://relative";

/// Ask the device to start a scan
pub const START_SCAN_ENDPOINT: &str = "/start-scan";
/// Scan progress and results
pub const SCAN_STATUS_ENDPOINT: &str = "/scan-status";
/// Submit credentials (form encoded POST)
pub const START_WIFI_ENDPOINT: &str = "/start-wifi";
/// Connection progress and outcome
pub const WIFI_STATUS_ENDPOINT: &str = "/wifi-status";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use wifi_setup_core::http_helpers::build_url;
/// let url = build_url("/scan-status");
/// assert_eq!(url, "https://relative/scan-status");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Status code and body of a response, body empty when absent
pub fn split_response(response: &mut Response<Vec<u8>>) -> (u16, Vec<u8>) {
    let status = u16::from(response.status());
    (status, response.take_body().unwrap_or_default())
}

/// Status code and body of an agent answer, including 4xx and 5xx answers
pub fn status_and_body(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(u16, Vec<u8>), String> {
    match result {
        Ok(mut response) => Ok(split_response(&mut response)),
        Err(HttpError::Http { code, body, .. }) => Ok((u16::from(code), body.unwrap_or_default())),
        Err(e) => Err(e.to_string()),
    }
}

// Agent messages are shown verbatim.
fn body_text(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

/// Interpret a scan-status answer
///
/// Returns `Err` only when a 200 body is not a valid network list.
pub fn classify_scan_status(status: u16, body: &[u8]) -> Result<ScanStatus, String> {
    match status {
        200 => serde_json::from_slice::<Vec<Network>>(body)
            .map(ScanStatus::Completed)
            .map_err(|e| format!("Scan status: JSON parse error: {e}")),
        202 => Ok(ScanStatus::InProgress),
        500 => Ok(ScanStatus::Failed(body_text(body))),
        other => Ok(ScanStatus::Unexpected(other)),
    }
}

/// Interpret the answer to submitted credentials
pub fn classify_submit(status: u16, body: &[u8]) -> SubmitOutcome {
    let message = body_text(body);
    if (200..300).contains(&status) {
        SubmitOutcome::Accepted(message)
    } else if message.trim().is_empty() {
        SubmitOutcome::Rejected(format!("Saving network failed: HTTP {status}"))
    } else {
        SubmitOutcome::Rejected(message)
    }
}

/// Interpret a connection-status answer
pub fn classify_connection_status(status: u16, body: &[u8]) -> ConnectionStatus {
    match status {
        200 => ConnectionStatus::Connected(body_text(body)),
        202 => ConnectionStatus::InProgress(body_text(body)),
        500 => ConnectionStatus::Failed(body_text(body)),
        other => ConnectionStatus::Unexpected(other),
    }
}

/// Process HTTP result of the start-scan request (status only)
pub fn process_start_scan_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), String> {
    match status_and_body(result)? {
        (status, _) if (200..300).contains(&status) => Ok(()),
        (status, _) => {
            log::warn!("start-scan answered with status {status}");
            Err(format!("Start scan failed: HTTP {status}"))
        }
    }
}

/// Process HTTP result of a scan-status poll
pub fn process_scan_status_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<ScanStatus, String> {
    let (status, body) = status_and_body(result)?;
    classify_scan_status(status, &body)
}

/// Process HTTP result of the credentials submission
pub fn process_submit_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<SubmitOutcome, String> {
    let (status, body) = status_and_body(result)?;
    Ok(classify_submit(status, &body))
}

/// Process HTTP result of a connection-status poll
pub fn process_connection_status_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<ConnectionStatus, String> {
    let (status, body) = status_and_body(result)?;
    Ok(classify_connection_status(status, &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    mod scan_status {
        use super::*;

        #[test]
        fn accepted_means_in_progress() {
            assert_eq!(
                classify_scan_status(202, b"Scanning..."),
                Ok(ScanStatus::InProgress)
            );
        }

        #[test]
        fn ok_parses_networks() {
            let status = classify_scan_status(
                200,
                br#"[{"ssid":"HomeNet","rssi":-48,"isProtected":1}]"#,
            );

            match status {
                Ok(ScanStatus::Completed(networks)) => {
                    assert_eq!(networks.len(), 1);
                    assert_eq!(networks[0].ssid, "HomeNet");
                    assert!(networks[0].is_protected);
                }
                other => panic!("Expected completed scan, got {other:?}"),
            }
        }

        #[test]
        fn ok_with_empty_list() {
            assert_eq!(
                classify_scan_status(200, b"[]"),
                Ok(ScanStatus::Completed(vec![]))
            );
        }

        #[test]
        fn malformed_json_is_an_error() {
            let status = classify_scan_status(200, b"not json");
            assert!(status.unwrap_err().contains("JSON parse error"));
        }

        #[test]
        fn server_error_keeps_message() {
            assert_eq!(
                classify_scan_status(500, b"Error while scanning networks"),
                Ok(ScanStatus::Failed(
                    "Error while scanning networks".to_string()
                ))
            );
        }

        #[test]
        fn other_codes_are_unexpected() {
            assert_eq!(
                classify_scan_status(404, b"Not found"),
                Ok(ScanStatus::Unexpected(404))
            );
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn ok_is_accepted() {
            assert_eq!(
                classify_submit(200, b"Data received, trying to connect to Wi-Fi..."),
                SubmitOutcome::Accepted("Data received, trying to connect to Wi-Fi...".to_string())
            );
        }

        #[test]
        fn bad_request_is_rejected_with_body() {
            assert_eq!(
                classify_submit(400, b"bad password"),
                SubmitOutcome::Rejected("bad password".to_string())
            );
        }

        #[test]
        fn blank_rejection_names_status() {
            assert_eq!(
                classify_submit(400, b" \n"),
                SubmitOutcome::Rejected("Saving network failed: HTTP 400".to_string())
            );
        }

        #[test]
        fn empty_rejection_names_status() {
            assert_eq!(
                classify_submit(500, b""),
                SubmitOutcome::Rejected("Saving network failed: HTTP 500".to_string())
            );
        }
    }

    mod connection_status {
        use super::*;

        #[test]
        fn codes_map_to_outcomes() {
            assert_eq!(
                classify_connection_status(202, b"Trying Connection..."),
                ConnectionStatus::InProgress("Trying Connection...".to_string())
            );
            assert_eq!(
                classify_connection_status(200, b"Connected!"),
                ConnectionStatus::Connected("Connected!".to_string())
            );
            assert_eq!(
                classify_connection_status(500, b"Error connecting to Wi-Fi"),
                ConnectionStatus::Failed("Error connecting to Wi-Fi".to_string())
            );
            assert_eq!(
                classify_connection_status(418, b""),
                ConnectionStatus::Unexpected(418)
            );
        }
    }

    mod error_answers {
        use super::*;
        use crux_http::http::StatusCode;

        fn http_error(code: StatusCode, body: &str) -> crux_http::Result<Response<Vec<u8>>> {
            Err(HttpError::Http {
                code,
                message: code.to_string(),
                body: Some(body.as_bytes().to_vec()),
            })
        }

        #[test]
        fn server_error_reaches_scan_classifier() {
            assert_eq!(
                process_scan_status_response(http_error(
                    StatusCode::InternalServerError,
                    "Error while scanning networks"
                )),
                Ok(ScanStatus::Failed(
                    "Error while scanning networks".to_string()
                ))
            );
            assert_eq!(
                process_scan_status_response(http_error(StatusCode::NotFound, "")),
                Ok(ScanStatus::Unexpected(404))
            );
        }

        #[test]
        fn bad_request_reaches_submit_classifier() {
            assert_eq!(
                process_submit_response(http_error(StatusCode::BadRequest, "bad password")),
                Ok(SubmitOutcome::Rejected("bad password".to_string()))
            );
        }

        #[test]
        fn server_error_reaches_connection_classifier() {
            assert_eq!(
                process_connection_status_response(http_error(
                    StatusCode::InternalServerError,
                    "Error connecting to Wi-Fi"
                )),
                Ok(ConnectionStatus::Failed("Error connecting to Wi-Fi".to_string()))
            );
        }

        #[test]
        fn start_scan_error_names_status() {
            assert_eq!(
                process_start_scan_response(http_error(StatusCode::ServiceUnavailable, "")),
                Err("Start scan failed: HTTP 503".to_string())
            );
        }

        #[test]
        fn transport_errors_stay_errors() {
            assert_eq!(
                process_scan_status_response(Err(HttpError::Timeout)),
                Err("Timeout".to_string())
            );
            assert!(process_submit_response(Err(HttpError::Io("refused".to_string()))).is_err());
        }

        #[test]
        fn messages_are_not_trimmed() {
            assert_eq!(
                classify_connection_status(200, b"Connected to Wifi! \n You are free to go ;)\n"),
                ConnectionStatus::Connected("Connected to Wifi! \n You are free to go ;)\n".to_string())
            );
        }
    }

    #[test]
    fn build_url_prefixes_base() {
        assert_eq!(build_url(WIFI_STATUS_ENDPOINT), "https://relative/wifi-status");
    }
}
