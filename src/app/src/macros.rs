/// Render only when a state transition reported a change.
///
/// # Example
/// ```ignore
/// render_if!(model.scan.cancel())
/// ```
#[macro_export]
macro_rules! render_if {
    ($changed:expr) => {{
        if $changed {
            crux_core::render::render()
        } else {
            crux_core::Command::done()
        }
    }};
}

// Re-export for macro use
pub use crate::http_helpers::build_url;

/// Macro for GET requests to the device agent, tagged with the loop generation
/// or connect attempt they belong to.
///
/// The response is passed through one of the `process_*` helpers and delivered
/// as a struct-like internal event carrying the tag and the mapped `result`.
///
/// NOTE: URLs are prefixed with `https://relative`.
/// `crux_http` requires absolute URLs and rejects relative paths.
///
/// # Example
/// ```ignore
/// http_get!(Scan, ScanEvent, SCAN_STATUS_ENDPOINT, StatusResponse,
///     process_scan_status_response, generation: generation)
/// ```
#[macro_export]
macro_rules! http_get {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $process:ident, $tag:ident: $value:expr) => {{
        let $tag = $value;
        $crate::HttpCmd::get($crate::macros::build_url($endpoint))
            .build()
            .then_send(move |result| {
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event {
                    $tag,
                    result: $crate::http_helpers::$process(result),
                })
            })
    }};
}

/// Macro for form encoded POST requests to the device agent.
///
/// # Example
/// ```ignore
/// http_post_form!(Connect, ConnectEvent, START_WIFI_ENDPOINT, SubmitResponse,
///     process_submit_response, attempt: attempt, body: credentials.to_form_body())
/// ```
#[macro_export]
macro_rules! http_post_form {
    ($domain:ident, $domain_event:ident, $endpoint:expr, $response_event:ident, $process:ident, $tag:ident: $value:expr, body: $body:expr) => {{
        let $tag = $value;
        $crate::HttpCmd::post($crate::macros::build_url($endpoint))
            .body_string($body)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .build()
            .then_send(move |result| {
                $crate::events::Event::$domain($crate::events::$domain_event::$response_event {
                    $tag,
                    result: $crate::http_helpers::$process(result),
                })
            })
    }};
}

/// Macro for sending an event once a delay has passed.
///
/// # Example
/// ```ignore
/// after!(SCAN_POLL_INTERVAL_MS, Event::Scan(ScanEvent::PollTick { generation }))
/// ```
#[macro_export]
macro_rules! after {
    ($millis:expr, $event:expr) => {{
        let event = $event;
        $crate::TimerCmd::after($millis)
            .build()
            .then_send(move |_elapsed| event)
    }};
}
