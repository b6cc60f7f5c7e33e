use anyhow::{Context, Result};
use crux_http::{
    protocol::{HttpHeader, HttpRequest, HttpResponse, HttpResult},
    HttpError,
};
use reqwest::{Client, Method};
use std::time::Duration;
use wifi_setup_core::BASE_URL;

/// Create the HTTP client used for all device agent requests
pub fn device_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .context("failed to create device HTTP client")
}

/// Replace the core's placeholder prefix with the device URL
///
/// # Examples
/// ```
/// use wifi_setup::http_client::resolve_url;
///
/// assert_eq!(
///     resolve_url("http://192.168.4.1", "https://relative/scan-status"),
///     "http://192.168.4.1/scan-status"
/// );
/// ```
pub fn resolve_url(device_url: &str, url: &str) -> String {
    match url.strip_prefix(BASE_URL) {
        Some(path) => format!("{device_url}{path}"),
        None => url.to_string(),
    }
}

/// Execute a request issued by the core
///
/// Every outcome is turned into an `HttpResult`; transport failures never
/// leave the shell as errors because the core has to see them.
pub async fn execute(client: &Client, device_url: &str, request: &HttpRequest) -> HttpResult {
    match send(client, device_url, request).await {
        Ok(response) => HttpResult::Ok(response),
        Err(e) => {
            log::warn!("{} {} failed: {e:#}", request.method, request.url);
            let timed_out = e.chain().any(|cause| {
                cause
                    .downcast_ref::<reqwest::Error>()
                    .is_some_and(reqwest::Error::is_timeout)
            });
            if timed_out {
                HttpResult::Err(HttpError::Timeout)
            } else {
                HttpResult::Err(HttpError::Io(format!("{e:#}")))
            }
        }
    }
}

async fn send(client: &Client, device_url: &str, request: &HttpRequest) -> Result<HttpResponse> {
    let method = Method::from_bytes(request.method.as_bytes())
        .with_context(|| format!("failed to parse request method {:?}", request.method))?;
    let url = resolve_url(device_url, &request.url);

    log::debug!("{method} {url}");

    let mut builder = client.request(method, &url);
    for header in &request.headers {
        builder = builder.header(&header.name, &header.value);
    }
    if !request.body.is_empty() {
        builder = builder.body(request.body.clone());
    }

    let response = builder
        .send()
        .await
        .with_context(|| format!("failed to send request to {url}"))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .filter_map(|(name, value)| {
            value.to_str().ok().map(|value| HttpHeader {
                name: name.to_string(),
                value: value.to_string(),
            })
        })
        .collect();
    let body = response
        .bytes()
        .await
        .context("failed to read response body")?
        .to_vec();

    Ok(HttpResponse {
        status,
        headers,
        body,
    })
}
