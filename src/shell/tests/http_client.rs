use crux_http::protocol::{HttpHeader, HttpRequest, HttpResult};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use wifi_setup::http_client::{device_client, execute};

/// Request line, headers and body as seen by the mock device
#[derive(Debug)]
struct Captured {
    request_line: String,
    headers: Vec<String>,
    body: String,
}

// Integration tests for the device HTTP executor.
// Serves exactly one request with the given status and body.
async fn start_mock_device(
    status: &'static str,
    body: &'static str,
) -> (String, oneshot::Receiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind mock device");
    let address = listener.local_addr().expect("failed to get local address");
    let (captured_tx, captured_rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut stream, _)) = listener.accept().await else {
            return;
        };
        let mut reader = BufReader::new(&mut stream);

        let mut request_line = String::new();
        if reader.read_line(&mut request_line).await.is_err() {
            return;
        }

        // Read HTTP headers
        let mut headers = Vec::new();
        let mut content_length = 0;
        loop {
            let mut line = String::new();
            if reader.read_line(&mut line).await.is_err() {
                return;
            }
            if line.trim().is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
            headers.push(line.trim().to_string());
        }

        let mut request_body = vec![0; content_length];
        if reader.read_exact(&mut request_body).await.is_err() {
            return;
        }

        let _ = captured_tx.send(Captured {
            request_line: request_line.trim().to_string(),
            headers,
            body: String::from_utf8_lossy(&request_body).to_string(),
        });

        let http_response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = stream.write_all(http_response.as_bytes()).await;
    });

    (format!("http://{address}"), captured_rx)
}

fn request(method: &str, path: &str, headers: Vec<HttpHeader>, body: &str) -> HttpRequest {
    HttpRequest {
        method: method.to_string(),
        url: format!("https://relative{path}"),
        headers,
        body: body.as_bytes().to_vec(),
    }
}

#[tokio::test]
async fn test_get_reports_status_and_body() {
    let (device_url, captured) = start_mock_device("202 Accepted", "Scanning...").await;
    let client = device_client(Duration::from_secs(5)).expect("failed to create client");

    let result = execute(&client, &device_url, &request("GET", "/scan-status", vec![], "")).await;

    let response = match result {
        HttpResult::Ok(response) => response,
        HttpResult::Err(e) => panic!("Expected response, got {e:?}"),
    };
    assert_eq!(response.status, 202);
    assert_eq!(response.body, b"Scanning...".to_vec());

    let captured = captured.await.expect("mock device saw no request");
    assert_eq!(captured.request_line, "GET /scan-status HTTP/1.1");
    assert!(captured.body.is_empty());
}

#[tokio::test]
async fn test_post_forwards_headers_and_body() {
    let (device_url, captured) =
        start_mock_device("400 Bad Request", "Password must have at least 8 characters").await;
    let client = device_client(Duration::from_secs(5)).expect("failed to create client");
    let headers = vec![HttpHeader {
        name: "Content-Type".to_string(),
        value: "application/x-www-form-urlencoded".to_string(),
    }];
    let form = "ssid=HomeNet&password=short&isProtected=1";

    let result = execute(
        &client,
        &device_url,
        &request("POST", "/start-wifi", headers, form),
    )
    .await;

    let response = match result {
        HttpResult::Ok(response) => response,
        HttpResult::Err(e) => panic!("Expected response, got {e:?}"),
    };
    assert_eq!(response.status, 400);
    assert_eq!(
        String::from_utf8_lossy(&response.body),
        "Password must have at least 8 characters"
    );

    let captured = captured.await.expect("mock device saw no request");
    assert_eq!(captured.request_line, "POST /start-wifi HTTP/1.1");
    assert!(captured.headers.iter().any(|header| {
        header
            .to_ascii_lowercase()
            .starts_with("content-type: application/x-www-form-urlencoded")
    }));
    assert_eq!(captured.body, form);
}

#[tokio::test]
async fn test_unreachable_device_is_an_error_result() {
    // Bind and drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind");
    let address = listener.local_addr().expect("failed to get local address");
    drop(listener);

    let client = device_client(Duration::from_secs(5)).expect("failed to create client");
    let result = execute(
        &client,
        &format!("http://{address}"),
        &request("GET", "/wifi-status", vec![], ""),
    )
    .await;

    assert!(matches!(result, HttpResult::Err(_)));
}
