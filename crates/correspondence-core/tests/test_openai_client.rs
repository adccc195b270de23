//! OpenAIClient against a one-shot local HTTP responder

use correspondence_core::{
    AssistantError, ChatMessage, ChatRequest, CompletionClient, OpenAIClient, OpenAIConfig,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve a single canned response and hand back the raw request text
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/v1", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            let n = socket.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            received.extend_from_slice(&buf[..n]);

            let text = String::from_utf8_lossy(&received).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if received.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\
            Connection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();

        String::from_utf8_lossy(&received).to_string()
    });

    (base_url, handle)
}

fn client_for(base_url: String) -> OpenAIClient {
    OpenAIClient::new(OpenAIConfig {
        api_key: "sk-test-key".to_string(),
        model: "gpt-3.5-turbo".to_string(),
        base_url: Some(base_url),
    })
    .unwrap()
}

fn sample_request() -> ChatRequest {
    ChatRequest {
        model: "gpt-3.5-turbo".to_string(),
        messages: vec![
            ChatMessage::system("You are a professional assistant for a county assessor's office."),
            ChatMessage::user("Create a formal exemption notice."),
        ],
        temperature: 0.7,
    }
}

#[tokio::test]
async fn test_success_returns_first_choice_and_sends_bearer_auth() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 200 OK",
        concat!(
            r#"{"choices":[{"index":0,"#,
            r#""message":{"role":"assistant","content":"Dear Ms. Smith, ..."}}]}"#
        ),
    )
    .await;

    let text = client_for(base_url).complete(&sample_request()).await.unwrap();
    assert_eq!(text, "Dear Ms. Smith, ...");

    let raw_request = server.await.unwrap();
    assert!(raw_request.starts_with("POST /v1/chat/completions"));
    assert!(raw_request.to_lowercase().contains("authorization: bearer sk-test-key"));
    assert!(raw_request.contains("\"temperature\":0.7"));
    assert!(raw_request.contains("\"model\":\"gpt-3.5-turbo\""));
}

#[tokio::test]
async fn test_unauthorized_maps_to_auth_error() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 401 Unauthorized",
        r#"{"error":{"message":"Incorrect API key provided"}}"#,
    )
    .await;

    let err = client_for(base_url).complete(&sample_request()).await.unwrap_err();
    assert!(matches!(err, AssistantError::Auth(_)), "unexpected error: {}", err);
    assert!(err.to_string().contains("Incorrect API key provided"));
    server.await.unwrap();
}

#[tokio::test]
async fn test_server_error_maps_to_service_unavailable() {
    let (base_url, server) = serve_once(
        "HTTP/1.1 503 Service Unavailable",
        r#"{"error":{"message":"overloaded"}}"#,
    )
    .await;

    let err = client_for(base_url).complete(&sample_request()).await.unwrap_err();
    assert!(matches!(err, AssistantError::ServiceUnavailable(_)), "unexpected error: {}", err);
    assert!(err.to_string().contains("503"));
    server.await.unwrap();
}

#[tokio::test]
async fn test_malformed_body_maps_to_json_error() {
    let (base_url, server) = serve_once("HTTP/1.1 200 OK", "not json at all").await;

    let err = client_for(base_url).complete(&sample_request()).await.unwrap_err();
    assert!(matches!(err, AssistantError::Json(_)), "unexpected error: {}", err);
    server.await.unwrap();
}
