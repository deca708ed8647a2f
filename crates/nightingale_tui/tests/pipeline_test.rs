//! End-to-end tests: app state through the real client against a local
//! one-shot endpoint, terminal excluded.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use nightingale_core::Role;
use nightingale_gemini::{GeminiClient, GeminiConfig};
use nightingale_tui::{ChatApp, PlanApp, messages};

fn read_request(stream: &mut TcpStream) -> String {
    let _ = stream.set_read_timeout(Some(Duration::from_millis(500)));
    let mut buffer = Vec::new();
    let _ = stream.read_to_end(&mut buffer);
    String::from_utf8_lossy(&buffer).to_string()
}

/// Serves exactly one connection with a canned success body, capturing the
/// request body for later inspection.
fn spawn_one_shot(body: &'static str) -> (std::net::SocketAddr, Arc<Mutex<Option<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let last_body: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

    let last_body_clone = Arc::clone(&last_body);
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let request = read_request(&mut stream);
            if let Some(split) = request.split("\r\n\r\n").nth(1) {
                *last_body_clone.lock().expect("lock poisoned") = Some(split.to_string());
            }

            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        }
    });

    (addr, last_body)
}

fn local_client(addr: std::net::SocketAddr) -> GeminiClient {
    let config = GeminiConfig::new("test-key")
        .expect("config")
        .with_base_url(format!("http://{}", addr));
    GeminiClient::new(config).expect("client")
}

#[tokio::test]
async fn test_survey_to_displayed_plan_through_real_client() {
    let (addr, last_body) =
        spawn_one_shot(r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}]}"#);

    let mut app = PlanApp::new(Some(local_client(addr)));
    app.survey.facility = "外科病棟".to_string();
    app.survey.toggle_peak_day("夜勤");
    app.survey.toggle_peak_day("金");

    app.generate().await;

    assert_eq!(app.transcript.len(), 2);
    assert_eq!(*app.transcript.turns()[0].role(), Role::User);
    assert_eq!(app.transcript.last_assistant().unwrap().content(), "hello");
    assert_eq!(app.plans.len(), 1);
    assert_eq!(app.plans.latest().unwrap().content(), "hello");
    assert_eq!(app.status, messages::PLAN_READY_STATUS);

    let body = last_body
        .lock()
        .expect("lock poisoned")
        .clone()
        .unwrap_or_default();
    assert!(body.contains("あなたは看護管理者を支援する"));
    assert!(body.contains("\"role\":\"model\""));
    assert!(body.contains("部署: 外科病棟"));
    assert!(body.contains("看護師数: 10"));
    assert!(body.contains("平均残業時間: 8.0"));
    assert!(body.contains("残業の多いシフト: 金, 夜勤"));
    assert!(body.contains("\"temperature\":0.7"));
    assert!(body.contains("\"topP\":0.8"));
    assert!(!body.contains("maxOutputTokens"));
}

#[tokio::test]
async fn test_chat_message_through_real_client() {
    let (addr, last_body) =
        spawn_one_shot(r#"{"candidates":[{"content":{"parts":[{"text":"hello"}]}}]}"#);

    let mut app = ChatApp::new(Some(local_client(addr)));
    app.input = "こんにちは".to_string();
    app.submit().await;

    assert_eq!(app.transcript.len(), 2);
    assert_eq!(app.transcript.turns()[0].content(), "こんにちは");
    assert_eq!(app.transcript.turns()[1].content(), "hello");
    assert!(app.input.is_empty());

    let body = last_body
        .lock()
        .expect("lock poisoned")
        .clone()
        .unwrap_or_default();
    assert!(body.contains("\"role\":\"user\""));
    assert!(body.contains("こんにちは"));
}
