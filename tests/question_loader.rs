mod common;

use std::io::ErrorKind;
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

use common::{closed_port_url, config_for, serve_once, trivia_body};
use reqwest::blocking::Client;
use trivia_quiz::error::LoadError;
use trivia_quiz::loader::{LoadResult, QuestionLoader, fetch_questions};

fn wait_for(loader: &mut QuestionLoader) -> LoadResult {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        if let Some(result) = loader.poll() {
            return result;
        }
        assert!(Instant::now() < deadline, "loader never produced a result");
        thread::sleep(Duration::from_millis(10));
    }
}

#[test]
fn fetches_ten_questions_with_fixed_query() {
    let server = serve_once("200 OK", trivia_body(10));
    let questions = fetch_questions(&Client::new(), &config_for(&server.url)).unwrap();

    assert_eq!(questions.len(), 10);
    assert_eq!(questions[0].text, "Question \"1\"");
    assert_eq!(questions[9].correct_answer, "right 9");

    let request_line = server.request_line();
    assert!(request_line.starts_with("GET /api.php?"));
    for param in ["amount=10", "category=18", "difficulty=medium", "type=multiple"] {
        assert!(request_line.contains(param), "{request_line} lacks {param}");
    }
}

#[test]
fn http_error_status_is_reported() {
    let server = serve_once("500 Internal Server Error", "{}".to_string());
    let result = fetch_questions(&Client::new(), &config_for(&server.url));
    match result {
        Err(LoadError::Status(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[test]
fn malformed_body_is_reported() {
    let server = serve_once("200 OK", "<html>rate limited</html>".to_string());
    let result = fetch_questions(&Client::new(), &config_for(&server.url));
    assert!(matches!(result, Err(LoadError::Malformed(_))));
}

#[test]
fn api_response_code_is_reported() {
    let server = serve_once("200 OK", r#"{"response_code": 1, "results": []}"#.to_string());
    let result = fetch_questions(&Client::new(), &config_for(&server.url));
    assert!(matches!(result, Err(LoadError::Api { code: 1 })));
}

#[test]
fn refused_connection_is_reported() {
    let result = fetch_questions(&Client::new(), &config_for(&closed_port_url()));
    assert!(matches!(result, Err(LoadError::Http(_))));
}

#[test]
fn loader_delivers_questions_over_the_channel() {
    let server = serve_once("200 OK", trivia_body(10));
    let mut loader = QuestionLoader::spawn(config_for(&server.url));

    let questions = wait_for(&mut loader).unwrap();
    assert_eq!(questions.len(), 10);
    server.request_line();
}

#[test]
fn loader_waits_for_the_delay() {
    let server = serve_once("200 OK", trivia_body(10));
    let mut config = config_for(&server.url);
    config.load_delay = Duration::from_millis(300);

    let started = Instant::now();
    let mut loader = QuestionLoader::spawn(config);
    assert!(loader.poll().is_none());

    wait_for(&mut loader).unwrap();
    assert!(started.elapsed() >= Duration::from_millis(300));
    server.request_line();
}

fn assert_no_request(listener: &TcpListener) {
    match listener.accept() {
        Err(e) if e.kind() == ErrorKind::WouldBlock => {}
        Ok(_) => panic!("a request was sent after cancellation"),
        Err(e) => panic!("unexpected accept error: {e}"),
    }
}

#[test]
fn dropping_the_loader_before_the_delay_sends_nothing() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let url = format!("http://{}/api.php", listener.local_addr().unwrap());

    let mut config = config_for(&url);
    config.load_delay = Duration::from_millis(200);
    drop(QuestionLoader::spawn(config));

    thread::sleep(Duration::from_millis(600));
    assert_no_request(&listener);
}

#[test]
fn cancelled_loader_sends_nothing() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let url = format!("http://{}/api.php", listener.local_addr().unwrap());

    let mut config = config_for(&url);
    config.load_delay = Duration::from_millis(200);
    let mut loader = QuestionLoader::spawn(config);
    loader.cancel();

    thread::sleep(Duration::from_millis(600));
    assert_no_request(&listener);
    assert!(matches!(loader.poll(), Some(Err(LoadError::Disconnected))));
}
