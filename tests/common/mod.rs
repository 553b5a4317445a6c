#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use serde_json::json;
use trivia_quiz::QuizConfig;

/// Servidor HTTP de una sola respuesta. Devuelve la línea de petición recibida.
pub struct OneShotServer {
    pub url: String,
    handle: JoinHandle<String>,
}

impl OneShotServer {
    pub fn request_line(self) -> String {
        self.handle.join().expect("server thread panicked")
    }
}

pub fn serve_once(status_line: &'static str, body: String) -> OneShotServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("local addr");

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request_line = read_request_line(&mut stream);
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().expect("flush response");
        request_line
    });

    OneShotServer {
        url: format!("http://{addr}/api.php"),
        handle,
    }
}

fn read_request_line(stream: &mut TcpStream) -> String {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .expect("read timeout");
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buf)
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// URL a un puerto en el que no escucha nadie.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}/api.php")
}

pub fn trivia_body(n: usize) -> String {
    let results: Vec<_> = (0..n)
        .map(|i| {
            json!({
                "type": "multiple",
                "difficulty": "medium",
                "category": "Science: Computers",
                "question": format!("Question &quot;{}&quot;", i + 1),
                "correct_answer": format!("right {i}"),
                "incorrect_answers": [
                    format!("wrong {i}a"),
                    format!("wrong {i}b"),
                    format!("wrong {i}c"),
                ],
            })
        })
        .collect();
    json!({ "response_code": 0, "results": results }).to_string()
}

pub fn config_for(url: &str) -> QuizConfig {
    QuizConfig {
        api_url: url.to_string(),
        load_delay: Duration::ZERO,
        ..QuizConfig::default()
    }
}
