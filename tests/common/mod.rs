//! Minimal local HTTP stub standing in for the ClickUp API.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use elizaos_plugin_clickup::{ClickUpClient, ClickUpConfig};

pub const TEST_TOKEN: &str = "pk_test_0123456789";

pub struct StubResponse {
    pub status: u16,
    pub body: String,
    pub headers: Vec<(String, String)>,
}

impl StubResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }
}

/// Answers one connection per queued response, in order, recording each
/// request head.
pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn start(responses: Vec<StubResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        let requests: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for response in responses {
                match listener.accept() {
                    Ok((stream, _)) => handle_connection(stream, &response, &recorded),
                    Err(_) => break,
                }
            }
        });

        Self {
            base_url: format!("http://{}/api/v2", addr),
            requests,
        }
    }

    pub fn client(&self) -> ClickUpClient {
        ClickUpClient::new(ClickUpConfig::new(TEST_TOKEN).with_base_url(&self.base_url))
            .expect("client")
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("lock poisoned").clone()
    }

    /// `GET /api/v2/...?... HTTP/1.1` line of the n-th request.
    pub fn request_line(&self, n: usize) -> String {
        self.requests()
            .get(n)
            .and_then(|r| r.lines().next().map(String::from))
            .unwrap_or_default()
    }

    pub fn header(&self, n: usize, name: &str) -> Option<String> {
        let requests = self.requests();
        let request = requests.get(n)?;
        request.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }
}

fn handle_connection(
    mut stream: TcpStream,
    response: &StubResponse,
    recorded: &Arc<Mutex<Vec<String>>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));

    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
    }
    recorded
        .lock()
        .expect("lock poisoned")
        .push(String::from_utf8_lossy(&head).to_string());

    let reason = match response.status {
        200 => "OK",
        401 => "Unauthorized",
        404 => "Not Found",
        429 => "Too Many Requests",
        _ => "Error",
    };
    let mut raw = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        response.status,
        reason,
        response.body.len()
    );
    for (name, value) in &response.headers {
        raw.push_str(&format!("{}: {}\r\n", name, value));
    }
    raw.push_str("\r\n");
    raw.push_str(&response.body);

    let _ = stream.write_all(raw.as_bytes());
    let _ = stream.flush();
}
