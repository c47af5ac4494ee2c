//! Minimal HTTP/1.1 server for integration tests.
//!
//! The request path selects the response:
//! - `/<code>` answers with that status (e.g. `/404`),
//! - `/redirect` answers 301 to `/200`,
//! - `/slow` waits 3 seconds before answering 200,
//! - anything else answers 200.
//!
//! Every request bumps a shared counter so tests can assert on network use.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub struct StatusServer {
    /// Base URL without trailing slash, e.g. "http://127.0.0.1:12345".
    pub base: String,
    hits: Arc<AtomicUsize>,
}

impl StatusServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start() -> StatusServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let counter = Arc::clone(&counter);
            thread::spawn(move || handle(stream, &counter));
        }
    });
    StatusServer {
        base: format!("http://127.0.0.1:{}", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, hits: &AtomicUsize) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    hits.fetch_add(1, Ordering::SeqCst);

    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let response = match path.trim_start_matches('/') {
        "redirect" => "HTTP/1.1 301 Moved Permanently\r\nLocation: /200\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
        "slow" => {
            thread::sleep(Duration::from_secs(3));
            status_response(200)
        }
        other => status_response(other.parse::<u32>().unwrap_or(200)),
    };
    let _ = stream.write_all(response.as_bytes());
}

fn status_response(code: u32) -> String {
    let body = format!("status {}", code);
    format!(
        "HTTP/1.1 {} Test\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        code,
        body.len(),
        body
    )
}
