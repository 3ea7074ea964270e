//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of routes. HEAD gets headers only, GET gets the body,
//! unknown paths get 404. Counts requests per method so tests can assert that
//! no body fetch happened.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Default)]
pub struct Route {
    pub content_type: Option<&'static str>,
    pub last_modified: Option<&'static str>,
    pub body: Vec<u8>,
    /// Omit Content-Length; the body is delimited by closing the connection.
    pub omit_length: bool,
    /// Answer with this status and a Location header instead of the body.
    pub redirect_to: Option<&'static str>,
    /// Answer with this status (and the body) instead of 200.
    pub status: Option<&'static str>,
    /// Answer GETs with 503 once this many GETs have been served.
    pub fail_get_after: Option<usize>,
}

impl Route {
    pub fn new(content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            content_type: Some(content_type),
            body,
            ..Default::default()
        }
    }
}

#[derive(Debug, Default)]
struct Counters {
    head: AtomicUsize,
    get: AtomicUsize,
}

pub struct ContentServer {
    base: String,
    counters: Arc<Counters>,
}

impl ContentServer {
    /// Starts a server in a background thread. Runs until the process exits.
    pub fn start(routes: Vec<(&'static str, Route)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let routes: Arc<HashMap<&'static str, Route>> = Arc::new(routes.into_iter().collect());
        let counters = Arc::new(Counters::default());
        let server_counters = Arc::clone(&counters);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let routes = Arc::clone(&routes);
                let counters = Arc::clone(&server_counters);
                thread::spawn(move || handle(stream, &routes, &counters));
            }
        });
        Self {
            base: format!("http://127.0.0.1:{}", port),
            counters,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn head_count(&self) -> usize {
        self.counters.head.load(Ordering::SeqCst)
    }

    pub fn get_count(&self) -> usize {
        self.counters.get.load(Ordering::SeqCst)
    }
}

fn handle(mut stream: std::net::TcpStream, routes: &HashMap<&'static str, Route>, counters: &Counters) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
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
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("/");
    let path = path.split('?').next().unwrap_or(path);

    let head = method.eq_ignore_ascii_case("HEAD");
    let mut gets_before = 0;
    if head {
        counters.head.fetch_add(1, Ordering::SeqCst);
    } else if method.eq_ignore_ascii_case("GET") {
        gets_before = counters.get.fetch_add(1, Ordering::SeqCst);
    } else {
        let _ = stream.write_all(b"HTTP/1.1 405 Method Not Allowed\r\nContent-Length: 0\r\nConnection: close\r\n\r\n");
        return;
    }

    let route = match routes.get(path) {
        Some(r) => r,
        None => {
            let body = b"not found";
            let response = format!(
                "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes());
            if !head {
                let _ = stream.write_all(body);
            }
            return;
        }
    };

    if let Some(location) = route.redirect_to {
        let response = format!(
            "HTTP/1.1 301 Moved Permanently\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            location
        );
        let _ = stream.write_all(response.as_bytes());
        return;
    }

    if !head && route.fail_get_after.is_some_and(|n| gets_before >= n) {
        let _ = stream.write_all(
            b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }

    let mut response = format!("HTTP/1.1 {}\r\n", route.status.unwrap_or("200 OK"));
    if let Some(ct) = route.content_type {
        response.push_str(&format!("Content-Type: {}\r\n", ct));
    }
    if let Some(lm) = route.last_modified {
        response.push_str(&format!("Last-Modified: {}\r\n", lm));
    }
    if !route.omit_length {
        response.push_str(&format!("Content-Length: {}\r\n", route.body.len()));
    }
    response.push_str("Connection: close\r\n\r\n");
    let _ = stream.write_all(response.as_bytes());
    if !head {
        let _ = stream.write_all(&route.body);
    }
}
