//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use url::Url;
use web_search_client::network::ConnectivityProbe;
use web_search_client::search::{HttpResultsFetcher, SearchService};

/// Canned response for one path
#[derive(Clone)]
struct StubResponse {
    status: u16,
    body: String,
}

/// Builder for a local HTTP server serving canned results files
pub struct StubServerBuilder {
    routes: HashMap<String, StubResponse>,
}

impl StubServerBuilder {
    /// Serve `body` with status 200 at `path` (e.g. "/w/weather.json")
    pub fn json(self, path: &str, body: &str) -> Self {
        self.status(path, 200, body)
    }

    /// Serve `body` with an arbitrary status at `path`
    pub fn status(mut self, path: &str, status: u16, body: &str) -> Self {
        self.routes.insert(path.to_string(), StubResponse { status, body: body.to_string() });
        self
    }

    /// Bind to an ephemeral port and serve until the test process exits
    pub fn start(self) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let port = listener.local_addr().expect("Failed to read stub address").port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let routes = self.routes;
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                handle_connection(stream, &routes, &log);
            }
        });

        StubServer { port, requests }
    }
}

/// Running stub server; unknown paths get 404
pub struct StubServer {
    port: u16,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub fn builder() -> StubServerBuilder {
        StubServerBuilder { routes: HashMap::new() }
    }

    /// Base URL of the results tree served by this stub
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}/results/", self.port)
    }

    /// Paths of all HTTP requests received so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle_connection(
    stream: TcpStream,
    routes: &HashMap<String, StubResponse>,
    log: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut reader = BufReader::new(&stream);

    // Reachability probes connect and hang up without sending anything
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).unwrap_or(0) == 0 {
        return;
    }

    // Drain headers
    loop {
        let mut header = String::new();
        match reader.read_line(&mut header) {
            Ok(0) | Err(_) => break,
            Ok(_) if header == "\r\n" || header == "\n" => break,
            Ok(_) => {}
        }
    }

    let path = request_line.split_whitespace().nth(1).unwrap_or("").to_string();
    log.lock().unwrap().push(path.clone());

    let response = routes
        .get(&path)
        .cloned()
        .unwrap_or(StubResponse { status: 404, body: "Not Found".to_string() });
    let reason = match response.status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Status",
    };

    let mut stream = &stream;
    let _ = write!(
        stream,
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        response.status,
        reason,
        response.body.len(),
        response.body
    );
    let _ = stream.flush();
}

/// Connectivity signal fixed at construction
pub struct FixedConnectivity(pub bool);

impl ConnectivityProbe for FixedConnectivity {
    fn is_connected(&self) -> bool {
        self.0
    }
}

/// HTTP client that never routes localhost traffic through an environment proxy
pub fn local_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder().no_proxy().build().unwrap()
}

/// Service using the real HTTP fetcher against `server` with a fixed connectivity signal
pub fn service_for(server: &StubServer, connected: bool) -> SearchService {
    SearchService::new(
        Url::parse(&server.base_url()).unwrap(),
        Box::new(FixedConnectivity(connected)),
        Box::new(HttpResultsFetcher::with_client(local_client())),
    )
}

/// A localhost base URL nothing listens on
pub fn unreachable_base_url() -> String {
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    format!("http://127.0.0.1:{}/results/", port)
}

/// Proxy variables that would divert the binary's requests away from the stub
pub const PROXY_VARS: &[&str] =
    &["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"];
