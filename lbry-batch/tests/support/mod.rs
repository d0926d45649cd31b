//! Loopback HTTP server standing in for the daemon and the image host.
#![allow(dead_code)]

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

type Responder = dyn Fn(&str) -> (u16, String) + Send + Sync;

/// Answers every request with `respond(body)` and keeps the raw requests.
pub struct FakeServer {
    pub port: u16,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeServer {
    pub fn start<F>(respond: F) -> Self
    where
        F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let respond: Arc<Responder> = Arc::new(respond);

        let seen = requests.clone();
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let seen = seen.clone();
                let respond = respond.clone();
                thread::spawn(move || handle(stream, &*respond, &seen));
            }
        });

        FakeServer { port, requests }
    }

    pub fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Raw request texts (headers + body) received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

fn handle(stream: TcpStream, respond: &Responder, seen: &Mutex<Vec<String>>) {
    let mut reader = BufReader::new(stream.try_clone().unwrap());
    let mut head = String::new();
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap_or(0) == 0 {
            return;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
        head.push_str(&line);
        if line == "\r\n" {
            break;
        }
    }

    let mut body = vec![0u8; content_length];
    if reader.read_exact(&mut body).is_err() {
        return;
    }
    let body = String::from_utf8_lossy(&body).into_owned();
    seen.lock().unwrap().push(format!("{head}{body}"));

    let (status, payload) = respond(&body);
    let response = format!(
        "HTTP/1.1 {status} OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{payload}",
        payload.len()
    );
    let mut stream = stream;
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

/// Daemon double: `version` and `ffmpeg_find` succeed, every `publish`
/// returns a claim id derived from the request's claim name.
pub fn fake_daemon() -> FakeServer {
    fake_daemon_rejecting(None)
}

/// Like [`fake_daemon`], but answers the publish of claim `rejected` with a
/// `ValueError`.
pub fn fake_daemon_rejecting(rejected: Option<&'static str>) -> FakeServer {
    FakeServer::start(move |body| {
        let request: serde_json::Value = serde_json::from_str(body).unwrap_or_default();
        let payload = match request["method"].as_str() {
            Some("version") => serde_json::json!({ "result": { "version": "0.113.0" } }),
            Some("ffmpeg_find") => serde_json::json!({ "result": { "available": true } }),
            Some("publish") if request["params"]["name"].as_str() == rejected => {
                serde_json::json!({ "error": {
                    "data": { "name": "ValueError" },
                    "message": "Stream name is already taken"
                } })
            }
            Some("publish") => {
                let name = request["params"]["name"].as_str().unwrap_or("unnamed");
                serde_json::json!({
                    "result": { "outputs": [{
                        "claim_id": format!("claim-{name}"),
                        "permanent_url": format!("lbry://{name}#claim-{name}")
                    }] }
                })
            }
            _ => serde_json::json!({ "error": { "message": "unknown method" } }),
        };
        (200, payload.to_string())
    })
}

/// Image host double answering with a fixed serve URL.
pub fn fake_image_host() -> FakeServer {
    FakeServer::start(|_| {
        (
            200,
            serde_json::json!({ "success": true, "data": { "serveUrl": "https://spee.ch/thumb.png" } })
                .to_string(),
        )
    })
}

/// A loopback port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}
