//! # Data Endpoint
//!
//! A minimal HTTP endpoint holding one JSON blob in a file, so several
//! machines can share a list through [`crate::store::remote::RemoteStore`].
//!
//! | Request            | Reply                                              |
//! |--------------------|----------------------------------------------------|
//! | `GET /data`        | 200 with the stored blob (default state if absent) |
//! | `POST /data`       | 200 `{"success": true}`, 400 if the body is not JSON |
//! | anything else      | 404 `{"error": "Not found"}`                       |
//!
//! `/api/data` is accepted as an alias of `/data`. Requests are served one at
//! a time on the calling thread. POST bodies are stored as sent.

use crate::error::{Result, ShopError};
use crate::store::fs::FileStore;
use serde_json::{json, Value};
use std::io::Read;
use tiny_http::{Header, Method, Request, Response, Server};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    fn json(status: u16, value: Value) -> Self {
        Self {
            status,
            body: value.to_string(),
        }
    }
}

/// Binds `addr` and serves until the process is stopped.
pub fn serve(addr: &str, store: &FileStore) -> Result<()> {
    let server = Server::http(addr).map_err(|e| ShopError::Server(e.to_string()))?;
    log::info!("Serving {} on http://{}", store.path().display(), addr);
    for request in server.incoming_requests() {
        respond(request, store);
    }
    Ok(())
}

/// Answers a single request; transport errors are logged, not returned.
pub fn respond(mut request: Request, store: &FileStore) {
    let mut body = String::new();
    if let Err(e) = request.as_reader().read_to_string(&mut body) {
        log::warn!("Could not read request body: {}", e);
        body.clear();
    }

    let reply = handle(request.method(), request.url(), &body, store);
    log::debug!("{} {} -> {}", request.method(), request.url(), reply.status);

    let mut response = Response::from_string(reply.body).with_status_code(reply.status);
    if let Ok(header) = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]) {
        response.add_header(header);
    }
    if let Err(e) = request.respond(response) {
        log::warn!("Could not send response: {}", e);
    }
}

pub fn handle(method: &Method, url: &str, body: &str, store: &FileStore) -> Reply {
    let path = url.split('?').next().unwrap_or_default();
    if !matches!(path, "/data" | "/api/data") {
        return not_found();
    }
    match method {
        Method::Get => load(store),
        Method::Post => save(body, store),
        _ => not_found(),
    }
}

fn load(store: &FileStore) -> Reply {
    let loaded = store.ensure_exists().and_then(|_| store.read_raw()).and_then(|raw| {
        serde_json::from_str::<Value>(&raw).map_err(ShopError::Serialization)
    });
    match loaded {
        Ok(value) => Reply::json(200, value),
        Err(e) => {
            log::error!("GET /data failed: {}", e);
            Reply::json(500, json!({ "error": "Failed to load data" }))
        }
    }
}

fn save(body: &str, store: &FileStore) -> Reply {
    if serde_json::from_str::<Value>(body).is_err() {
        return Reply::json(400, json!({ "error": "Invalid JSON" }));
    }
    match store.write_raw(body) {
        Ok(()) => Reply::json(200, json!({ "success": true })),
        Err(e) => {
            log::error!("POST /data failed: {}", e);
            Reply::json(500, json!({ "error": "Failed to save data" }))
        }
    }
}

fn not_found() -> Reply {
    Reply::json(404, json!({ "error": "Not found" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppState, Entry, Theme};
    use crate::store::remote::RemoteStore;
    use crate::store::Gateway;
    use std::fs;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> FileStore {
        FileStore::in_dir(temp.path())
    }

    #[test]
    fn get_creates_missing_file_with_default() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let reply = handle(&Method::Get, "/data", "", &store);

        assert_eq!(reply.status, 200);
        assert!(store.path().exists());
        let value: Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(value, json!({ "items": [], "theme": "dark" }));
    }

    #[test]
    fn post_then_get_returns_body() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let body = r#"{"items":[],"theme":"light"}"#;

        let reply = handle(&Method::Post, "/api/data", body, &store);
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, r#"{"success":true}"#);

        let reply = handle(&Method::Get, "/data?fresh=1", "", &store);
        let value: Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(value["theme"], "light");
    }

    #[test]
    fn post_rejects_invalid_json() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let reply = handle(&Method::Post, "/data", "{not json", &store);
        assert_eq!(reply.status, 400);
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_is_a_server_error() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::write(store.path(), "garbage").unwrap();
        let reply = handle(&Method::Get, "/data", "", &store);
        assert_eq!(reply.status, 500);
        assert!(reply.body.contains("Failed to load data"));
    }

    #[test]
    fn unknown_routes_are_not_found() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert_eq!(handle(&Method::Get, "/", "", &store).status, 404);
        assert_eq!(handle(&Method::Get, "/datas", "", &store).status, 404);
        assert_eq!(handle(&Method::Delete, "/data", "", &store).status, 404);
    }

    #[test]
    fn remote_store_talks_to_server() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let server = Server::http("127.0.0.1:0").unwrap();
        let addr = server.server_addr().to_ip().unwrap();

        let worker = std::thread::spawn(move || {
            for _ in 0..2 {
                let request = server.recv().unwrap();
                respond(request, &store);
            }
        });

        let mut remote = RemoteStore::new(&format!("http://{}", addr)).unwrap();
        let state = AppState {
            items: vec![Entry::item("Milk")],
            theme: Theme::Light,
        };
        remote.save(&state).unwrap();
        assert_eq!(remote.load().unwrap(), state);

        worker.join().unwrap();
    }
}
