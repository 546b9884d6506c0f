//! In-process stub of the document store's REST surface.
//!
//! Serves just enough HTTP for the probe's three operations
//! (documents:commit, GET, DELETE), records the order of operations, and
//! supports failure injection so tests can exercise short-circuit paths
//! without a live service.

use serde_json::{json, Value as JsonValue};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Timestamp the stub stamps onto server-filled fields.
pub const STUB_SERVER_TIME: &str = "2026-08-30T10:00:00.000000Z";

#[derive(Default)]
pub struct StubState {
    /// Resource path -> field map (wire-encoded JSON)
    pub documents: HashMap<String, JsonValue>,

    /// Operation log: "commit", "get", "delete"
    pub ops: Vec<String>,

    /// Authorization header values observed, one per request
    pub auth_headers: Vec<Option<String>>,

    /// Respond to commit with this status + message instead of applying it
    pub fail_commit: Option<(u16, &'static str)>,

    /// Respond to GET with 404 regardless of stored state
    pub missing_on_get: bool,

    /// Respond to DELETE with this status + message instead of deleting
    pub fail_delete: Option<(u16, &'static str)>,
}

pub struct StubStore {
    pub base_url: String,
    pub state: Arc<Mutex<StubState>>,
}

impl StubStore {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local addr");
        let state = Arc::new(Mutex::new(StubState::default()));

        let accept_state = state.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let conn_state = accept_state.clone();
                tokio::spawn(async move {
                    let _ = handle_connection(stream, conn_state).await;
                });
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn ops(&self) -> Vec<String> {
        self.state.lock().unwrap().ops.clone()
    }

    pub fn document_count(&self) -> usize {
        self.state.lock().unwrap().documents.len()
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    state: Arc<Mutex<StubState>>,
) -> std::io::Result<()> {
    let (method, path, auth, body) = read_request(&mut stream).await?;

    let (status, body) = {
        let mut state = state.lock().unwrap();
        state.auth_headers.push(auth);
        dispatch(&mut state, &method, &path, &body)
    };

    write_response(&mut stream, status, &body).await
}

fn dispatch(
    state: &mut StubState,
    method: &str,
    path: &str,
    body: &str,
) -> (u16, String) {
    if method == "POST" && path.ends_with(":commit") {
        state.ops.push("commit".to_string());
        if let Some((code, message)) = state.fail_commit {
            return error_response(code, message);
        }
        return apply_commit(state, body);
    }

    // Document paths: /v1/projects/.../documents/{collection}/{id}
    let resource = path.trim_start_matches("/v1/").to_string();
    match method {
        "GET" => {
            state.ops.push("get".to_string());
            if state.missing_on_get {
                return error_response(404, "Document not found");
            }
            match state.documents.get(&resource) {
                Some(fields) => (
                    200,
                    json!({
                        "name": resource,
                        "fields": fields,
                        "createTime": STUB_SERVER_TIME,
                        "updateTime": STUB_SERVER_TIME,
                    })
                    .to_string(),
                ),
                None => error_response(404, "Document not found"),
            }
        }
        "DELETE" => {
            state.ops.push("delete".to_string());
            if let Some((code, message)) = state.fail_delete {
                return error_response(code, message);
            }
            state.documents.remove(&resource);
            (200, "{}".to_string())
        }
        _ => error_response(400, "Unsupported request"),
    }
}

fn apply_commit(state: &mut StubState, body: &str) -> (u16, String) {
    let Ok(request) = serde_json::from_str::<JsonValue>(body) else {
        return error_response(400, "Malformed commit body");
    };

    let writes = request["writes"].as_array().cloned().unwrap_or_default();
    let mut write_results = Vec::new();

    // Updates establish the document; transforms stamp server-filled fields.
    for write in &writes {
        if let Some(update) = write.get("update") {
            let name = update["name"].as_str().unwrap_or_default().to_string();
            let fields = update.get("fields").cloned().unwrap_or_else(|| json!({}));
            state.documents.insert(name, fields);
        } else if let Some(transform) = write.get("transform") {
            let name = transform["document"].as_str().unwrap_or_default();
            if let Some(fields) = state.documents.get_mut(name) {
                let no_transforms = Vec::new();
                for ft in transform["fieldTransforms"]
                    .as_array()
                    .unwrap_or(&no_transforms)
                {
                    if let Some(field_path) = ft["fieldPath"].as_str() {
                        fields[field_path] = json!({ "timestampValue": STUB_SERVER_TIME });
                    }
                }
            }
        }
        write_results.push(json!({ "updateTime": STUB_SERVER_TIME }));
    }

    (
        200,
        json!({
            "writeResults": write_results,
            "commitTime": STUB_SERVER_TIME,
        })
        .to_string(),
    )
}

fn error_response(code: u16, message: &str) -> (u16, String) {
    (
        code,
        json!({
            "error": {
                "code": code,
                "message": message,
                "status": status_name(code),
            }
        })
        .to_string(),
    )
}

fn status_name(code: u16) -> &'static str {
    match code {
        403 => "PERMISSION_DENIED",
        404 => "NOT_FOUND",
        500 => "INTERNAL",
        _ => "UNKNOWN",
    }
}

/// Read one HTTP/1.1 request: returns (method, path, authorization, body).
async fn read_request(
    stream: &mut TcpStream,
) -> std::io::Result<(String, String, Option<String>, String)> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break buf.len();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let request_line = lines.next().unwrap_or_default();
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    let mut auth = None;
    for line in lines {
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim();
            if name == "content-length" {
                content_length = value.parse().unwrap_or(0);
            } else if name == "authorization" {
                auth = Some(value.to_string());
            }
        }
    }

    let body_start = header_end + 4;
    let mut body = buf[body_start.min(buf.len())..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    Ok((
        method,
        path,
        auth,
        String::from_utf8_lossy(&body).to_string(),
    ))
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

async fn write_response(
    stream: &mut TcpStream,
    status: u16,
    body: &str,
) -> std::io::Result<()> {
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        _ => "Internal Server Error",
    };
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await
}
