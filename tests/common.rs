//! Shared fixtures for the report integration tests.

#![allow(dead_code)]

use std::{
    io::{Read, Write},
    net::TcpListener,
    thread,
};

use serde_json::{Value, json};

/// Target team used by the fixtures.
pub const TEAM: &str = "123";

/// Twenty-five experiments, three of which belong to team 123.
///
/// The matching records use different id fields and value types. Two of
/// them share an owner email.
pub fn twenty_five_experiments() -> Value {
    let mut records: Vec<Value> = (0..22)
        .map(|i| {
            json!({
                "id": format!("exp_other_{i}"),
                "name": format!("Other experiment {i}"),
                "team_id": 200 + i,
                "status": if i % 2 == 0 { "running" } else { "ready" },
                "owner": {"name": format!("Person {i}"), "email": format!("p{i}@x.com")}
            })
        })
        .collect();

    records.insert(
        3,
        json!({
            "id": "exp_123_a",
            "name": "Checkout, redesigned",
            "team_id": 123,
            "status": "READY",
            "owner": {"name": "Jane Smith", "email": "jane@x.com"}
        }),
    );
    records.insert(
        10,
        json!({
            "id": 456,
            "name": "Say \"hi\" banner",
            "teamId": "123",
            "state": "wrap_up",
            "created_by": "jane@x.com"
        }),
    );
    records.push(json!({
        "experiment_id": "exp_123_c",
        "metadata": {"team_id": "123", "status": "draft"},
        "author": "Bob"
    }));

    Value::Array(records)
}

/// Serve one `200 OK` JSON response on a random local port.
///
/// Returns the base URL and a handle that finishes once the response is sent.
pub fn serve_once(payload: &str) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let payload = payload.to_string();
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request_buf = [0u8; 4096];
        let _ = stream.read(&mut request_buf);
        let headers = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            payload.len()
        );
        stream.write_all(headers.as_bytes()).unwrap();
        stream.write_all(payload.as_bytes()).unwrap();
        let _ = stream.flush();
    });
    (format!("http://{addr}"), handle)
}

/// Base URL of a local port with nothing listening on it.
pub fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
