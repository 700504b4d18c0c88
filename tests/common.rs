#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

pub fn sc() -> Command {
    let mut cmd = cargo_bin_cmd!("stampchart");
    cmd.env_remove("STAMPCHART_TOKEN").env_remove("RUST_LOG");
    cmd
}

/// Temp path with the given name; any leftover file is removed.
pub fn temp_path(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("stampchart_{name}"));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that does not exist, so the defaults are used.
pub fn missing_config(name: &str) -> String {
    temp_path(&format!("{name}.conf"))
}

pub fn member_page(id: &str, name: &str, rank: Option<f64>, former: bool) -> Value {
    json!({
        "object": "page",
        "properties": {
            "アカウント": { "type": "people", "people": [{ "object": "user", "id": id }] },
            "Name": { "type": "title", "title": [{ "plain_text": name }] },
            "社員番号": { "type": "number", "number": rank },
            "旧メンバー": { "type": "checkbox", "checkbox": former }
        }
    })
}

pub fn event_page(interviewer: &str, interviewee: &str, date: Option<&str>) -> Value {
    let date = match date {
        Some(d) => json!({ "start": d, "end": null }),
        None => Value::Null,
    };
    json!({
        "object": "page",
        "properties": {
            "Interviewer": { "type": "people", "people": [{ "id": interviewer }] },
            "Interviewee": { "type": "people", "people": [{ "id": interviewee }] },
            "Date": { "type": "date", "date": date }
        }
    })
}

pub fn page(results: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "object": "list",
        "results": results,
        "has_more": next_cursor.is_some(),
        "next_cursor": next_cursor
    })
}

/// Alice(1), Bob(2), Carol(no rank) plus a former member.
/// Alice→Bob done, Bob→Carol scheduled.
pub fn write_fixtures(name: &str) -> (String, String) {
    let members = temp_path(&format!("{name}_members.json"));
    let events = temp_path(&format!("{name}_events.json"));

    let member_pages = json!([
        page(
            vec![
                member_page("u-carol", "Carol", None, false),
                member_page("u-bob", "Bob", Some(2.0), false),
            ],
            Some("m-2"),
        ),
        page(
            vec![
                member_page("u-alice", "Alice", Some(1.0), false),
                member_page("u-dave", "Dave", Some(3.0), true),
            ],
            None,
        ),
    ]);
    let event_pages = page(
        vec![
            event_page("u-alice", "u-bob", Some("2025-04-01")),
            event_page("u-bob", "u-carol", None),
        ],
        None,
    );

    fs::write(&members, member_pages.to_string()).expect("write members");
    fs::write(&events, event_pages.to_string()).expect("write events");
    (events, members)
}

/// One recorded HTTP request.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub head: String,
    pub body: String,
}

/// Serve `responses` (status, body) one connection at a time on localhost.
/// The handle yields every request received.
pub fn serve(responses: Vec<(u16, String)>) -> (String, JoinHandle<Vec<Recorded>>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let base = format!("http://{}", listener.local_addr().expect("addr"));

    let handle = thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in responses {
            let (mut stream, _) = listener.accept().expect("accept");
            let mut reader = BufReader::new(stream.try_clone().expect("clone"));

            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).expect("read line");
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                let lower = line.to_ascii_lowercase();
                if let Some(v) = lower.strip_prefix("content-length:") {
                    content_length = v.trim().parse().expect("content length");
                }
                head.push_str(&line);
            }

            let mut buf = vec![0u8; content_length];
            reader.read_exact(&mut buf).expect("read body");
            seen.push(Recorded {
                head,
                body: String::from_utf8(buf).expect("utf8 body"),
            });

            let reply = format!(
                "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(reply.as_bytes()).expect("write reply");
            stream.flush().ok();
        }
        seen
    });

    (base, handle)
}
