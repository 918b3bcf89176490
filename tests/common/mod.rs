//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

/// Runs the `power-curve` binary with `args` and captures its output.
pub fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_power-curve"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("power-curve process should run")
}

/// Runs the binary with `stdin_text` piped to standard input.
pub fn run_cli_with_stdin(args: &[&str], stdin_text: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_power-curve"))
        .args(args)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("power-curve process should spawn");

    // The process may exit before reading everything; a broken pipe is fine.
    let mut stdin = child.stdin.take().expect("stdin should be piped");
    let _ = stdin.write_all(stdin_text.as_bytes());
    drop(stdin);

    child
        .wait_with_output()
        .expect("power-curve process should finish")
}

/// Returns a per-process scratch path under the system temp directory.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("power-curve-{}-{name}", std::process::id()))
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be valid UTF-8")
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Status and body of a plain HTTP/1.1 response.
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// A `power-curve --serve` process on a free local port, killed on drop.
pub struct ServedApi {
    child: Child,
    addr: String,
}

impl ServedApi {
    /// Starts the server for `preset` and blocks until `/power` answers.
    pub fn start(preset: &str) -> Self {
        let port = free_port();
        let child = Command::new(env!("CARGO_BIN_EXE_power-curve"))
            .args(["--preset", preset, "--serve", "--port", &port.to_string()])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("power-curve server should spawn");

        let api = Self {
            child,
            addr: format!("127.0.0.1:{port}"),
        };
        api.wait_ready(Duration::from_secs(8));
        api
    }

    /// Sends `GET path` and reads the whole response.
    pub fn get(&self, path: &str) -> Result<HttpReply, String> {
        let mut stream = TcpStream::connect(&self.addr).map_err(|e| format!("connect: {e}"))?;
        write!(
            stream,
            "GET {path} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
            self.addr
        )
        .map_err(|e| format!("write: {e}"))?;

        let mut raw = String::new();
        stream
            .read_to_string(&mut raw)
            .map_err(|e| format!("read: {e}"))?;

        let Some((head, body)) = raw.split_once("\r\n\r\n") else {
            return Err(format!("no header terminator in {raw:?}"));
        };
        let status = head
            .split(' ')
            .nth(1)
            .and_then(|code| code.parse::<u16>().ok())
            .ok_or_else(|| format!("bad status line in {head:?}"))?;

        Ok(HttpReply {
            status,
            body: body.to_string(),
        })
    }

    fn wait_ready(&self, timeout: Duration) {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if self.get("/power?wind_speed=0").is_ok_and(|r| r.status == 200) {
                return;
            }
            thread::sleep(Duration::from_millis(50));
        }
        panic!("API server on {} did not come up within {timeout:?}", self.addr);
    }
}

impl Drop for ServedApi {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("an ephemeral port should be available")
}
