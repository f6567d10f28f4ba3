//! Environment facts
//!
//! Local IP, SDK identity, call-stack marker and wall-clock time.

use chrono::{DateTime, Local};
use std::backtrace::Backtrace;
use std::net::{IpAddr, UdpSocket};

/// SDK type reported with every record
pub const SDK_TYPE: &str = "rust";

/// SDK version reported with every record
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Facts about the process the reporter runs in
pub trait Environment: Send + Sync {
    /// Local IP address rendered as text, empty when unknown
    fn local_ip(&self) -> String;

    /// Name of the function `skip_frames` frames up the current call stack
    fn invoke_path(&self, skip_frames: usize) -> String;

    /// Current local time
    fn now(&self) -> DateTime<Local>;
}

/// Environment of the running process
#[derive(Debug, Clone)]
pub struct SystemEnvironment {
    local_ip: String,
}

impl SystemEnvironment {
    /// Resolve the local IP once
    pub fn new() -> Self {
        let local_ip = resolve_local_ip()
            .map(|ip| ip.to_string())
            .unwrap_or_default();
        if local_ip.is_empty() {
            tracing::debug!("Could not resolve local IP, reporting empty address");
        }
        Self { local_ip }
    }
}

impl Default for SystemEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SystemEnvironment {
    fn local_ip(&self) -> String {
        self.local_ip.clone()
    }

    fn invoke_path(&self, skip_frames: usize) -> String {
        let trace = Backtrace::force_capture().to_string();
        let name = frame_names(&trace)
            .nth(skip_frames)
            .unwrap_or_default()
            .to_string();
        name
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

// Connecting a UDP socket selects the outbound interface without sending anything.
fn resolve_local_ip() -> Option<IpAddr> {
    let socket = UdpSocket::bind("0.0.0.0:0").ok()?;
    socket.connect("8.8.8.8:80").ok()?;
    socket.local_addr().ok().map(|addr| addr.ip())
}

/// Function names of a rendered backtrace, innermost first
fn frame_names(trace: &str) -> impl Iterator<Item = &str> {
    trace.lines().filter_map(|line| {
        let (index, name) = line.trim().split_once(": ")?;
        if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
            Some(name.trim())
        } else {
            None
        }
    })
}

/// Environment with pinned answers
#[derive(Debug, Clone)]
pub struct FixedEnvironment {
    pub local_ip: String,
    pub invoke_path: String,
    pub now: DateTime<Local>,
}

impl FixedEnvironment {
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            local_ip: "127.0.0.1".to_string(),
            invoke_path: String::new(),
            now,
        }
    }

    pub fn with_local_ip(mut self, local_ip: impl Into<String>) -> Self {
        self.local_ip = local_ip.into();
        self
    }

    pub fn with_invoke_path(mut self, invoke_path: impl Into<String>) -> Self {
        self.invoke_path = invoke_path.into();
        self
    }
}

impl Environment for FixedEnvironment {
    fn local_ip(&self) -> String {
        self.local_ip.clone()
    }

    fn invoke_path(&self, _skip_frames: usize) -> String {
        self.invoke_path.clone()
    }

    fn now(&self) -> DateTime<Local> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_names() {
        let trace = "   0: std::backtrace::Backtrace::create\n             at /rustc/library/std/src/backtrace.rs:331:13\n   1: app::report\n             at ./src/lib.rs:10:5\n   2: main\n";
        let names: Vec<&str> = frame_names(trace).collect();
        assert_eq!(names, vec!["std::backtrace::Backtrace::create", "app::report", "main"]);
    }

    #[test]
    fn test_invoke_path_past_stack_is_empty() {
        let env = SystemEnvironment {
            local_ip: String::new(),
        };
        assert_eq!(env.invoke_path(100_000), "");
    }

    #[test]
    fn test_invoke_path_within_stack() {
        let env = SystemEnvironment {
            local_ip: String::new(),
        };
        assert!(!env.invoke_path(1).is_empty());
    }

    #[test]
    fn test_fixed_environment() {
        let now = Local::now();
        let env = FixedEnvironment::new(now)
            .with_local_ip("10.0.0.1")
            .with_invoke_path("caller");

        assert_eq!(env.local_ip(), "10.0.0.1");
        assert_eq!(env.invoke_path(4), "caller");
        assert_eq!(env.now(), now);
    }
}
