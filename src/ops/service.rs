//! Service control and readiness checks.
//!
//! Starting a service is fire-and-forget; readiness is a separate
//! poll-with-timeout check against a TCP port or a probe command, not a
//! fixed sleep.

use crate::error::Result;
use crate::shell::{quote, Executor};
use std::net::{TcpStream, ToSocketAddrs};
use std::thread;
use std::time::{Duration, Instant};

/// Interval between readiness probes.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Per-attempt TCP connect timeout.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Service operations bound to an executor.
pub struct Services<'a> {
    sh: &'a mut Executor,
}

impl<'a> Services<'a> {
    /// Bind service operations to an executor.
    pub fn new(sh: &'a mut Executor) -> Self {
        Self { sh }
    }

    /// Start a system service.
    pub fn start(&mut self, name: &str) -> bool {
        self.control(name, "start")
    }

    /// Stop a system service.
    pub fn stop(&mut self, name: &str) -> bool {
        self.control(name, "stop")
    }

    /// Restart a system service.
    pub fn restart(&mut self, name: &str) -> bool {
        self.control(name, "restart")
    }

    /// Report a system service's status.
    pub fn status(&mut self, name: &str) -> bool {
        self.control(name, "status")
    }

    fn control(&mut self, name: &str, action: &str) -> bool {
        let command = format!("{}service {} {}", super::sudo_prefix(), quote(name), action);
        super::dispatch(self.sh, &command)
    }

    /// Launch a long-running command detached from this process.
    ///
    /// Returns the PID, or `None` in emulate mode. Pair with
    /// [`wait_for_port`](Self::wait_for_port) or
    /// [`wait_until`](Self::wait_until) to observe readiness.
    pub fn start_detached(&mut self, command: &str) -> Result<Option<u32>> {
        self.sh.spawn_detached(command)
    }

    /// Poll until a TCP port accepts connections or the timeout elapses.
    pub fn wait_for_port(&mut self, host: &str, port: u16, timeout: Duration) -> bool {
        if self.sh.emulate() {
            self.sh
                .info(&format!("Would wait for {}:{} to accept connections", host, port));
            return true;
        }

        let deadline = Instant::now() + timeout;
        loop {
            if port_open(host, port) {
                return true;
            }
            if Instant::now() >= deadline {
                self.sh.error(&format!(
                    "Timed out after {:?} waiting for {}:{}",
                    timeout, host, port
                ));
                return false;
            }
            thread::sleep(POLL_INTERVAL.min(remaining(deadline)));
        }
    }

    /// Poll a probe command until it succeeds or the timeout elapses.
    pub fn wait_until(&mut self, probe: &str, timeout: Duration) -> bool {
        if self.sh.emulate() {
            self.sh.info(&format!("Would wait for probe: {}", probe));
            return true;
        }

        let deadline = Instant::now() + timeout;
        loop {
            if self.sh.run_ok(probe) {
                return true;
            }
            if Instant::now() >= deadline {
                self.sh
                    .error(&format!("Timed out after {:?} waiting for: {}", timeout, probe));
                return false;
            }
            thread::sleep(POLL_INTERVAL.min(remaining(deadline)));
        }
    }
}

fn remaining(deadline: Instant) -> Duration {
    deadline.saturating_duration_since(Instant::now())
}

fn port_open(host: &str, port: u16) -> bool {
    let addrs = match (host, port).to_socket_addrs() {
        Ok(addrs) => addrs,
        Err(_) => return false,
    };
    for addr in addrs {
        if TcpStream::connect_timeout(&addr, CONNECT_TIMEOUT).is_ok() {
            return true;
        }
    }
    false
}
