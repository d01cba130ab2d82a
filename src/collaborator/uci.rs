//! Move selection through a UCI engine subprocess.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use super::{CollaboratorError, MoveSelector};

/// Time allowed for the `uci` / `isready` handshake
const HANDSHAKE_TIMEOUT_MS: u64 = 5000;

/// Slack on top of the requested move time before giving up on `bestmove`
const REPLY_GRACE_MS: u64 = 1000;

/// Longest single wait; larger timeouts are clamped to this
const MAX_WAIT: Duration = Duration::from_secs(24 * 60 * 60);

struct EngineProcess {
    child: Child,
    stdin: ChildStdin,
    lines: Receiver<String>,
    reader: Option<JoinHandle<()>>,
}

impl EngineProcess {
    fn spawn(program: &str, args: &[String]) -> Result<Self, CollaboratorError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| CollaboratorError::Unavailable {
                reason: format!("failed to start '{program}': {e}"),
            })?;

        let (Some(stdin), Some(stdout)) = (child.stdin.take(), child.stdout.take()) else {
            let _ = child.kill();
            return Err(CollaboratorError::Unavailable {
                reason: "engine pipes unavailable".to_string(),
            });
        };

        let (tx, lines) = mpsc::channel();
        let reader = thread::spawn(move || {
            for line in BufReader::new(stdout).lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });

        Ok(EngineProcess {
            child,
            stdin,
            lines,
            reader: Some(reader),
        })
    }

    fn send(&mut self, command: &str) -> Result<(), CollaboratorError> {
        debug!("uci > {command}");
        writeln!(self.stdin, "{command}")
            .and_then(|()| self.stdin.flush())
            .map_err(|e| CollaboratorError::Unavailable {
                reason: format!("write to engine failed: {e}"),
            })
    }

    /// Read lines until one satisfies `done`, or the deadline passes.
    fn wait_for(
        &mut self,
        timeout_ms: u64,
        done: impl Fn(&str) -> bool,
    ) -> Result<String, CollaboratorError> {
        let start = Instant::now();
        let deadline = start
            .checked_add(Duration::from_millis(timeout_ms).min(MAX_WAIT))
            .unwrap_or(start);
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            match self.lines.recv_timeout(remaining) {
                Ok(line) => {
                    debug!("uci < {line}");
                    if done(line.trim()) {
                        return Ok(line.trim().to_string());
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    return Err(CollaboratorError::Timeout {
                        waited_ms: start.elapsed().as_millis() as u64,
                    })
                }
                Err(RecvTimeoutError::Disconnected) => {
                    return Err(CollaboratorError::Unavailable {
                        reason: "engine closed its output".to_string(),
                    })
                }
            }
        }
    }

    fn handshake(&mut self) -> Result<(), CollaboratorError> {
        self.send("uci")?;
        self.wait_for(HANDSHAKE_TIMEOUT_MS, |l| l == "uciok")?;
        self.send("isready")?;
        self.wait_for(HANDSHAKE_TIMEOUT_MS, |l| l == "readyok")?;
        Ok(())
    }
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        let _ = writeln!(self.stdin, "quit");
        let _ = self.stdin.flush();
        let _ = self.child.kill();
        let _ = self.child.wait();
        if let Some(reader) = self.reader.take() {
            let _ = reader.join();
        }
    }
}

/// Read the move out of a `bestmove` line.
///
/// `bestmove (none)` and the null move `0000` mean no move was produced.
pub(crate) fn parse_bestmove(line: &str) -> Result<Option<String>, CollaboratorError> {
    let mut parts = line.split_whitespace();
    if parts.next() != Some("bestmove") {
        return Err(CollaboratorError::MalformedReply {
            reply: line.to_string(),
        });
    }
    match parts.next() {
        None => Err(CollaboratorError::MalformedReply {
            reply: line.to_string(),
        }),
        Some("(none)" | "0000") => Ok(None),
        Some(mv) => Ok(Some(mv.to_string())),
    }
}

/// Runs an engine speaking UCI and asks it for moves with
/// `position fen ...` / `go movetime ...`.
///
/// The process is started on first use and restarted after any failure.
pub struct UciMoveSelector {
    program: String,
    args: Vec<String>,
    process: Option<EngineProcess>,
}

impl UciMoveSelector {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        UciMoveSelector {
            program: program.into(),
            args,
            process: None,
        }
    }

    fn process(&mut self) -> Result<&mut EngineProcess, CollaboratorError> {
        if self.process.is_none() {
            let mut process = EngineProcess::spawn(&self.program, &self.args)?;
            process.handshake()?;
            info!("uci engine '{}' ready", self.program);
            self.process = Some(process);
        }
        self.process
            .as_mut()
            .ok_or_else(|| CollaboratorError::Unavailable {
                reason: "engine not started".to_string(),
            })
    }

    fn exchange(
        &mut self,
        position: &str,
        timeout_ms: u64,
    ) -> Result<Option<String>, CollaboratorError> {
        let process = self.process()?;
        process.send(&format!("position fen {position}"))?;
        process.send(&format!("go movetime {timeout_ms}"))?;
        let line = process.wait_for(timeout_ms.saturating_add(REPLY_GRACE_MS), |l| {
            l.starts_with("bestmove")
        })?;
        parse_bestmove(&line)
    }
}

impl MoveSelector for UciMoveSelector {
    fn select_move(
        &mut self,
        position: &str,
        timeout_ms: u64,
    ) -> Result<Option<String>, CollaboratorError> {
        let result = self.exchange(position, timeout_ms);
        if let Err(e) = &result {
            warn!("uci engine '{}' failed: {e}", self.program);
            self.process = None;
        }
        result
    }

    fn name(&self) -> &str {
        &self.program
    }
}
