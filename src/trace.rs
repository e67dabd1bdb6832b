//! The standard-output trace every fixture writes, one record per line.
//!
//! ```text
//! random_exit_trace   := "---- random exit ----" NL
//!                        "pid: " DEC " exit: " ("0" | "1") NL
//! random_sleep_trace  := "---- random sleep ----" NL
//!                        "pid: " DEC " sleep: " DEC NL
//! sigwaiter_banner    := "---- sigkill test ----" NL
//! sigwaiter_heartbeat := "Waiting for SIGUSR1 signal..." [" " DEC [" " DEC "s"]] NL
//! sigwaiter_ack       := "Received SIGUSR1 signal!" NL
//! ```

use nix::unistd::Pid;
use std::fmt;
use std::str::FromStr;

const HEARTBEAT_TEXT: &str = "Waiting for SIGUSR1 signal...";
const ACK_TEXT: &str = "Received SIGUSR1 signal!";

/// The acknowledgement record, newline included, as written by the SIGUSR1 handler.
pub const ACK_LINE: &[u8] = b"Received SIGUSR1 signal!\n";

/// Which fixture a banner announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fixture {
    RandomExit,
    RandomSleep,
    SigKill,
}

impl Fixture {
    pub const ALL: [Fixture; 3] = [Fixture::RandomExit, Fixture::RandomSleep, Fixture::SigKill];

    pub fn banner(self) -> &'static str {
        match self {
            Fixture::RandomExit => "---- random exit ----",
            Fixture::RandomSleep => "---- random sleep ----",
            Fixture::SigKill => "---- sigkill test ----",
        }
    }
}

/// What follows the fixed text of a heartbeat line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartbeatTag {
    None,
    Pid(Pid),
    PidAndCount(Pid, u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceLine {
    Banner(Fixture),
    ExitReport { pid: Pid, status: u8 },
    SleepReport { pid: Pid, seconds: u64 },
    Heartbeat(HeartbeatTag),
    Ack,
}

impl fmt::Display for TraceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceLine::Banner(fixture) => f.write_str(fixture.banner()),
            TraceLine::ExitReport { pid, status } => write!(f, "pid: {} exit: {}", pid, status),
            TraceLine::SleepReport { pid, seconds } => write!(f, "pid: {} sleep: {}", pid, seconds),
            TraceLine::Heartbeat(HeartbeatTag::None) => f.write_str(HEARTBEAT_TEXT),
            TraceLine::Heartbeat(HeartbeatTag::Pid(pid)) => write!(f, "{} {}", HEARTBEAT_TEXT, pid),
            TraceLine::Heartbeat(HeartbeatTag::PidAndCount(pid, count)) => {
                write!(f, "{} {} {}s", HEARTBEAT_TEXT, pid, count)
            }
            TraceLine::Ack => f.write_str(ACK_TEXT),
        }
    }
}

impl TraceLine {
    /// Recognises one line of trace, without its newline. Anything outside
    /// the grammar yields `None`.
    pub fn parse(line: &str) -> Option<TraceLine> {
        if let Some(fixture) = Fixture::ALL.iter().find(|f| f.banner() == line) {
            return Some(TraceLine::Banner(*fixture));
        }
        if line == ACK_TEXT {
            return Some(TraceLine::Ack);
        }
        if let Some(rest) = line.strip_prefix(HEARTBEAT_TEXT) {
            return parse_heartbeat_tag(rest).map(TraceLine::Heartbeat);
        }

        let (pid, report) = line.strip_prefix("pid: ")?.split_once(' ')?;
        let pid = parse_pid(pid)?;
        if let Some(status) = report.strip_prefix("exit: ") {
            let status = match status {
                "0" => 0,
                "1" => 1,
                _ => return None,
            };
            Some(TraceLine::ExitReport { pid, status })
        } else if let Some(seconds) = report.strip_prefix("sleep: ") {
            let seconds = parse_dec(seconds)?;
            Some(TraceLine::SleepReport { pid, seconds })
        } else {
            None
        }
    }
}

fn parse_heartbeat_tag(rest: &str) -> Option<HeartbeatTag> {
    if rest.is_empty() {
        return Some(HeartbeatTag::None);
    }
    let rest = rest.strip_prefix(' ')?;
    match rest.split_once(' ') {
        None => Some(HeartbeatTag::Pid(parse_pid(rest)?)),
        Some((pid, count)) => {
            let count = parse_dec(count.strip_suffix('s')?)?;
            Some(HeartbeatTag::PidAndCount(parse_pid(pid)?, count))
        }
    }
}

fn parse_pid(text: &str) -> Option<Pid> {
    parse_dec::<i32>(text).map(Pid::from_raw)
}

// DEC is digits only: no sign, no whitespace.
fn parse_dec<T: FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
