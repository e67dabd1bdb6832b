use crate::integration::infrastructure::fixture_harness::{SIGKILL, SIGKILL_COUNTER, SIGKILL_PID};
use crate::integration::infrastructure::*;
use anyhow::Result;
use nix::sys::signal::Signal;
use std::os::unix::process::ExitStatusExt;
use std::time::Duration;
use supervisor_fixtures::error::EXIT_HOST_FATAL;
use supervisor_fixtures::trace::{Fixture, HeartbeatTag, TraceLine};

const STARTUP: Duration = Duration::from_secs(2);
const EXIT_LIMIT: Duration = Duration::from_secs(5);
const ACK_LIMIT: Duration = Duration::from_secs(1);

/// Waits for the banner and then `n` heartbeats, returning everything read.
async fn wait_for_heartbeats(fixture: &mut RunningFixture, n: usize) -> Result<Vec<TraceLine>> {
    let first = fixture.next_line(STARTUP).await?;
    assert_eq!(first, Some(TraceLine::Banner(Fixture::SigKill)), "banner must come first");

    let mut seen = vec![TraceLine::Banner(Fixture::SigKill)];
    while count_heartbeats(&seen) < n {
        seen.extend(fixture.read_until(STARTUP, is_heartbeat).await?);
    }
    Ok(seen)
}

#[tokio::test]
async fn test_sigusr1_is_acknowledged_then_sigkill_ends_it() -> Result<()> {
    let mut fixture = RunningFixture::spawn(SIGKILL)?;
    let seen = wait_for_heartbeats(&mut fixture, 2).await?;
    assert!(seen
        .iter()
        .skip(1)
        .all(|line| *line == TraceLine::Heartbeat(HeartbeatTag::None)));

    fixture.signal(Signal::SIGUSR1)?;
    fixture
        .read_until(ACK_LIMIT, |line| *line == TraceLine::Ack)
        .await?;

    let status = fixture.terminate(Signal::SIGKILL, EXIT_LIMIT).await?;
    assert_eq!(status.signal(), Some(Signal::SIGKILL as i32));
    Ok(())
}

#[tokio::test]
async fn test_sigterm_ends_it_with_host_default() -> Result<()> {
    let mut fixture = RunningFixture::spawn(SIGKILL)?;
    wait_for_heartbeats(&mut fixture, 1).await?;

    let status = fixture.terminate(Signal::SIGTERM, EXIT_LIMIT).await?;
    assert_eq!(status.signal(), Some(Signal::SIGTERM as i32));
    Ok(())
}

#[tokio::test]
async fn test_identified_heartbeats_carry_the_pid() -> Result<()> {
    let mut fixture = RunningFixture::spawn(SIGKILL_PID)?;
    let seen = wait_for_heartbeats(&mut fixture, 2).await?;

    assert!(seen
        .iter()
        .skip(1)
        .all(|line| *line == TraceLine::Heartbeat(HeartbeatTag::Pid(fixture.pid))));

    fixture.signal(Signal::SIGUSR1)?;
    fixture
        .read_until(ACK_LIMIT, |line| *line == TraceLine::Ack)
        .await?;

    fixture.terminate(Signal::SIGKILL, EXIT_LIMIT).await?;
    Ok(())
}

#[tokio::test]
async fn test_counter_tracks_elapsed_seconds() -> Result<()> {
    const OBSERVED_SECS: u64 = 3;

    let mut fixture = RunningFixture::spawn(SIGKILL_COUNTER)?;
    let seen = fixture.collect_for(Duration::from_secs(OBSERVED_SECS)).await?;

    assert_eq!(seen.first(), Some(&TraceLine::Banner(Fixture::SigKill)));
    assert_heartbeats_name(&seen, fixture.pid);

    let counters = heartbeat_counters(&seen);
    assert_gap_free(&counters);
    let largest = counters.last().copied().unwrap_or(0);
    assert!(
        (OBSERVED_SECS - 1..=OBSERVED_SECS + 1).contains(&largest),
        "largest counter {} after {}s (runtime {:?})",
        largest,
        OBSERVED_SECS,
        fixture.runtime()
    );

    fixture.terminate(Signal::SIGKILL, EXIT_LIMIT).await?;
    Ok(())
}

#[tokio::test]
async fn test_repeated_sigusr1_loses_no_heartbeats() -> Result<()> {
    let mut fixture = RunningFixture::spawn(SIGKILL_COUNTER)?;
    let mut seen = wait_for_heartbeats(&mut fixture, 2).await?;

    for _ in 0..3 {
        fixture.signal(Signal::SIGUSR1)?;
        tokio::time::sleep(Duration::from_millis(300)).await;
    }
    seen.extend(fixture.collect_for(Duration::from_millis(1500)).await?);

    assert_eq!(count_acks(&seen), 3, "trace: {:?}", seen);
    let counters = heartbeat_counters(&seen);
    assert!(counters.len() >= 3);
    assert_gap_free(&counters);
    assert_heartbeats_name(&seen, fixture.pid);

    fixture.terminate(Signal::SIGKILL, EXIT_LIMIT).await?;
    Ok(())
}

#[tokio::test]
async fn test_closed_stdout_ends_it_without_a_diagnostic() -> Result<()> {
    let (status, stderr) = run_with_stdout_closed(SIGKILL_COUNTER, EXIT_LIMIT).await?;

    assert_eq!(status.code(), Some(EXIT_HOST_FATAL));
    assert_eq!(stderr, "", "closed stdout should not be reported");
    Ok(())
}
