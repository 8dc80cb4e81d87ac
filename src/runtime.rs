// SPDX-License-Identifier: MPL-2.0
//! Real-time driver.
//!
//! The [`App`] runs on a virtual clock. These helpers tie that clock to
//! tokio time: they sleep until the next deadline, advance the app, and
//! apply host input as it arrives. Everything stays on one task; the app is
//! never shared across threads.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::app::App;
use crate::dom::NodeId;

/// Input forwarded from the host page.
#[derive(Debug, Clone, PartialEq)]
pub enum HostInput {
    Click(NodeId),
    KeyDown(NodeId, String),
    Input(NodeId, String),
    Scroll(f64),
    Intersection(NodeId, f64),
    Shutdown,
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn instant_at(start: Instant, origin: u64, virtual_ms: u64) -> Instant {
    start + Duration::from_millis(virtual_ms.saturating_sub(origin))
}

/// Runs due tasks in real time for `duration`. Returns the number of tasks
/// run.
pub async fn run_for(app: &mut App, duration: Duration) -> usize {
    let start = Instant::now();
    let origin = app.now();
    let end = origin.saturating_add(millis(duration));
    let mut ran = 0;
    loop {
        let target = app.next_deadline().map_or(end, |deadline| deadline.min(end));
        sleep_until(instant_at(start, origin, target)).await;
        ran += app.advance(target.saturating_sub(app.now()));
        if target >= end {
            return ran;
        }
    }
}

/// Runs due tasks in real time until none is pending.
pub async fn run_until_idle(app: &mut App) -> usize {
    let start = Instant::now();
    let origin = app.now();
    let mut ran = 0;
    while let Some(deadline) = app.next_deadline() {
        sleep_until(instant_at(start, origin, deadline)).await;
        ran += app.advance(deadline.saturating_sub(app.now()));
    }
    ran
}

/// Applies host input as it arrives while running timers in real time.
/// Stops on [`HostInput::Shutdown`] or when every sender is dropped.
pub async fn serve(app: &mut App, mut inputs: mpsc::UnboundedReceiver<HostInput>) -> usize {
    let start = Instant::now();
    let origin = app.now();
    let mut ran = 0;
    loop {
        let deadline = app.next_deadline();
        let wake = async move {
            match deadline {
                Some(deadline) => sleep_until(instant_at(start, origin, deadline)).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            input = inputs.recv() => {
                let elapsed = origin.saturating_add(millis(start.elapsed()));
                ran += app.advance(elapsed.saturating_sub(app.now()));
                match input {
                    None | Some(HostInput::Shutdown) => {
                        tracing::debug!(ran, "host input closed");
                        return ran;
                    }
                    Some(input) => apply(app, input),
                }
            }
            () = wake => {
                if let Some(deadline) = deadline {
                    ran += app.advance(deadline.saturating_sub(app.now()));
                }
            }
        }
    }
}

fn apply(app: &mut App, input: HostInput) {
    tracing::trace!(?input, "host input");
    match input {
        HostInput::Click(target) => {
            app.click(target);
        }
        HostInput::KeyDown(target, key) => {
            app.key_down(target, &key);
        }
        HostInput::Input(target, value) => {
            app.input(target, &value);
        }
        HostInput::Scroll(y) => app.scroll_to(y),
        HostInput::Intersection(target, ratio) => app.report_intersection(target, ratio),
        HostInput::Shutdown => {}
    }
}
