//! Fixed-interval readiness polling with an absolute deadline.

use log::{debug, info};

use crate::domain::{AppError, ReadinessCheck, Ready};
use crate::ports::{Clock, ReadinessProbe};

/// Poll `check.path` until it answers successfully or `check.deadline` passes.
///
/// The first probe is issued immediately; later probes follow `check.interval`
/// apart. The final sleep is shortened to end at the deadline, and every probe
/// is handed the time left until `deadline + interval`, so the wait never ends
/// later than that. Probe failures of any kind only schedule the next attempt.
pub fn await_ready<P, C>(check: &ReadinessCheck, probe: &P, clock: &C) -> Result<Ready, AppError>
where
    P: ReadinessProbe + ?Sized,
    C: Clock + ?Sized,
{
    let endpoint = probe.endpoint(&check.path);
    info!("check and wait for {}", endpoint);

    let started = clock.now();
    let cutoff = check.deadline + check.interval;
    let mut attempts = 0;

    loop {
        attempts += 1;
        let budget = cutoff.saturating_sub(clock.now().duration_since(started));
        if probe.probe(&check.path, budget) {
            let waited = clock.now().duration_since(started);
            info!("{} ready after {} attempt(s)", endpoint, attempts);
            return Ok(Ready { attempts, waited });
        }

        let elapsed = clock.now().duration_since(started);
        if elapsed >= check.deadline {
            return Err(AppError::ReadinessTimeout { target: endpoint, attempts, waited: elapsed });
        }

        let pause = check.interval.min(check.deadline - elapsed);
        debug!("{} not ready, retrying in {}ms", endpoint, pause.as_millis());
        clock.sleep(pause);
    }
}
