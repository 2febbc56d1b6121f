//! Periodic background refresh.
//!
//! [`RefreshScheduler`] is either stopped or running a timer thread. While
//! running, the thread refreshes every project right away and then once per
//! interval, always through the tolerant path so one broken project never stops
//! the others. Disabling only prevents future ticks; a tick that already started
//! runs to completion.

use crate::core::{
    error::{ProjectExplorerError, Result},
    refresh::{RefreshReport, Refresher},
};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Called on the timer thread after every tick.
pub type RefreshListener = Arc<dyn Fn(&RefreshReport) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Stopped,
    Running { interval: Duration },
}

struct Timer {
    stop: Sender<()>,
    interval: Duration,
    thread: JoinHandle<()>,
}

pub struct RefreshScheduler {
    refresher: Refresher,
    listener: Option<RefreshListener>,
    last_report: Arc<Mutex<Option<RefreshReport>>>,
    timer: Option<Timer>,
}

impl std::fmt::Debug for RefreshScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshScheduler")
            .field("state", &self.state())
            .finish()
    }
}

impl RefreshScheduler {
    pub fn new(refresher: Refresher) -> Self {
        Self {
            refresher,
            listener: None,
            last_report: Arc::new(Mutex::new(None)),
            timer: None,
        }
    }

    /// Registers a callback invoked after each timer tick. Takes effect on the
    /// next [`RefreshScheduler::enable`].
    pub fn with_listener(mut self, listener: RefreshListener) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn refresher(&self) -> &Refresher {
        &self.refresher
    }

    pub fn state(&self) -> SchedulerState {
        match &self.timer {
            Some(timer) => SchedulerState::Running {
                interval: timer.interval,
            },
            None => SchedulerState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Starts the timer, restarting it if already running.
    pub fn enable(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            return Err(ProjectExplorerError::InvalidInterval);
        }

        self.disable();

        let (stop, stopped) = mpsc::channel::<()>();
        let refresher = self.refresher.clone();
        let listener = self.listener.clone();
        let last_report = Arc::clone(&self.last_report);

        let thread = thread::Builder::new()
            .name("refresh-scheduler".to_string())
            .spawn(move || loop {
                let report = refresher.refresh_all_tolerant();
                if let Some(listener) = &listener {
                    listener(&report);
                }
                *last_report.lock().unwrap_or_else(PoisonError::into_inner) = Some(report);

                match stopped.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => continue,
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            })?;

        log::info!("Auto refresh enabled every {interval:?}");
        self.timer = Some(Timer {
            stop,
            interval,
            thread,
        });
        Ok(())
    }

    pub fn enable_minutes(&mut self, minutes: u64) -> Result<()> {
        self.enable(Duration::from_secs(minutes.saturating_mul(60)))
    }

    /// Stops future ticks without waiting for a running one.
    pub fn disable(&mut self) {
        if let Some(timer) = self.timer.take() {
            // The thread may already be gone; a failed send is fine then
            let _ = timer.stop.send(());
            log::info!("Auto refresh disabled");
        }
    }

    /// Stops future ticks and waits until the timer thread has exited.
    pub fn disable_and_wait(&mut self) {
        if let Some(timer) = self.timer.take() {
            let _ = timer.stop.send(());
            if timer.thread.join().is_err() {
                log::warn!("Refresh scheduler thread panicked");
            }
            log::info!("Auto refresh disabled");
        }
    }

    /// Runs a tolerant refresh on the calling thread and records its report.
    pub fn refresh_now(&self) -> RefreshReport {
        let report = self.refresher.refresh_all_tolerant();
        *self
            .last_report
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(report.clone());
        report
    }

    pub fn last_report(&self) -> Option<RefreshReport> {
        self.last_report
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.disable();
    }
}
