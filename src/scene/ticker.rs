use std::{
    sync::mpsc::{self, RecvTimeoutError},
    thread::JoinHandle,
};

use web_time::Duration;

use super::SharedScene;
use crate::{error::OrreryError, util::frame_timing::TickTiming};

/// Background thread ticking a [`SharedScene`] at a fixed period.
pub struct Ticker {
    stop_tx: mpsc::Sender<()>,
    thread: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Spawn the tick thread.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::ThreadSpawn`] if the thread fails to spawn.
    pub fn spawn(
        scene: SharedScene,
        period: Duration,
    ) -> Result<Self, OrreryError> {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let thread = std::thread::Builder::new()
            .name("orrery-ticker".into())
            .spawn(move || Self::thread_loop(&scene, &stop_rx, period))
            .map_err(OrreryError::ThreadSpawn)?;
        log::debug!("ticker started, period {period:?}");

        Ok(Self {
            stop_tx,
            thread: Some(thread),
        })
    }

    /// Stop the thread and wait for it to finish.
    pub fn shutdown(&mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                log::warn!("ticker thread panicked");
            }
            log::debug!("ticker stopped");
        }
    }

    fn thread_loop(
        scene: &SharedScene,
        stop_rx: &mpsc::Receiver<()>,
        period: Duration,
    ) {
        let mut timing = TickTiming::new(period);
        let mut ticks: u64 = 0;
        loop {
            match stop_rx.recv_timeout(timing.until_next()) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
            }
            scene.tick();
            timing.end_tick();
            ticks += 1;
            if ticks % 200 == 0 {
                log::trace!("ticker: {:.1} ticks/s", timing.rate());
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}
