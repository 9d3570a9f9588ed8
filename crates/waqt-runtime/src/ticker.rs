use crate::controller::DateModeController;
use crate::frame::Frame;
use crate::{Error, Result};
use chrono::NaiveDate;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender, channel};
use std::thread::JoinHandle;
use std::time::Duration;

/// Input to the live loop. Timer ticks and user actions share one channel so
/// the controller is only ever touched by the consuming thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerEvent {
    Tick,
    Select(NaiveDate),
    Step(i64),
    Today,
    Quit,
}

/// Where frames go: a console printer, a terminal UI, a test recorder
pub trait RenderSink {
    fn render(&mut self, frame: &Frame) -> Result<()>;

    /// A failed tick or selection; the loop keeps running afterwards
    fn report_error(&mut self, err: &Error) -> Result<()>;
}

/// Background timer feeding `TickerEvent::Tick` into a channel
pub struct LiveTicker {
    tx: Sender<TickerEvent>,
    rx: Receiver<TickerEvent>,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl LiveTicker {
    pub fn start(interval: Duration) -> Result<Self> {
        let (tx, rx) = channel();
        let (stop_tx, stop_rx) = channel::<()>();

        let tx_timer = tx.clone();
        let handle = std::thread::Builder::new()
            .name("waqt-ticker".to_string())
            .spawn(move || {
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            if tx_timer.send(TickerEvent::Tick).is_err() {
                                break;
                            }
                        }
                        // Stop requested or ticker dropped
                        _ => break,
                    }
                }
            })
            .map_err(|e| Error::Ticker(e.to_string()))?;

        Ok(Self {
            tx,
            rx,
            stop: Some(stop_tx),
            handle: Some(handle),
        })
    }

    /// Handle for input sources (stdin reader, key poller, Ctrl-C handler)
    pub fn sender(&self) -> Sender<TickerEvent> {
        self.tx.clone()
    }

    pub fn receiver(&self) -> &Receiver<TickerEvent> {
        &self.rx
    }
}

impl Drop for LiveTicker {
    fn drop(&mut self) {
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Run the live loop until `Quit` or until every sender is gone.
///
/// Controller errors are logged and reported to the sink, never fatal. Only
/// sink failures end the loop early.
pub fn drive<S: RenderSink + ?Sized>(
    controller: &mut DateModeController,
    rx: &Receiver<TickerEvent>,
    sink: &mut S,
) -> Result<()> {
    present(controller.frame(), sink)?;

    while let Ok(event) = rx.recv() {
        match event {
            TickerEvent::Tick => {
                if let Some(result) = controller.tick() {
                    present(result, sink)?;
                }
            }
            TickerEvent::Select(date) => {
                let result = controller.select_date(date);
                select_outcome(controller, result, sink)?;
            }
            TickerEvent::Step(days) => {
                let result = controller.step_date(days);
                select_outcome(controller, result, sink)?;
            }
            TickerEvent::Today => present(controller.show_today(), sink)?,
            TickerEvent::Quit => break,
        }
    }

    log::debug!("Live loop finished");
    Ok(())
}

fn present<S: RenderSink + ?Sized>(result: Result<Frame>, sink: &mut S) -> Result<()> {
    match result {
        Ok(frame) => sink.render(&frame),
        Err(err) => {
            log::warn!("Evaluation failed: {}", err);
            sink.report_error(&err)
        }
    }
}

// A rejected selection leaves the mode unchanged; redraw so the selector snaps back
fn select_outcome<S: RenderSink + ?Sized>(
    controller: &mut DateModeController,
    result: Result<Frame>,
    sink: &mut S,
) -> Result<()> {
    match result {
        Ok(frame) => sink.render(&frame),
        Err(err) => {
            sink.report_error(&err)?;
            present(controller.frame(), sink)
        }
    }
}
