use super::Transport;
use crossbeam::channel::{self, Sender};
use log::{debug, info, warn};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TransportCommand {
    Play,
    Pause,
    Stop,
}

/// Last state the engine accepted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TransportState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Serial background queue for transport commands.
///
/// The engine is built and owned by the worker thread, so it does not need to
/// be `Send`. Commands are fire-and-forget and run in the order they were sent.
pub struct TransportQueue {
    sender: Option<Sender<TransportCommand>>,
    state: Arc<Mutex<TransportState>>,
    worker: Option<JoinHandle<()>>,
}

impl TransportQueue {
    pub fn spawn<T, F>(make_engine: F) -> Self
    where
        T: Transport,
        F: FnOnce() -> T + Send + 'static,
    {
        let (sender, receiver) = channel::unbounded::<TransportCommand>();
        let state = Arc::new(Mutex::new(TransportState::default()));

        let worker = {
            let state = state.clone();
            thread::spawn(move || {
                debug!("Transport thread started");
                let mut engine = make_engine();

                for command in receiver {
                    let result = match command {
                        TransportCommand::Play => engine.play(),
                        TransportCommand::Pause => engine.pause(),
                        TransportCommand::Stop => engine.stop(),
                    };

                    match result {
                        Ok(()) => {
                            let next = match command {
                                TransportCommand::Play => TransportState::Playing,
                                TransportCommand::Pause => TransportState::Paused,
                                TransportCommand::Stop => TransportState::Stopped,
                            };
                            info!("Transport: {command:?} -> {next:?}");
                            *state.lock() = next;
                        }
                        Err(err) => warn!("Transport {command:?} failed: {err:#}"),
                    }
                }
                debug!("Transport thread shutting down");
            })
        };

        Self {
            sender: Some(sender),
            state,
            worker: Some(worker),
        }
    }

    pub fn send(&self, command: TransportCommand) {
        if let Some(sender) = &self.sender {
            if sender.send(command).is_err() {
                warn!("Transport thread is gone, dropping {command:?}");
            }
        }
    }

    pub fn play(&self) {
        self.send(TransportCommand::Play);
    }

    pub fn pause(&self) {
        self.send(TransportCommand::Pause);
    }

    pub fn stop(&self) {
        self.send(TransportCommand::Stop);
    }

    pub fn state(&self) -> TransportState {
        *self.state.lock()
    }

    /// Closes the queue and waits for pending commands to finish.
    pub fn shutdown(&mut self) {
        self.sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("Transport thread panicked");
            }
        }
    }
}

impl Drop for TransportQueue {
    fn drop(&mut self) {
        self.shutdown();
    }
}
