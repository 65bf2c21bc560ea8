//! Worker pool behind the asynchronous call variants
//!
//! Jobs are boxed closures that already own everything they need, including
//! the completion callback. A queued job always runs to completion: dropping
//! the dispatcher closes the queue, lets the workers drain what remains, and
//! joins them. No ordering holds between jobs picked up by different
//! workers.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use parking_lot::Mutex;
use tracing::{debug, warn};

pub(crate) type Job = Box<dyn FnOnce() + Send + 'static>;

/// Fixed pool of workers draining a shared job queue.
pub(crate) struct Dispatcher {
    sender: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl Dispatcher {
    pub(crate) fn new(worker_count: usize) -> Self {
        let (sender, receiver) = channel::<Job>();
        let receiver = Arc::new(Mutex::new(receiver));

        let workers = (0..worker_count.max(1))
            .map(|index| {
                let receiver = Arc::clone(&receiver);
                thread::spawn(move || worker_loop(index, &receiver))
            })
            .collect();

        Self { sender: Some(sender), workers }
    }

    /// Enqueue a job for the next free worker.
    pub(crate) fn dispatch(&self, job: Job) {
        if let Some(sender) = &self.sender {
            if sender.send(job).is_err() {
                warn!("dispatcher queue is closed; dropping job");
            }
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        // Closing the channel ends the worker loops once the queue drains.
        drop(self.sender.take());
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                warn!("dispatcher worker panicked");
            }
        }
    }
}

fn worker_loop(index: usize, receiver: &Mutex<Receiver<Job>>) {
    debug!(index, "dispatcher worker started");
    loop {
        let job = receiver.lock().recv();
        match job {
            Ok(job) => job(),
            Err(_) => break,
        }
    }
    debug!(index, "dispatcher worker stopped");
}
