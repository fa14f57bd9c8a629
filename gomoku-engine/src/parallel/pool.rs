use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver, Sender};

type Job = Box<dyn FnOnce() + Send + 'static>;

// A fixed-size pool of worker threads consuming a shared FIFO job queue.
// The queue is an MPMC crossbeam channel rather than a hand-rolled
// mutex+condvar, which is the safe, idiomatic replacement for that pattern
// in Rust. Created once and kept for the engine's lifetime; stopped
// cooperatively by disconnecting the queue, which every worker's `recv`
// observes, and joined on drop.
pub struct WorkerPool {
    sender: Option<Sender<Job>>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        let (sender, receiver): (Sender<Job>, Receiver<Job>) = unbounded();

        let workers = (0..size)
            .map(|_| {
                let receiver = receiver.clone();
                thread::spawn(move || {
                    while let Ok(job) = receiver.recv() {
                        job();
                    }
                })
            })
            .collect();

        Self { sender: Some(sender), workers }
    }

    pub fn size(&self) -> usize {
        self.workers.len()
    }

    // Submits a task and returns a handle standing in for spec's "future":
    // a one-shot reply channel the caller blocks on with `join`.
    pub fn submit<T, F>(&self, job: F) -> TaskHandle<T>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(1);
        let task: Job = Box::new(move || {
            let _ = reply_tx.send(job());
        });

        // The sender is only ever None after the pool starts dropping, at
        // which point nothing should be submitting new work.
        if let Some(sender) = &self.sender {
            let _ = sender.send(task);
        }

        TaskHandle { receiver: reply_rx }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        // Dropping the sender disconnects the channel; every worker's
        // `recv` then returns Err once the queue drains, so each worker
        // exits its loop and can be joined below.
        drop(self.sender.take());
        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}

pub struct TaskHandle<T> {
    receiver: Receiver<T>,
}

impl<T> TaskHandle<T> {
    // Blocks until the task publishes its result. Returns None if the
    // task's thread was lost without sending a reply (e.g. a panic),
    // which partial-task-failure handling in the driver treats as an
    // incomplete task rather than propagating the panic.
    pub fn join(self) -> Option<T> {
        self.receiver.recv().ok()
    }
}
