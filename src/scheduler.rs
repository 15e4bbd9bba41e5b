use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::warn;

type Callback<T> = Box<dyn FnMut(T) + Send + 'static>;

enum DebounceMsg<T> {
    Call(T),
    Shutdown,
}

/// Delays execution until calls quiesce: each `call` supersedes any pending
/// invocation and restarts the delay, so only the last call in a burst fires,
/// with that call's arguments and whatever callback is current at fire time.
///
/// The timer lives on a dedicated thread fed through an mpsc channel; dropping
/// the debouncer cancels any pending invocation and joins the thread, so no
/// timer outlives the owning view.
pub struct Debouncer<T: Send + 'static> {
    tx: Sender<DebounceMsg<T>>,
    callback: Arc<Mutex<Callback<T>>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, callback: impl FnMut(T) + Send + 'static) -> Self {
        let callback: Arc<Mutex<Callback<T>>> = Arc::new(Mutex::new(Box::new(callback)));
        let (tx, rx) = mpsc::channel::<DebounceMsg<T>>();

        let shared = Arc::clone(&callback);
        let worker = thread::spawn(move || {
            let mut pending: Option<T> = None;
            loop {
                // With nothing pending we block indefinitely; once a call is
                // buffered, each further message restarts the full delay.
                let msg = if pending.is_some() {
                    rx.recv_timeout(delay)
                } else {
                    rx.recv().map_err(|_| RecvTimeoutError::Disconnected)
                };
                match msg {
                    Ok(DebounceMsg::Call(args)) => pending = Some(args),
                    Ok(DebounceMsg::Shutdown) => break,
                    Err(RecvTimeoutError::Timeout) => {
                        if let Some(args) = pending.take() {
                            match shared.lock() {
                                Ok(mut cb) => cb(args),
                                Err(_) => warn!("debounce callback mutex poisoned"),
                            }
                        }
                    }
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            tx,
            callback,
            worker: Some(worker),
        }
    }

    /// Schedule an invocation, superseding any pending one.
    pub fn call(&self, args: T) {
        let _ = self.tx.send(DebounceMsg::Call(args));
    }

    /// Swap the live callback. A pending invocation fires the new callback.
    pub fn set_callback(&self, callback: impl FnMut(T) + Send + 'static) {
        if let Ok(mut slot) = self.callback.lock() {
            *slot = Box::new(callback);
        }
    }
}

impl<T: Send + 'static> Drop for Debouncer<T> {
    fn drop(&mut self) {
        // Pending invocations are cancelled, not flushed.
        let _ = self.tx.send(DebounceMsg::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

/// Rate-limits to at most one fire per interval, dropping excess calls.
///
/// This is a drop-throttle, not a trailing-edge throttle: a call inside the
/// window is lost rather than queued, so scroll positions can be skipped.
/// Pair with a [`Debouncer`] when the final value must eventually settle.
#[derive(Debug)]
pub struct Throttler {
    delay: Duration,
    last_fire: Option<Instant>,
}

impl Throttler {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_fire: None,
        }
    }

    /// Invoke `callback` with `args` if the interval has elapsed since the
    /// last fire. Returns whether the call fired.
    pub fn call<T>(&mut self, args: T, mut callback: impl FnMut(T)) -> bool {
        if !self.ready() {
            return false;
        }
        self.last_fire = Some(Instant::now());
        callback(args);
        true
    }

    fn ready(&self) -> bool {
        match self.last_fire {
            None => true,
            Some(at) => at.elapsed() >= self.delay,
        }
    }

    /// Forget the last fire so the next call goes through immediately.
    pub fn reset(&mut self) {
        self.last_fire = None;
    }
}
