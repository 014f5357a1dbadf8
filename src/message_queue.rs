use std::sync::{Arc, Mutex, Condvar};
use std::collections::VecDeque;

/// Thread-safe hand-off queue between the cycling thread and any number
/// of consumers. `receive` blocks until an element is available and
/// returns the most recently sent element first (stack order, kept from
/// the original design).
#[derive(Clone)]
pub struct MessageQueue<T> {
    pair: Arc<(Mutex<VecDeque<T>>, Condvar)>,
}

impl<T> MessageQueue<T> {
    pub fn new() -> Self {
        MessageQueue {
            pair: Arc::new((Mutex::new(VecDeque::<T>::new()), Condvar::new())),
        }
    }

    pub fn send(&self, t: T) {
        let (lock, cvar) = &*self.pair;
        let mut messages = lock.lock().unwrap();
        messages.push_back(t);
        cvar.notify_one();
    }

    pub fn receive(&self) -> T {
        let (lock, cvar) = &*self.pair;
        let mut messages = lock.lock().unwrap();
        while messages.is_empty() {
            messages = cvar.wait(messages).unwrap();
        }
        assert!(!messages.is_empty());
        let back = messages.pop_back();
        back.unwrap()
    }

    pub fn len(&self) -> usize {
        let (lock, _) = &*self.pair;
        let messages = lock.lock().unwrap();
        messages.len()
    }
}
