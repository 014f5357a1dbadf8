use std::sync::{Arc, Mutex, Condvar};

/// One-shot barrier: `wait` blocks until `count_down` has been called
/// `count` times. Used to coordinate observer threads in the demo driver
/// and the concurrency tests.
#[derive(Clone)]
pub struct CountdownLatch {
    pair: Arc<(Mutex<u32>, Condvar)>,
}

impl CountdownLatch {
    pub fn new(count: u32) -> CountdownLatch {
        CountdownLatch {
            pair: Arc::new((Mutex::new(count), Condvar::new())),
        }
    }

    pub fn wait(&self) {
        let (lock, cvar) = &*self.pair;
        let mut count = lock.lock().unwrap();
        while *count > 0 {
            count = cvar.wait(count).unwrap();
        }
    }

    pub fn count_down(&self) {
        let (lock, cvar) = &*self.pair;
        let mut count = lock.lock().unwrap();
        if *count > 0 {
            *count -= 1;
        }
        if *count == 0 {
            cvar.notify_all();
        }
    }

    pub fn count(&self) -> u32 {
        let (lock, _) = &*self.pair;
        let count = lock.lock().unwrap();
        *count
    }
}
