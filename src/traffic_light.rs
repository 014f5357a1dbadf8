use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::debug;

use crate::message_queue::MessageQueue;

/// The two states a light can be in. A toggle is the only transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Red,
    Green,
}

/// A single traffic light. `start_simulation` spawns a background thread
/// that toggles the phase every 4 to 6 seconds and publishes each new
/// phase on an internal queue; `wait_for_green` blocks on that queue
/// until a green notification arrives.
///
/// Cloning yields another handle to the same light. Cycling threads are
/// never stopped; their join handles are kept so they are at least
/// accounted for, but they run until the process exits.
#[derive(Clone)]
pub struct TrafficLight {
    current_phase: Arc<Mutex<Phase>>,
    phase_queue: MessageQueue<Phase>,
    cycle_threads: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

impl TrafficLight {
    pub fn new() -> TrafficLight {
        TrafficLight {
            current_phase: Arc::new(Mutex::new(Phase::Red)),
            phase_queue: MessageQueue::new(),
            cycle_threads: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Spawns the cycling thread and returns immediately. Calling this
    /// twice spawns a second, independent cycling thread racing on the
    /// same phase mutex; the light then toggles roughly twice as fast.
    pub fn start_simulation(&self) {
        let current_phase = self.current_phase.clone();
        let phase_queue = self.phase_queue.clone();
        let handle = thread::spawn(move || {
            cycle_through_phases(current_phase, phase_queue);
        });
        self.cycle_threads.lock().unwrap().push(handle);
    }

    pub fn get_current_phase(&self) -> Phase {
        *self.current_phase.lock().unwrap()
    }

    /// Blocks until the light turns green. Red notifications are taken
    /// off the queue and discarded. If the simulation was never started
    /// this blocks forever.
    pub fn wait_for_green(&self) {
        loop {
            let phase = self.phase_queue.receive();
            if phase == Phase::Green {
                return;
            }
        }
    }

    /// Number of cycling threads spawned so far.
    pub fn cycling_threads(&self) -> usize {
        self.cycle_threads.lock().unwrap().len()
    }
}

fn cycle_through_phases(current_phase: Arc<Mutex<Phase>>, phase_queue: MessageQueue<Phase>) {
    let mut rng = rand::thread_rng();
    let mut cycle_duration: f64 = rng.gen_range(4.0..6.0);
    let mut last_update = Instant::now();

    loop {
        thread::sleep(Duration::from_millis(1));
        // Whole seconds on purpose: the check fires on the first full
        // second at or past the target duration.
        let since_last_update = last_update.elapsed().as_secs();
        if since_last_update as f64 >= cycle_duration {
            let new_phase;
            {
                let mut phase = current_phase.lock().unwrap();
                *phase = match *phase {
                    Phase::Red => Phase::Green,
                    Phase::Green => Phase::Red,
                };
                new_phase = *phase;
            }
            phase_queue.send(new_phase);
            debug!("phase toggled to {:?} after {}s", new_phase, since_last_update);

            last_update = Instant::now();
            cycle_duration = rng.gen_range(4.0..6.0);
        }
    }
}
