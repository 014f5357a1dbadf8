pub mod message_queue;
pub use message_queue::MessageQueue;

pub mod countdown_latch;
pub use countdown_latch::CountdownLatch;

pub mod traffic_light;
pub use traffic_light::{Phase, TrafficLight};

/// Error returned by binaries.
///
/// The library operations themselves cannot fail, only block; a boxed
/// `std::error::Error` is plenty for the drivers around them.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// A specialized `Result` type for traffic-light-rust binaries.
///
/// This is defined as a convenience.
pub type Result<T> = std::result::Result<T, Error>;
