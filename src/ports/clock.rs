use std::time::{Duration, Instant};

/// Port for reading time and sleeping, so polling loops can run on virtual time.
pub trait Clock {
    fn now(&self) -> Instant;

    fn sleep(&self, duration: Duration);
}
