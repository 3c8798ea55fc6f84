//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Sleeps so that frames start at a fixed rate
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    next: Instant,
}

impl FrameLimiter {
    pub fn new(rate_hz: u32) -> Self {
        let frame = Duration::from_secs(1) / rate_hz.max(1);
        Self {
            frame,
            next: Instant::now() + frame,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until the next frame is due
    ///
    /// If we have fallen more than a frame behind, the schedule restarts from
    /// now instead of bursting to catch up.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if now < self.next {
            std::thread::sleep(self.next - now);
            self.next += self.frame;
        } else {
            self.next = now + self.frame;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_duration_for_thirty_hz() {
        let limiter = FrameLimiter::new(30);
        assert_eq!(limiter.frame_duration(), Duration::from_secs(1) / 30);
    }

    #[test]
    fn test_wait_paces_frames() {
        let mut limiter = FrameLimiter::new(200);
        let start = Instant::now();
        for _ in 0..4 {
            limiter.wait();
        }
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
