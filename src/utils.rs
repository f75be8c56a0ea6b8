use std::process::Child;

/// Kills and reaps a spawned challenge binary when a test exits early.
pub struct ChildGuard(pub Child);

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if let Ok(Some(_)) = self.0.try_wait() {
            // already exited
            return;
        }
        let _ = self.0.kill();
        let _ = self.0.wait(); // reap zombie
    }
}
