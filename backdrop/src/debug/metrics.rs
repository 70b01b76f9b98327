//! Performance metrics collection

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};
use sysinfo::System;

const HISTORY_LEN: usize = 60;
const SLOW_FRAME: Duration = Duration::from_millis(50);
const MEMORY_REFRESH: Duration = Duration::from_secs(1);

/// Frame timing metrics
#[derive(Debug, Clone)]
pub struct FrameMetrics {
    /// Last frame total time
    pub last_frame_time: Duration,
    /// Engine tick time (motion driver + interaction sync)
    pub tick_time: Duration,
    /// Paint time
    pub render_time: Duration,
    /// Rolling window of recent frame intervals
    pub frame_history: VecDeque<Duration>,
    /// Number of slow frames
    pub slow_frame_count: u32,
    /// Last update timestamp
    pub last_update: Instant,
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self {
            last_frame_time: Duration::ZERO,
            tick_time: Duration::ZERO,
            render_time: Duration::ZERO,
            frame_history: VecDeque::with_capacity(HISTORY_LEN),
            slow_frame_count: 0,
            last_update: Instant::now(),
        }
    }
}

impl FrameMetrics {
    /// Record the work done in one frame and the interval since the previous one
    pub fn record_frame(&mut self, tick: Duration, render: Duration, interval: Duration) {
        let total = tick + render;

        self.last_frame_time = total;
        self.tick_time = tick;
        self.render_time = render;
        self.last_update = Instant::now();

        self.frame_history.push_back(interval);
        if self.frame_history.len() > HISTORY_LEN {
            self.frame_history.pop_front();
        }

        if total > SLOW_FRAME {
            self.slow_frame_count += 1;

            tracing::warn!(
                total_ms = total.as_millis(),
                tick_ms = tick.as_millis(),
                render_ms = render.as_millis(),
                "Slow frame detected"
            );
        }
    }

    /// Average frame interval from history
    pub fn avg_frame_time(&self) -> Duration {
        if self.frame_history.is_empty() {
            return Duration::ZERO;
        }

        let sum: Duration = self.frame_history.iter().sum();
        sum / self.frame_history.len() as u32
    }

    /// Max frame interval from history
    pub fn max_frame_time(&self) -> Duration {
        self.frame_history
            .iter()
            .max()
            .copied()
            .unwrap_or(Duration::ZERO)
    }

    /// Frame rate (FPS)
    pub fn fps(&self) -> f64 {
        let avg = self.avg_frame_time();
        if avg.is_zero() {
            return 0.0;
        }
        1.0 / avg.as_secs_f64()
    }
}

/// Memory metrics
#[derive(Debug, Clone, Copy)]
pub struct MemoryMetrics {
    /// Process memory usage in MB
    pub process_mb: f64,
    /// Last update timestamp
    pub last_update: Option<Instant>,
}

impl Default for MemoryMetrics {
    fn default() -> Self {
        Self {
            process_mb: 0.0,
            last_update: None,
        }
    }
}

impl MemoryMetrics {
    /// Refresh memory usage of the current process, at most once per second
    pub fn update(&mut self) {
        use sysinfo::{ProcessRefreshKind, ProcessesToUpdate};

        if self
            .last_update
            .is_some_and(|at| at.elapsed() < MEMORY_REFRESH)
        {
            return;
        }

        let Ok(pid) = sysinfo::get_current_pid() else {
            return;
        };

        let mut system = System::new();
        system.refresh_processes_specifics(
            ProcessesToUpdate::Some(&[pid]),
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        self.last_update = Some(Instant::now());
        if let Some(process) = system.process(pid) {
            self.process_mb = process.memory() as f64 / 1024.0 / 1024.0;
            tracing::trace!(memory_mb = self.process_mb, "Memory usage updated");
        }
    }
}

static FRAME_METRICS: OnceLock<Mutex<FrameMetrics>> = OnceLock::new();
static MEMORY_METRICS: OnceLock<Mutex<MemoryMetrics>> = OnceLock::new();

/// Initialize global metrics
pub fn init_metrics() {
    FRAME_METRICS.get_or_init(|| Mutex::new(FrameMetrics::default()));
    MEMORY_METRICS.get_or_init(|| Mutex::new(MemoryMetrics::default()));
}

/// Record frame time (thread-safe)
pub fn record_frame_time(tick: Duration, render: Duration, interval: Duration) {
    if let Some(metrics) = FRAME_METRICS.get() {
        if let Ok(mut m) = metrics.lock() {
            m.record_frame(tick, render, interval);
        }
    }
}

/// Current frame metrics (thread-safe)
pub fn get_frame_metrics() -> Option<FrameMetrics> {
    FRAME_METRICS
        .get()
        .and_then(|m| m.lock().ok().map(|guard| guard.clone()))
}

/// Update memory metrics (thread-safe)
pub fn update_memory_metrics() {
    if let Some(metrics) = MEMORY_METRICS.get() {
        if let Ok(mut m) = metrics.lock() {
            m.update();
        }
    }
}

/// Current memory metrics (thread-safe)
pub fn get_memory_metrics() -> Option<MemoryMetrics> {
    MEMORY_METRICS
        .get()
        .and_then(|m| m.lock().ok().map(|guard| *guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_is_bounded() {
        let mut metrics = FrameMetrics::default();
        for _ in 0..200 {
            metrics.record_frame(
                Duration::from_micros(100),
                Duration::from_micros(200),
                Duration::from_millis(16),
            );
        }
        assert_eq!(metrics.frame_history.len(), HISTORY_LEN);
        assert_eq!(metrics.slow_frame_count, 0);
    }

    #[test]
    fn test_fps_from_intervals() {
        let mut metrics = FrameMetrics::default();
        assert_eq!(metrics.fps(), 0.0);
        for _ in 0..10 {
            metrics.record_frame(Duration::ZERO, Duration::ZERO, Duration::from_millis(20));
        }
        assert!((metrics.fps() - 50.0).abs() < 1e-6);
        assert_eq!(metrics.max_frame_time(), Duration::from_millis(20));
    }

    #[test]
    fn test_slow_frames_counted() {
        let mut metrics = FrameMetrics::default();
        metrics.record_frame(
            Duration::from_millis(40),
            Duration::from_millis(20),
            Duration::from_millis(60),
        );
        assert_eq!(metrics.slow_frame_count, 1);
    }
}
