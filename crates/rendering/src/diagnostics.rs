//! Frame-time reporting.
//!
//! In debug builds this also adds Bevy's `FrameTimeDiagnosticsPlugin`, which
//! makes frame time and FPS available through `DiagnosticsStore`.
//!
//! `FrameRateLog` counts frames and logs the average frame time once per
//! second, e.g. `16.667 ms/frame`.

use bevy::prelude::*;

/// Length of one reporting window, in seconds.
const REPORT_INTERVAL: f64 = 1.0;

#[derive(Resource, Debug, Default)]
pub struct FrameRateLog {
    frames: u32,
    elapsed: f64,
}

impl FrameRateLog {
    /// Count one frame lasting `dt` seconds. Returns the average milliseconds
    /// per frame when a reporting window closes.
    pub fn record_frame(&mut self, dt: f64) -> Option<f64> {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < REPORT_INTERVAL {
            return None;
        }
        let ms = 1000.0 / self.frames as f64;
        self.frames = 0;
        // Carry the overshoot so windows stay aligned to whole seconds.
        self.elapsed -= REPORT_INTERVAL;
        Some(ms)
    }
}

pub fn log_frame_rate(time: Res<Time>, mut log: ResMut<FrameRateLog>) {
    if let Some(ms) = log.record_frame(time.delta_secs_f64()) {
        info!("{:.3} ms/frame", ms);
    }
}

pub struct DiagnosticsPlugin;

impl Plugin for DiagnosticsPlugin {
    fn build(&self, app: &mut App) {
        // Add diagnostic plugins only in debug builds to avoid overhead in release.
        #[cfg(debug_assertions)]
        {
            app.add_plugins(bevy::diagnostic::FrameTimeDiagnosticsPlugin);
        }
        app.init_resource::<FrameRateLog>()
            .add_systems(Last, log_frame_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_once_per_second() {
        let mut log = FrameRateLog::default();
        let mut reports = Vec::new();
        // 150 frames at 60 fps: two and a half windows.
        for _ in 0..150 {
            if let Some(ms) = log.record_frame(1.0 / 60.0) {
                reports.push(ms);
            }
        }
        assert_eq!(reports.len(), 2, "reports: {reports:?}");
        for ms in reports {
            assert!((ms - 1000.0 / 60.0).abs() < 0.6, "got {ms}");
        }
    }

    #[test]
    fn test_no_report_before_window_closes() {
        let mut log = FrameRateLog::default();
        for _ in 0..9 {
            assert!(log.record_frame(0.1).is_none());
        }
    }

    #[test]
    fn test_slow_frame_reports_immediately() {
        let mut log = FrameRateLog::default();
        assert_eq!(log.record_frame(1.5), Some(1000.0));
        // The half second of overshoot counts toward the next window.
        assert_eq!(log.record_frame(0.5), Some(1000.0));
    }
}
