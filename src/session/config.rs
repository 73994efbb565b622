use std::path::Path;

use anyhow::Context as _;

use crate::chain::controller::StepController;
use crate::foundation::core::{Canvas, Fps};
use crate::foundation::error::{SlabStepError, SlabStepResult};

/// A scripted playback session: canvas, tick rate, length and the frames at which taps land.
///
/// JSON form:
///
/// ```json
/// { "canvas": { "width": 360, "height": 640 }, "fps": { "num": 20, "den": 1 },
///   "duration": 120, "taps": [0, 60] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Output canvas.
    pub canvas: Canvas,
    /// Host tick rate. Defaults to 20 fps.
    #[serde(default)]
    pub fps: Fps,
    /// Number of frames to render.
    pub duration: u64,
    /// Frame indices at which a pointer-down is delivered, before that frame is drawn.
    #[serde(default)]
    pub taps: Vec<u64>,
}

impl SessionConfig {
    /// Parse and validate a JSON session.
    pub fn from_json(json: &str) -> SlabStepResult<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| SlabStepError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON session file.
    pub fn from_path(path: &Path) -> SlabStepResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read session config '{}'", path.display()))?;
        Self::from_json(&json)
    }

    /// Check canvas, fps and tap bounds.
    pub fn validate(&self) -> SlabStepResult<()> {
        self.canvas.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        if self.duration == 0 {
            return Err(SlabStepError::validation("duration must be > 0"));
        }
        if let Some(&bad) = self.taps.iter().find(|&&t| t >= self.duration) {
            return Err(SlabStepError::validation(format!(
                "tap at frame {bad} is outside duration {}",
                self.duration
            )));
        }
        Ok(())
    }

    /// Session with `taps` taps, each delivered on the frame after the previous step settles,
    /// followed by one idle frame.
    pub fn back_to_back(canvas: Canvas, fps: Fps, taps: usize) -> Self {
        let mut controller = StepController::new();
        let mut frame = 0u64;
        let mut tap_frames = Vec::with_capacity(taps);
        for _ in 0..taps {
            tap_frames.push(frame);
            controller.start_updating();
            loop {
                frame += 1;
                if controller.update().is_some() {
                    break;
                }
            }
        }
        Self {
            canvas,
            fps,
            duration: frame + 1,
            taps: tap_frames,
        }
    }

    /// Total session length in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/config.rs"]
mod tests;
