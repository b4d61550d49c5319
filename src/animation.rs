//! Reveal/orbit camera timeline for the shell sculpture
//!
//! Two phases:
//! - Reveal: one frame per layer, each frame showing one more layer, with a
//!   fixed camera and no zoom.
//! - Orbit: all layers visible; the camera sweeps a full turn in azimuth while
//!   bobbing in elevation, and the view pulses in and out on an eased curve.

use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

use crate::consts::*;
use crate::settings::AnimationSettings;

/// Sinusoidal ease-in-out on [0, 1]
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    0.5 - 0.5 * (PI * t).cos()
}

/// Camera orientation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub elevation: f32,
    pub azimuth: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            elevation: DEFAULT_ELEVATION,
            azimuth: DEFAULT_AZIMUTH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Layers `0..visible_layers` are drawn
    Reveal { visible_layers: usize },
    /// Every layer is drawn; `progress` runs over [0, 1)
    Orbit { progress: f32 },
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    pub index: u32,
    pub phase: Phase,
    /// Scale applied to the bounds about their centroid
    pub zoom: f32,
    pub camera: Camera,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timeline {
    pub draw_frames: u32,
    pub orbit_frames: u32,
    pub zoom_amplitude: f32,
    pub elevation_base: f32,
    pub elevation_swing: f32,
}

impl Timeline {
    /// Timeline with one reveal frame per layer and default orbit parameters
    pub fn new(layer_count: usize) -> Self {
        Self::from_settings(layer_count, &AnimationSettings::default())
    }

    pub fn from_settings(layer_count: usize, settings: &AnimationSettings) -> Self {
        Self {
            draw_frames: layer_count as u32,
            orbit_frames: settings.orbit_frames,
            zoom_amplitude: settings.zoom_amplitude,
            elevation_base: settings.elevation_base,
            elevation_swing: settings.elevation_swing,
        }
    }

    pub fn total_frames(&self) -> u32 {
        self.draw_frames + self.orbit_frames
    }

    /// Duration in seconds at `fps`
    pub fn duration_secs(&self, fps: u32) -> f32 {
        if fps == 0 {
            return 0.0;
        }
        self.total_frames() as f32 / fps as f32
    }

    /// State of frame `index`; `None` past the end
    pub fn frame(&self, index: u32) -> Option<FrameState> {
        if index >= self.total_frames() {
            return None;
        }

        if index < self.draw_frames {
            return Some(FrameState {
                index,
                phase: Phase::Reveal {
                    visible_layers: index as usize + 1,
                },
                zoom: 1.0,
                camera: Camera::default(),
            });
        }

        let progress = (index - self.draw_frames) as f32 / self.orbit_frames as f32;
        let eased = ease_in_out(progress);
        Some(FrameState {
            index,
            phase: Phase::Orbit { progress },
            zoom: 1.0 + self.zoom_amplitude * (eased * TAU).sin(),
            camera: Camera {
                elevation: self.elevation_base + self.elevation_swing * (TAU * progress).sin(),
                azimuth: 360.0 * progress,
            },
        })
    }

    pub fn frames(&self) -> impl Iterator<Item = FrameState> + '_ {
        (0..self.total_frames()).filter_map(|i| self.frame(i))
    }
}

impl FrameState {
    /// Number of layers to draw out of `layer_count`
    pub fn visible_layers(&self, layer_count: usize) -> usize {
        match self.phase {
            Phase::Reveal { visible_layers } => visible_layers.min(layer_count),
            Phase::Orbit { .. } => layer_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_in_out_endpoints() {
        assert!(ease_in_out(0.0).abs() < 1e-6);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
        assert!((ease_in_out(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_reveal_phase() {
        let timeline = Timeline::new(180);
        assert_eq!(timeline.total_frames(), 360);
        assert!((timeline.duration_secs(FPS) - 12.0).abs() < 1e-6);

        let f = timeline.frame(0).unwrap();
        assert_eq!(f.phase, Phase::Reveal { visible_layers: 1 });
        assert_eq!(f.zoom, 1.0);
        assert_eq!(f.camera, Camera::default());

        let f = timeline.frame(179).unwrap();
        assert_eq!(f.visible_layers(180), 180);
    }

    #[test]
    fn test_orbit_phase() {
        let timeline = Timeline::new(180);

        let start = timeline.frame(180).unwrap();
        assert_eq!(start.phase, Phase::Orbit { progress: 0.0 });
        assert_eq!(start.camera.azimuth, 0.0);
        assert!((start.camera.elevation - 30.0).abs() < 1e-5);
        assert!((start.zoom - 1.0).abs() < 1e-5);

        let quarter = timeline.frame(180 + 45).unwrap();
        assert!((quarter.camera.azimuth - 90.0).abs() < 1e-4);
        assert!((quarter.camera.elevation - 45.0).abs() < 1e-4);
        assert_eq!(quarter.visible_layers(180), 180);

        assert!(timeline.frame(360).is_none());
        assert_eq!(timeline.frames().count(), 360);
    }

    #[test]
    fn test_zoom_stays_within_amplitude() {
        let timeline = Timeline::new(10);
        for f in timeline.frames() {
            assert!(f.zoom >= 1.0 - ZOOM_AMPLITUDE - 1e-5);
            assert!(f.zoom <= 1.0 + ZOOM_AMPLITUDE + 1e-5);
        }
    }
}
