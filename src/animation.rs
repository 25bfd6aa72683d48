//! Animation schedule: frame count, output basename and knob variations.
//!
//! A [`Vary`] linearly interpolates one knob over an inclusive frame range.
//! [`Animation::knob_tables`] expands every vary into one table per frame.
//! A knob keeps its last value in the frames after its range ends, so a
//! table holds every knob that has been set so far.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::RenderError;

/// Basename used when frames are requested without one.
pub const DEFAULT_BASENAME: &str = "frame";

/// Knob values for a single frame.
pub type KnobTable = HashMap<String, f64>;

/// Varies `knob` from `start_value` at `start_frame` to `end_value` at
/// `end_frame`, both frames inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Vary {
    pub knob: String,
    pub start_frame: usize,
    pub end_frame: usize,
    pub start_value: f64,
    pub end_value: f64,
}

impl Vary {
    pub fn new(
        knob: impl Into<String>,
        start_frame: usize,
        end_frame: usize,
        start_value: f64,
        end_value: f64,
    ) -> Self {
        Self {
            knob: knob.into(),
            start_frame,
            end_frame,
            start_value,
            end_value,
        }
    }

    /// Interpolated value at `frame`, which must lie in the vary's range.
    pub fn value_at(&self, frame: usize) -> f64 {
        if self.end_frame == self.start_frame {
            return self.start_value;
        }
        let change = (self.end_value - self.start_value)
            / (self.end_frame - self.start_frame) as f64;
        self.start_value + change * (frame - self.start_frame) as f64
    }
}

/// A validated animation schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    frames: usize,
    basename: String,
    varies: Vec<Vary>,
}

impl Animation {
    /// Checks the schedule and fills in a default basename.
    ///
    /// Fails when a vary is given without frames, or when a vary's range is
    /// reversed or reaches past the last frame.
    pub fn new(
        frames: usize,
        basename: Option<String>,
        varies: Vec<Vary>,
    ) -> Result<Self, RenderError> {
        if frames == 0 && !varies.is_empty() {
            return Err(RenderError::VaryWithoutFrames);
        }

        for vary in &varies {
            if vary.start_frame > vary.end_frame || vary.end_frame >= frames {
                return Err(RenderError::InvalidVary {
                    knob: vary.knob.clone(),
                    start_frame: vary.start_frame,
                    end_frame: vary.end_frame,
                    frames,
                });
            }
        }

        let basename = match basename {
            Some(name) => name,
            None => {
                if frames > 1 {
                    warn!("basename not set, using '{}'", DEFAULT_BASENAME);
                }
                DEFAULT_BASENAME.to_string()
            }
        };

        Ok(Self {
            frames,
            basename,
            varies,
        })
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn varies(&self) -> &[Vary] {
        &self.varies
    }

    /// Whether this schedule renders more than one frame.
    pub fn is_animated(&self) -> bool {
        self.frames > 1
    }

    /// One knob table per frame.
    ///
    /// Varies are applied in declaration order, so a later vary overrides an
    /// earlier one for the frames they share.
    pub fn knob_tables(&self) -> Vec<KnobTable> {
        let mut tables = Vec::with_capacity(self.frames);
        let mut current = KnobTable::new();

        for frame in 0..self.frames {
            for vary in &self.varies {
                if (vary.start_frame..=vary.end_frame).contains(&frame) {
                    current.insert(vary.knob.clone(), vary.value_at(frame));
                }
            }
            debug!("frame {}: {:?}", frame, current);
            tables.push(current.clone());
        }
        tables
    }

    /// `<dir>/<basename><frame, three digits>.png`
    pub fn frame_path<P: AsRef<Path>>(&self, dir: P, frame: usize) -> PathBuf {
        dir.as_ref()
            .join(format!("{}{:03}.png", self.basename, frame))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vary_without_frames_is_rejected() {
        let result = Animation::new(0, None, vec![Vary::new("spin", 0, 0, 0.0, 1.0)]);
        assert!(matches!(result, Err(RenderError::VaryWithoutFrames)));
    }

    #[test]
    fn vary_past_last_frame_is_rejected() {
        let result = Animation::new(10, None, vec![Vary::new("spin", 0, 10, 0.0, 1.0)]);
        assert!(matches!(
            result,
            Err(RenderError::InvalidVary { end_frame: 10, frames: 10, .. })
        ));
    }

    #[test]
    fn reversed_vary_is_rejected() {
        let result = Animation::new(10, None, vec![Vary::new("spin", 5, 2, 0.0, 1.0)]);
        assert!(matches!(result, Err(RenderError::InvalidVary { .. })));
    }

    #[test]
    fn missing_basename_gets_default() {
        let anim = Animation::new(3, None, vec![]).unwrap();
        assert_eq!(anim.basename(), DEFAULT_BASENAME);
        let named = Animation::new(3, Some("orbit".to_string()), vec![]).unwrap();
        assert_eq!(named.basename(), "orbit");
    }

    #[test]
    fn values_interpolate_linearly() {
        let anim = Animation::new(5, None, vec![Vary::new("k", 0, 4, 0.0, 1.0)]).unwrap();
        let tables = anim.knob_tables();
        assert_eq!(tables.len(), 5);
        for (frame, table) in tables.iter().enumerate() {
            assert_relative_eq!(table["k"], frame as f64 * 0.25);
        }
    }

    #[test]
    fn knobs_carry_forward_and_chain() {
        let anim = Animation::new(
            10,
            Some("spin".to_string()),
            vec![
                Vary::new("k", 0, 4, 0.0, 1.0),
                Vary::new("k", 7, 9, 1.0, 0.0),
                Vary::new("late", 8, 8, 3.0, 5.0),
            ],
        )
        .unwrap();
        let tables = anim.knob_tables();

        assert!(!tables[0].contains_key("late"));
        for frame in 5..=6 {
            assert_relative_eq!(tables[frame]["k"], 1.0);
        }
        assert_relative_eq!(tables[8]["k"], 0.5);
        assert_relative_eq!(tables[9]["k"], 0.0);
        // single-frame vary takes its start value
        assert_relative_eq!(tables[8]["late"], 3.0);
        assert_relative_eq!(tables[9]["late"], 3.0);
    }

    #[test]
    fn frame_paths_are_zero_padded() {
        let anim = Animation::new(120, Some("spin".to_string()), vec![]).unwrap();
        assert_eq!(anim.frame_path("anim", 7), PathBuf::from("anim/spin007.png"));
        assert_eq!(anim.frame_path("anim", 119), PathBuf::from("anim/spin119.png"));
    }
}
