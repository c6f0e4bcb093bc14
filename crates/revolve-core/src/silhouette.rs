//! Validated silhouette profiles and the per-sample values derived from them.
//!
//! A silhouette is an ordered list of radii in `[0, 1]`. Sample `i` is the
//! cross-section at the `i`-th uniformly spaced height along the axis of
//! revolution.

use crate::error::{MeshError, Result};

/// Ordered radius samples describing a profile curve.
#[derive(Debug, Clone, PartialEq)]
pub struct Silhouette {
    samples: Vec<f64>,
}

/// Texture-space horizontal bounds of the unrolled surface at one height.
///
/// Always symmetric about `0.5`, so `u_min + u_max == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UBounds {
    /// Left edge of the unrolled silhouette.
    pub u_min: f64,
    /// Right edge of the unrolled silhouette.
    pub u_max: f64,
}

impl UBounds {
    /// Linear interpolation from `u_min` (t = 0) to `u_max` (t = 1).
    pub fn lerp(&self, t: f64) -> f64 {
        self.u_min + (self.u_max - self.u_min) * t
    }
}

impl Silhouette {
    /// Validate and wrap raw radius samples.
    ///
    /// Fails if there are no samples or any sample lies outside `[0, 1]`
    /// (NaN included). Values are never clamped.
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(MeshError::InvalidArgument(
                "Silhouette has no samples".to_string(),
            ));
        }

        if let Some((index, value)) = samples
            .iter()
            .enumerate()
            .find(|(_, r)| !(0.0..=1.0).contains(*r))
        {
            return Err(MeshError::InvalidArgument(format!(
                "Silhouette sample {} is {}, expected a value in [0, 1]",
                index, value
            )));
        }

        Ok(Self { samples })
    }

    /// Number of samples (the mesh's `v_segments`).
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a constructed silhouette.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Largest radius in the profile.
    pub fn max_radius(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max)
    }

    /// Normalized cumulative arc length along the profile curve.
    ///
    /// Each step between consecutive samples has length
    /// `sqrt(dr^2 + (1 / len)^2)`. The result starts at 0, ends at 1 and is
    /// non-decreasing. A single-sample silhouette yields `[0.0]`.
    pub fn arc_length_offsets(&self) -> Vec<f64> {
        let height_step = 1.0 / self.samples.len() as f64;

        let mut offsets = Vec::with_capacity(self.samples.len());
        let mut total = 0.0;
        offsets.push(total);
        for pair in self.samples.windows(2) {
            total += (pair[1] - pair[0]).hypot(height_step);
            offsets.push(total);
        }

        if total > 0.0 {
            for offset in &mut offsets {
                *offset /= total;
            }
        }
        offsets
    }

    /// Per-sample U bounds of the unrolled surface.
    ///
    /// `u_max = 0.5 * r / max_radius + 0.5`, `u_min = 1 - u_max`. The widest
    /// cross-section spans the full `[0, 1]` range.
    pub fn u_envelope(&self) -> Result<Vec<UBounds>> {
        let max_radius = self.max_radius();
        if max_radius <= 0.0 {
            return Err(MeshError::InvalidArgument(
                "Silhouette is all zero; U envelope is undefined".to_string(),
            ));
        }

        Ok(self
            .samples
            .iter()
            .map(|&r| {
                let u_max = 0.5 * r / max_radius + 0.5;
                UBounds {
                    u_min: 1.0 - u_max,
                    u_max,
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_rejects_empty() {
        assert!(Silhouette::new(Vec::new()).is_err());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(Silhouette::new(vec![0.2, -0.1]).is_err());
        assert!(Silhouette::new(vec![1.01]).is_err());
        assert!(Silhouette::new(vec![0.5, f64::NAN]).is_err());
    }

    #[test]
    fn test_accepts_bounds() {
        let s = Silhouette::new(vec![0.0, 1.0]).unwrap();
        assert_eq!(s.len(), 2);
        assert!((s.max_radius() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_arc_length_single_sample() {
        let s = Silhouette::new(vec![0.3]).unwrap();
        assert_eq!(s.arc_length_offsets(), vec![0.0]);
    }

    #[test]
    fn test_arc_length_straight_profile_is_uniform() {
        let s = Silhouette::new(vec![0.4; 5]).unwrap();
        let offsets = s.arc_length_offsets();
        for (i, o) in offsets.iter().enumerate() {
            assert!((o - i as f64 / 4.0).abs() < EPS, "offset {}: {}", i, o);
        }
    }

    #[test]
    fn test_arc_length_weights_steep_steps() {
        // The first step changes radius, the second does not.
        let s = Silhouette::new(vec![0.0, 1.0, 1.0]).unwrap();
        let offsets = s.arc_length_offsets();
        assert_eq!(offsets[0], 0.0);
        assert_eq!(offsets[2], 1.0);
        assert!(offsets[1] > 0.5);
    }

    #[test]
    fn test_envelope_symmetry() {
        let s = Silhouette::new(vec![0.0, 0.25, 0.8, 0.1]).unwrap();
        for b in s.u_envelope().unwrap() {
            assert!((b.u_min + b.u_max - 1.0).abs() < EPS);
            assert!(b.u_min <= b.u_max);
        }
    }

    #[test]
    fn test_envelope_widest_row_spans_full_range() {
        let s = Silhouette::new(vec![0.2, 0.6, 0.3]).unwrap();
        let env = s.u_envelope().unwrap();
        assert!((env[1].u_min - 0.0).abs() < EPS);
        assert!((env[1].u_max - 1.0).abs() < EPS);
    }

    #[test]
    fn test_envelope_rejects_all_zero() {
        let s = Silhouette::new(vec![0.0, 0.0]).unwrap();
        assert!(matches!(
            s.u_envelope(),
            Err(MeshError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_bounds_lerp() {
        let b = UBounds {
            u_min: 0.25,
            u_max: 0.75,
        };
        assert!((b.lerp(0.0) - 0.25).abs() < EPS);
        assert!((b.lerp(0.5) - 0.5).abs() < EPS);
        assert!((b.lerp(1.0) - 0.75).abs() < EPS);
    }
}
