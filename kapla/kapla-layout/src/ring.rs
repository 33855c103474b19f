//! Ring filling: distributing planks around a circle.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::PlankPlacement;
use crate::error::{LayoutError, LayoutResult};

/// Over-spacing factor applied to the plank footprint when computing the
/// angular step. Spacing planks 1% apart keeps freshly spawned bodies from
/// starting in interpenetration.
const SPACING_MARGIN: f64 = 1.01;

/// Parameters for one ring of planks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    /// Radius the plank centers sit on.
    pub radius: f64,
    /// Height of the plank centers, relative to the tower origin.
    pub y: f64,
    /// Plank footprint dimension facing the spacing direction.
    pub spacing: f64,
    /// Half of the plank's other footprint dimension. Subtracted from the
    /// radius so spacing is measured at the plank's inner edge, where
    /// neighbors are closest.
    pub radius_adjust: f64,
    /// Rotation applied to every plank in the ring, on top of its angular
    /// position.
    pub yaw_offset: f64,
}

impl RingSpec {
    /// Angular step between consecutive planks, before error redistribution.
    fn raw_step(&self) -> LayoutResult<f64> {
        if self.spacing <= 0.0 {
            return Err(LayoutError::GeometryDomain {
                context: "ring spacing",
                detail: format!("plank footprint {} is not positive", self.spacing),
            });
        }

        let clearance = self.radius - self.radius_adjust;
        if clearance <= 0.0 {
            return Err(LayoutError::GeometryDomain {
                context: "ring clearance",
                detail: format!(
                    "radius {} minus adjustment {} is not positive",
                    self.radius, self.radius_adjust
                ),
            });
        }

        let ratio = (self.spacing * SPACING_MARGIN) / (2.0 * clearance);
        if !(-1.0..=1.0).contains(&ratio) {
            return Err(LayoutError::GeometryDomain {
                context: "ring step",
                detail: format!(
                    "arcsine argument {ratio} outside [-1, 1]; radius too small for plank footprint"
                ),
            });
        }

        Ok(2.0 * ratio.asin())
    }

    /// Plank count and the adjusted angular step for this ring.
    ///
    /// The raw step fits a whole number of planks into a full turn
    /// (truncating), then the leftover angle is redistributed evenly so
    /// `count * step == 2π` and the ring closes without a seam.
    pub fn step(&self) -> LayoutResult<(u32, f64)> {
        let step = self.raw_step()?;
        let count = (TAU / step).trunc();
        if count < 1.0 {
            return Err(LayoutError::GeometryDomain {
                context: "ring count",
                detail: format!("angular step {step} fits no planks in a full turn"),
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let count = count as u32;
        let leftover = TAU - step * f64::from(count);
        Ok((count, step + leftover / f64::from(count)))
    }
}

/// Fill one ring with planks.
///
/// Walks the adjusted angular step for exactly the computed plank count,
/// emitting one placement per step. Each plank sits on the ring's radius at
/// the ring's height and counter-rotates with its angular position so its
/// footprint stays aligned with the ring.
///
/// # Errors
///
/// Returns [`LayoutError::GeometryDomain`] when the ring's radius is too
/// small for the plank footprint.
pub fn fill_ring(
    spec: &RingSpec,
    half_extents: DVec3,
    origin: DVec3,
) -> LayoutResult<Vec<PlankPlacement>> {
    let (count, step) = spec.step()?;

    let mut planks = Vec::with_capacity(count as usize);
    for i in 0..count {
        let a = step * f64::from(i);
        planks.push(PlankPlacement {
            position: origin + DVec3::new(a.cos() * spec.radius, spec.y, a.sin() * spec.radius),
            yaw: -a + spec.yaw_offset,
            half_extents,
        });
    }

    Ok(planks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn spec(radius: f64, spacing: f64, radius_adjust: f64) -> RingSpec {
        RingSpec {
            radius,
            y: 0.0,
            spacing,
            radius_adjust,
            yaw_offset: 0.0,
        }
    }

    /// Chord distance between two consecutive plank centers.
    fn consecutive_chord(radius: f64, step: f64) -> f64 {
        2.0 * radius * (step / 2.0).sin()
    }

    #[test]
    fn test_ring_closes_at_full_turn() {
        let (count, step) = spec(5.0, 0.5, 1.0).step().unwrap();
        assert!((f64::from(count) * step - TAU).abs() < 1e-9);
    }

    #[test]
    fn test_fill_ring_deterministic() {
        let ring = spec(5.0, 0.5, 1.0);
        let half_extents = DVec3::new(0.25, 1.0, 1.0);
        let first = fill_ring(&ring, half_extents, DVec3::ZERO).unwrap();
        let second = fill_ring(&ring, half_extents, DVec3::ZERO).unwrap();
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.yaw, b.yaw);
        }
    }

    #[test]
    fn test_consecutive_planks_do_not_overlap() {
        let ring = spec(5.0, 0.5, 1.0);
        let (_, step) = ring.step().unwrap();
        assert!(consecutive_chord(ring.radius, step) >= ring.spacing * 1.0099);
    }

    #[test]
    fn test_reference_ring_counts() {
        // Rings of the width=0.5, height=2, length=2, radius=6 tower.
        assert_eq!(spec(5.0, 0.5, 1.0).step().unwrap().0, 49);
        assert_eq!(spec(4.25, 2.0, 0.25).step().unwrap().0, 12);
        assert_eq!(spec(5.75, 2.0, 0.25).step().unwrap().0, 17);
    }

    #[test]
    fn test_plank_positions_sit_on_ring() {
        let ring = spec(5.75, 2.0, 0.25);
        let origin = DVec3::new(3.0, 1.0, -2.0);
        for plank in fill_ring(&ring, DVec3::splat(0.5), origin).unwrap() {
            let offset = plank.position - origin;
            assert!((offset.x.hypot(offset.z) - ring.radius).abs() < 1e-9);
            assert!((offset.y - ring.y).abs() < 1e-12);
        }
    }

    #[test]
    fn test_yaw_counter_rotates_with_angle() {
        let ring = RingSpec {
            yaw_offset: std::f64::consts::FRAC_PI_2,
            ..spec(5.0, 0.5, 1.0)
        };
        let (_, step) = ring.step().unwrap();
        let planks = fill_ring(&ring, DVec3::splat(0.5), DVec3::ZERO).unwrap();
        for (i, plank) in planks.iter().enumerate() {
            let a = step * i as f64;
            assert!((plank.yaw - (-a + ring.yaw_offset)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_zero_spacing_rejected() {
        let result = spec(5.0, 0.0, 1.0).step();
        assert!(matches!(
            result,
            Err(LayoutError::GeometryDomain {
                context: "ring spacing",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_clearance_rejected() {
        let result = spec(1.0, 0.5, 1.0).step();
        assert!(matches!(
            result,
            Err(LayoutError::GeometryDomain {
                context: "ring clearance",
                ..
            })
        ));
    }

    #[test]
    fn test_radius_too_small_for_footprint_rejected() {
        // Clearance 0.2 against a 4.0 footprint pushes the arcsine argument
        // way past 1.
        let result = spec(1.2, 4.0, 1.0).step();
        assert!(matches!(
            result,
            Err(LayoutError::GeometryDomain {
                context: "ring step",
                ..
            })
        ));
    }

    proptest! {
        #[test]
        fn test_valid_rings_close_and_stay_apart(
            radius in 3.0..50.0f64,
            spacing in 0.1..1.5f64,
            radius_adjust in 0.0..1.0f64,
        ) {
            let ring = spec(radius, spacing, radius_adjust);
            let (count, step) = ring.step().unwrap();

            // The adjusted step always closes the ring exactly.
            prop_assert!((f64::from(count) * step - TAU).abs() < 1e-9);

            // Spacing never dips below the safety margin.
            prop_assert!(consecutive_chord(radius, step) >= spacing * 1.0099);
        }
    }
}
