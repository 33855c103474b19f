//! Tower assembly: stacking rings into levels.

use std::f64::consts::FRAC_PI_2;

use glam::DVec3;

use crate::PlankPlacement;
use crate::error::{LayoutError, LayoutResult};
use crate::ring::{RingSpec, fill_ring};

/// Parameters describing a tower to lay out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerParams {
    /// Plank width in meters.
    pub width: f64,
    /// Plank height in meters.
    pub height: f64,
    /// Plank length in meters.
    pub length: f64,
    /// Target radius of the tower's cylinder cross-section.
    pub radius: f64,
    /// Number of stacked plank levels. Odd counts round down: the builder
    /// only stacks complete level pairs.
    pub level_count: u32,
    /// World-space position of the tower's base center.
    pub origin: DVec3,
}

impl TowerParams {
    /// Box half-extents of a single plank.
    pub fn half_extents(&self) -> DVec3 {
        DVec3::new(self.width, self.height, self.length) / 2.0
    }

    fn validate(&self) -> LayoutResult<()> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("length", self.length),
            ("radius", self.radius),
        ];
        for (name, value) in dimensions {
            if !(value.is_finite() && value > 0.0) {
                return Err(LayoutError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Ring schedule for a tower: three rings per pair of levels.
///
/// Each iteration lays one ring of radial planks (long side pointing at the
/// axis, rotated a quarter turn), then two concentric rings of tangential
/// planks one plank-height up. Heights are relative to the tower origin.
pub fn tower_rings(params: &TowerParams) -> Vec<RingSpec> {
    let TowerParams {
        width,
        height,
        length,
        radius,
        ..
    } = *params;

    let pairs = params.level_count / 2;
    let mut rings = Vec::with_capacity(pairs as usize * 3);
    let mut level_y = height / 2.0;

    for _ in 0..pairs {
        rings.push(RingSpec {
            radius: radius - length / 2.0,
            y: level_y,
            spacing: width,
            radius_adjust: length / 2.0,
            yaw_offset: FRAC_PI_2,
        });
        level_y += height;

        rings.push(RingSpec {
            radius: radius - length + width / 2.0,
            y: level_y,
            spacing: length,
            radius_adjust: width / 2.0,
            yaw_offset: 0.0,
        });
        rings.push(RingSpec {
            radius: radius - width / 2.0,
            y: level_y,
            spacing: length,
            radius_adjust: width / 2.0,
            yaw_offset: 0.0,
        });
        level_y += height;
    }

    rings
}

/// Lay out a full tower.
///
/// Validates the parameters eagerly, then fills every ring of the schedule
/// in order, bottom to top. No placements are produced on failure.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidParameter`] when a plank dimension or the
/// radius is non-positive or non-finite, and [`LayoutError::GeometryDomain`]
/// when the radius is too small for the requested plank footprint.
pub fn generate(params: &TowerParams) -> LayoutResult<Vec<PlankPlacement>> {
    params.validate()?;

    let half_extents = params.half_extents();
    let mut planks = Vec::new();
    for ring in tower_rings(params) {
        planks.extend(fill_ring(&ring, half_extents, params.origin)?);
    }
    Ok(planks)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The demo scenario: 0.5 x 2 x 2 planks, radius 6, 16 levels.
    fn reference_params() -> TowerParams {
        TowerParams {
            width: 0.5,
            height: 2.0,
            length: 2.0,
            radius: 6.0,
            level_count: 16,
            origin: DVec3::ZERO,
        }
    }

    #[test]
    fn test_three_rings_per_level_pair() {
        for pairs in [0u32, 1, 4, 8] {
            let params = TowerParams {
                level_count: pairs * 2,
                ..reference_params()
            };
            assert_eq!(tower_rings(&params).len(), pairs as usize * 3);
        }
    }

    #[test]
    fn test_odd_level_count_truncates_to_pair() {
        let even = reference_params();
        let odd = TowerParams {
            level_count: 17,
            ..even
        };
        assert_eq!(tower_rings(&odd), tower_rings(&even));
        assert_eq!(generate(&odd).unwrap(), generate(&even).unwrap());
    }

    #[test]
    fn test_zero_levels_produces_nothing() {
        let params = TowerParams {
            level_count: 0,
            ..reference_params()
        };
        assert!(generate(&params).unwrap().is_empty());
    }

    #[test]
    fn test_reference_tower_plank_count() {
        // 49 radial + 12 inner tangential + 17 outer tangential planks per
        // level pair, times 8 pairs.
        let planks = generate(&reference_params()).unwrap();
        assert_eq!(planks.len(), (49 + 12 + 17) * 8);
    }

    #[test]
    fn test_reference_tower_heights_interleave() {
        let planks = generate(&reference_params()).unwrap();

        let mut heights: Vec<f64> = planks.iter().map(|p| p.position.y).collect();
        heights.sort_by(f64::total_cmp);
        heights.dedup();

        // Radial rings at origin.y + height/2 + i * 2 * height, tangential
        // rings one plank-height above each.
        let expected: Vec<f64> = (0..16).map(|i| 1.0 + 2.0 * f64::from(i)).collect();
        assert_eq!(heights, expected);
    }

    #[test]
    fn test_reference_tower_planks_sit_on_ring_radii() {
        let planks = generate(&reference_params()).unwrap();

        for plank in planks {
            let radial = plank.position.x.hypot(plank.position.z);
            // Radial rings (odd multiples of height/2 starting at 1) sit at
            // radius - length/2; tangential rings at radius - length + width/2
            // or radius - width/2.
            let lower_level = (plank.position.y - 1.0) % 4.0 == 0.0;
            let expected: &[f64] = if lower_level {
                &[5.0]
            } else {
                &[4.25, 5.75]
            };
            assert!(
                expected.iter().any(|r| (radial - r).abs() < 1e-9),
                "plank at y={} has radial distance {radial}",
                plank.position.y
            );
        }
    }

    #[test]
    fn test_origin_offsets_every_plank() {
        let origin = DVec3::new(10.0, 2.0, -3.0);
        let base = generate(&reference_params()).unwrap();
        let moved = generate(&TowerParams {
            origin,
            ..reference_params()
        })
        .unwrap();

        assert_eq!(base.len(), moved.len());
        for (a, b) in base.iter().zip(&moved) {
            assert_eq!(a.position + origin, b.position);
            assert_eq!(a.yaw, b.yaw);
        }
    }

    #[test]
    fn test_half_extents_follow_plank_dimensions() {
        let planks = generate(&reference_params()).unwrap();
        for plank in planks {
            assert_eq!(plank.half_extents, DVec3::new(0.25, 1.0, 1.0));
        }
    }

    #[test]
    fn test_nonpositive_dimensions_rejected() {
        for name in ["width", "height", "length", "radius"] {
            let mut params = reference_params();
            match name {
                "width" => params.width = 0.0,
                "height" => params.height = -1.0,
                "length" => params.length = 0.0,
                "radius" => params.radius = f64::NAN,
                _ => unreachable!(),
            }
            match generate(&params) {
                Err(LayoutError::InvalidParameter { name: got, .. }) => assert_eq!(got, name),
                other => panic!("expected InvalidParameter for {name}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_radius_smaller_than_plank_rejected() {
        // radius == length/2 leaves the lower ring with zero clearance.
        let params = TowerParams {
            radius: 1.0,
            ..reference_params()
        };
        assert!(matches!(
            generate(&params),
            Err(LayoutError::GeometryDomain { .. })
        ));
    }

    #[test]
    fn test_radius_smaller_than_upper_ring_plank_rejected() {
        // Wide planks on a ring that can still fit them radially: the lower
        // ring (clearance 2.0, footprint 3.8) and the inner tangential ring
        // (clearance 2.0, footprint 2.0) both pass, but the outer tangential
        // ring's clearance of radius - width = 0.2 is too tight for the
        // plank length and fails the arcsine domain check.
        let params = TowerParams {
            width: 3.8,
            length: 2.0,
            radius: 4.0,
            ..reference_params()
        };
        assert!(matches!(
            generate(&params),
            Err(LayoutError::GeometryDomain {
                context: "ring step",
                ..
            })
        ));
    }
}
