//! Pure height transforms over elevation sequences.

/// Height of a horizontal section plane above its storey floor.
pub const DEFAULT_OFFSET_HEIGHT: f64 = 0.9;

/// Camera distance per unit of building height.
pub const DEFAULT_SCREEN_SIZE_CO: f64 = 3.0;

/// Shift every elevation by `offset_height`, keeping length and order.
///
/// Any offset is accepted, including zero and negative values.
pub fn apply_offset(elevations: &[f64], offset_height: f64) -> Vec<f64> {
    elevations.iter().map(|e| e + offset_height).collect()
}

/// Estimate the camera Z distance needed to frame the building.
///
/// The tallest elevation is taken from a running maximum seeded at 0, so
/// below-datum storeys never count as the tallest and empty input gives 0.
/// The result is that height times `screen_size_co`.
pub fn estimate_camera_z(elevations: &[f64], screen_size_co: f64) -> f64 {
    let tallest = elevations
        .iter()
        .fold(0.0_f64, |tallest, &e| if e > tallest { e } else { tallest });
    tallest * screen_size_co
}

/// [`estimate_camera_z`] with [`DEFAULT_SCREEN_SIZE_CO`].
pub fn estimate_camera_z_default(elevations: &[f64]) -> f64 {
    estimate_camera_z(elevations, DEFAULT_SCREEN_SIZE_CO)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&[f64]] = &[
        &[],
        &[0.0],
        &[0.0, 3.0, 6.0],
        &[6.0, 0.0, 3.0, 3.0],
        &[-3.2, 0.0, 2.75, 5.5],
        &[-5.0, -2.0],
    ];

    #[test]
    fn test_offset_elementwise() {
        for s in SAMPLES {
            for k in [0.0, 0.9, -1.5, 12.25] {
                let out = apply_offset(s, k);
                assert_eq!(out.len(), s.len());
                for (o, e) in out.iter().zip(s.iter()) {
                    assert_eq!(*o, e + k);
                }
            }
        }
    }

    #[test]
    fn test_zero_offset_is_identity() {
        for s in SAMPLES {
            assert_eq!(apply_offset(s, 0.0), s.to_vec());
        }
    }

    #[test]
    fn test_offsets_compose() {
        // Dyadic values keep the sums exact.
        let s = [0.0, 3.5, -1.25, 7.0];
        let (a, b) = (0.5, -2.25);
        assert_eq!(apply_offset(&apply_offset(&s, a), b), apply_offset(&s, a + b));
    }

    #[test]
    fn test_camera_z_empty_is_zero() {
        for c in [0.0, 1.0, 3.0, 10.0] {
            assert_eq!(estimate_camera_z(&[], c), 0.0);
        }
    }

    #[test]
    fn test_camera_z_floor_at_zero() {
        assert_eq!(estimate_camera_z(&[-5.0, -2.0], 3.0), 0.0);
        assert_eq!(estimate_camera_z(&[-3.2, 0.0, 2.75, 5.5], 1.0), 5.5);
    }

    #[test]
    fn test_camera_z_matches_clamped_max() {
        for s in SAMPLES {
            let clamped = s.iter().copied().fold(0.0_f64, f64::max);
            assert_eq!(estimate_camera_z(s, 1.0), clamped);
            assert_eq!(estimate_camera_z(s, 2.0), clamped * 2.0);
        }
    }

    #[test]
    fn test_camera_z_default_coefficient() {
        assert_eq!(estimate_camera_z_default(&[0.0, 3.0, 6.0]), 18.0);
        assert_eq!(estimate_camera_z_default(&[6.0, 0.0, 3.0]), 18.0);
    }
}
