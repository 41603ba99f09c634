//! Integer voxel coordinates and calibrated distances.

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A skeleton voxel. Ordered lexicographically by `(x, y, z)`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(f64::from(self.x), f64::from(self.y), f64::from(self.z))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Physical voxel spacing along each axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        }
    }
}

impl Calibration {
    #[inline]
    pub fn isotropic(spacing: f64) -> Self {
        Self {
            x: spacing,
            y: spacing,
            z: spacing,
        }
    }

    #[inline]
    fn scale(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Euclidean distance between two voxel-space positions in calibrated units.
    #[inline]
    pub fn distance(&self, a: Vector3<f64>, b: Vector3<f64>) -> f64 {
        (b - a).component_mul(&self.scale()).norm()
    }
}

/// Mean position of `points` in voxel space; `None` for an empty cluster.
pub fn centroid(points: &[Point]) -> Option<Vector3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc: Vector3<f64>, p| acc + p.to_vector());
    Some(sum / points.len() as f64)
}

/// Calibrated polyline length through `path` (consecutive distances summed).
pub fn polyline_length(path: &[Vector3<f64>], cal: &Calibration) -> f64 {
    path.windows(2).map(|w| cal.distance(w[0], w[1])).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_order() {
        let p = Point::new(1, -2, 3);
        assert_eq!(p.to_string(), "(1, -2, 3)");
        let mut pts = vec![Point::new(1, 0, 0), Point::new(0, 5, 5), Point::new(0, 5, 1)];
        pts.sort();
        assert_eq!(
            pts,
            vec![Point::new(0, 5, 1), Point::new(0, 5, 5), Point::new(1, 0, 0)]
        );
    }

    #[test]
    fn copies_are_independent() {
        let p = Point::new(4, 4, 4);
        let mut q = p;
        q.x = 9;
        assert_eq!(p, Point::new(4, 4, 4));
        assert_ne!(p, q);
    }

    #[test]
    fn centroid_of_cluster() {
        assert!(centroid(&[]).is_none());
        let c = centroid(&[Point::new(0, 0, 0), Point::new(2, 0, 0), Point::new(1, 3, 0)])
            .unwrap();
        assert!((c - Vector3::new(1.0, 1.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn calibrated_distance_is_anisotropic() {
        let cal = Calibration {
            x: 0.5,
            y: 1.0,
            z: 2.0,
        };
        let a = Point::new(0, 0, 0).to_vector();
        assert!((cal.distance(a, Point::new(2, 0, 0).to_vector()) - 1.0).abs() < 1e-12);
        assert!((cal.distance(a, Point::new(0, 0, 1).to_vector()) - 2.0).abs() < 1e-12);
        let path = [a, Point::new(2, 0, 0).to_vector(), Point::new(2, 3, 0).to_vector()];
        assert!((polyline_length(&path, &cal) - 4.0).abs() < 1e-12);
        assert_eq!(polyline_length(&path[..1], &cal), 0.0);
    }
}
