#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cartesian point of the cloud, in mm.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Point3D {
        Point3D { x, y, z }
    }

    /// Coordinates in the order the 3D view expects them.
    ///
    /// The view's vertical axis is the physical `y`, so the tuple is `(x, z, y)`.
    pub fn render_order(&self) -> (f64, f64, f64) {
        (self.x, self.z, self.y)
    }

    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order_swaps_y_and_z() {
        let p = Point3D::new(1., 2., 3.);
        assert_eq!(p.render_order(), (1., 3., 2.));
    }
}
