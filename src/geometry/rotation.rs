//! The orbit transform rotates in two planes only: (x, y) and (z, y).
//! Both leave the third axis untouched and are composed as
//! `rotate_y(rotate_x(v, ax), ay)`.

use glam::Vec3;

/// Rotate `v` by `angle` in the (x, y) plane; z is unchanged.
pub fn rotate_x(v: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(v.x * c - v.y * s, v.x * s + v.y * c, v.z)
}

/// Rotate `v` by `angle` in the (z, y) plane; x is unchanged.
pub fn rotate_y(v: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(v.x, v.z * s + v.y * c, v.z * c - v.y * s)
}

/// `rotate_y(rotate_x(v, angle_x), angle_y)`.
pub fn rotate_xy(v: Vec3, angle_x: f32, angle_y: f32) -> Vec3 {
    rotate_y(rotate_x(v, angle_x), angle_y)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn rotate_x_quarter_turn() {
        // +Y swings to -X in the (x, y) plane.
        assert!(close(rotate_x(Vec3::Y, FRAC_PI_2), Vec3::NEG_X));
        assert!(close(rotate_x(Vec3::Z, 1.3), Vec3::Z));
    }

    #[test]
    fn rotate_y_quarter_turn() {
        // +Y swings to -Z in the (z, y) plane.
        assert!(close(rotate_y(Vec3::Y, FRAC_PI_2), Vec3::NEG_Z));
        assert!(close(rotate_y(Vec3::X, 0.7), Vec3::X));
    }

    #[test]
    fn zero_angles_are_identity() {
        let v = Vec3::new(0.3, -1.2, 4.0);
        assert_eq!(rotate_xy(v, 0.0, 0.0), v);
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let r = rotate_xy(v, 0.4, -2.1);
        assert!((r.length() - v.length()).abs() < 1e-5);
    }
}
