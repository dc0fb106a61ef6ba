use glam::{Mat4, Vec3};
use suzanne_island::math::{AffineTransform, Order};
use suzanne_island::CameraError;

#[cfg(test)]
mod transform_tests {
    use super::*;

    fn assert_inverse_in_sync(t: &AffineTransform, step: &str) {
        let expected = t.matrix().inverse();
        assert!(
            t.inverse_matrix().abs_diff_eq(expected, 1e-4),
            "inverse out of sync after {}: {:?} vs {:?}",
            step,
            t.inverse_matrix(),
            expected
        );
    }

    #[test]
    fn test_inverse_tracks_every_operation() {
        let mut t = AffineTransform::from_translation(Vec3::new(0.0, 1.0, 2.0));
        let orders = [Order::Left, Order::Right];

        for (i, &order) in orders.iter().cycle().take(4).enumerate() {
            let angle = 0.1 + i as f32 * 0.37;
            t.rotate_x(angle, order);
            assert_inverse_in_sync(&t, "rotate_x");
            t.translate(Vec3::new(1.5, -2.0, 0.25 * i as f32), order);
            assert_inverse_in_sync(&t, "translate");
            t.rotate_y(-angle, order);
            assert_inverse_in_sync(&t, "rotate_y");
            t.scale(Vec3::new(1.1, 0.9, 1.05), order);
            assert_inverse_in_sync(&t, "scale");
            t.rotate_z(angle * 0.5, order);
            assert_inverse_in_sync(&t, "rotate_z");
            t.rotate(angle, Vec3::new(1.0, 1.0, 0.0), order);
            assert_inverse_in_sync(&t, "rotate");
        }
    }

    #[test]
    fn test_translate_and_back_restores_matrix() {
        let mut t = AffineTransform::identity();
        t.rotate_y(0.8, Order::Left);
        t.translate(Vec3::new(3.0, 1.0, -2.0), Order::Left);
        let before = t.matrix();

        let v = Vec3::new(4.0, -7.0, 2.5);
        t.translate(v, Order::Right);
        t.translate(-v, Order::Right);

        assert!(t.matrix().abs_diff_eq(before, 1e-5));
    }

    #[test]
    fn test_set_transform_round_trip() {
        let m = Mat4::from_scale_rotation_translation(
            Vec3::new(2.0, 3.0, 0.5),
            glam::Quat::from_rotation_z(1.1),
            Vec3::new(-4.0, 9.0, 1.0),
        );
        let mut t = AffineTransform::identity();
        t.set_transform(m).expect("invertible matrix");

        assert_eq!(t.matrix(), m);
        assert!(t.inverse_matrix().abs_diff_eq(m.inverse(), 1e-6));
    }

    #[test]
    fn test_set_transform_rejects_singular_and_keeps_state() {
        let mut t = AffineTransform::from_translation(Vec3::ONE);
        let result = t.set_transform(Mat4::ZERO);

        assert_eq!(result, Err(CameraError::DegenerateTransform));
        assert_eq!(t.location(), Vec3::ONE);
    }

    #[test]
    fn test_right_translation_is_in_local_space() {
        let mut t = AffineTransform::identity();
        t.rotate_y(std::f32::consts::FRAC_PI_2, Order::Left);
        t.translate(Vec3::new(0.0, 0.0, -1.0), Order::Right);

        // local -Z points along world -X after a quarter turn
        assert!(t.location().abs_diff_eq(Vec3::new(-1.0, 0.0, 0.0), 1e-6));
    }

    #[test]
    fn test_scale_left_scales_location() {
        let mut t = AffineTransform::from_translation(Vec3::new(1.0, 2.0, 3.0));
        t.scale(Vec3::splat(2.0), Order::Left);
        assert_eq!(t.location(), Vec3::new(2.0, 4.0, 6.0));

        let mut u = AffineTransform::from_translation(Vec3::new(1.0, 2.0, 3.0));
        u.scale(Vec3::splat(2.0), Order::Right);
        assert_eq!(u.location(), Vec3::new(1.0, 2.0, 3.0));
    }
}
