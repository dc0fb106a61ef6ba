use glam::{Mat4, Vec2, Vec3, Vec4};

/// Half-extent of the NDC cube; every frustum plane sits at +-1 after the divide
const NDC_PLANE: f32 = 1.0;

/// Sphere center and farthest surface point after projection and perspective divide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcSphere {
    pub center: Vec3,
    /// Distance in the NDC xy plane between center and farthest point
    pub radius: f32,
    /// Absolute NDC depth difference between center and farthest point
    pub distance_z: f32,
}

impl NdcSphere {
    /// Project a world space sphere, given by its center and a farthest surface point.
    ///
    /// Using a point instead of a scalar radius lets the projection carry
    /// anisotropic distortion into the extents. `w <= 0` is not special-cased.
    pub fn project(view_projection: Mat4, center: Vec3, farthest_point: Vec3) -> Self {
        let center = to_ndc(view_projection * center.extend(1.0));
        let farthest = to_ndc(view_projection * farthest_point.extend(1.0));

        Self {
            center,
            radius: Vec2::new(farthest.x - center.x, farthest.y - center.y).length(),
            distance_z: (farthest.z - center.z).abs(),
        }
    }

    /// Conservative test against the NDC box, axis by axis.
    ///
    /// This is not an exact frustum/sphere intersection; spheres near the
    /// frustum corners may be reported visible.
    pub fn intersects_ndc_box(&self) -> bool {
        let c = self.center;
        if c.x - self.radius > NDC_PLANE || c.x + self.radius < -NDC_PLANE {
            return false;
        }
        if c.y - self.radius > NDC_PLANE || c.y + self.radius < -NDC_PLANE {
            return false;
        }
        if c.z - self.distance_z > NDC_PLANE || c.z + self.distance_z < -NDC_PLANE {
            return false;
        }
        true
    }
}

/// Whether a bounding sphere may be visible through `projection * view`
#[inline]
pub fn sphere_in_frustum(view_projection: Mat4, center: Vec3, farthest_point: Vec3) -> bool {
    NdcSphere::project(view_projection, center, farthest_point).intersects_ndc_box()
}

#[inline]
fn to_ndc(clip: Vec4) -> Vec3 {
    clip.truncate() / clip.w
}
