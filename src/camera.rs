use glam::{Mat4, Vec2, Vec3, Vec4Swizzles};

use crate::math::ray::Ray;

const FOV_Y_DEGREES: f32 = 45.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Camera {
    pub fn get_vp_matrix(&self, resolution: Vec2) -> Mat4 {
        let view = Mat4::look_at_lh(self.eye, self.target, self.up);
        let projection = Mat4::perspective_lh(
            FOV_Y_DEGREES.to_radians(),
            resolution.x / resolution.y,
            Z_NEAR,
            Z_FAR,
        );
        projection * view
    }

    /// World-space ray from the eye through a screen point (pixels, origin at
    /// the top left). Built by unprojecting the point on the near and far
    /// planes through the inverse view-projection matrix.
    pub fn screen_ray(&self, point: Vec2, resolution: Vec2) -> Ray {
        let ndc = Vec2::new(
            2.0 * point.x / resolution.x - 1.0,
            1.0 - 2.0 * point.y / resolution.y,
        );

        let inverse = self.get_vp_matrix(resolution).inverse();
        let near = inverse * glam::vec4(ndc.x, ndc.y, 0.0, 1.0);
        let far = inverse * glam::vec4(ndc.x, ndc.y, 1.0, 1.0);
        let near = near.xyz() / near.w;
        let far = far.xyz() / far.w;

        Ray::new(near, far - near)
    }

    /// Projects a world point back to screen pixels. `None` when the point is
    /// behind the viewpoint.
    pub fn screen_point(&self, world: Vec3, resolution: Vec2) -> Option<Vec2> {
        let clip = self.get_vp_matrix(resolution) * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }

        let ndc = clip.xyz() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * resolution.x,
            (1.0 - ndc.y) * 0.5 * resolution.y,
        ))
    }
}
