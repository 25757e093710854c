use glam::Vec3;
use itertools::Itertools;

use crate::math::ray::Ray;
use crate::scene_graph::node::{Geometry, NodeId};
use crate::scene_graph::scene::Scene;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTestFilter {
    /// Any node carrying geometry, surfaces included.
    AnyGeometry,
    /// Only tracked plane surfaces, constrained to their known extents.
    SurfacesWithinExtent,
}

#[derive(Debug, Clone, Copy)]
pub struct HitTestResult {
    pub node: NodeId,
    pub world_point: Vec3,
    pub distance: f32,
}

/// Intersects a world-space ray with the scene's live geometry and returns
/// the hits ordered nearest first. Plane hits are always bounded by the
/// plane's extent. World matrices must be current; callers update transforms
/// before querying.
pub fn hit_test(scene: &Scene, ray: &Ray, filter: HitTestFilter) -> Vec<HitTestResult> {
    scene
        .geometry_nodes()
        .filter_map(|(id, node)| {
            let world = *node.transform.get_world_matrix();
            let world_point = match node.geometry {
                Some(Geometry::Plane { width, height, .. }) => {
                    intersect_plane(ray, &world, width, height)
                }
                Some(Geometry::Mesh { bounds }) => {
                    if filter == HitTestFilter::SurfacesWithinExtent {
                        return None;
                    }
                    let sphere = bounds.transform(&world);
                    sphere.intersect_ray(ray).map(|t| ray.point_at(t))
                }
                None => None,
            }?;

            Some(HitTestResult {
                node: id,
                world_point,
                distance: (world_point - ray.origin).length(),
            })
        })
        .sorted_by(|a, b| f32::total_cmp(&a.distance, &b.distance))
        .collect()
}

/// Plane geometry spans local X/Y, centered on the origin. The ray is mapped
/// into the node's local space, intersected with z = 0, and accepted only
/// inside the half extents.
fn intersect_plane(ray: &Ray, world: &glam::Mat4, width: f32, height: f32) -> Option<Vec3> {
    let local_ray = ray.transform(&world.inverse());
    if local_ray.direction.z.abs() < f32::EPSILON {
        return None;
    }

    let t = -local_ray.origin.z / local_ray.direction.z;
    if t <= 0.0 {
        return None;
    }

    let local_point = local_ray.point_at(t);
    if local_point.x.abs() > width * 0.5 || local_point.y.abs() > height * 0.5 {
        return None;
    }

    Some(world.transform_point3(local_point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::bounds::BoundingSphere;
    use crate::scene_graph::node::{Node, Tint};
    use approx::assert_relative_eq;
    use glam::Quat;
    use std::f32::consts::FRAC_PI_2;

    fn flat_surface(scene: &mut Scene, center: Vec3, width: f32, height: f32) -> NodeId {
        let mut node = Node::with_geometry(
            "surface",
            Geometry::Plane {
                width,
                height,
                tint: Tint::CLEAR,
            },
        );
        node.transform.set_translation(center);
        node.transform.set_rotation(Quat::from_rotation_x(-FRAC_PI_2));
        scene.add_node(node, scene.root())
    }

    fn straight_down(x: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, 2.0, z), Vec3::NEG_Y)
    }

    #[test]
    fn ray_hits_a_flat_surface_inside_its_extent() {
        let mut scene = Scene::new();
        let surface = flat_surface(&mut scene, Vec3::ZERO, 1.0, 1.0);
        scene.update_transforms();

        let hits = hit_test(
            &scene,
            &straight_down(0.2, 0.3),
            HitTestFilter::SurfacesWithinExtent,
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].node, surface);
        assert_relative_eq!(hits[0].world_point.x, 0.2, epsilon = 1e-5);
        assert_relative_eq!(hits[0].world_point.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(hits[0].world_point.z, 0.3, epsilon = 1e-5);
    }

    #[test]
    fn extent_bounds_the_surface() {
        let mut scene = Scene::new();
        flat_surface(&mut scene, Vec3::ZERO, 1.0, 1.0);
        scene.update_transforms();

        // Just outside the half extent on each axis.
        let hits = hit_test(
            &scene,
            &straight_down(0.6, 0.0),
            HitTestFilter::SurfacesWithinExtent,
        );
        assert!(hits.is_empty());

        let hits = hit_test(
            &scene,
            &straight_down(0.0, -0.6),
            HitTestFilter::SurfacesWithinExtent,
        );
        assert!(hits.is_empty());
    }

    #[test]
    fn hits_come_back_nearest_first() {
        let mut scene = Scene::new();
        let low = flat_surface(&mut scene, Vec3::new(0.0, 0.0, 0.0), 1.0, 1.0);
        let high = flat_surface(&mut scene, Vec3::new(0.0, 1.0, 0.0), 1.0, 1.0);
        scene.update_transforms();

        let hits = hit_test(
            &scene,
            &straight_down(0.0, 0.0),
            HitTestFilter::SurfacesWithinExtent,
        );
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].node, high);
        assert_eq!(hits[1].node, low);
        assert!(hits[0].distance < hits[1].distance);
    }

    #[test]
    fn surface_filter_skips_mesh_nodes() {
        let mut scene = Scene::new();
        let mut object = Node::with_geometry(
            "object",
            Geometry::Mesh {
                bounds: BoundingSphere::new(Vec3::ZERO, 0.5),
            },
        );
        object.transform.set_translation(Vec3::new(0.0, 1.0, 0.0));
        let object = scene.add_node(object, scene.root());
        scene.update_transforms();

        let ray = straight_down(0.0, 0.0);
        assert!(hit_test(&scene, &ray, HitTestFilter::SurfacesWithinExtent).is_empty());

        let hits = hit_test(&scene, &ray, HitTestFilter::AnyGeometry);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].node, object);
    }

    #[test]
    fn rays_parallel_to_the_surface_miss() {
        let mut scene = Scene::new();
        flat_surface(&mut scene, Vec3::ZERO, 1.0, 1.0);
        scene.update_transforms();

        let ray = Ray::new(Vec3::new(-2.0, 1.0, 0.0), Vec3::X);
        assert!(hit_test(&scene, &ray, HitTestFilter::SurfacesWithinExtent).is_empty());
    }
}
