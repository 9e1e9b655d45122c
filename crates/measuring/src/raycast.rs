//! Ray construction and ray-triangle picking for measurement clicks.
//!
//! Intersections use the Moller-Trumbore algorithm. Meshes are tested brute
//! force; tour rooms are a handful of boxes so no acceleration structure is
//! needed.

use glam::{Affine3A, Vec3};

/// Epsilon for floating point comparisons in ray intersection
const EPSILON: f32 = 1e-6;

/// A half-line with a normalized direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing the direction.
    ///
    /// Returns `None` for a zero or non-finite direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    /// Point at distance `t` along the ray
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The same ray expressed in another space
    pub fn transformed(&self, transform: &Affine3A) -> Option<Self> {
        Self::new(
            transform.transform_point3(self.origin),
            transform.transform_vector3(self.direction),
        )
    }
}

/// Result of a ray-triangle intersection test
#[derive(Debug, Clone, Copy)]
pub struct TriangleHit {
    /// Distance along the ray to the intersection point
    pub t: f32,
    /// Barycentric coordinate u (weight for vertex 1)
    pub u: f32,
    /// Barycentric coordinate v (weight for vertex 2)
    pub v: f32,
}

/// Moller-Trumbore ray-triangle intersection.
///
/// Both faces count as hits; hits behind the ray origin do not.
pub fn ray_triangle_intersection(ray: &Ray, v0: Vec3, v1: Vec3, v2: Vec3) -> Option<TriangleHit> {
    let edge1 = v1 - v0;
    let edge2 = v2 - v0;

    let pvec = ray.direction.cross(edge2);
    let det = edge1.dot(pvec);

    // Ray lies in the triangle plane or is parallel to it
    if det.abs() < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin - v0;

    let u = tvec.dot(pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(edge1);
    let v = ray.direction.dot(qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = edge2.dot(qvec) * inv_det;
    if t < EPSILON {
        return None;
    }

    Some(TriangleHit { t, u, v })
}

/// Triangle geometry extracted for picking.
#[derive(Debug, Clone, Default)]
pub struct MeshRaycastData {
    /// Vertex positions
    pub positions: Vec<Vec3>,
    /// Triangle indices (3 per triangle)
    pub indices: Vec<u32>,
}

impl MeshRaycastData {
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self { positions, indices }
    }

    /// Number of complete triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Vertex positions of a triangle, or `None` if an index is out of range
    pub fn triangle_positions(&self, tri_index: usize) -> Option<(Vec3, Vec3, Vec3)> {
        let base = tri_index * 3;
        let corner = |offset: usize| {
            self.indices
                .get(base + offset)
                .and_then(|&i| self.positions.get(i as usize))
                .copied()
        };
        Some((corner(0)?, corner(1)?, corner(2)?))
    }
}

/// Closest intersection of a ray with a mesh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance along the ray
    pub t: f32,
    /// Intersection point in the ray's space
    pub point: Vec3,
    /// Index of the triangle that was hit
    pub triangle: u32,
}

/// Cast a ray against mesh data and return the closest hit.
pub fn raycast_mesh(ray: &Ray, mesh: &MeshRaycastData) -> Option<RayHit> {
    let mut closest: Option<(TriangleHit, u32)> = None;

    for tri_idx in 0..mesh.triangle_count() {
        let Some((v0, v1, v2)) = mesh.triangle_positions(tri_idx) else {
            tracing::warn!("Skipping triangle {} with out of range index", tri_idx);
            continue;
        };

        if let Some(hit) = ray_triangle_intersection(ray, v0, v1, v2) {
            let dominated = matches!(&closest, Some((prev, _)) if hit.t >= prev.t);
            if !dominated {
                closest = Some((hit, tri_idx as u32));
            }
        }
    }

    closest.map(|(hit, triangle)| RayHit {
        t: hit.t,
        point: ray.at(hit.t),
        triangle,
    })
}

/// Cast a world-space ray against a mesh placed by `world_from_local`.
///
/// The returned hit point is in world space and `t` is the world-space
/// distance from the ray origin.
pub fn raycast_mesh_world(
    ray: &Ray,
    mesh: &MeshRaycastData,
    world_from_local: &Affine3A,
) -> Option<RayHit> {
    let local_ray = ray.transformed(&world_from_local.inverse())?;
    let local_hit = raycast_mesh(&local_ray, mesh)?;
    let point = world_from_local.transform_point3(local_hit.point);
    Some(RayHit {
        t: ray.origin.distance(point),
        point,
        triangle: local_hit.triangle,
    })
}

/// Pick the nearest of several candidate hits
pub fn nearest_hit(hits: impl IntoIterator<Item = RayHit>) -> Option<RayHit> {
    hits.into_iter().min_by(|a, b| a.t.total_cmp(&b.t))
}
