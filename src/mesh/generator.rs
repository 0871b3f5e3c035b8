use std::f32::consts::TAU;
use crate::config::{FlowerConfig, LeafConfig, StemConfig};
use crate::math::Vec3;
use super::surface::{Mesh, Vertex};

/// Parameters for mesh generation
#[derive(Debug, Clone, Copy)]
pub struct MeshParams {
    /// Rows along a petal or leaf blade (more = smoother outline)
    pub blade_segments: usize,
    /// Radial segments around the stem
    pub stem_segments: usize,
    /// Longitude/latitude resolution of the center sphere
    pub sphere_sectors: usize,
    pub sphere_stacks: usize,
    /// Ground disc radius and resolution
    pub ground_radius: f32,
    pub ground_segments: usize,
}

impl Default for MeshParams {
    fn default() -> Self {
        Self {
            blade_segments: 12,
            stem_segments: 8,
            sphere_sectors: 16,
            sphere_stacks: 12,
            ground_radius: 8.0,
            ground_segments: 32,
        }
    }
}

/// How much a petal curls back along its length
const PETAL_CURL: f32 = 0.12;

/// One geometry per part kind; petals within a ring share theirs
#[derive(Debug, Clone)]
pub struct FlowerMeshes {
    pub stem: Mesh,
    pub inner_petal: Mesh,
    pub outer_petal: Mesh,
    pub center: Mesh,
    /// One mesh per leaf (blade offset and droop are baked in)
    pub leaves: Vec<Mesh>,
    pub ground: Mesh,
}

/// Builds all part geometries from the flower config
pub struct MeshGenerator {
    params: MeshParams,
}

impl MeshGenerator {
    pub fn new(params: MeshParams) -> Self {
        Self { params }
    }

    pub fn generate(&self, config: &FlowerConfig) -> FlowerMeshes {
        let blade_offset = config.stem.radius_bottom + 0.01;
        FlowerMeshes {
            stem: self.stem(&config.stem),
            inner_petal: self.petal(config.inner_petals.width, config.inner_petals.length),
            outer_petal: self.petal(config.outer_petals.width, config.outer_petals.length),
            center: self.sphere(config.center.radius),
            leaves: config
                .leaves
                .iter()
                .map(|leaf| self.leaf(leaf, blade_offset))
                .collect(),
            ground: self.ground(),
        }
    }

    /// A petal blade: closed cubic-bezier outline growing along +y from
    /// the hinge at the origin, curled back along its length
    pub fn petal(&self, width: f32, length: f32) -> Mesh {
        let right = [
            (0.0, 0.0),
            (width * 0.55, length * 0.2),
            (width * 0.4, length * 0.7),
            (0.0, length),
        ];
        self.blade_from_outline(&right, length, PETAL_CURL)
    }

    /// A leaf blade, same construction as a petal but flat, with the
    /// stem-attachment offset and droop baked into the vertices
    pub fn leaf(&self, config: &LeafConfig, blade_offset: f32) -> Mesh {
        let right = [(0.0, 0.0), (0.07, 0.07), (0.055, 0.2), (0.0, 0.28)];
        let mut mesh = self.blade_from_outline(&right, 0.28, 0.0);

        let (sin_t, cos_t) = config.z_tilt.sin_cos();
        for v in &mut mesh.vertices {
            // Droop around the blade base, then push out past the stem
            let (x, y) = (v.position.x, v.position.y);
            v.position.x = x * cos_t - y * sin_t + blade_offset;
            v.position.y = x * sin_t + y * cos_t;
            let (nx, ny) = (v.normal.x, v.normal.y);
            v.normal.x = nx * cos_t - ny * sin_t;
            v.normal.y = nx * sin_t + ny * cos_t;
        }
        mesh
    }

    /// Shared blade triangulation: rows sampled along the bezier
    /// outline, fanned at base and tip, quad strip in between
    fn blade_from_outline(&self, right: &[(f32, f32); 4], length: f32, curl: f32) -> Mesh {
        let n = self.params.blade_segments;
        let mut mesh = Mesh::new();

        let vertex_at = |x: f32, y: f32| -> Vertex {
            let t = if length > 0.0 { y / length } else { 0.0 };
            let z = -t * t * length * curl;
            let normal = Vec3::new(0.0, 2.0 * t * curl, 1.0).normalize();
            Vertex::new(Vec3::new(x, y, z), normal).with_uv(0.5 + x, t)
        };

        let base = mesh.add_vertices([vertex_at(0.0, 0.0)]);

        // Interior rows: right and left edge points per row
        for i in 1..n {
            let t = i as f32 / n as f32;
            let (x, y) = cubic_bezier(right[0], right[1], right[2], right[3], t);
            mesh.add_vertices([vertex_at(x, y), vertex_at(-x, y)]);
        }

        let tip = mesh.add_vertices([vertex_at(0.0, length)]);

        // Base fan
        mesh.add_triangle(base, base + 1, base + 2);
        // Strip between rows: row i starts at index 1 + 2*(i-1)
        for i in 1..n - 1 {
            let r = base + 1 + 2 * (i as u32 - 1);
            mesh.add_quad(r, r + 2, r + 3, r + 1);
        }
        // Tip fan
        let last = tip - 2;
        mesh.add_triangle(last, tip, last + 1);

        mesh
    }

    /// Tapered stem cylinder, base at the origin, open ends
    pub fn stem(&self, config: &StemConfig) -> Mesh {
        let n = self.params.stem_segments;
        let mut mesh = Mesh::new();

        for (y, radius) in [(0.0, config.radius_bottom), (config.height, config.radius_top)] {
            for i in 0..n {
                let angle = i as f32 / n as f32 * TAU;
                let (sin_a, cos_a) = angle.sin_cos();
                let position = Vec3::new(cos_a * radius, y, sin_a * radius);
                let normal = Vec3::new(cos_a, 0.0, sin_a);
                mesh.add_vertices([Vertex::new(position, normal)
                    .with_uv(i as f32 / n as f32, y / config.height)]);
            }
        }

        let top = n as u32;
        for i in 0..n as u32 {
            let next = (i + 1) % n as u32;
            mesh.add_quad(i, next, top + next, top + i);
        }

        mesh
    }

    /// UV sphere for the center pistil
    pub fn sphere(&self, radius: f32) -> Mesh {
        let sectors = self.params.sphere_sectors;
        let stacks = self.params.sphere_stacks;
        let mut mesh = Mesh::new();

        for stack in 0..=stacks {
            let v = stack as f32 / stacks as f32;
            let polar = v * std::f32::consts::PI;
            let (sin_p, cos_p) = polar.sin_cos();
            for sector in 0..=sectors {
                let u = sector as f32 / sectors as f32;
                let azimuth = u * TAU;
                let (sin_a, cos_a) = azimuth.sin_cos();
                let normal = Vec3::new(sin_p * cos_a, cos_p, sin_p * sin_a);
                mesh.add_vertices([Vertex::new(normal.scale(radius), normal).with_uv(u, v)]);
            }
        }

        let row = (sectors + 1) as u32;
        for stack in 0..stacks as u32 {
            for sector in 0..sectors as u32 {
                let a = stack * row + sector;
                let b = a + row;
                mesh.add_quad(a, b, b + 1, a + 1);
            }
        }

        mesh
    }

    /// Flat ground disc in the XZ plane
    pub fn ground(&self) -> Mesh {
        let n = self.params.ground_segments;
        let mut mesh = Mesh::new();

        let center = mesh.add_vertices([Vertex::new(Vec3::ZERO, Vec3::UP).with_uv(0.5, 0.5)]);
        for i in 0..n {
            let angle = i as f32 / n as f32 * TAU;
            let (sin_a, cos_a) = angle.sin_cos();
            let r = self.params.ground_radius;
            mesh.add_vertices([
                Vertex::new(Vec3::new(cos_a * r, 0.0, sin_a * r), Vec3::UP)
                    .with_uv(0.5 + cos_a * 0.5, 0.5 + sin_a * 0.5),
            ]);
        }
        for i in 0..n as u32 {
            mesh.add_triangle(center, center + 1 + i, center + 1 + (i + 1) % n as u32);
        }

        mesh
    }
}

fn cubic_bezier(p0: (f32, f32), p1: (f32, f32), p2: (f32, f32), p3: (f32, f32), t: f32) -> (f32, f32) {
    let u = 1.0 - t;
    let w0 = u * u * u;
    let w1 = 3.0 * u * u * t;
    let w2 = 3.0 * u * t * t;
    let w3 = t * t * t;
    (
        w0 * p0.0 + w1 * p1.0 + w2 * p2.0 + w3 * p3.0,
        w0 * p0.1 + w1 * p1.1 + w2 * p2.1 + w3 * p3.1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator() -> MeshGenerator {
        MeshGenerator::new(MeshParams::default())
    }

    #[test]
    fn test_bezier_endpoints() {
        let (x0, y0) = cubic_bezier((0.0, 0.0), (0.1, 0.1), (0.2, 0.4), (0.0, 0.55), 0.0);
        assert_eq!((x0, y0), (0.0, 0.0));
        let (x1, y1) = cubic_bezier((0.0, 0.0), (0.1, 0.1), (0.2, 0.4), (0.0, 0.55), 1.0);
        assert!((x1).abs() < 1e-6);
        assert!((y1 - 0.55).abs() < 1e-6);
    }

    #[test]
    fn test_petal_spans_hinge_to_tip() {
        let mesh = generator().petal(0.28, 0.55);
        assert!(!mesh.vertices.is_empty());
        let min_y = mesh.vertices.iter().map(|v| v.position.y).fold(f32::MAX, f32::min);
        let max_y = mesh.vertices.iter().map(|v| v.position.y).fold(f32::MIN, f32::max);
        assert!(min_y.abs() < 1e-5);
        assert!((max_y - 0.55).abs() < 1e-5);
    }

    #[test]
    fn test_petal_is_symmetric_in_x() {
        let mesh = generator().petal(0.33, 0.7);
        let max_x = mesh.vertices.iter().map(|v| v.position.x).fold(f32::MIN, f32::max);
        let min_x = mesh.vertices.iter().map(|v| v.position.x).fold(f32::MAX, f32::min);
        assert!((max_x + min_x).abs() < 1e-5);
        assert!(max_x > 0.05);
    }

    #[test]
    fn test_petal_curls_back() {
        let mesh = generator().petal(0.28, 0.55);
        // Curl is strongest at the tip and zero at the hinge
        let tip = mesh.vertices.iter().cloned().reduce(|a, b| {
            if b.position.y > a.position.y { b } else { a }
        }).unwrap();
        assert!((tip.position.z + 0.55 * PETAL_CURL).abs() < 1e-4);
    }

    #[test]
    fn test_petal_indices_in_bounds() {
        let mesh = generator().petal(0.28, 0.55);
        let count = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < count));
        assert!(mesh.triangle_count() > 0);
    }

    #[test]
    fn test_stem_ring_counts() {
        let mesh = generator().stem(&StemConfig::default());
        assert_eq!(mesh.vertices.len(), 16); // two rings of eight
        assert_eq!(mesh.triangle_count(), 16);
        let max_y = mesh.vertices.iter().map(|v| v.position.y).fold(f32::MIN, f32::max);
        assert!((max_y - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_sphere_on_surface() {
        let mesh = generator().sphere(0.14);
        for v in &mesh.vertices {
            assert!((v.position.length() - 0.14).abs() < 1e-5);
        }
    }

    #[test]
    fn test_leaf_offset_past_stem() {
        let leaf = LeafConfig {
            height_fraction: 0.35,
            y_rot: 0.3,
            z_tilt: -0.5,
            target_scale: 1.6,
        };
        let mesh = generator().leaf(&leaf, 0.065);
        // The blade base sits just outside the stem radius
        let base = mesh.vertices.iter().cloned().reduce(|a, b| {
            if b.position.length() < a.position.length() { b } else { a }
        }).unwrap();
        assert!(base.position.x > 0.0);
    }

    #[test]
    fn test_generate_all_parts() {
        let config = FlowerConfig::default();
        let meshes = generator().generate(&config);
        assert!(meshes.stem.triangle_count() > 0);
        assert!(meshes.inner_petal.triangle_count() > 0);
        assert!(meshes.outer_petal.triangle_count() > 0);
        assert!(meshes.center.triangle_count() > 0);
        assert_eq!(meshes.leaves.len(), 2);
        assert!(meshes.ground.triangle_count() > 0);
    }
}
