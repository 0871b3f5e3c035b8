use crate::math::Vec3;

/// A vertex with position, normal, and UV
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: [f32; 2],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position,
            normal,
            uv: [0.0, 0.0],
        }
    }

    pub fn with_uv(mut self, u: f32, v: f32) -> Self {
        self.uv = [u, v];
        self
    }

    /// Convert to flat array for WebGL buffer
    /// Layout: position(3) + normal(3) + uv(2) = 8 floats
    pub fn to_array(&self) -> [f32; 8] {
        [
            self.position.x, self.position.y, self.position.z,
            self.normal.x, self.normal.y, self.normal.z,
            self.uv[0], self.uv[1],
        ]
    }
}

/// A mesh composed of vertices and triangle indices
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add vertices and return the starting index
    pub fn add_vertices(&mut self, verts: impl IntoIterator<Item = Vertex>) -> u32 {
        let start = self.vertices.len() as u32;
        self.vertices.extend(verts);
        start
    }

    /// Add a triangle (indices are relative to the mesh's vertex buffer)
    pub fn add_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.push(a);
        self.indices.push(b);
        self.indices.push(c);
    }

    /// Add a quad as two triangles (CCW winding)
    pub fn add_quad(&mut self, a: u32, b: u32, c: u32, d: u32) {
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    /// Flatten vertices for the GPU
    pub fn vertex_data(&self) -> Vec<f32> {
        let mut data = Vec::with_capacity(self.vertices.len() * 8);
        for v in &self.vertices {
            data.extend_from_slice(&v.to_array());
        }
        data
    }

    /// Index buffer contents
    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        let v = Vertex::new(Vec3::new(1.0, 2.0, 3.0), Vec3::UP).with_uv(0.5, 0.25);
        let arr = v.to_array();
        assert_eq!(arr.len(), 8);
        assert_eq!(arr[0], 1.0);
        assert_eq!(arr[4], 1.0); // normal.y
        assert_eq!(arr[6], 0.5);
    }

    #[test]
    fn test_add_vertices_returns_offset() {
        let mut mesh = Mesh::new();
        let first = mesh.add_vertices([Vertex::new(Vec3::ZERO, Vec3::UP)]);
        let second = mesh.add_vertices([Vertex::new(Vec3::ONE, Vec3::UP)]);
        assert_eq!(first, 0);
        assert_eq!(second, 1);
    }

    #[test]
    fn test_quad_makes_two_triangles() {
        let mut mesh = Mesh::new();
        mesh.add_vertices((0..4).map(|_| Vertex::new(Vec3::ZERO, Vec3::UP)));
        mesh.add_quad(0, 1, 2, 3);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_vertex_data_flattens() {
        let mut mesh = Mesh::new();
        mesh.add_vertices([Vertex::new(Vec3::ZERO, Vec3::UP), Vertex::new(Vec3::ONE, Vec3::UP)]);
        assert_eq!(mesh.vertex_data().len(), 16);
    }
}
