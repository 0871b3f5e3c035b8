use web_sys::{WebGl2RenderingContext, WebGlBuffer, WebGlProgram, WebGlUniformLocation, WebGlVertexArrayObject};
use crate::config::FlowerConfig;
use crate::math::{Color, Mat4, Vec3};
use crate::mesh::{FlowerMeshes, Mesh};
use crate::model::Flower;
use super::webgl::WebGLContext;
use super::shaders::{PART_FRAGMENT_SHADER, PART_VERTEX_SHADER};

/// Sky color doubling as clear color and fog target (#c9e4f6)
const SKY: Color = Color::new(0.788, 0.894, 0.965);

/// Cached uniform locations for the part shader
struct PartUniforms {
    model: Option<WebGlUniformLocation>,
    view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    camera_pos: Option<WebGlUniformLocation>,
    color: Option<WebGlUniformLocation>,
}

/// One uploaded part geometry
struct GpuMesh {
    vao: WebGlVertexArrayObject,
    _vertex_buffer: WebGlBuffer,
    _index_buffer: WebGlBuffer,
    index_count: i32,
}

/// Forward renderer drawing the flower part by part, with the part's
/// world matrix and material color set per draw
pub struct RenderPipeline {
    ctx: WebGLContext,
    program: WebGlProgram,
    uniforms: PartUniforms,

    stem: Option<GpuMesh>,
    inner_petal: Option<GpuMesh>,
    outer_petal: Option<GpuMesh>,
    center: Option<GpuMesh>,
    leaves: Vec<GpuMesh>,
    ground: Option<GpuMesh>,

    // Fixed part colors; petal colors come from the flower's live
    // materials each frame
    stem_color: Color,
    center_color: Color,
    leaf_color: Color,
    ground_color: Color,

    width: i32,
    height: i32,

    pub camera_position: Vec3,
    pub camera_target: Vec3,
    pub fov: f32,
}

impl RenderPipeline {
    pub fn new(gl: WebGl2RenderingContext, width: i32, height: i32) -> Result<Self, String> {
        let ctx = WebGLContext::new(gl);
        let program = ctx.create_program(PART_VERTEX_SHADER, PART_FRAGMENT_SHADER)?;

        let uniforms = PartUniforms {
            model: ctx.get_uniform_location(&program, "u_model"),
            view: ctx.get_uniform_location(&program, "u_view"),
            projection: ctx.get_uniform_location(&program, "u_projection"),
            camera_pos: ctx.get_uniform_location(&program, "u_camera_pos"),
            color: ctx.get_uniform_location(&program, "u_color"),
        };

        Ok(Self {
            ctx,
            program,
            uniforms,
            stem: None,
            inner_petal: None,
            outer_petal: None,
            center: None,
            leaves: Vec::new(),
            ground: None,
            stem_color: Color::BLACK,
            center_color: Color::BLACK,
            leaf_color: Color::BLACK,
            ground_color: Color::from_hex(0x4a7c3f),
            width,
            height,
            camera_position: Vec3::new(2.5, 2.2, 3.5),
            camera_target: Vec3::new(0.0, 1.2, 0.0),
            fov: std::f32::consts::FRAC_PI_4,
        })
    }

    /// Upload all part geometries and capture the fixed part colors
    pub fn upload_flower(&mut self, meshes: &FlowerMeshes, config: &FlowerConfig) -> Result<(), String> {
        self.stem = Some(self.upload_mesh(&meshes.stem)?);
        self.inner_petal = Some(self.upload_mesh(&meshes.inner_petal)?);
        self.outer_petal = Some(self.upload_mesh(&meshes.outer_petal)?);
        self.center = Some(self.upload_mesh(&meshes.center)?);
        self.ground = Some(self.upload_mesh(&meshes.ground)?);
        self.leaves = meshes
            .leaves
            .iter()
            .map(|m| self.upload_mesh(m))
            .collect::<Result<_, _>>()?;

        self.stem_color = config.stem.color;
        self.center_color = config.center.color;
        self.leaf_color = config.leaf_color;
        Ok(())
    }

    fn upload_mesh(&self, mesh: &Mesh) -> Result<GpuMesh, String> {
        let gl = &self.ctx.gl;

        let vao = self.ctx.create_vao()?;
        gl.bind_vertex_array(Some(&vao));

        let vertex_data = mesh.vertex_data();
        let vertex_buffer = self.ctx.create_buffer_f32(&vertex_data, WebGl2RenderingContext::STATIC_DRAW)?;

        let index_data = mesh.index_data();
        let index_buffer = self.ctx.create_index_buffer(index_data, WebGl2RenderingContext::STATIC_DRAW)?;

        // Layout: position(3) + normal(3) + uv(2) = 8 floats
        let stride = 8 * 4;

        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&vertex_buffer));
        gl.bind_buffer(WebGl2RenderingContext::ELEMENT_ARRAY_BUFFER, Some(&index_buffer));

        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 3, WebGl2RenderingContext::FLOAT, false, stride, 0);

        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_with_i32(1, 3, WebGl2RenderingContext::FLOAT, false, stride, 12);

        gl.enable_vertex_attrib_array(2);
        gl.vertex_attrib_pointer_with_i32(2, 2, WebGl2RenderingContext::FLOAT, false, stride, 24);

        gl.bind_vertex_array(None);

        Ok(GpuMesh {
            vao,
            _vertex_buffer: vertex_buffer,
            _index_buffer: index_buffer,
            index_count: index_data.len() as i32,
        })
    }

    /// Render a frame from the flower's current pose
    pub fn render(&self, flower: &Flower) {
        let gl = &self.ctx.gl;

        let aspect = self.width as f32 / self.height as f32;
        let projection = Mat4::perspective(self.fov, aspect, 0.1, 100.0);
        let view = Mat4::look_at(self.camera_position, self.camera_target, Vec3::UP);

        self.ctx.viewport(0, 0, self.width, self.height);
        self.ctx.clear(SKY.r, SKY.g, SKY.b, 1.0);
        self.ctx.enable_depth_test();

        gl.use_program(Some(&self.program));
        self.ctx.uniform_matrix4fv(self.uniforms.view.as_ref(), view.as_slice());
        self.ctx.uniform_matrix4fv(self.uniforms.projection.as_ref(), projection.as_slice());
        self.ctx.uniform_3f(
            self.uniforms.camera_pos.as_ref(),
            self.camera_position.x,
            self.camera_position.y,
            self.camera_position.z,
        );

        // Whole-plant tilt, then the part hierarchy under it
        let root = flower.root.matrix();
        let head = root.mul(&Mat4::translation(0.0, flower.head.position.y, 0.0));

        if let Some(ground) = &self.ground {
            self.draw(ground, &Mat4::identity(), self.ground_color);
        }
        if let Some(stem) = &self.stem {
            self.draw(stem, &root.mul(&flower.stem.matrix()), self.stem_color);
        }
        if let Some(center) = &self.center {
            self.draw(center, &head.mul(&flower.center.matrix()), self.center_color);
        }
        if let Some(petal_mesh) = &self.inner_petal {
            for petal in &flower.inner_petals {
                let model = head
                    .mul(&Mat4::rotation_y(petal.azimuth))
                    .mul(&Mat4::rotation_x(petal.opener));
                self.draw(petal_mesh, &model, flower.inner_material.color);
            }
        }
        if let Some(petal_mesh) = &self.outer_petal {
            for petal in &flower.outer_petals {
                let model = head
                    .mul(&Mat4::rotation_y(petal.azimuth))
                    .mul(&Mat4::rotation_x(petal.opener));
                self.draw(petal_mesh, &model, flower.outer_material.color);
            }
        }
        for (gpu, leaf) in self.leaves.iter().zip(&flower.leaves) {
            self.draw(gpu, &root.mul(&leaf.transform.matrix()), self.leaf_color);
        }
    }

    fn draw(&self, gpu: &GpuMesh, model: &Mat4, color: Color) {
        let gl = &self.ctx.gl;
        self.ctx.uniform_matrix4fv(self.uniforms.model.as_ref(), model.as_slice());
        self.ctx.uniform_3f(self.uniforms.color.as_ref(), color.r, color.g, color.b);
        gl.bind_vertex_array(Some(&gpu.vao));
        gl.draw_elements_with_i32(
            WebGl2RenderingContext::TRIANGLES,
            gpu.index_count,
            WebGl2RenderingContext::UNSIGNED_INT,
            0,
        );
    }

    /// Resize the viewport
    pub fn resize(&mut self, width: i32, height: i32) {
        self.width = width;
        self.height = height;
    }
}
