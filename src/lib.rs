use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

pub mod animation;
pub mod config;
pub mod math;
pub mod mesh;
pub mod model;
pub mod render;

use animation::BloomController;
use config::FlowerConfig;
use math::Vec3;
use mesh::{MeshGenerator, MeshParams};
use model::Flower;
use render::RenderPipeline;

/// Largest per-frame delta fed to the animation; frame hitches are
/// clamped so a stalled tab cannot jump the bloom forward
const MAX_FRAME_DELTA: f32 = 0.05;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Main engine state exposed to JavaScript
#[wasm_bindgen]
pub struct FlowerBloom {
    pipeline: RenderPipeline,
    config: FlowerConfig,
    flower: Flower,
    bloom: BloomController,
    // Camera orbit controls
    camera_distance: f32,
    camera_angle_x: f32,
    camera_angle_y: f32,
    camera_target: Vec3,
}

#[wasm_bindgen]
impl FlowerBloom {
    /// Create a new engine instance with the default flower
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<FlowerBloom, JsValue> {
        let width = canvas.width() as i32;
        let height = canvas.height() as i32;

        let gl = canvas
            .get_context("webgl2")?
            .ok_or("Failed to get WebGL2 context")?
            .dyn_into::<WebGl2RenderingContext>()?;

        let mut pipeline = RenderPipeline::new(gl, width, height)
            .map_err(|e| JsValue::from_str(&e))?;

        let config = FlowerConfig::default();
        let flower = Flower::build(&config).map_err(|e| JsValue::from_str(&e))?;
        let bloom = BloomController::new(&config);

        let meshes = MeshGenerator::new(MeshParams::default()).generate(&config);
        pipeline
            .upload_flower(&meshes, &config)
            .map_err(|e| JsValue::from_str(&e))?;

        Ok(Self {
            pipeline,
            config,
            flower,
            bloom,
            camera_distance: 4.4,
            camera_angle_x: 0.23,
            camera_angle_y: 0.62,
            camera_target: Vec3::new(0.0, 1.2, 0.0),
        })
    }

    /// Replace the flower from a YAML config string and restart the
    /// bloom from the bud
    #[wasm_bindgen]
    pub fn load_config(&mut self, yaml: &str) -> Result<(), JsValue> {
        let config = FlowerConfig::from_yaml(yaml).map_err(|e| JsValue::from_str(&e))?;
        let flower = Flower::build(&config).map_err(|e| JsValue::from_str(&e))?;

        let meshes = MeshGenerator::new(MeshParams::default()).generate(&config);
        self.pipeline
            .upload_flower(&meshes, &config)
            .map_err(|e| JsValue::from_str(&e))?;

        self.bloom = BloomController::new(&config);
        self.flower = flower;
        self.config = config;
        Ok(())
    }

    /// Advance the animation and render a frame
    #[wasm_bindgen]
    pub fn render(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_FRAME_DELTA);
        self.bloom.update(dt, &mut self.flower);

        // Update camera position from orbit angles
        let cos_x = self.camera_angle_x.cos();
        let sin_x = self.camera_angle_x.sin();
        let cos_y = self.camera_angle_y.cos();
        let sin_y = self.camera_angle_y.sin();

        self.pipeline.camera_position = Vec3::new(
            self.camera_target.x + self.camera_distance * cos_x * sin_y,
            self.camera_target.y + self.camera_distance * sin_x,
            self.camera_target.z + self.camera_distance * cos_x * cos_y,
        );
        self.pipeline.camera_target = self.camera_target;

        self.pipeline.render(&self.flower);
    }

    /// Restart the bloom from the bud, synchronously
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.bloom.reset(&mut self.flower);
    }

    /// Keyboard binding: "r" replays the bloom
    #[wasm_bindgen]
    pub fn on_key(&mut self, key: &str) {
        if key == "r" || key == "R" {
            self.reset();
        }
    }

    /// Resize the canvas viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: i32, height: i32) {
        self.pipeline.resize(width, height);
    }

    /// Orbit camera
    #[wasm_bindgen]
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        self.camera_angle_y += delta_x * 0.01;
        self.camera_angle_x = (self.camera_angle_x + delta_y * 0.01)
            .clamp(-0.2, std::f32::consts::FRAC_PI_2 - 0.1);
    }

    /// Zoom camera
    #[wasm_bindgen]
    pub fn zoom(&mut self, delta: f32) {
        self.camera_distance = (self.camera_distance + delta * 0.5).clamp(1.5, 10.0);
    }

    /// Current bloom progress (0.0 to 1.0)
    #[wasm_bindgen]
    pub fn progress(&self) -> f32 {
        self.bloom.progress()
    }

    /// Whether the bloom has completed and the flower is idling
    #[wasm_bindgen]
    pub fn is_bloomed(&self) -> bool {
        self.bloom.is_bloomed()
    }

    /// Current configuration as a YAML string
    #[wasm_bindgen]
    pub fn config_yaml(&self) -> String {
        serde_yaml::to_string(&self.config).unwrap_or_default()
    }
}
