/// Vertex shader shared by every flower part
pub const PART_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;
layout(location = 2) in vec2 a_uv;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;

out vec3 v_normal;
out vec3 v_world_position;
out vec2 v_uv;

void main() {
    vec4 world_pos = u_model * vec4(a_position, 1.0);

    v_world_position = world_pos.xyz;
    v_normal = mat3(u_model) * a_normal;
    v_uv = a_uv;

    gl_Position = u_projection * u_view * world_pos;
}
"#;

/// Fragment shader: key sun, warm fill, hemisphere ambient, sky fog
pub const PART_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

in vec3 v_normal;
in vec3 v_world_position;
in vec2 v_uv;

uniform vec3 u_camera_pos;
uniform vec3 u_color;

out vec4 fragColor;

const vec3 SUN_DIR = normalize(vec3(5.0, 8.0, 3.0));
const vec3 FILL_DIR = normalize(vec3(-4.0, 3.0, -2.0));
const vec3 SKY_COLOR = vec3(0.788, 0.894, 0.965);
const vec3 GROUND_BOUNCE = vec3(0.29, 0.486, 0.247);

void main() {
    vec3 normal = normalize(v_normal);
    vec3 view_dir = normalize(u_camera_pos - v_world_position);

    // Petals and leaves are thin shells drawn double sided: flip the
    // normal toward the viewer so the back face is lit too
    if (dot(normal, view_dir) < 0.0) {
        normal = -normal;
    }

    // Key sun plus a soft warm fill
    float sun = max(dot(normal, SUN_DIR), 0.0) * 1.1;
    float fill = max(dot(normal, FILL_DIR), 0.0) * 0.3;

    // Hemisphere ambient: sky from above, green bounce from below
    float hemi = normal.y * 0.5 + 0.5;
    vec3 ambient = mix(GROUND_BOUNCE, SKY_COLOR, hemi) * 0.35;

    vec3 lit = u_color * sun
        + u_color * vec3(1.0, 0.94, 0.87) * fill
        + u_color * ambient
        + u_color * 0.4;

    // Soft specular sheen
    vec3 half_dir = normalize(SUN_DIR + view_dir);
    float spec = pow(max(dot(normal, half_dir), 0.0), 24.0) * 0.15;
    lit += vec3(spec);

    // Distance fog toward the sky color
    float dist = length(u_camera_pos - v_world_position);
    float fog = smoothstep(12.0, 28.0, dist);
    vec3 color = mix(lit, SKY_COLOR, fog);

    fragColor = vec4(color, 1.0);
}
"#;
