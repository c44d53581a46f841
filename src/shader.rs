//! Shader sources and their uniform layouts.
//!
//! Two small WGSL programs cover everything the screensaver draws:
//! a fullscreen scene shader that paints the backdrop and the antialiased
//! ball, and a blit shader that places a texture in a pixel-space rectangle
//! (the clock label, and the rotated desktop overlay).

use bytemuck::{Pod, Zeroable};

/// Uniforms for [`SCENE_SOURCE`]. Layout matches the WGSL `SceneUniforms`
/// struct, padded to a 16-byte multiple.
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct SceneUniforms {
    /// Surface size in pixels.
    pub resolution: [f32; 2],
    /// Ball center in pixels, y down.
    pub ball_center: [f32; 2],
    /// Ball radius in pixels.
    pub ball_radius: f32,
    pub _padding: [f32; 3],
}

/// Uniforms for [`BLIT_SOURCE`].
#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
pub struct BlitUniforms {
    /// Destination rectangle in pixels: x, y, width, height.
    pub rect: [f32; 4],
    /// Surface size in pixels.
    pub resolution: [f32; 2],
    /// Per-axis UV flip: 0.0 = as-is, 1.0 = mirrored. Both set to 1.0
    /// rotates the image 180 degrees.
    pub flip: [f32; 2],
}

/// Fullscreen animation frame: white backdrop, filled green circle with a
/// two-pixel antialiasing band at the rim.
pub const SCENE_SOURCE: &str = r#"
struct SceneUniforms {
    resolution: vec2<f32>,
    ball_center: vec2<f32>,
    ball_radius: f32,
    // Explicit padding keeps the uniform block size at a 16-byte multiple.
    _pad0: f32,
    _pad1: vec2<f32>,
}

@group(0) @binding(0)
var<uniform> scene: SceneUniforms;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) pixel: vec2<f32>,
}

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VertexOutput {
    // Single triangle covering the whole surface.
    var corners = array<vec2<f32>, 3>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>(3.0, -1.0),
        vec2<f32>(-1.0, 3.0),
    );
    let ndc = corners[vertex_index];

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.pixel = vec2<f32>(ndc.x * 0.5 + 0.5, 0.5 - ndc.y * 0.5) * scene.resolution;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let dist = distance(in.pixel, scene.ball_center);
    let rim = smoothstep(scene.ball_radius - 1.0, scene.ball_radius + 1.0, dist);
    let ball = vec3<f32>(0.0, 0.5, 0.0);
    let backdrop = vec3<f32>(1.0, 1.0, 1.0);
    return vec4<f32>(mix(ball, backdrop, rim), 1.0);
}
"#;

/// Textured quad placed by a pixel-space rect, with optional per-axis UV
/// mirroring. Alpha-blended over whatever was drawn before it.
pub const BLIT_SOURCE: &str = r#"
struct BlitUniforms {
    rect: vec4<f32>,
    resolution: vec2<f32>,
    flip: vec2<f32>,
}

@group(0) @binding(0)
var<uniform> blit: BlitUniforms;
@group(0) @binding(1)
var blit_texture: texture_2d<f32>;
@group(0) @binding(2)
var blit_sampler: sampler;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
}

@vertex
fn vs_main(@builtin(vertex_index) vertex_index: u32) -> VertexOutput {
    var corners = array<vec2<f32>, 6>(
        vec2<f32>(0.0, 0.0),
        vec2<f32>(1.0, 0.0),
        vec2<f32>(0.0, 1.0),
        vec2<f32>(0.0, 1.0),
        vec2<f32>(1.0, 0.0),
        vec2<f32>(1.0, 1.0),
    );
    let corner = corners[vertex_index];

    let pixel = blit.rect.xy + corner * blit.rect.zw;
    let ndc = vec2<f32>(
        pixel.x / blit.resolution.x * 2.0 - 1.0,
        1.0 - pixel.y / blit.resolution.y * 2.0,
    );

    var out: VertexOutput;
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.uv = mix(corner, vec2<f32>(1.0, 1.0) - corner, blit.flip);
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return textureSample(blit_texture, blit_sampler, in.uv);
}
"#;
