//! Shader validation.
//!
//! Parses and validates the embedded WGSL with naga so a typo fails in CI
//! instead of at surface creation on someone's desktop. Also pins the
//! uniform struct sizes the shaders are written against.

use naga::front::wgsl;
use naga::valid::{Capabilities, ValidationFlags, Validator};

use ballsaver::shader::{BlitUniforms, SceneUniforms, BLIT_SOURCE, SCENE_SOURCE};

fn validate(source: &str, name: &str) {
    let module = wgsl::parse_str(source)
        .unwrap_or_else(|e| panic!("{} failed to parse: {}", name, e.emit_to_string(source)));

    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::all());
    validator
        .validate(&module)
        .unwrap_or_else(|e| panic!("{} failed validation: {:?}", name, e));
}

#[test]
fn test_scene_shader_is_valid() {
    validate(SCENE_SOURCE, "Scene shader");
}

#[test]
fn test_blit_shader_is_valid() {
    validate(BLIT_SOURCE, "Blit shader");
}

#[test]
fn test_uniform_sizes_are_16_byte_multiples() {
    assert_eq!(std::mem::size_of::<SceneUniforms>() % 16, 0);
    assert_eq!(std::mem::size_of::<BlitUniforms>() % 16, 0);
    assert_eq!(std::mem::size_of::<SceneUniforms>(), 32);
    assert_eq!(std::mem::size_of::<BlitUniforms>(), 32);
}
