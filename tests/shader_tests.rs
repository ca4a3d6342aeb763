use std::fs;
use std::path::Path;

#[test]
fn test_shader_file_exists() {
    let shader_path = Path::new("src/render/shaders/canvas.wgsl");
    assert!(shader_path.exists(), "Shader file should exist at {:?}", shader_path);
}

#[test]
fn test_shader_valid_wgsl() {
    let shader_path = Path::new("src/render/shaders/canvas.wgsl");
    let shader_content = fs::read_to_string(shader_path).expect("Failed to read shader file");

    // Basic validation - check for required shader entry points
    assert!(shader_content.contains("@vertex"), "Shader should contain vertex entry point");
    assert!(shader_content.contains("@fragment"), "Shader should contain fragment entry point");
    assert!(shader_content.contains("vs_main"), "Shader should have vs_main function");
    assert!(shader_content.contains("fs_main"), "Shader should have fs_main function");

    // Check for required structures
    assert!(shader_content.contains("Viewport"), "Shader should define Viewport struct");
    assert!(shader_content.contains("VertexInput"), "Shader should define VertexInput struct");
    assert!(shader_content.contains("VertexOutput"), "Shader should define VertexOutput struct");

    // Check for the viewport uniform binding
    assert!(shader_content.contains("@group(0) @binding(0)"), "Shader should bind the viewport uniform");

    // Check vertex attributes
    assert!(shader_content.contains("@location(0) position"), "Shader should have position attribute");
    assert!(shader_content.contains("@location(1) color"), "Shader should have color attribute");
}

#[test]
fn test_shader_maps_css_pixels_to_clip_space() {
    let shader_path = Path::new("src/render/shaders/canvas.wgsl");
    let shader_content = fs::read_to_string(shader_path).expect("Failed to read shader file");

    // The vertex shader must normalize by the logical viewport size and flip
    // the y axis (canvas is y-down, clip space is y-up).
    assert!(shader_content.contains("viewport.size"), "Shader should divide by the viewport size");
    assert!(
        shader_content.contains("1.0 - in.position.y / viewport.size.y * 2.0"),
        "Vertex shader should flip the y axis",
    );
}

#[test]
fn test_shader_color_passthrough() {
    let shader_path = Path::new("src/render/shaders/canvas.wgsl");
    let shader_content = fs::read_to_string(shader_path).expect("Failed to read shader file");

    // Colors carry alpha through unchanged for the blended pipeline.
    assert!(shader_content.contains("out.color = in.color"), "Vertex shader should pass through color");
    assert!(shader_content.contains("return in.color"), "Fragment shader should output the vertex color");
}
