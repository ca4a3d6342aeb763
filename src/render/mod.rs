//! wgpu presentation of scene display lists.
//!
//! One alpha-blended triangle pipeline draws everything. Geometry arrives in
//! CSS pixel coordinates; the vertex shader maps them to clip space through a
//! viewport uniform, so tessellation never needs to know the backing-store
//! scale. Each frame is cleared to the scene background and replayed in full.

pub mod gpu;
pub mod tessellate;
pub mod text;

use crate::scene::Scene;
use crate::surface::CanvasSurface;
use gpu::GpuContext;
use tessellate::{tessellate, Vertex};
use wgpu::util::DeviceExt;

/// Initial vertex buffer capacity; grows geometrically when a scene outruns it.
const INITIAL_VERTEX_CAPACITY: usize = 4096;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ViewportUniform {
    /// Logical (CSS pixel) size of the drawing surface.
    size: [f32; 2],
    _pad: [f32; 2],
}

pub struct Renderer {
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    render_pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    vertex_count: u32,
    viewport_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    clear_color: wgpu::Color,
}

impl Renderer {
    pub fn new(
        window: &winit::window::Window,
        gpu: &GpuContext,
        canvas: &CanvasSurface,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let surface = unsafe {
            let surface = gpu
                .instance
                .create_surface_unsafe(wgpu::SurfaceTargetUnsafe::from_window(window)?)?;
            std::mem::transmute::<wgpu::Surface<'_>, wgpu::Surface<'static>>(surface)
        };

        let surface_caps = surface.get_capabilities(&gpu.adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let size = window.inner_size();
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&gpu.device, &config);

        let viewport_buffer = gpu
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Viewport Buffer"),
                contents: bytemuck::cast_slice(&[ViewportUniform {
                    size: [canvas.width, canvas.height],
                    _pad: [0.0; 2],
                }]),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });

        let vertex_capacity = INITIAL_VERTEX_CAPACITY;
        let vertex_buffer = Self::create_vertex_buffer(gpu, vertex_capacity);

        let bind_group_layout =
            gpu.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("Canvas Bind Group Layout"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Canvas Bind Group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_buffer.as_entire_binding(),
            }],
        });

        let shader = gpu.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Canvas Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/canvas.wgsl").into()),
        });

        let render_pipeline =
            Self::create_render_pipeline(gpu, &shader, &bind_group_layout, config.format);

        Ok(Self {
            surface,
            config,
            render_pipeline,
            vertex_buffer,
            vertex_capacity,
            vertex_count: 0,
            viewport_buffer,
            bind_group,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Tessellate and upload the next frame's display list.
    pub fn upload(&mut self, gpu: &GpuContext, scene: &Scene) {
        if let Some([r, g, b, a]) = scene.background() {
            self.clear_color = wgpu::Color {
                r: r as f64,
                g: g as f64,
                b: b as f64,
                a: a as f64,
            };
        }

        let vertices = tessellate(scene);
        if vertices.len() > self.vertex_capacity {
            let mut capacity = self.vertex_capacity;
            while capacity < vertices.len() {
                capacity *= 2;
            }
            self.vertex_buffer = Self::create_vertex_buffer(gpu, capacity);
            self.vertex_capacity = capacity;
        }
        if !vertices.is_empty() {
            gpu.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        }
        self.vertex_count = vertices.len() as u32;
    }

    pub fn render(&self, gpu: &GpuContext) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Canvas Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if self.vertex_count > 0 {
                render_pass.set_pipeline(&self.render_pipeline);
                render_pass.set_bind_group(0, &self.bind_group, &[]);
                render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                render_pass.draw(0..self.vertex_count, 0..1);
            }
        }

        gpu.queue.submit(Some(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Reconfigure for a new window size. `canvas` supplies the logical size
    /// the viewport uniform maps geometry against.
    pub fn resize(
        &mut self,
        gpu: &GpuContext,
        new_size: winit::dpi::PhysicalSize<u32>,
        canvas: &CanvasSurface,
    ) {
        if new_size.width > 0 && new_size.height > 0 {
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&gpu.device, &self.config);

            gpu.queue.write_buffer(
                &self.viewport_buffer,
                0,
                bytemuck::cast_slice(&[ViewportUniform {
                    size: [canvas.width, canvas.height],
                    _pad: [0.0; 2],
                }]),
            );
        }
    }

    fn create_vertex_buffer(gpu: &GpuContext, capacity: usize) -> wgpu::Buffer {
        gpu.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Canvas Vertex Buffer"),
            size: (capacity * std::mem::size_of::<Vertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }

    fn create_render_pipeline(
        gpu: &GpuContext,
        shader: &wgpu::ShaderModule,
        bind_group_layout: &wgpu::BindGroupLayout,
        surface_format: wgpu::TextureFormat,
    ) -> wgpu::RenderPipeline {
        let pipeline_layout = gpu
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Canvas Pipeline Layout"),
                bind_group_layouts: &[bind_group_layout],
                push_constant_ranges: &[],
            });

        gpu.device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("Canvas Pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: "vs_main",
                    buffers: &[Self::vertex_buffer_layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: "fs_main",
                    targets: &[Some(wgpu::ColorTargetState {
                        format: surface_format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    unclipped_depth: false,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
            })
    }

    fn vertex_buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: 2 * 4,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}
