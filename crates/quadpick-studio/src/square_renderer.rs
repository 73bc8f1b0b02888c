use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

use quadpick_engine::render::{RenderCtx, RenderTarget};
use quadpick_pick::{CameraState, Square};

/// Draws the square as two triangles with per-vertex colors.
///
/// GPU resources are created on first use and the pipeline is rebuilt if the
/// surface format changes. Matrices are re-uploaded every frame from the
/// camera snapshot the hit tester also reads.
#[derive(Default)]
pub struct SquareRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    scene_ubo: Option<wgpu::Buffer>,

    vertex_buffer: Option<wgpu::Buffer>,
    vertex_count: u32,
}

impl SquareRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `square` under `camera` into `target`.
    ///
    /// `tint` multiplies the vertex colors (rgb) and is used to dim the scene
    /// behind the menu.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        camera: &CameraState,
        square: &Square,
        tint: [f32; 4],
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_vertex_buffer(ctx, square);
        self.ensure_bindings(ctx);
        self.write_scene_uniform(ctx, camera, tint);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vertex_buffer) = self.vertex_buffer.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("quadpick square pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vertex_buffer.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        log::debug!("building square pipeline for {:?}", ctx.surface_format);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("quadpick square shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/square.wgsl").into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("quadpick square bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: wgpu::BufferSize::new(
                                std::mem::size_of::<SceneUniform>() as u64,
                            ),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("quadpick square pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("quadpick square pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[GpuVertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                // BL,TL,TR winds clockwise; draw both faces.
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.scene_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.scene_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let scene_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("quadpick square scene ubo"),
            size: std::mem::size_of::<SceneUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("quadpick square bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scene_ubo.as_entire_binding(),
            }],
        });

        self.scene_ubo = Some(scene_ubo);
        self.bind_group = Some(bind_group);
    }

    fn ensure_vertex_buffer(&mut self, ctx: &RenderCtx<'_>, square: &Square) {
        if self.vertex_buffer.is_some() {
            return;
        }

        let vertices = gpu_vertices(square);
        self.vertex_buffer = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quadpick square vbo"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.vertex_count = vertices.len() as u32;
    }

    fn write_scene_uniform(&self, ctx: &RenderCtx<'_>, camera: &CameraState, tint: [f32; 4]) {
        let Some(ubo) = self.scene_ubo.as_ref() else { return };
        let u = SceneUniform::new(camera, tint);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&u));
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct SceneUniform {
    projection: [[f32; 4]; 4],
    view: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    tint: [f32; 4],
}

impl SceneUniform {
    fn new(camera: &CameraState, tint: [f32; 4]) -> Self {
        Self {
            projection: camera.projection().to_cols_array_2d(),
            view: camera.view().to_cols_array_2d(),
            model: camera.model().to_cols_array_2d(),
            tint,
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct GpuVertex {
    position: [f32; 3],
    color: [f32; 3],
}

impl GpuVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // color
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<GpuVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

fn gpu_vertices(square: &Square) -> [GpuVertex; 6] {
    square.triangle_vertices().map(|v| GpuVertex {
        position: v.position.to_array(),
        color: v.color.to_array(),
    })
}
