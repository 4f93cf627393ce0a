use wgpu::util::DeviceExt;

use crate::render::{RenderCtx, RenderError, RenderTarget, ShaderStage};

use super::common::{scale_ubo_min_binding_size, ScaleUniform, ShapeMesh, ShapeVertex, Topology};
use super::DrawOutcome;

/// Compiled vertex + fragment stages and the pipelines built from them.
///
/// One pipeline per primitive topology; both share the scale uniform binding.
pub struct ShapeProgram {
    line_pipeline: wgpu::RenderPipeline,
    triangle_pipeline: wgpu::RenderPipeline,

    bind_group: wgpu::BindGroup,
    scale_ubo: wgpu::Buffer,
}

impl ShapeProgram {
    /// Compiles both stages and links the pipelines for `format`.
    ///
    /// A stage with compiler errors aborts creation with [`RenderError::ShaderCompile`];
    /// a rejected pipeline with [`RenderError::PipelineCreation`]. Both are caught
    /// in error scopes, so neither reaches the device's uncaptured-error handler.
    pub fn new(device: &wgpu::Device, format: wgpu::TextureFormat) -> Result<Self, RenderError> {
        let vs = compile(device, ShaderStage::Vertex, include_str!("shaders/shape_vs.wgsl"))?;
        let fs = compile(device, ShaderStage::Fragment, include_str!("shaders/shape_fs.wgsl"))?;

        let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("vectra shape bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: Some(scale_ubo_min_binding_size()),
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("vectra shape pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let line_pipeline = create_pipeline(
            device,
            &pipeline_layout,
            &vs,
            &fs,
            format,
            wgpu::PrimitiveTopology::LineList,
        );
        let triangle_pipeline = create_pipeline(
            device,
            &pipeline_layout,
            &vs,
            &fs,
            format,
            wgpu::PrimitiveTopology::TriangleList,
        );

        let scale_ubo = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("vectra shape scale ubo"),
            size: std::mem::size_of::<ScaleUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("vectra shape bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: scale_ubo.as_entire_binding(),
            }],
        });

        if let Some(err) = pollster::block_on(scope.pop()) {
            return Err(RenderError::PipelineCreation { log: err.to_string() });
        }

        log::debug!("shape program linked for {format:?}");

        Ok(Self {
            line_pipeline,
            triangle_pipeline,
            bind_group,
            scale_ubo,
        })
    }

    pub fn write_scale(&self, queue: &wgpu::Queue, scale: f32) {
        queue.write_buffer(&self.scale_ubo, 0, bytemuck::bytes_of(&ScaleUniform::new(scale)));
    }

    /// Issues one draw call for `mesh`.
    ///
    /// Vertex (and index) buffers are created for this call only and released
    /// when it returns; wgpu keeps them alive until the frame's commands retire.
    pub fn draw(
        &self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        mesh: &ShapeMesh,
    ) -> Result<DrawOutcome, RenderError> {
        if mesh.is_empty() || !ctx.viewport.is_valid() {
            return Ok(DrawOutcome::Skipped);
        }

        let limit = ctx.device.limits().max_buffer_size;
        let vertex_bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
        let index_bytes: &[u8] = bytemuck::cast_slice(&mesh.indices);
        for size in [vertex_bytes.len() as u64, index_bytes.len() as u64] {
            if size > limit {
                return Err(RenderError::BufferTooLarge { size, limit });
            }
        }

        let vbo = create_buffer(ctx.device, "vectra shape vbo", vertex_bytes, wgpu::BufferUsages::VERTEX)?;
        let ibo = if mesh.indices.is_empty() {
            None
        } else {
            Some(create_buffer(ctx.device, "vectra shape ibo", index_bytes, wgpu::BufferUsages::INDEX)?)
        };

        let pipeline = match mesh.topology {
            Topology::Lines => &self.line_pipeline,
            Topology::Triangles | Topology::TriangleFan => &self.triangle_pipeline,
        };

        {
            let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("vectra shape pass"),
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

            rpass.set_viewport(0.0, 0.0, ctx.viewport.width, ctx.viewport.height, 0.0, 1.0);
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, vbo.slice(..));

            match &ibo {
                Some(ibo) => {
                    rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
                    rpass.draw_indexed(0..mesh.draw_count(), 0, 0..1);
                }
                None => rpass.draw(0..mesh.draw_count(), 0..1),
            }
        }

        drop(ibo);
        drop(vbo);
        Ok(DrawOutcome::Drawn)
    }
}

/// Uploads `contents` into a fresh buffer, reporting allocation failures
/// instead of handing them to the uncaptured-error handler.
fn create_buffer(
    device: &wgpu::Device,
    label: &'static str,
    contents: &[u8],
    usage: wgpu::BufferUsages,
) -> Result<wgpu::Buffer, RenderError> {
    let oom = device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
    let validation = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(label),
        contents,
        usage,
    });
    let invalid = pollster::block_on(validation.pop());
    let out_of_memory = pollster::block_on(oom.pop());

    match invalid.or(out_of_memory) {
        Some(err) => Err(RenderError::BufferCreation { label, log: err.to_string() }),
        None => Ok(buffer),
    }
}

/// Creates a module for one stage and checks the compiler's diagnostics.
fn compile(
    device: &wgpu::Device,
    stage: ShaderStage,
    source: &str,
) -> Result<wgpu::ShaderModule, RenderError> {
    let scope = device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(match stage {
            ShaderStage::Vertex => "vectra shape vs",
            ShaderStage::Fragment => "vectra shape fs",
        }),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let scope_error = pollster::block_on(scope.pop());

    let info = pollster::block_on(module.get_compilation_info());
    check_compilation(stage, &info.messages, scope_error).map(|()| module)
}

/// Folds compiler messages and the scope's captured error into one result.
///
/// Warnings are logged. The scope error repeats the compiler's first error, so it
/// is only used when the compiler itself reported none.
fn check_compilation(
    stage: ShaderStage,
    messages: &[wgpu::CompilationMessage],
    scope_error: Option<wgpu::Error>,
) -> Result<(), RenderError> {
    let mut errors = Vec::new();
    for msg in messages {
        match msg.message_type {
            wgpu::CompilationMessageType::Error => errors.push(msg.message.clone()),
            wgpu::CompilationMessageType::Warning => {
                log::warn!("{stage} shader: {}", msg.message);
            }
            _ => {
                log::debug!("{stage} shader: {}", msg.message);
            }
        }
    }

    if errors.is_empty() {
        if let Some(err) = scope_error {
            errors.push(err.to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(RenderError::ShaderCompile { stage, log: errors.join("\n") })
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    vs: &wgpu::ShaderModule,
    fs: &wgpu::ShaderModule,
    format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(match topology {
            wgpu::PrimitiveTopology::LineList => "vectra line pipeline",
            _ => "vectra triangle pipeline",
        }),
        layout: Some(layout),

        vertex: wgpu::VertexState {
            module: vs,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[ShapeVertex::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: fs,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}
