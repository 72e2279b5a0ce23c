use crate::textures::TextureStore;
use spineview::{BlendMode, DrawList};
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuVertex {
    position: [f32; 2],
    uv: [f32; 2],
    color: [f32; 4],
    dark_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Globals {
    clip_from_world: [[f32; 4]; 4],
}

/// Renders a skeleton draw list: one pipeline per blend mode, duplicated for
/// premultiplied alpha, shared grow-only vertex/index buffers.
pub struct MeshRenderer {
    pipelines: Pipelines,
    pipelines_pma: Pipelines,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    texture_bind_group_layout: wgpu::BindGroupLayout,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_capacity: usize,
    index_capacity: usize,
}

struct Pipelines {
    normal: wgpu::RenderPipeline,
    additive: wgpu::RenderPipeline,
    multiply: wgpu::RenderPipeline,
    screen: wgpu::RenderPipeline,
}

impl Pipelines {
    fn by_blend(&self, blend: BlendMode) -> &wgpu::RenderPipeline {
        match blend {
            BlendMode::Normal => &self.normal,
            BlendMode::Additive => &self.additive,
            BlendMode::Multiply => &self.multiply,
            BlendMode::Screen => &self.screen,
        }
    }
}

impl MeshRenderer {
    pub fn new(device: &wgpu::Device, color_format: wgpu::TextureFormat) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("skeleton mesh shader"),
            source: wgpu::ShaderSource::Wgsl(MESH_SHADER.into()),
        });

        let globals_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("globals bind group layout"),
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

        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("atlas page bind group layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            multisampled: false,
                            view_dimension: wgpu::TextureViewDimension::D2,
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("skeleton mesh pipeline layout"),
            bind_group_layouts: &[&globals_bind_group_layout, &texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        let pipelines = create_pipelines(device, &pipeline_layout, &shader, color_format, false);
        let pipelines_pma = create_pipelines(device, &pipeline_layout, &shader, color_format, true);

        let globals = Globals {
            clip_from_world: [[0.0; 4]; 4],
        };
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("globals buffer"),
            contents: bytemuck::bytes_of(&globals),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals bind group"),
            layout: &globals_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });

        let vertex_capacity = 1024;
        let index_capacity = 2048;
        let vertex_buffer = create_vertex_buffer(device, vertex_capacity);
        let index_buffer = create_index_buffer(device, index_capacity);

        Self {
            pipelines,
            pipelines_pma,
            globals_buffer,
            globals_bind_group,
            texture_bind_group_layout,
            vertex_buffer,
            index_buffer,
            vertex_capacity,
            index_capacity,
        }
    }

    /// Layout `TextureStore` bind groups must be created against.
    pub fn texture_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_bind_group_layout
    }

    pub fn set_clip_from_world(&self, queue: &wgpu::Queue, clip_from_world: [[f32; 4]; 4]) {
        let globals = Globals { clip_from_world };
        queue.write_buffer(&self.globals_buffer, 0, bytemuck::bytes_of(&globals));
    }

    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, draw_list: &DrawList) {
        if draw_list.is_empty() {
            return;
        }

        let vertices = draw_list
            .vertices
            .iter()
            .map(|v| GpuVertex {
                position: v.position,
                uv: v.uv,
                color: v.color,
                dark_color: v.dark_color,
            })
            .collect::<Vec<_>>();

        self.ensure_capacity(device, vertices.len(), draw_list.indices.len());
        queue.write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&vertices));
        queue.write_buffer(
            &self.index_buffer,
            0,
            bytemuck::cast_slice(&draw_list.indices),
        );
    }

    pub fn render<'a>(
        &'a self,
        pass: &mut wgpu::RenderPass<'a>,
        draw_list: &DrawList,
        textures: &'a TextureStore,
    ) {
        if draw_list.is_empty() {
            return;
        }

        pass.set_bind_group(0, &self.globals_bind_group, &[]);
        pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

        for call in &draw_list.calls {
            // Untextured calls are dropped; prepare() already reported why.
            let Some(bind_group) = call.page.and_then(|page| textures.bind_group(page)) else {
                continue;
            };

            let pipeline = if call.premultiplied_alpha {
                self.pipelines_pma.by_blend(call.blend)
            } else {
                self.pipelines.by_blend(call.blend)
            };
            pass.set_pipeline(pipeline);
            pass.set_bind_group(1, bind_group, &[]);

            let start = call.first_index as u32;
            let end = (call.first_index + call.index_count) as u32;
            pass.draw_indexed(start..end, 0, 0..1);
        }
    }

    fn ensure_capacity(&mut self, device: &wgpu::Device, vertices: usize, indices: usize) {
        if vertices > self.vertex_capacity {
            while self.vertex_capacity < vertices {
                self.vertex_capacity *= 2;
            }
            self.vertex_buffer = create_vertex_buffer(device, self.vertex_capacity);
        }
        if indices > self.index_capacity {
            while self.index_capacity < indices {
                self.index_capacity *= 2;
            }
            self.index_buffer = create_index_buffer(device, self.index_capacity);
        }
    }
}

fn create_vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("skeleton mesh vertices"),
        size: (capacity * std::mem::size_of::<GpuVertex>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_index_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("skeleton mesh indices"),
        size: (capacity * std::mem::size_of::<u32>()) as u64,
        usage: wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

fn create_pipelines(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    premultiplied_alpha: bool,
) -> Pipelines {
    let create = |blend| {
        create_pipeline(
            device,
            layout,
            shader,
            color_format,
            blend,
            premultiplied_alpha,
        )
    };
    Pipelines {
        normal: create(BlendMode::Normal),
        additive: create(BlendMode::Additive),
        multiply: create(BlendMode::Multiply),
        screen: create(BlendMode::Screen),
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    color_format: wgpu::TextureFormat,
    blend: BlendMode,
    premultiplied_alpha: bool,
) -> wgpu::RenderPipeline {
    let label = match (blend, premultiplied_alpha) {
        (BlendMode::Normal, false) => "skeleton mesh pipeline normal",
        (BlendMode::Additive, false) => "skeleton mesh pipeline additive",
        (BlendMode::Multiply, false) => "skeleton mesh pipeline multiply",
        (BlendMode::Screen, false) => "skeleton mesh pipeline screen",
        (BlendMode::Normal, true) => "skeleton mesh pipeline normal pma",
        (BlendMode::Additive, true) => "skeleton mesh pipeline additive pma",
        (BlendMode::Multiply, true) => "skeleton mesh pipeline multiply pma",
        (BlendMode::Screen, true) => "skeleton mesh pipeline screen pma",
    };

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<GpuVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![
                    0 => Float32x2,
                    1 => Float32x2,
                    2 => Float32x4,
                    3 => Float32x4
                ],
            }],
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(blend_state(blend, premultiplied_alpha)),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn blend_state(blend: BlendMode, premultiplied_alpha: bool) -> wgpu::BlendState {
    use wgpu::{BlendComponent, BlendFactor, BlendOperation};

    // Source alpha always blends with factor ONE, matching the upstream
    // runtimes' glBlendFuncSeparate(srcColor, dst, ONE, dst).
    let (src_color, dst) = match blend {
        BlendMode::Normal => (
            straight_or_pma_src(premultiplied_alpha),
            BlendFactor::OneMinusSrcAlpha,
        ),
        BlendMode::Additive => (straight_or_pma_src(premultiplied_alpha), BlendFactor::One),
        BlendMode::Multiply => (BlendFactor::Dst, BlendFactor::OneMinusSrcAlpha),
        BlendMode::Screen => (BlendFactor::One, BlendFactor::OneMinusSrc),
    };

    wgpu::BlendState {
        color: BlendComponent {
            src_factor: src_color,
            dst_factor: dst,
            operation: BlendOperation::Add,
        },
        alpha: BlendComponent {
            src_factor: BlendFactor::One,
            dst_factor: dst,
            operation: BlendOperation::Add,
        },
    }
}

fn straight_or_pma_src(premultiplied_alpha: bool) -> wgpu::BlendFactor {
    if premultiplied_alpha {
        wgpu::BlendFactor::One
    } else {
        wgpu::BlendFactor::SrcAlpha
    }
}

const MESH_SHADER: &str = r#"
struct Globals {
  clip_from_world: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

struct VertexIn {
  @location(0) position: vec2<f32>,
  @location(1) uv: vec2<f32>,
  @location(2) light_color: vec4<f32>,
  @location(3) dark_color: vec4<f32>,
};

struct VertexOut {
  @builtin(position) position: vec4<f32>,
  @location(0) uv: vec2<f32>,
  @location(1) light_color: vec4<f32>,
  @location(2) dark_color: vec4<f32>,
};

@vertex
fn vs_main(in: VertexIn) -> VertexOut {
  var out: VertexOut;
  out.position = globals.clip_from_world * vec4<f32>(in.position, 0.0, 1.0);
  out.uv = in.uv;
  out.light_color = in.light_color;
  out.dark_color = in.dark_color;
  return out;
}

@group(1) @binding(0)
var page_texture: texture_2d<f32>;

@group(1) @binding(1)
var page_sampler: sampler;

// Two-color tint: dark color replaces the texture's dark regions, light
// color multiplies as usual.
@fragment
fn fs_main(in: VertexOut) -> @location(0) vec4<f32> {
  let tex_color = textureSample(page_texture, page_sampler, in.uv);
  let alpha = tex_color.a * in.light_color.a;
  let rgb = ((tex_color.a - 1.0) * in.dark_color.a + 1.0 - tex_color.rgb) * in.dark_color.rgb
    + tex_color.rgb * in.light_color.rgb;
  return vec4<f32>(rgb, alpha);
}
"#;
