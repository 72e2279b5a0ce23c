use spineview::{DrawList, FilterMode, PagePtr, PageTexture, SamplerSpec, WrapMode};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// GPU textures for atlas pages, created lazily the first time a draw list
/// references a page. Pages that fail to load are remembered and reported
/// once; other pages keep loading and rendering.
#[derive(Default)]
pub struct TextureStore {
    bind_groups: HashMap<usize, wgpu::BindGroup>,
    failed: HashSet<usize>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure every page the draw list references has a bind group.
    pub fn prepare(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        draw_list: &DrawList,
    ) {
        let pending = pages_to_resolve(draw_list, |key| {
            self.bind_groups.contains_key(&key) || self.failed.contains(&key)
        });

        for page in pending {
            // Safety: pages referenced by the draw list belong to the atlas
            // held by the bundle that produced it, which outlives this call.
            let state = unsafe { page.page_texture_mut() };
            let (path, sampler) = match state {
                PageTexture::Pending { path, sampler } | PageTexture::Ready { path, sampler } => {
                    (path.clone(), *sampler)
                }
            };

            match load_page(device, queue, layout, Path::new(&path), sampler) {
                Ok(bind_group) => {
                    self.bind_groups.insert(page.key(), bind_group);
                    *state = PageTexture::Ready { path, sampler };
                }
                Err(e) => {
                    log::error!("{e}; draws using this page are skipped");
                    self.failed.insert(page.key());
                }
            }
        }
    }

    pub fn bind_group(&self, page: PagePtr) -> Option<&wgpu::BindGroup> {
        self.bind_groups.get(&page.key())
    }
}

/// Pages the draw list references that still need loading, deduplicated,
/// in first-reference order. `known` covers both loaded and failed pages.
pub(crate) fn pages_to_resolve(
    draw_list: &DrawList,
    known: impl Fn(usize) -> bool,
) -> Vec<PagePtr> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for call in &draw_list.calls {
        let Some(page) = call.page else {
            continue;
        };
        if known(page.key()) || !seen.insert(page.key()) {
            continue;
        }
        out.push(page);
    }
    out
}

fn load_page(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    path: &Path,
    sampler: SamplerSpec,
) -> Result<wgpu::BindGroup, TextureError> {
    let bytes = std::fs::read(path).map_err(|source| TextureError::Io {
        path: path.to_owned(),
        source,
    })?;
    let decoded = image::load_from_memory(&bytes).map_err(|source| TextureError::Decode {
        path: path.to_owned(),
        source,
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("atlas page"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * width),
            rows_per_image: Some(height),
        },
        size,
    );

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let gpu_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("atlas page sampler"),
        address_mode_u: to_wgpu_wrap(sampler.wrap_u),
        address_mode_v: to_wgpu_wrap(sampler.wrap_v),
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: to_wgpu_filter(sampler.mag_filter),
        min_filter: to_wgpu_filter(sampler.min_filter),
        mipmap_filter: to_wgpu_filter(sampler.mipmap_filter),
        ..Default::default()
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("atlas page bind group"),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&gpu_sampler),
            },
        ],
    });

    log::info!("loaded atlas page {} ({width}x{height})", path.display());
    Ok(bind_group)
}

fn to_wgpu_filter(filter: FilterMode) -> wgpu::FilterMode {
    match filter {
        FilterMode::Nearest => wgpu::FilterMode::Nearest,
        FilterMode::Linear => wgpu::FilterMode::Linear,
    }
}

fn to_wgpu_wrap(wrap: WrapMode) -> wgpu::AddressMode {
    match wrap {
        WrapMode::ClampToEdge => wgpu::AddressMode::ClampToEdge,
        WrapMode::Repeat => wgpu::AddressMode::Repeat,
        WrapMode::MirroredRepeat => wgpu::AddressMode::MirrorRepeat,
    }
}
