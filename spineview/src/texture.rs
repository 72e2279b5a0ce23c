use rusty_spine::atlas::{AtlasFilter, AtlasPage, AtlasWrap};
use std::ffi::c_void;
use std::sync::Once;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FilterMode {
    Nearest,
    Linear,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WrapMode {
    ClampToEdge,
    Repeat,
    MirroredRepeat,
}

/// Sampler parameters carried from the atlas page to the renderer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SamplerSpec {
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    pub mipmap_filter: FilterMode,
    pub wrap_u: WrapMode,
    pub wrap_v: WrapMode,
}

impl Default for SamplerSpec {
    fn default() -> Self {
        Self {
            min_filter: FilterMode::Linear,
            mag_filter: FilterMode::Linear,
            mipmap_filter: FilterMode::Nearest,
            wrap_u: WrapMode::ClampToEdge,
            wrap_v: WrapMode::ClampToEdge,
        }
    }
}

/// Minification and mipmap filters for an atlas filter.
///
/// Atlas filter names encode `Mipmap<Min><Mip>`; plain `Mipmap` is the
/// common linear/linear case.
pub fn min_mipmap_filter(filter: AtlasFilter) -> (FilterMode, FilterMode) {
    match filter {
        AtlasFilter::Nearest => (FilterMode::Nearest, FilterMode::Nearest),
        AtlasFilter::MipmapNearestNearest => (FilterMode::Nearest, FilterMode::Nearest),
        AtlasFilter::MipmapNearestLinear => (FilterMode::Nearest, FilterMode::Linear),
        AtlasFilter::MipmapLinearNearest => (FilterMode::Linear, FilterMode::Nearest),
        AtlasFilter::Mipmap | AtlasFilter::MipmapLinearLinear => {
            (FilterMode::Linear, FilterMode::Linear)
        }
        _ => (FilterMode::Linear, FilterMode::Nearest),
    }
}

pub fn mag_filter(filter: AtlasFilter) -> FilterMode {
    match filter {
        AtlasFilter::Nearest
        | AtlasFilter::MipmapNearestNearest
        | AtlasFilter::MipmapLinearNearest => FilterMode::Nearest,
        _ => FilterMode::Linear,
    }
}

pub fn wrap_mode(wrap: AtlasWrap) -> WrapMode {
    match wrap {
        AtlasWrap::ClampToEdge => WrapMode::ClampToEdge,
        AtlasWrap::Repeat => WrapMode::Repeat,
        AtlasWrap::MirroredRepeat => WrapMode::MirroredRepeat,
        AtlasWrap::Unknown => WrapMode::ClampToEdge,
    }
}

pub fn sampler_spec_for_page(page: &AtlasPage) -> SamplerSpec {
    let (min_filter, mipmap_filter) = min_mipmap_filter(page.min_filter());
    SamplerSpec {
        min_filter,
        mag_filter: mag_filter(page.mag_filter()),
        mipmap_filter,
        wrap_u: wrap_mode(page.u_wrap()),
        wrap_v: wrap_mode(page.v_wrap()),
    }
}

/// Per-page texture state, stored in the atlas page's renderer object by the
/// create-texture callback and freed by the dispose callback when the atlas
/// is dropped at shutdown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageTexture {
    /// Image not decoded yet; `path` is resolved relative to the atlas file.
    Pending { path: String, sampler: SamplerSpec },
    /// A renderer has created a GPU texture for this page.
    Ready { path: String, sampler: SamplerSpec },
}

/// Opaque handle to an atlas page's `PageTexture`, as carried on draw calls.
///
/// Valid for as long as the atlas that owns the page is alive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PagePtr(*const c_void);

impl PagePtr {
    pub fn from_raw(raw: *const c_void) -> Option<Self> {
        (!raw.is_null()).then_some(Self(raw))
    }

    /// Stable map key for the page.
    pub fn key(self) -> usize {
        self.0 as usize
    }

    /// # Safety
    ///
    /// The atlas owning the page must still be alive, and the texture
    /// callbacks must have been installed before it was loaded, so that the
    /// renderer object actually holds a `PageTexture`.
    pub unsafe fn page_texture_mut<'a>(self) -> &'a mut PageTexture {
        unsafe { &mut *(self.0 as *mut PageTexture) }
    }
}

static INSTALL: Once = Once::new();

/// Install the runtime's texture callbacks. Idempotent. Must run before any
/// atlas is loaded; `SkeletonBundle::load` takes care of that.
pub fn install_texture_callbacks() {
    INSTALL.call_once(|| {
        rusty_spine::extension::set_create_texture_cb(|page, path| {
            log::debug!("atlas page queued for load: {path}");
            let sampler = sampler_spec_for_page(page);
            page.renderer_object().set(PageTexture::Pending {
                path: path.to_owned(),
                sampler,
            });
        });
        rusty_spine::extension::set_dispose_texture_cb(|page| unsafe {
            page.renderer_object().dispose::<PageTexture>();
        });
    });
}
