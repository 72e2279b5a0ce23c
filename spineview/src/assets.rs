use crate::error::Error;
use crate::texture::install_texture_callbacks;
use rusty_spine::{AnimationStateData, Atlas, SkeletonBinary, SkeletonData, SkeletonJson};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// On-disk skeleton export format, detected from the file extension.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SkeletonFormat {
    Json,
    Binary,
}

pub fn detect_skeleton_format(path: &Path) -> Result<SkeletonFormat, Error> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(SkeletonFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("skel") => Ok(SkeletonFormat::Binary),
        _ => Err(Error::UnsupportedSkeletonFormat {
            path: path.to_owned(),
        }),
    }
}

/// Candidate atlas paths next to a skeleton file, in probe order.
///
/// Spine exports name the atlas after the project, with optional `-pma`
/// (premultiplied) and `-pro`/`-ess` (editor tier, skeleton file only)
/// suffixes. `prefer_pma` puts the `-pma` variant first, like the upstream
/// example assets ship it.
pub fn atlas_candidates(skeleton: &Path, prefer_pma: bool) -> Vec<PathBuf> {
    let dir = skeleton.parent().unwrap_or_else(|| Path::new(""));
    let stem = skeleton
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let mut stems = vec![stem.to_string()];
    for suffix in ["-pro", "-ess"] {
        if let Some(stripped) = stem.strip_suffix(suffix) {
            stems.push(stripped.to_string());
        }
    }

    let mut out = Vec::new();
    for stem in &stems {
        let plain = dir.join(format!("{stem}.atlas"));
        let pma = dir.join(format!("{stem}-pma.atlas"));
        if prefer_pma {
            out.push(pma);
            out.push(plain);
        } else {
            out.push(plain);
            out.push(pma);
        }
    }
    out
}

/// Whether an atlas file is a premultiplied-alpha export, going by its name.
///
/// Only the file stem is inspected, so a `pma-exports/` directory does not
/// mark every atlas inside it. The marker must be its own `-` separated part
/// of the stem, as in `goblins-pma.atlas`.
pub fn atlas_is_pma(atlas: &Path) -> bool {
    atlas
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.split('-').any(|part| part.eq_ignore_ascii_case("pma")))
}

/// Pick the atlas for a skeleton file: an explicit path wins, otherwise the
/// first existing candidate sibling.
pub fn resolve_atlas(
    skeleton: &Path,
    explicit: Option<&Path>,
    prefer_pma: bool,
) -> Result<PathBuf, Error> {
    if let Some(path) = explicit {
        return Ok(path.to_owned());
    }
    atlas_candidates(skeleton, prefer_pma)
        .into_iter()
        .find(|p| p.is_file())
        .ok_or_else(|| Error::AtlasNotFound {
            skeleton: skeleton.to_owned(),
        })
}

#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// Loader scale applied while parsing, before any posing.
    pub scale: f32,
    /// Default crossfade duration between animations, seconds.
    pub default_mix: f32,
    /// Explicit atlas path; otherwise resolved next to the skeleton file.
    pub atlas: Option<PathBuf>,
    pub prefer_pma_atlas: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            default_mix: 0.2,
            atlas: None,
            prefer_pma_atlas: true,
        }
    }
}

/// Loaded skeleton assets, shared by every actor created from them.
///
/// Dropping the bundle drops the atlas, which fires the runtime's
/// dispose-texture callback for each page.
pub struct SkeletonBundle {
    pub atlas: Arc<Atlas>,
    pub atlas_path: PathBuf,
    pub skeleton_data: Arc<SkeletonData>,
    pub state_data: Arc<AnimationStateData>,
}

impl SkeletonBundle {
    pub fn load(skeleton_path: &Path, options: &LoadOptions) -> Result<Self, Error> {
        // Pages created during atlas parsing must land in PageTexture state.
        install_texture_callbacks();

        let format = detect_skeleton_format(skeleton_path)?;
        let atlas_path = resolve_atlas(
            skeleton_path,
            options.atlas.as_deref(),
            options.prefer_pma_atlas,
        )?;
        let atlas = Arc::new(Atlas::new_from_file(&atlas_path)?);

        let skeleton_data = match format {
            SkeletonFormat::Json => {
                let mut loader = SkeletonJson::new(atlas.clone());
                loader.set_scale(options.scale);
                loader.read_skeleton_data_file(skeleton_path)?
            }
            SkeletonFormat::Binary => {
                let mut loader = SkeletonBinary::new(atlas.clone());
                loader.set_scale(options.scale);
                loader.read_skeleton_data_file(skeleton_path)?
            }
        };
        let skeleton_data = Arc::new(skeleton_data);

        let mut state_data = AnimationStateData::new(skeleton_data.clone());
        state_data.set_default_mix(options.default_mix);

        log::info!(
            "loaded {}: {} bones, {} slots, {} animations, {} skins (atlas {})",
            skeleton_path.display(),
            skeleton_data.bones().count(),
            skeleton_data.slots().count(),
            skeleton_data.animations().count(),
            skeleton_data.skins().count(),
            atlas_path.display(),
        );

        Ok(Self {
            atlas,
            atlas_path,
            skeleton_data,
            state_data: Arc::new(state_data),
        })
    }

    pub fn animation_names(&self) -> Vec<String> {
        self.skeleton_data
            .animations()
            .map(|a| a.name().to_owned())
            .collect()
    }

    pub fn skin_names(&self) -> Vec<String> {
        self.skeleton_data
            .skins()
            .map(|s| s.name().to_owned())
            .collect()
    }

    pub fn has_animation(&self, name: &str) -> bool {
        self.skeleton_data.animations().any(|a| a.name() == name)
    }

    pub fn has_skin(&self, name: &str) -> bool {
        self.skeleton_data.skins().any(|s| s.name() == name)
    }
}
