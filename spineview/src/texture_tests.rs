use crate::texture::{FilterMode, SamplerSpec, WrapMode, mag_filter, min_mipmap_filter, wrap_mode};
use rusty_spine::atlas::{AtlasFilter, AtlasWrap};

#[test]
fn min_mipmap_mapping_follows_the_atlas_filter_name() {
    assert_eq!(
        min_mipmap_filter(AtlasFilter::Nearest),
        (FilterMode::Nearest, FilterMode::Nearest)
    );
    assert_eq!(
        min_mipmap_filter(AtlasFilter::Linear),
        (FilterMode::Linear, FilterMode::Nearest)
    );
    assert_eq!(
        min_mipmap_filter(AtlasFilter::Mipmap),
        (FilterMode::Linear, FilterMode::Linear)
    );
    assert_eq!(
        min_mipmap_filter(AtlasFilter::MipmapNearestNearest),
        (FilterMode::Nearest, FilterMode::Nearest)
    );
    assert_eq!(
        min_mipmap_filter(AtlasFilter::MipmapNearestLinear),
        (FilterMode::Nearest, FilterMode::Linear)
    );
    assert_eq!(
        min_mipmap_filter(AtlasFilter::MipmapLinearNearest),
        (FilterMode::Linear, FilterMode::Nearest)
    );
    assert_eq!(
        min_mipmap_filter(AtlasFilter::MipmapLinearLinear),
        (FilterMode::Linear, FilterMode::Linear)
    );
}

#[test]
fn mag_filter_uses_the_first_filter_component() {
    assert_eq!(mag_filter(AtlasFilter::Nearest), FilterMode::Nearest);
    assert_eq!(mag_filter(AtlasFilter::Linear), FilterMode::Linear);
    assert_eq!(mag_filter(AtlasFilter::Mipmap), FilterMode::Linear);
    assert_eq!(
        mag_filter(AtlasFilter::MipmapNearestNearest),
        FilterMode::Nearest
    );
    assert_eq!(
        mag_filter(AtlasFilter::MipmapLinearNearest),
        FilterMode::Nearest
    );
    assert_eq!(
        mag_filter(AtlasFilter::MipmapNearestLinear),
        FilterMode::Linear
    );
}

#[test]
fn wrap_mapping_is_one_to_one() {
    assert_eq!(wrap_mode(AtlasWrap::ClampToEdge), WrapMode::ClampToEdge);
    assert_eq!(wrap_mode(AtlasWrap::Repeat), WrapMode::Repeat);
    assert_eq!(
        wrap_mode(AtlasWrap::MirroredRepeat),
        WrapMode::MirroredRepeat
    );
}

#[test]
fn default_sampler_is_linear_clamped() {
    let spec = SamplerSpec::default();
    assert_eq!(spec.min_filter, FilterMode::Linear);
    assert_eq!(spec.mag_filter, FilterMode::Linear);
    assert_eq!(spec.mipmap_filter, FilterMode::Nearest);
    assert_eq!(spec.wrap_u, WrapMode::ClampToEdge);
    assert_eq!(spec.wrap_v, WrapMode::ClampToEdge);
}
