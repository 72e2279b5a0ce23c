use crate::assets::{
    SkeletonFormat, atlas_candidates, atlas_is_pma, detect_skeleton_format, resolve_atlas,
};
use crate::error::Error;
use std::path::{Path, PathBuf};

#[test]
fn format_detection_by_extension() {
    assert_eq!(
        detect_skeleton_format(Path::new("hero.json")).unwrap(),
        SkeletonFormat::Json
    );
    assert_eq!(
        detect_skeleton_format(Path::new("hero.skel")).unwrap(),
        SkeletonFormat::Binary
    );
    assert_eq!(
        detect_skeleton_format(Path::new("export/HERO.JSON")).unwrap(),
        SkeletonFormat::Json
    );
}

#[test]
fn format_detection_rejects_other_extensions() {
    for path in ["hero.atlas", "hero.png", "hero"] {
        let err = detect_skeleton_format(Path::new(path)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedSkeletonFormat { .. }));
    }
}

#[test]
fn atlas_candidates_prefer_pma_first_when_asked() {
    let candidates = atlas_candidates(Path::new("export/goblins.json"), true);
    assert_eq!(
        candidates,
        vec![
            PathBuf::from("export/goblins-pma.atlas"),
            PathBuf::from("export/goblins.atlas"),
        ]
    );

    let candidates = atlas_candidates(Path::new("export/goblins.json"), false);
    assert_eq!(
        candidates,
        vec![
            PathBuf::from("export/goblins.atlas"),
            PathBuf::from("export/goblins-pma.atlas"),
        ]
    );
}

#[test]
fn atlas_candidates_strip_editor_tier_suffixes() {
    let candidates = atlas_candidates(Path::new("goblins-pro.json"), true);
    assert_eq!(
        candidates,
        vec![
            PathBuf::from("goblins-pro-pma.atlas"),
            PathBuf::from("goblins-pro.atlas"),
            PathBuf::from("goblins-pma.atlas"),
            PathBuf::from("goblins.atlas"),
        ]
    );

    let candidates = atlas_candidates(Path::new("hero-ess.skel"), false);
    assert_eq!(
        candidates,
        vec![
            PathBuf::from("hero-ess.atlas"),
            PathBuf::from("hero-ess-pma.atlas"),
            PathBuf::from("hero.atlas"),
            PathBuf::from("hero-pma.atlas"),
        ]
    );
}

#[test]
fn pma_detection_reads_the_file_stem_only() {
    assert!(atlas_is_pma(Path::new("export/goblins-pma.atlas")));
    assert!(atlas_is_pma(Path::new("GOBLINS-PMA.ATLAS")));
    assert!(atlas_is_pma(Path::new("pma-2x.atlas")));

    assert!(!atlas_is_pma(Path::new("export/goblins.atlas")));
    // Directory names must not mark their contents.
    assert!(!atlas_is_pma(Path::new("pma-exports/hero.atlas")));
    // "pma" embedded in a larger word is not the marker.
    assert!(!atlas_is_pma(Path::new("alpmarine.atlas")));
}

#[test]
fn resolve_atlas_explicit_path_wins() {
    let explicit = Path::new("somewhere/else.atlas");
    // Explicit paths are trusted as-is, even if nothing exists on disk yet.
    let resolved =
        resolve_atlas(Path::new("hero.json"), Some(explicit), true).unwrap();
    assert_eq!(resolved, explicit);
}

#[test]
fn resolve_atlas_finds_existing_sibling() {
    let dir = tempfile::tempdir().unwrap();
    let skeleton = dir.path().join("goblins-pro.json");
    let atlas = dir.path().join("goblins-pma.atlas");
    std::fs::write(&skeleton, "{}").unwrap();
    std::fs::write(&atlas, "page.png\n").unwrap();

    let resolved = resolve_atlas(&skeleton, None, true).unwrap();
    assert_eq!(resolved, atlas);
}

#[test]
fn resolve_atlas_errors_when_no_sibling_exists() {
    let dir = tempfile::tempdir().unwrap();
    let skeleton = dir.path().join("hero.json");
    std::fs::write(&skeleton, "{}").unwrap();

    let err = resolve_atlas(&skeleton, None, true).unwrap_err();
    assert!(matches!(err, Error::AtlasNotFound { .. }));
}
