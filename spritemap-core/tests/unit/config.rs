use super::*;

fn scratch_dir() -> PathBuf {
    let dir = PathBuf::from("target").join("unit_config");
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn defaults_match_project_layout() {
    let job = SlicerConfig::default().job().unwrap();
    assert_eq!(job.guide, Path::new("src/assets/illusts/atlas.png"));
    assert_eq!(job.artwork, Path::new("src/assets/illusts/main.png"));
    assert_eq!(job.mapping, Path::new("src/assets/atlas.yml"));
    assert_eq!(
        job.debug.as_deref(),
        Some(Path::new("src/assets/atlasDisplay.png"))
    );
    assert_eq!(job.overlay.font_size, 10.0);
}

#[test]
fn partial_json_fills_defaults_and_resolves_root() {
    let dir = scratch_dir();
    let path = dir.join("partial.json");
    std::fs::write(&path, r#"{"assets_root": "art", "mapping": "out/atlas.json", "debug": null}"#)
        .unwrap();

    let cfg = SlicerConfig::from_path(&path).unwrap();
    assert_eq!(cfg.assets_root, dir.join("art"));
    assert_eq!(cfg.guide, "illusts/atlas.png");

    let job = cfg.job().unwrap();
    assert_eq!(job.mapping, dir.join("art").join("out/atlas.json"));
    assert!(job.debug.is_none());
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = scratch_dir();
    let path = dir.join("unknown.json");
    std::fs::write(&path, r#"{"guid": "typo.png"}"#).unwrap();

    let err = SlicerConfig::from_path(&path).unwrap_err();
    assert!(err.to_string().contains("serialization error:"));
}

#[test]
fn escaping_paths_are_rejected() {
    let cfg = SlicerConfig {
        mapping: "../atlas.yml".to_string(),
        ..SlicerConfig::default()
    };
    assert!(cfg.job().is_err());

    let cfg = SlicerConfig {
        guide: "/etc/guide.png".to_string(),
        ..SlicerConfig::default()
    };
    assert!(cfg.job().is_err());
}

#[test]
fn bad_font_size_is_rejected() {
    let cfg = SlicerConfig {
        label_font_size: 0.0,
        ..SlicerConfig::default()
    };
    assert!(cfg.validate().is_err());
}
