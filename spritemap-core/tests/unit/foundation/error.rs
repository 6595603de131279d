use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SpritemapError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SpritemapError::image("x").to_string().contains("image error:"));
    assert!(
        SpritemapError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn marker_mismatch_reports_all_counts() {
    let err = SpritemapError::MarkerCountMismatch {
        region_start: 2,
        region_end: 1,
        landmark: 7,
    };
    let msg = err.to_string();
    assert!(msg.contains("region start: 2"));
    assert!(msg.contains("region end: 1"));
    assert!(msg.contains("landmark: 7"));
    assert!(err.is_malformed_guide());
}

#[test]
fn unpaired_start_names_the_pixel() {
    let err = SpritemapError::UnpairedRegionStart { x: 4, y: 9 };
    assert!(err.to_string().contains("(4, 9)"));
    assert!(err.is_malformed_guide());
    assert!(!SpritemapError::validation("x").is_malformed_guide());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SpritemapError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
