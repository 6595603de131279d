use super::*;

#[test]
fn manhattan_is_symmetric() {
    let a = PixelPos::new(5, 5);
    let b = PixelPos::new(8, 8);
    let c = PixelPos::new(6, 20);
    assert_eq!(a.manhattan(b), 6);
    assert_eq!(b.manhattan(a), 6);
    assert_eq!(a.manhattan(c), 16);
}

#[test]
fn dominance_is_inclusive() {
    let p = PixelPos::new(3, 4);
    assert!(p.dominated_by(p));
    assert!(p.dominated_by(PixelPos::new(3, 9)));
    assert!(!p.dominated_by(PixelPos::new(2, 9)));
    assert!(!p.dominated_by(PixelPos::new(9, 3)));
}

#[test]
fn bottom_right_distance_uses_canvas_size() {
    let canvas = Canvas {
        width: 100,
        height: 50,
    };
    assert_eq!(canvas.distance_from_bottom_right(PixelPos::new(0, 0)), 150);
    assert_eq!(canvas.distance_from_bottom_right(PixelPos::new(99, 49)), 2);
}

#[test]
fn rect_dimensions_are_inclusive() {
    let r = PixelRect::new(PixelPos::new(10, 10), PixelPos::new(20, 20)).unwrap();
    assert_eq!(r.width(), 11);
    assert_eq!(r.height(), 11);

    let single = PixelRect::new(PixelPos::new(3, 3), PixelPos::new(3, 3)).unwrap();
    assert_eq!((single.width(), single.height()), (1, 1));
}

#[test]
fn rect_contains_boundaries() {
    let r = PixelRect::new(PixelPos::new(2, 2), PixelPos::new(5, 6)).unwrap();
    assert!(r.contains(PixelPos::new(2, 2)));
    assert!(r.contains(PixelPos::new(5, 6)));
    assert!(!r.contains(PixelPos::new(6, 6)));
    assert!(!r.contains(PixelPos::new(2, 1)));
}

#[test]
fn rect_rejects_inverted_corners() {
    assert!(PixelRect::new(PixelPos::new(5, 5), PixelPos::new(4, 9)).is_err());
}

#[test]
fn pixel_pos_serializes_as_pair() {
    let json = serde_json::to_string(&PixelPos::new(7, 12)).unwrap();
    assert_eq!(json, "[7,12]");
}

#[test]
fn normalize_rel_path_rules() {
    assert_eq!(
        normalize_rel_path("illusts\\atlas.png").unwrap(),
        "illusts/atlas.png"
    );
    assert_eq!(normalize_rel_path("./a//b.yml").unwrap(), "a/b.yml");
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("../up.png").is_err());
    assert!(normalize_rel_path("./").is_err());
}
