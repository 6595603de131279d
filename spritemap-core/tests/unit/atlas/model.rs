use super::*;

fn p(x: u32, y: u32) -> PixelPos {
    PixelPos::new(x, y)
}

#[test]
fn new_derives_inclusive_size() {
    let s = Slice::new("hero", p(10, 10), p(20, 25), vec![]);
    assert_eq!((s.width, s.height), (11, 16));
    assert!(s.contains(p(10, 10)));
    assert!(s.contains(p(20, 25)));
    assert!(!s.contains(p(21, 25)));
}

#[test]
fn auto_names_are_recognized() {
    assert!(is_auto_name("slice-0"));
    assert!(is_auto_name("slice-42"));
    assert!(!is_auto_name("slice-"));
    assert!(!is_auto_name("slice-eye"));
    assert!(!is_auto_name("hero"));
}

#[test]
fn local_landmarks_are_relative_to_start() {
    let s = Slice::new("eye", p(4, 6), p(10, 10), vec![p(5, 7), p(4, 10)]);
    assert_eq!(s.local_landmark(0), Some((1, 1)));
    assert_eq!(s.local_landmark(1), Some((0, 4)));
    assert_eq!(s.local_landmark(2), None);
}

#[test]
fn lookup_by_name() {
    let atlas = Atlas::new(vec![
        Slice::new("a", p(0, 0), p(1, 1), vec![]),
        Slice::new("slice-1", p(2, 2), p(3, 3), vec![]),
        Slice::new("a", p(4, 4), p(5, 5), vec![]),
    ]);

    assert_eq!(atlas.get("a").unwrap().start, p(0, 0));
    assert!(atlas.get("missing").is_none());

    let index = atlas.index();
    assert_eq!(index.len(), 2);
    assert_eq!(index["a"].start, p(4, 4));
    assert_eq!(atlas.auto_named_count(), 1);
}

#[test]
fn validate_accepts_well_formed_atlas() {
    let atlas = Atlas::new(vec![
        Slice::new("mouth", p(0, 0), p(9, 9), vec![p(3, 1), p(0, 9)]),
        Slice::new("slice-3", p(5, 5), p(5, 5), vec![p(5, 5)]),
    ]);
    atlas.validate().unwrap();
}

#[test]
fn validate_rejects_hand_edit_mistakes() {
    let mut wrong_size = Slice::new("a", p(0, 0), p(3, 3), vec![]);
    wrong_size.width = 3;
    assert!(Atlas::new(vec![wrong_size]).validate().is_err());

    let outside = Slice::new("a", p(0, 0), p(3, 3), vec![p(4, 1)]);
    assert!(Atlas::new(vec![outside]).validate().is_err());

    let unsorted = Slice::new("a", p(0, 0), p(3, 3), vec![p(0, 2), p(0, 1)]);
    assert!(Atlas::new(vec![unsorted]).validate().is_err());

    let mut inverted = Slice::new("a", p(5, 5), p(5, 5), vec![]);
    inverted.end = p(4, 5);
    assert!(Atlas::new(vec![inverted]).validate().is_err());

    let dup = Atlas::new(vec![
        Slice::new("a", p(0, 0), p(1, 1), vec![]),
        Slice::new("a", p(2, 2), p(3, 3), vec![]),
    ]);
    let err = dup.validate().unwrap_err();
    assert!(err.to_string().contains("duplicate slice name 'a'"));

    let blank = Slice::new(" ", p(0, 0), p(1, 1), vec![]);
    assert!(Atlas::new(vec![blank]).validate().is_err());
}

#[test]
fn validate_tolerates_repeated_generated_names() {
    let atlas = Atlas::new(vec![
        Slice::new("slice-0", p(30, 30), p(35, 35), vec![]),
        Slice::new("slice-0", p(2, 2), p(10, 10), vec![]),
        Slice::new("hero", p(12, 12), p(14, 14), vec![]),
    ]);
    atlas.validate().unwrap();
    assert_eq!(atlas.auto_named_count(), 2);
}
