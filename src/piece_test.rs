use super::*;

fn make_piece(slot: u8) -> Piece {
    Piece::new(3, slot, Point::new(0.0, 0.0), Rotation::Deg0)
}

#[test]
fn new_piece_is_ungrouped() {
    let p = make_piece(0);
    assert!(p.group_id.is_none());
    assert_eq!(p.puzzle_set, 3);
    assert_eq!(p.rotation, Rotation::Deg0);
}

#[test]
fn new_pieces_get_distinct_ids() {
    assert_ne!(make_piece(0).id, make_piece(0).id);
}

#[test]
fn same_cluster_with_itself() {
    let p = make_piece(1);
    assert!(p.same_cluster(&p));
}

#[test]
fn ungrouped_pieces_are_separate_clusters() {
    let a = make_piece(0);
    let b = make_piece(1);
    assert!(!a.same_cluster(&b));
}

#[test]
fn shared_group_is_same_cluster() {
    let mut a = make_piece(0);
    let mut b = make_piece(1);
    a.group_id = Some(a.id);
    b.group_id = Some(a.id);
    assert!(a.same_cluster(&b));
    assert!(b.same_cluster(&a));
}

#[test]
fn one_grouped_one_not_is_separate() {
    let mut a = make_piece(0);
    let b = make_piece(1);
    a.group_id = Some(b.id);
    assert!(!a.same_cluster(&b));
}

#[test]
fn group_or_self_prefers_tag() {
    let mut a = make_piece(0);
    assert_eq!(a.group_or_self(), a.id);
    let tag = Uuid::new_v4();
    a.group_id = Some(tag);
    assert_eq!(a.group_or_self(), tag);
}

#[test]
fn piece_serializes_rotation_as_degrees() {
    let mut p = make_piece(2);
    p.rotation = Rotation::Deg180;
    let value = serde_json::to_value(&p).unwrap();
    assert_eq!(value["rotation"], serde_json::json!(180));
    assert_eq!(value["slot"], serde_json::json!(2));
    assert!(value["group_id"].is_null());
}

#[test]
fn piece_deserializes_from_json() {
    let id = Uuid::new_v4();
    let raw = serde_json::json!({
        "id": id,
        "puzzle_set": 7,
        "slot": 3,
        "position": { "x": 10.5, "y": 20.0 },
        "rotation": 90,
        "group_id": null,
    });
    let p: Piece = serde_json::from_value(raw).unwrap();
    assert_eq!(p.id, id);
    assert_eq!(p.rotation, Rotation::Deg90);
    assert_eq!(p.position, Point::new(10.5, 20.0));
}
