#![cfg(feature = "serde")]

use clip_path_geom::{
    core::math::{vec2, Matrix3, Rect, Vector2},
    path::{ElementId, NodeType, Path, PathNode},
    path_closed,
};
use serde_json::json;
use uuid::Uuid;

#[test]
fn vector_and_rect() {
    let v = vec2(1.5, -2.0);
    let value = serde_json::to_value(v).unwrap();
    assert_eq!(value, json!({ "x": 1.5, "y": -2.0 }));
    assert_eq!(serde_json::from_value::<Vector2>(value).unwrap(), v);

    let r = Rect::new(vec2(0.0, 1.0), vec2(2.0, 3.0));
    let text = serde_json::to_string(&r).unwrap();
    assert_eq!(serde_json::from_str::<Rect>(&text).unwrap(), r);
}

#[test]
fn matrix() {
    let m = Matrix3::translate(3.0, 4.0);
    let value = serde_json::to_value(m).unwrap();
    assert_eq!(
        value,
        json!({ "m": [1.0, 0.0, 3.0, 0.0, 1.0, 4.0, 0.0, 0.0, 1.0] })
    );
    assert_eq!(serde_json::from_value::<Matrix3>(value).unwrap(), m);
}

#[test]
fn node_field_names() {
    let id = ElementId::from_uuid(Uuid::from_u128(5));
    let node = PathNode::with_id(
        id,
        vec2(1.0, 2.0),
        vec2(0.0, 2.0),
        vec2(2.0, 2.0),
        NodeType::Smooth,
    );
    let value = serde_json::to_value(node).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "00000000-0000-0000-0000-000000000005",
            "position": { "x": 1.0, "y": 2.0 },
            "handleIn": { "x": 0.0, "y": 2.0 },
            "handleOut": { "x": 2.0, "y": 2.0 },
            "type": "smooth"
        })
    );
    assert_eq!(serde_json::from_value::<PathNode>(value).unwrap(), node);
}

#[test]
fn path_round_trip() {
    let path: Path = path_closed![(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)];
    let text = serde_json::to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["closed"], json!(true));
    assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
    // unset transform is left out
    assert!(value.get("transform").is_none());
    assert_eq!(serde_json::from_str::<Path>(&text).unwrap(), path);

    let moved = path.with_transform(Matrix3::scale(2.0, 2.0));
    let text = serde_json::to_string(&moved).unwrap();
    let back: Path = serde_json::from_str(&text).unwrap();
    assert_eq!(back, moved);
    assert_eq!(back.transform(), Matrix3::scale(2.0, 2.0));
}
