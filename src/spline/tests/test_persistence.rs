use super::{p, twisted_spline, v};
use crate::geom::Quaternion;
use crate::spline::{LockMode, Spline, Vertex};

#[test]
fn spline_survives_json_round_trip() {
    let mut spline = twisted_spline().with_loop(true).with_auto_normal_3d(true);
    spline
        .vertex_mut(3)
        .unwrap()
        .set_rotation(Quaternion::new(0.0, 0.0, 1.0, 0.0));
    spline.set_lock_mode(0, LockMode::BeforeIsMirror).unwrap();

    let json = serde_json::to_string(&spline).unwrap();
    let restored: Spline = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, spline);
    assert_eq!(restored.vertices()[0].lock_mode(), LockMode::BeforeIsMirror);
    assert_eq!(restored.vertices()[1].lock_mode(), LockMode::AfterIsMirror);
    assert!(restored.is_loop());
    assert!(restored.auto_normal_3d());
}

#[test]
fn mirrored_handle_is_not_stored() {
    let spline = Spline::new(vec![
        Vertex::smooth(p(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0)),
        Vertex::from_position(p(1.0, 0.0, 0.0)),
    ]);
    let json = serde_json::to_value(&spline).unwrap();
    let handles = &json["vertices"][0]["handles"];
    assert_eq!(handles["lock"], "after_is_mirror");
    assert!(handles.get("before").is_none());
    assert_eq!(handles["after"]["x"], 1.0);
}

#[test]
fn flags_default_when_missing() {
    let json = r#"{
        "vertices": [
            {
                "position": { "x": 0.0, "y": 0.0, "z": 0.0 },
                "handles": {
                    "lock": "none",
                    "before": { "x": 0.0, "y": 0.0, "z": 0.0 },
                    "after": { "x": 1.0, "y": 0.0, "z": 0.0 }
                },
                "rotation": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 }
            },
            {
                "position": { "x": 3.0, "y": 0.0, "z": 0.0 },
                "handles": { "lock": "before_is_mirror", "before": { "x": -1.0, "y": 0.0, "z": 0.0 } },
                "rotation": { "x": 0.0, "y": 0.0, "z": 0.0, "w": 1.0 }
            }
        ]
    }"#;
    let spline: Spline = serde_json::from_str(json).unwrap();
    assert!(!spline.is_loop());
    assert!(!spline.is_2d());
    assert!(!spline.auto_normal_3d());
    assert_eq!(spline.vertices()[1].handle_after(), v(1.0, 0.0, 0.0));

    let eval = spline.evaluator().unwrap();
    assert_eq!(eval.point(1.0), p(3.0, 0.0, 0.0));
}
