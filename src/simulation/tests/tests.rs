use super::*;
use crate::core::Vec2;
use crate::domain::style::{BACKGROUND, STROKE_COLOR};
use crate::domain::Color;
use crate::systems::render::DrawCommand;
use crate::systems::shapes::ShapeBehavior;

fn config(count: u32, kind: ShapeKind) -> Configuration {
    Configuration {
        shape_count: count,
        shape_kind: kind,
        ..Configuration::default()
    }
}

#[test]
fn new_scene_starts_with_default_shapes_at_center() {
    let scene = SceneCore::with_seed(800.0, 600.0, 1);

    assert_eq!(scene.shape_count(), 10);
    assert_eq!(scene.shape_kind(), ShapeKind::Bubble);
    for shape in scene.shapes() {
        assert_eq!(shape.motion().position, Vec2::new(400.0, 300.0));
    }
}

#[test]
fn rebuild_produces_exactly_n_shapes_of_kind() {
    let mut scene = SceneCore::with_seed(800.0, 600.0, 7);

    for n in [0, 1, 5, 250] {
        for kind in ShapeKind::ALL {
            scene.apply_configuration(config(n, kind));
            assert_eq!(scene.shape_count(), n as usize);
            assert_eq!(scene.shape_kind(), kind);
            assert!(scene.shapes().iter().all(|s| s.kind() == kind));
        }
    }
}

#[test]
fn three_bubbles_spawn_at_explicit_origin() {
    let cfg = Configuration {
        shape_count: 3,
        size: 10.0,
        shape_kind: ShapeKind::Bubble,
        ..Configuration::default()
    }
    .with_origin(400.0, 300.0);
    let scene = SceneCore::with_config(1024.0, 768.0, cfg, 3);

    assert_eq!(scene.shape_count(), 3);
    for shape in scene.shapes() {
        assert_eq!(shape.motion().position, Vec2::new(400.0, 300.0));
    }
}

#[test]
fn rebuild_twice_rerolls_velocities() {
    let mut scene = SceneCore::with_seed(800.0, 600.0, 11);
    let cfg = config(20, ShapeKind::Square);

    scene.apply_configuration(cfg.clone());
    let first: Vec<Vec2> = scene.shapes().iter().map(|s| s.motion().velocity).collect();
    scene.apply_configuration(cfg);
    let second: Vec<Vec2> = scene.shapes().iter().map(|s| s.motion().velocity).collect();

    assert_eq!(first.len(), second.len());
    assert_ne!(first, second);
}

#[test]
fn rebuild_discards_animation_state() {
    let mut scene = SceneCore::with_seed(800.0, 600.0, 2);
    for _ in 0..30 {
        scene.frame();
    }
    assert!(scene.shapes().iter().any(|s| s.motion().position != Vec2::new(400.0, 300.0)));

    scene.apply_configuration(config(10, ShapeKind::Bubble));
    assert!(scene.shapes().iter().all(|s| s.motion().position == Vec2::new(400.0, 300.0)));
}

#[test]
fn unsupported_kind_leaves_previous_collection() {
    let mut scene = SceneCore::with_seed(800.0, 600.0, 5);
    scene.apply_configuration(config(4, ShapeKind::Square));
    scene.frame();
    let before: Vec<Shape> = scene.shapes().to_vec();
    let style_before = scene.style().clone();

    let err = scene
        .configure_json(r##"{"shapeCount": 9, "size": 99, "fillColor": "#123456", "shapeKind": "Triangle"}"##)
        .unwrap_err();

    assert!(matches!(err, ConfigError::UnsupportedShapeKind(ref k) if k == "Triangle"));
    assert_eq!(scene.shapes(), &before[..]);
    assert_eq!(scene.style(), &style_before);
    assert_eq!(scene.configuration().shape_kind, ShapeKind::Square);
}

#[test]
fn configure_from_controls_rebuilds() {
    let mut scene = SceneCore::with_seed(800.0, 600.0, 5);
    scene.configure(3, 4.0, "#00ff00", 2.0, "Square").unwrap();

    assert_eq!(scene.shape_count(), 3);
    assert_eq!(scene.shape_kind(), ShapeKind::Square);
    assert_eq!(scene.style().fill_color, Color::rgb(0, 255, 0));
    assert_eq!(scene.style().stroke_weight, 2.0);
}

#[test]
fn negative_control_count_builds_nothing() {
    let mut scene = SceneCore::with_seed(800.0, 600.0, 5);
    scene.configure(-3, 4.0, "#00ff00", 2.0, "Bubble").unwrap();
    assert_eq!(scene.shape_count(), 0);
}

#[test]
fn frame_clears_then_updates_and_draws_in_order() {
    let cfg = Configuration {
        shape_count: 2,
        size: 5.0,
        fill_color: Color::rgb(9, 9, 9),
        stroke_weight: 4.0,
        origin: Some(Vec2::new(100.0, 100.0)),
        shape_kind: ShapeKind::Bubble,
    };
    let mut scene = SceneCore::with_config(800.0, 600.0, cfg, 9);
    let velocities: Vec<Vec2> = scene.shapes().iter().map(|s| s.motion().velocity).collect();

    let commands = scene.frame().commands().to_vec();

    assert_eq!(commands.len(), 1 + 2 * 4);
    assert_eq!(commands[0], DrawCommand::Background { color: BACKGROUND });
    for (i, v) in velocities.iter().enumerate() {
        let base = 1 + i * 4;
        assert_eq!(commands[base], DrawCommand::Stroke { color: STROKE_COLOR });
        assert_eq!(commands[base + 1], DrawCommand::StrokeWeight { weight: 4.0 });
        assert_eq!(commands[base + 2], DrawCommand::Fill { color: Color::rgb(9, 9, 9) });
        // Drawn at the position after this frame's update.
        assert_eq!(
            commands[base + 3],
            DrawCommand::Ellipse { x: 100.0 + v.x, y: 100.0 + v.y, diameter: 10.0 }
        );
    }
    assert_eq!(scene.frame_count(), 1);
}

#[test]
fn empty_scene_still_clears() {
    let mut scene = SceneCore::with_config(800.0, 600.0, config(0, ShapeKind::Bubble), 1);
    let list = scene.frame();
    assert_eq!(list.commands(), &[DrawCommand::Background { color: BACKGROUND }]);
}

#[test]
fn frame_reuses_draw_list() {
    let mut scene = SceneCore::with_config(800.0, 600.0, config(3, ShapeKind::Square), 1);
    scene.frame();
    let len = scene.frame().len();
    assert_eq!(len, 1 + 3 * 4);
    assert_eq!(scene.draw_list().len(), len);
}

#[test]
fn shapes_stay_near_canvas_over_many_frames() {
    let mut scene = SceneCore::with_config(200.0, 100.0, config(50, ShapeKind::Bubble), 77);
    for _ in 0..5_000 {
        scene.frame();
        for shape in scene.shapes() {
            let p = shape.motion().position;
            // Loose reflection allows at most one step of overshoot.
            assert!(p.x >= -2.0 && p.x <= 202.0, "x escaped: {}", p.x);
            assert!(p.y >= -2.0 && p.y <= 102.0, "y escaped: {}", p.y);
        }
    }
}

#[test]
fn resize_changes_bounds_but_keeps_shapes() {
    let mut scene = SceneCore::with_seed(800.0, 600.0, 4);
    let before = scene.shapes().to_vec();
    scene.set_canvas_size(400.0, 300.0);

    assert_eq!(scene.shapes(), &before[..]);
    assert_eq!(scene.canvas_width(), 400.0);

    // Default origin follows the new canvas on the next rebuild.
    scene.apply_configuration(Configuration::default());
    assert_eq!(scene.style().origin, Vec2::new(200.0, 150.0));
}

#[test]
fn perf_metrics_track_frames_and_rebuilds() {
    let mut scene = SceneCore::with_config(800.0, 600.0, config(6, ShapeKind::Bubble), 1);
    assert_eq!(scene.get_perf_stats().shape_count(), 0);

    scene.enable_perf_metrics(true);
    scene.apply_configuration(config(8, ShapeKind::Square));
    scene.frame();

    let stats = scene.get_perf_stats();
    assert_eq!(stats.rebuilds(), 1);
    assert_eq!(stats.shapes_updated(), 8);
    assert_eq!(stats.shape_count(), 8);
    assert_eq!(stats.frame(), 1);
    assert!(stats.frame_ms() >= 0.0);
}

#[test]
fn shapes_json_lists_every_shape() {
    let scene = SceneCore::with_config(800.0, 600.0, config(2, ShapeKind::Square), 1);
    let value: serde_json::Value = serde_json::from_str(&scene.shapes_json()).unwrap();
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["kind"], "Square");
    assert_eq!(list[0]["position"]["x"], 400.0);
}

#[test]
fn default_scene_uses_default_canvas() {
    let scene = SceneCore::default();
    assert_eq!(scene.canvas_width(), DEFAULT_CANVAS_WIDTH);
    assert_eq!(scene.canvas_height(), DEFAULT_CANVAS_HEIGHT);
    assert_eq!(scene.configuration(), &Configuration::default());
}

#[test]
fn perf_metrics_count_reflected_axes() {
    let cfg = config(5, ShapeKind::Bubble).with_origin(0.0, 0.0);
    let mut scene = SceneCore::with_config(800.0, 600.0, cfg, 21);
    scene.enable_perf_metrics(true);

    let velocities: Vec<Vec2> = scene.shapes().iter().map(|s| s.motion().velocity).collect();
    scene.frame();

    // From the corner, an axis escapes exactly when its velocity is negative.
    let expected: u32 = velocities
        .iter()
        .map(|v| (v.x < 0.0) as u32 + (v.y < 0.0) as u32)
        .sum();
    let escaped: u32 = scene
        .shapes()
        .iter()
        .map(|s| {
            let p = s.motion().position;
            (p.x < 0.0) as u32 + (p.y < 0.0) as u32
        })
        .sum();

    assert_eq!(escaped, expected);
    assert_eq!(scene.get_perf_stats().reflections(), expected);
}
