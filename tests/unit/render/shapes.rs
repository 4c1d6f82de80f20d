use super::*;
use crate::analyze::analyzer::analyze_prompt;

fn canvas() -> Canvas {
    Canvas {
        width: 400,
        height: 300,
    }
}

#[test]
fn circle_is_the_default_kind() {
    assert_eq!(shape_kinds(&analyze_prompt("something blue")), vec![ShapeKind::Circle]);
}

#[test]
fn flagged_kinds_all_appear() {
    let attrs = analyze_prompt("squares and triangles and stars");
    let shapes = shapes_for_frame(&attrs, canvas(), 5, &Motion::still());
    for kind in [ShapeKind::Square, ShapeKind::Triangle, ShapeKind::Star] {
        assert!(shapes.iter().any(|s| s.kind == kind), "{kind:?} missing");
    }
    assert!(!shapes.iter().any(|s| s.kind == ShapeKind::Circle));
}

#[test]
fn count_follows_detail() {
    let low = analyze_prompt("a simple red circle");
    let high = analyze_prompt("a highly detailed red circle");
    let still = Motion::still();
    assert_eq!(shapes_for_frame(&low, canvas(), 1, &still).len(), 3);
    assert_eq!(shapes_for_frame(&high, canvas(), 1, &still).len(), 10);
}

#[test]
fn sorted_back_to_front_with_depth_falloff() {
    let attrs = analyze_prompt("a red circle");
    let shapes = shapes_for_frame(&attrs, canvas(), 11, &Motion::still());
    assert!(shapes.windows(2).all(|w| w[0].depth >= w[1].depth));
    for s in &shapes {
        assert!(s.alpha() <= 1.0 && s.alpha() >= 0.45);
        assert!(s.size <= 0.32 * canvas().min_edge());
    }
}

#[test]
fn layout_is_seeded() {
    let attrs = analyze_prompt("a red circle");
    let m = Motion::still();
    assert_eq!(
        shapes_for_frame(&attrs, canvas(), 3, &m),
        shapes_for_frame(&attrs, canvas(), 3, &m)
    );
    assert_ne!(
        shapes_for_frame(&attrs, canvas(), 3, &m),
        shapes_for_frame(&attrs, canvas(), 4, &m)
    );
}

#[test]
fn rotation_flag_spins_shapes_over_time() {
    let attrs = analyze_prompt("rotating squares");
    let a = shapes_for_frame(&attrs, canvas(), 2, &Motion::at(0.0, 1.0));
    let b = shapes_for_frame(&attrs, canvas(), 2, &Motion::at(0.25, 1.0));
    assert!(a.iter().zip(&b).any(|(x, y)| (x.rotation - y.rotation).abs() > 0.1));
}

#[test]
fn decorations_follow_flags() {
    let attrs = analyze_prompt("a spiral pattern of waves");
    let decos = decorations_for(&attrs, &Motion::still());
    assert_eq!(decos.len(), 3);
    assert!(decorations_for(&analyze_prompt("a red circle"), &Motion::still()).is_empty());
}

#[test]
fn star_path_has_ten_points() {
    let shape = Shape {
        kind: ShapeKind::Star,
        center: Point::new(50.0, 50.0),
        size: 40.0,
        depth: 0.0,
        rotation: 0.0,
        color: Rgb::new(255, 0, 0),
    };
    let path = shape_path(&shape);
    let lines = path
        .elements()
        .iter()
        .filter(|el| matches!(el, kurbo::PathEl::LineTo(_)))
        .count();
    assert_eq!(lines, 9);
    let bbox = kurbo::Shape::bounding_box(&path);
    assert!(bbox.min_y() >= 29.9 && bbox.max_y() <= 70.1);
}
