use super::*;
use crate::analyze::analyzer::analyze_prompt;

fn canvas() -> Canvas {
    Canvas {
        width: 96,
        height: 64,
    }
}

#[test]
fn human_subjects_get_a_figure() {
    let attrs = analyze_prompt("a man running in a forest at sunset");
    let scene = compose_scene(&attrs, canvas(), 1, &Motion::still());
    assert!(matches!(scene.subject, SubjectLayout::Figure { .. }));
}

#[test]
fn other_subjects_get_shapes() {
    for prompt in ["a red circle", "a dog in the park", "a tree"] {
        let scene = compose_scene(&analyze_prompt(prompt), canvas(), 1, &Motion::still());
        assert!(matches!(scene.subject, SubjectLayout::Shapes { .. }), "{prompt}");
    }
}

#[test]
fn composition_is_pure() {
    let attrs = analyze_prompt("blue stars spinning");
    let m = Motion::at(0.4, 2.0);
    assert_eq!(
        compose_scene(&attrs, canvas(), 8, &m),
        compose_scene(&attrs, canvas(), 8, &m)
    );
}

#[test]
fn focus_is_nearest_shape() {
    let scene = compose_scene(&analyze_prompt("a red circle"), canvas(), 2, &Motion::still());
    let SubjectLayout::Shapes { shapes, .. } = &scene.subject else {
        panic!("expected shapes");
    };
    let nearest = shapes
        .iter()
        .min_by(|a, b| a.depth.total_cmp(&b.depth))
        .unwrap();
    assert_eq!(scene.focus(), nearest.center);
}

#[test]
fn drawn_scene_is_fully_covered() {
    let scene = compose_scene(&analyze_prompt("a woman waving"), canvas(), 4, &Motion::still());
    let surface = draw_scene(&scene).unwrap();
    assert_eq!((surface.width(), surface.height()), (96, 64));
    assert!(surface.data().chunks_exact(4).all(|px| px[3] == 255));
}
