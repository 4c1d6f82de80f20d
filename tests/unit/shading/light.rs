use super::*;

const BASE: Rgb = Rgb::new(120, 90, 60);

fn shade(lighting: Option<Lighting>, material: Option<Material>) -> RadialShading {
    radial_shading(Point::new(50.0, 50.0), 20.0, BASE, lighting, material)
}

#[test]
fn stop_counts_follow_material() {
    assert_eq!(shade(None, Some(Material::Skin)).stops.len(), 4);
    assert_eq!(shade(None, Some(Material::Metal)).stops.len(), 6);
    assert_eq!(shade(None, Some(Material::Glass)).stops.len(), 5);
    assert_eq!(shade(None, Some(Material::Matte)).stops.len(), 4);
    assert_eq!(shade(None, None).stops.len(), 4);
}

#[test]
fn offsets_are_ascending_from_zero_to_one() {
    for m in [
        None,
        Some(Material::Skin),
        Some(Material::Metal),
        Some(Material::Glass),
    ] {
        let s = shade(None, m);
        assert_eq!(s.stops.first().unwrap().offset, 0.0);
        assert_eq!(s.stops.last().unwrap().offset, 1.0);
        assert!(s.stops.windows(2).all(|w| w[0].offset < w[1].offset));
    }
}

#[test]
fn shading_is_pure() {
    let a = shade(Some(Lighting::Dramatic), Some(Material::Metal));
    let b = shade(Some(Lighting::Dramatic), Some(Material::Metal));
    assert_eq!(a, b);
}

#[test]
fn light_comes_from_upper_left_unless_backlit() {
    let s = shade(None, None);
    assert!(s.focus.x < s.center.x && s.focus.y < s.center.y);
    let s = shade(Some(Lighting::Backlit), None);
    assert!(s.focus.x > s.center.x && s.focus.y > s.center.y);
}

#[test]
fn metal_has_more_contrast_than_skin() {
    let spread = |s: &RadialShading| {
        let lumas: Vec<f64> = s.stops.iter().map(|st| st.color.luma()).collect();
        let max = lumas.iter().cloned().fold(f64::MIN, f64::max);
        let min = lumas.iter().cloned().fold(f64::MAX, f64::min);
        max - min
    };
    let skin = shade(None, Some(Material::Skin));
    let metal = shade(None, Some(Material::Metal));
    assert!(spread(&metal) > spread(&skin));

    let soft = shade(Some(Lighting::Soft), None);
    let dramatic = shade(Some(Lighting::Dramatic), None);
    assert!(spread(&dramatic) > spread(&soft));
}

#[test]
fn sampling_is_brightest_at_focus() {
    let s = shade(None, Some(Material::Glass));
    let at_focus = s.color_at(s.focus).luma();
    let at_edge = s.color_at(Point::new(70.0, 70.0)).luma();
    assert!(at_focus > at_edge);
    assert_eq!(s.color_at_offset(-1.0), s.stops[0].color);
    assert_eq!(s.color_at_offset(2.0), s.stops.last().unwrap().color);
}
