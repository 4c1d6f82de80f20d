use super::*;
use crate::analyze::attributes::{
    Action, Age, DetailLevel, Gender, Setting, SubjectCategory, SubjectKind,
};

#[test]
fn keywords_match_whole_words_with_plurals() {
    assert!(contains_keyword("a man running", "running"));
    assert!(contains_keyword("two cats", "cat"));
    assert!(contains_keyword("cardboard boxes", "box"));
    assert!(!contains_keyword("a scarlet dress", "car"));
    assert!(!contains_keyword("a woman", "man"));
    assert!(!contains_keyword("a mandolin", "man"));
    assert!(!contains_keyword("a red carpet", "car"));
    assert!(contains_keyword("(red)", "red"));
    assert!(!contains_keyword("anything", ""));
    assert!(!contains_keyword("anything", "*"));
}

#[test]
fn stems_match_any_word_ending() {
    assert!(contains_keyword("slowly rotating", "rotat*"));
    assert!(contains_keyword("a pulsating orb", "puls*"));
    assert!(!contains_keyword("impulse", "puls*"));
}

#[test]
fn longer_words_do_not_trigger_shorter_keywords() {
    let a = analyze_prompt("many cats on a sofa");
    assert_eq!(a.subject.map(|s| s.kind), Some(SubjectKind::Cat));
    assert_eq!(a.gender, None);

    assert_eq!(analyze_prompt("a mandolin").subject, None);
    assert_eq!(analyze_prompt("a gothic cathedral").subject, None);
    assert_eq!(analyze_prompt("a persian carpet").subject, None);
    assert!(!analyze_prompt("the boxer rebellion").shapes.squares);
    assert_eq!(analyze_prompt("a mandolin").age, None);
}

#[test]
fn first_match_respects_table_order() {
    let a = analyze_prompt("a woman and a man");
    assert_eq!(a.subject.map(|s| s.kind), Some(SubjectKind::Woman));
    assert_eq!(a.gender, Some(Gender::Female));

    let a = analyze_prompt("a man and a woman");
    assert_eq!(a.subject.map(|s| s.kind), Some(SubjectKind::Woman));

    let a = analyze_prompt("kids doing jumping jacks");
    assert_eq!(a.action, Some(Action::JumpingJacks));
    let a = analyze_prompt("a jumping dog");
    assert_eq!(a.action, Some(Action::Jumping));
}

#[test]
fn colors_map_exactly_or_default_to_blue() {
    for (prompt, hex) in [
        ("a crimson sunset", "#e53935"),
        ("GREEN hills", "#43a047"),
        ("purple haze", "#8e24aa"),
        ("a grey stone", "#9e9e9e"),
    ] {
        let a = analyze_prompt(prompt);
        assert_eq!(a.primary_color, Rgb::from_hex(hex).unwrap(), "{prompt}");
    }
    assert_eq!(
        analyze_prompt("nothing in particular").primary_color,
        DEFAULT_PRIMARY_COLOR
    );
    assert_eq!(analyze_prompt("").primary_color, DEFAULT_PRIMARY_COLOR);
}

#[test]
fn subject_categories_cover_every_table_entry() {
    for r in tables::SUBJECTS {
        let a = analyze_prompt(&format!("a {}", r.keywords[0]));
        let s = a.subject.expect("table keyword selects a subject");
        assert_eq!(s.kind, r.tag);
        assert_eq!(s.category, r.tag.category());
    }
    assert_eq!(
        analyze_prompt("an old oak").subject.map(|s| s.category),
        Some(SubjectCategory::Plant)
    );
}

#[test]
fn material_defaults_to_skin_for_people_only() {
    assert_eq!(analyze_prompt("a girl").material, Some(Material::Skin));
    assert_eq!(analyze_prompt("a steel robot").material, Some(Material::Metal));
    assert_eq!(analyze_prompt("a robot").material, None);
    assert_eq!(analyze_prompt("a glass man").material, Some(Material::Glass));
}

#[test]
fn lighting_prefers_explicit_then_time_then_weather() {
    assert_eq!(
        analyze_prompt("a backlit tree at sunset").lighting,
        Some(Lighting::Backlit)
    );
    assert_eq!(
        analyze_prompt("a tree at night").lighting,
        Some(Lighting::Moonlight)
    );
    assert_eq!(
        analyze_prompt("a tree in the rain").lighting,
        Some(Lighting::Overcast)
    );
    assert_eq!(analyze_prompt("a tree").lighting, None);
    assert_eq!(derive_lighting(None, Some(Weather::Sunny)), Some(Lighting::Bright));
}

#[test]
fn detail_depth_and_flags() {
    let a = analyze_prompt("Highly detailed spinning cube with bokeh");
    assert_eq!(a.detail, DetailLevel::High);
    assert!(a.depth_of_field);
    assert!(a.shapes.squares);
    assert!(a.shapes.rotation);
    assert!(!a.shapes.circles);

    let a = analyze_prompt("a simple floating star pattern");
    assert_eq!(a.detail, DetailLevel::Low);
    assert!(a.shapes.stars && a.shapes.float && a.shapes.pattern);
    assert!(!a.depth_of_field);
}

#[test]
fn people_get_age_and_setting() {
    let a = analyze_prompt("an elderly woman walking on the beach in the morning");
    assert_eq!(a.age, Some(Age::Elderly));
    assert_eq!(a.action, Some(Action::Walking));
    assert_eq!(a.setting, Some(Setting::Beach));
    assert_eq!(a.time_of_day, Some(TimeOfDay::Morning));
    assert_eq!(a.lighting, Some(Lighting::Soft));
}
