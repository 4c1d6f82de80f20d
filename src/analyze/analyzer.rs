use crate::analyze::attributes::{
    Lighting, Material, PromptAttributes, ShapeFlags, Subject, TimeOfDay, Weather,
};
use crate::analyze::tables::{self, Rule};
use crate::shading::color::Rgb;

/// Color used when the prompt names none.
pub const DEFAULT_PRIMARY_COLOR: Rgb = tables::DEFAULT_COLOR;

/// Analyze a free-text prompt.
///
/// Matching is case-insensitive and word based: `cat` matches "cats" but not "cathedral", and verb
/// stems such as `spin*` match "spinning". Within each category the first table entry with any
/// matching keyword wins.
pub fn analyze_prompt(prompt: &str) -> PromptAttributes {
    let text = prompt.to_lowercase();

    let subject = first_match(tables::SUBJECTS, &text).map(Subject::new);
    let time_of_day = first_match(tables::TIMES_OF_DAY, &text);
    let weather = first_match(tables::WEATHER, &text);

    let material = first_match(tables::MATERIALS, &text)
        .or_else(|| subject.filter(|s| s.is_human()).map(|_| Material::Skin));
    let lighting =
        first_match(tables::LIGHTING, &text).or_else(|| derive_lighting(time_of_day, weather));

    PromptAttributes {
        primary_color: first_match(tables::COLORS, &text).unwrap_or(DEFAULT_PRIMARY_COLOR),
        shapes: shape_flags(&text),
        subject,
        action: first_match(tables::ACTIONS, &text),
        setting: first_match(tables::SETTINGS, &text),
        time_of_day,
        weather,
        emotion: first_match(tables::EMOTIONS, &text),
        style: first_match(tables::STYLES, &text),
        gender: first_match(tables::GENDERS, &text),
        age: first_match(tables::AGES, &text),
        material,
        lighting,
        texture: first_match(tables::TEXTURES, &text),
        depth_of_field: contains_any(&text, tables::DEPTH_OF_FIELD),
        detail: first_match(tables::DETAIL, &text).unwrap_or_default(),
    }
}

/// Lighting implied by time of day, then by weather.
pub fn derive_lighting(
    time_of_day: Option<TimeOfDay>,
    weather: Option<Weather>,
) -> Option<Lighting> {
    if let Some(t) = time_of_day {
        return Some(match t {
            TimeOfDay::Morning => Lighting::Soft,
            TimeOfDay::Afternoon => Lighting::Bright,
            TimeOfDay::Evening => Lighting::GoldenHour,
            TimeOfDay::Night => Lighting::Moonlight,
        });
    }
    match weather? {
        Weather::Cloudy | Weather::Rainy | Weather::Foggy | Weather::Snowy | Weather::Stormy => {
            Some(Lighting::Overcast)
        }
        Weather::Sunny => Some(Lighting::Bright),
    }
}

pub(crate) fn first_match<T: Copy>(rules: &[Rule<T>], text: &str) -> Option<T> {
    rules
        .iter()
        .find(|r| contains_any(text, r.keywords))
        .map(|r| r.tag)
}

fn shape_flags(text: &str) -> ShapeFlags {
    let k = &tables::SHAPES;
    ShapeFlags {
        circles: contains_any(text, k.circles),
        squares: contains_any(text, k.squares),
        triangles: contains_any(text, k.triangles),
        stars: contains_any(text, k.stars),
        waves: contains_any(text, k.waves),
        spiral: contains_any(text, k.spiral),
        gradient: contains_any(text, k.gradient),
        pattern: contains_any(text, k.pattern),
        rotation: contains_any(text, k.rotation),
        pulse: contains_any(text, k.pulse),
        float: contains_any(text, k.float),
        zoom: contains_any(text, k.zoom),
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| contains_keyword(text, k))
}

/// `keyword` occurs in `text` as a whole word, optionally pluralized with `s`/`es`.
///
/// A keyword ending in `*` is a stem: only its start must sit on a word boundary.
pub(crate) fn contains_keyword(text: &str, keyword: &str) -> bool {
    let (stem, is_stem) = match keyword.strip_suffix('*') {
        Some(stem) => (stem, true),
        None => (keyword, false),
    };
    if stem.is_empty() {
        return false;
    }
    text.match_indices(stem).any(|(i, _)| {
        let starts_word = text[..i]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        starts_word && (is_stem || ends_word(&text[i + stem.len()..]))
    })
}

fn ends_word(rest: &str) -> bool {
    let rest = rest
        .strip_prefix("es")
        .or_else(|| rest.strip_prefix('s'))
        .unwrap_or(rest);
    rest.chars().next().is_none_or(|c| !c.is_alphanumeric())
}

#[cfg(test)]
#[path = "../../tests/unit/analyze/analyzer.rs"]
mod tests;
