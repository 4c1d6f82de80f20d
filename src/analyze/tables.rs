use crate::analyze::attributes::{
    Action, Age, DetailLevel, Emotion, Gender, Lighting, Material, Setting, Style, SubjectKind,
    Texture, TimeOfDay, Weather,
};
use crate::shading::color::Rgb;

/// One `(tag, keywords)` entry of an ordered first-match table.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Rule<T: 'static> {
    pub(crate) tag: T,
    pub(crate) keywords: &'static [&'static str],
}

const fn rule<T>(tag: T, keywords: &'static [&'static str]) -> Rule<T> {
    Rule { tag, keywords }
}

pub(crate) const DEFAULT_COLOR: Rgb = Rgb::new(0x1e, 0x88, 0xe5);

pub(crate) static COLORS: &[Rule<Rgb>] = &[
    rule(Rgb::new(0xe5, 0x39, 0x35), &["red", "crimson", "scarlet", "ruby", "cherry"]),
    rule(Rgb::new(0xfb, 0x8c, 0x00), &["orange", "amber", "tangerine", "peach"]),
    rule(Rgb::new(0xfd, 0xd8, 0x35), &["yellow", "gold", "golden", "lemon", "mustard"]),
    rule(Rgb::new(0x43, 0xa0, 0x47), &["green", "emerald", "lime", "olive", "jade"]),
    rule(DEFAULT_COLOR, &["blue", "azure", "navy", "sapphire", "cobalt"]),
    rule(Rgb::new(0x00, 0xac, 0xc1), &["cyan", "teal", "turquoise", "aqua"]),
    rule(Rgb::new(0x8e, 0x24, 0xaa), &["purple", "violet", "lavender", "magenta", "lilac"]),
    rule(Rgb::new(0xec, 0x40, 0x7a), &["pink", "rose", "salmon", "fuchsia"]),
    rule(Rgb::new(0x6d, 0x4c, 0x41), &["brown", "chocolate", "coffee", "bronze"]),
    rule(Rgb::new(0x21, 0x21, 0x21), &["black", "ebony", "onyx"]),
    rule(Rgb::new(0xfa, 0xfa, 0xfa), &["white", "ivory", "pearl"]),
    rule(Rgb::new(0x9e, 0x9e, 0x9e), &["gray", "grey", "silver", "ash"]),
];

pub(crate) static SUBJECTS: &[Rule<SubjectKind>] = &[
    rule(SubjectKind::Woman, &["woman", "women", "girl", "lady", "ladies"]),
    rule(SubjectKind::Person, &["person", "people", "human", "someone", "athlete", "dancer"]),
    rule(SubjectKind::Child, &["child", "children", "kid", "baby", "toddler"]),
    rule(SubjectKind::Man, &["man", "men", "boy", "guy", "gentleman"]),
    rule(SubjectKind::Dog, &["dog", "puppy", "hound"]),
    rule(SubjectKind::Cat, &["cat", "kitten", "kitty"]),
    rule(SubjectKind::Bird, &["bird", "eagle", "parrot", "owl", "sparrow"]),
    rule(SubjectKind::Horse, &["horse", "pony", "stallion"]),
    rule(SubjectKind::Fish, &["fish", "shark", "whale", "dolphin"]),
    rule(SubjectKind::Butterfly, &["butterfly", "butterflies", "moth"]),
    rule(SubjectKind::Car, &["car", "truck", "vehicle"]),
    rule(SubjectKind::House, &["house", "cottage", "cabin", "castle"]),
    rule(SubjectKind::Ball, &["ball"]),
    rule(SubjectKind::Robot, &["robot", "android", "machine"]),
    rule(SubjectKind::Boat, &["boat", "ship", "sailboat", "yacht"]),
    rule(SubjectKind::Tree, &["tree", "oak", "pine", "palm"]),
    rule(SubjectKind::Flower, &["flower", "tulip", "daisy", "blossom", "sunflower"]),
    rule(SubjectKind::Landscape, &["landscape", "scenery", "vista", "panorama"]),
    rule(SubjectKind::Waterfall, &["waterfall", "cascade"]),
    rule(SubjectKind::Skyline, &["skyline", "cityscape"]),
];

pub(crate) static ACTIONS: &[Rule<Action>] = &[
    rule(Action::JumpingJacks, &["jumping jack", "star jump"]),
    rule(Action::Waving, &["waving", "wave hello", "waves hello", "greeting"]),
    rule(Action::Running, &["running", "run", "jogging", "jog", "sprint"]),
    rule(Action::Walking, &["walking", "walk", "stroll", "hiking"]),
    rule(Action::Dancing, &["dancing", "dance"]),
    rule(Action::Jumping, &["jumping", "jump", "leap", "hopping"]),
    rule(Action::Sitting, &["sitting", "sits", "seated"]),
    rule(Action::Flying, &["flying", "fly", "flies", "soaring"]),
    rule(Action::Swimming, &["swimming", "swim"]),
];

pub(crate) static SETTINGS: &[Rule<Setting>] = &[
    rule(Setting::Forest, &["forest", "woods", "jungle", "woodland"]),
    rule(Setting::Beach, &["beach", "shore", "seaside", "coast"]),
    rule(Setting::Ocean, &["ocean", "sea", "underwater", "lake"]),
    rule(Setting::City, &["city", "street", "urban", "downtown"]),
    rule(Setting::Mountain, &["mountain", "hill", "peak", "cliff"]),
    rule(Setting::Desert, &["desert", "dune", "sahara"]),
    rule(Setting::Space, &["outer space", "space", "galaxy", "cosmos", "planet"]),
    rule(Setting::Park, &["park", "garden", "meadow", "lawn"]),
    rule(Setting::Indoor, &["indoor", "room", "kitchen", "office", "studio"]),
];

pub(crate) static TIMES_OF_DAY: &[Rule<TimeOfDay>] = &[
    rule(TimeOfDay::Morning, &["morning", "sunrise", "dawn"]),
    rule(TimeOfDay::Afternoon, &["afternoon", "noon", "midday"]),
    rule(TimeOfDay::Evening, &["evening", "sunset", "dusk", "twilight"]),
    rule(TimeOfDay::Night, &["night", "midnight", "moonlit", "moonlight"]),
];

pub(crate) static WEATHER: &[Rule<Weather>] = &[
    rule(Weather::Sunny, &["sunny", "sunshine", "clear sky"]),
    rule(Weather::Stormy, &["storm", "stormy", "thunder*"]),
    rule(Weather::Rainy, &["rain", "rainy", "raining", "rainfall", "drizzle", "shower"]),
    rule(Weather::Snowy, &["snow", "snowy", "snowing", "snowfall", "blizzard", "winter"]),
    rule(Weather::Foggy, &["fog", "foggy", "mist", "misty", "haze", "hazy"]),
    rule(Weather::Cloudy, &["cloud", "cloudy", "overcast", "grey sky", "gray sky"]),
];

pub(crate) static EMOTIONS: &[Rule<Emotion>] = &[
    rule(Emotion::Happy, &["happy", "joy", "joyful", "smiling", "smile", "cheerful"]),
    rule(Emotion::Sad, &["sad", "crying", "gloomy", "lonely"]),
    rule(Emotion::Angry, &["angry", "furious", "rage"]),
    rule(Emotion::Calm, &["calm", "peaceful", "serene", "relaxed"]),
    rule(Emotion::Excited, &["excited", "thrilled", "energetic"]),
    rule(Emotion::Surprised, &["surprised", "shocked", "amazed"]),
];

pub(crate) static STYLES: &[Rule<Style>] = &[
    rule(Style::Realistic, &["realistic", "photorealistic", "photo", "lifelike"]),
    rule(Style::Cartoon, &["cartoon", "animated", "comic", "anime"]),
    rule(Style::Watercolor, &["watercolor", "watercolour"]),
    rule(Style::OilPainting, &["oil painting", "painting", "painted"]),
    rule(Style::Minimalist, &["minimalist", "minimal"]),
    rule(Style::Abstract, &["abstract", "geometric"]),
    rule(Style::PixelArt, &["pixel art", "pixel", "8-bit", "retro game"]),
];

pub(crate) static GENDERS: &[Rule<Gender>] = &[
    rule(Gender::Female, &["woman", "women", "girl", "lady", "female"]),
    rule(Gender::Male, &["man", "men", "boy", "guy", "male", "gentleman"]),
];

pub(crate) static AGES: &[Rule<Age>] = &[
    rule(Age::Child, &["child", "kid", "baby", "toddler", "boy", "girl"]),
    rule(Age::Teen, &["teen", "teenager", "adolescent"]),
    rule(Age::Elderly, &["elderly", "old man", "old woman", "senior", "grandma", "grandpa"]),
    rule(Age::Adult, &["adult", "man", "woman", "lady", "guy"]),
];

pub(crate) static MATERIALS: &[Rule<Material>] = &[
    rule(Material::Metal, &["metal", "steel", "chrome", "iron", "copper"]),
    rule(Material::Glass, &["glass", "crystal", "transparent", "translucent"]),
    rule(Material::Skin, &["skin", "portrait", "face"]),
    rule(Material::Matte, &["matte", "plastic", "wooden", "stone", "clay", "paper"]),
];

pub(crate) static LIGHTING: &[Rule<Lighting>] = &[
    rule(Lighting::Backlit, &["backlit", "backlight", "silhouette"]),
    rule(Lighting::Dramatic, &["dramatic", "spotlight", "chiaroscuro", "moody"]),
    rule(Lighting::Soft, &["soft light", "soft lighting", "diffuse"]),
    rule(Lighting::Neon, &["neon", "glowing", "cyberpunk"]),
    rule(Lighting::GoldenHour, &["golden hour", "warm light"]),
    rule(Lighting::Bright, &["bright", "sunlit", "well lit"]),
    rule(Lighting::Moonlight, &["moonlight", "moonlit"]),
    rule(Lighting::Overcast, &["overcast", "flat light"]),
];

pub(crate) static TEXTURES: &[Rule<Texture>] = &[
    rule(Texture::Smooth, &["smooth", "polished", "sleek"]),
    rule(Texture::Rough, &["rough", "rugged", "coarse", "gritty"]),
    rule(Texture::Furry, &["furry", "fluffy", "fuzzy"]),
    rule(Texture::Shiny, &["shiny", "glossy", "sparkly", "glittering"]),
];

pub(crate) static DETAIL: &[Rule<DetailLevel>] = &[
    rule(DetailLevel::High, &["highly detailed", "detailed", "intricate", "4k", "8k", "hd"]),
    rule(DetailLevel::Low, &["simple", "sketch", "rough draft", "low detail"]),
];

pub(crate) const DEPTH_OF_FIELD: &[&str] = &[
    "depth of field",
    "bokeh",
    "blurry background",
    "blurred background",
    "shallow focus",
    "macro",
];

/// Keyword lists for each shape/motion flag, in `ShapeFlags` field order. Verb stems end in `*`.
pub(crate) struct ShapeKeywords {
    pub(crate) circles: &'static [&'static str],
    pub(crate) squares: &'static [&'static str],
    pub(crate) triangles: &'static [&'static str],
    pub(crate) stars: &'static [&'static str],
    pub(crate) waves: &'static [&'static str],
    pub(crate) spiral: &'static [&'static str],
    pub(crate) gradient: &'static [&'static str],
    pub(crate) pattern: &'static [&'static str],
    pub(crate) rotation: &'static [&'static str],
    pub(crate) pulse: &'static [&'static str],
    pub(crate) float: &'static [&'static str],
    pub(crate) zoom: &'static [&'static str],
}

pub(crate) static SHAPES: ShapeKeywords = ShapeKeywords {
    circles: &["circle", "round", "ball", "sphere", "dot", "bubble", "orb"],
    squares: &["square", "box", "cube", "block", "rectangle"],
    triangles: &["triangle", "pyramid"],
    stars: &["star", "starry", "sparkl*"],
    waves: &["wave", "ripple", "wavy"],
    spiral: &["spiral", "swirl*", "vortex"],
    gradient: &["gradient", "ombre", "fade", "fading"],
    pattern: &["pattern", "grid", "checker*", "tile", "tiled", "mosaic"],
    rotation: &["rotat*", "spin*", "twirl*", "revolv*"],
    pulse: &["puls*", "throb*", "heartbeat", "beat", "beating"],
    float: &["float*", "drift*", "hover*"],
    zoom: &["zoom*", "grow*", "expand*", "shrink*"],
};
