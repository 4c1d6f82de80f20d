use crate::shading::color::Rgb;
use serde::Serialize;

/// Broad class of the depicted subject. Selects the rendering path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectCategory {
    /// People; rendered as a posed figure.
    Human,
    /// Animals.
    Animal,
    /// Man-made things.
    Object,
    /// Trees, flowers.
    Plant,
    /// Whole scenes (landscapes, skylines).
    Scene,
}

/// Recognized subject names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum SubjectKind {
    Woman,
    Person,
    Child,
    Man,
    Dog,
    Cat,
    Bird,
    Horse,
    Fish,
    Butterfly,
    Car,
    House,
    Ball,
    Robot,
    Boat,
    Tree,
    Flower,
    Landscape,
    Waterfall,
    Skyline,
}

impl SubjectKind {
    /// Category this subject belongs to.
    pub fn category(self) -> SubjectCategory {
        match self {
            Self::Woman | Self::Person | Self::Child | Self::Man => SubjectCategory::Human,
            Self::Dog | Self::Cat | Self::Bird | Self::Horse | Self::Fish | Self::Butterfly => {
                SubjectCategory::Animal
            }
            Self::Car | Self::House | Self::Ball | Self::Robot | Self::Boat => {
                SubjectCategory::Object
            }
            Self::Tree | Self::Flower => SubjectCategory::Plant,
            Self::Landscape | Self::Waterfall | Self::Skyline => SubjectCategory::Scene,
        }
    }

    /// Lowercase canonical name (`"man"`, `"dog"`, ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Woman => "woman",
            Self::Person => "person",
            Self::Child => "child",
            Self::Man => "man",
            Self::Dog => "dog",
            Self::Cat => "cat",
            Self::Bird => "bird",
            Self::Horse => "horse",
            Self::Fish => "fish",
            Self::Butterfly => "butterfly",
            Self::Car => "car",
            Self::House => "house",
            Self::Ball => "ball",
            Self::Robot => "robot",
            Self::Boat => "boat",
            Self::Tree => "tree",
            Self::Flower => "flower",
            Self::Landscape => "landscape",
            Self::Waterfall => "waterfall",
            Self::Skyline => "skyline",
        }
    }
}

/// The primary depicted entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Subject {
    /// Canonical subject name.
    pub kind: SubjectKind,
    /// Category derived from `kind`.
    pub category: SubjectCategory,
}

impl Subject {
    /// Build a subject, deriving its category.
    pub fn new(kind: SubjectKind) -> Self {
        Self {
            kind,
            category: kind.category(),
        }
    }

    /// Whether the human figure path renders this subject.
    pub fn is_human(self) -> bool {
        self.category == SubjectCategory::Human
    }
}

/// What the subject is doing. Human actions select a pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Action {
    JumpingJacks,
    Waving,
    Running,
    Walking,
    Dancing,
    Jumping,
    Sitting,
    Flying,
    Swimming,
}

/// Where the scene takes place. Drives the ground colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Setting {
    Forest,
    Beach,
    Ocean,
    City,
    Mountain,
    Desert,
    Space,
    Park,
    Indoor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Weather {
    Sunny,
    Stormy,
    Rainy,
    Snowy,
    Foggy,
    Cloudy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Calm,
    Excited,
    Surprised,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Style {
    Realistic,
    Cartoon,
    Watercolor,
    OilPainting,
    Minimalist,
    Abstract,
    PixelArt,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Gender {
    Female,
    Male,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Age {
    Child,
    Teen,
    Elderly,
    Adult,
}

/// Surface material; selects the gradient falloff in the shading engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Material {
    Skin,
    Metal,
    Glass,
    Matte,
}

/// Lighting condition; moves the light source and scales contrast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Lighting {
    Backlit,
    Dramatic,
    Soft,
    Neon,
    GoldenHour,
    Bright,
    Moonlight,
    Overcast,
}

impl Lighting {
    /// Human-readable name (`"golden hour"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Backlit => "backlit",
            Self::Dramatic => "dramatic",
            Self::Soft => "soft",
            Self::Neon => "neon",
            Self::GoldenHour => "golden hour",
            Self::Bright => "bright",
            Self::Moonlight => "moonlight",
            Self::Overcast => "overcast",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Texture {
    Smooth,
    Rough,
    Furry,
    Shiny,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum DetailLevel {
    Low,
    #[default]
    Medium,
    High,
}

/// Shape and motion flags. Each is matched independently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub struct ShapeFlags {
    pub circles: bool,
    pub squares: bool,
    pub triangles: bool,
    pub stars: bool,
    pub waves: bool,
    pub spiral: bool,
    pub gradient: bool,
    pub pattern: bool,
    pub rotation: bool,
    pub pulse: bool,
    pub float: bool,
    pub zoom: bool,
}

/// Everything the renderer needs to know about a prompt.
///
/// Every optional field is either a recognized value or `None`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PromptAttributes {
    /// Main color for clothing and abstract shapes.
    pub primary_color: Rgb,
    /// Shape and motion flags.
    pub shapes: ShapeFlags,
    /// Zero or one subject.
    pub subject: Option<Subject>,
    /// What the subject is doing.
    pub action: Option<Action>,
    /// Scene location.
    pub setting: Option<Setting>,
    /// Time of day.
    pub time_of_day: Option<TimeOfDay>,
    /// Weather.
    pub weather: Option<Weather>,
    /// Mood; shapes the figure's mouth.
    pub emotion: Option<Emotion>,
    /// Rendering style hint.
    pub style: Option<Style>,
    /// Figure gender hint.
    pub gender: Option<Gender>,
    /// Figure age hint.
    pub age: Option<Age>,
    /// Explicit material, or skin for human subjects.
    pub material: Option<Material>,
    /// Explicit lighting, else derived from time of day or weather.
    pub lighting: Option<Lighting>,
    /// Surface texture hint.
    pub texture: Option<Texture>,
    /// Request for a shallow-focus look.
    pub depth_of_field: bool,
    /// Requested level of detail.
    pub detail: DetailLevel,
}

impl PromptAttributes {
    /// Whether the human figure path applies.
    pub fn has_human_subject(&self) -> bool {
        self.subject.is_some_and(Subject::is_human)
    }
}
