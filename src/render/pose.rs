use crate::analyze::attributes::Action;
use crate::animation::motion::Motion;

/// Limb angles in radians, measured from hanging straight down. Positive swings the limb outward
/// (away from the body's midline).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose {
    /// Left arm (viewer's left).
    pub left_arm: f64,
    /// Right arm (viewer's right).
    pub right_arm: f64,
    /// Left leg.
    pub left_leg: f64,
    /// Right leg.
    pub right_leg: f64,
    /// Vertical lift of the whole figure, in `[0, 1]` of a hop height.
    pub bounce: f64,
    /// Whether the figure is seated.
    pub seated: bool,
}

/// Named poses. Actions without a dedicated pose render as `Neutral`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PoseKind {
    /// Arms relaxed, feet together.
    Neutral,
    /// Arms sweep overhead while legs spread.
    JumpingJacks,
    /// One arm raised and swaying.
    Waving,
    /// Wide, opposed arm/leg swing with a small hop.
    Running,
    /// Narrow opposed swing.
    Walking,
    /// Arms alternate up and down, hips sway.
    Dancing,
    /// Arms up, whole-body hop.
    Jumping,
    /// Seated on a bench; legs foreshortened toward the viewer.
    Sitting,
}

impl PoseKind {
    /// Pose used to depict `action`.
    pub fn for_action(action: Option<Action>) -> Self {
        match action {
            Some(Action::JumpingJacks) => Self::JumpingJacks,
            Some(Action::Waving) => Self::Waving,
            Some(Action::Running) => Self::Running,
            Some(Action::Walking) => Self::Walking,
            Some(Action::Dancing) => Self::Dancing,
            Some(Action::Jumping) => Self::Jumping,
            Some(Action::Sitting) => Self::Sitting,
            Some(Action::Flying) | Some(Action::Swimming) | None => Self::Neutral,
        }
    }

    /// Look up a pose by name (`"jumping jacks"`, `"waving"`, ...). Unknown names are neutral.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace(['_', '-'], " ").as_str() {
            "jumping jacks" | "jumping jack" => Self::JumpingJacks,
            "waving" | "wave" => Self::Waving,
            "running" | "run" => Self::Running,
            "walking" | "walk" => Self::Walking,
            "dancing" | "dance" => Self::Dancing,
            "jumping" | "jump" => Self::Jumping,
            "sitting" | "sit" => Self::Sitting,
            _ => Self::Neutral,
        }
    }
}

const REST_ARM: f64 = 0.18;

/// Limb angles for `kind` at the motion's phase.
pub fn pose(kind: PoseKind, motion: &Motion) -> Pose {
    let e = motion.eased;
    // Signed swing in [-1, 1] for opposed-limb gaits.
    let swing = (std::f64::consts::TAU * motion.phase).sin();
    match kind {
        PoseKind::Neutral => Pose {
            left_arm: REST_ARM,
            right_arm: REST_ARM,
            left_leg: 0.05,
            right_leg: 0.05,
            bounce: 0.0,
            seated: false,
        },
        PoseKind::JumpingJacks => Pose {
            left_arm: REST_ARM + e * 2.6,
            right_arm: REST_ARM + e * 2.6,
            left_leg: 0.05 + e * 0.4,
            right_leg: 0.05 + e * 0.4,
            bounce: motion.bounce * 0.5,
            seated: false,
        },
        PoseKind::Waving => Pose {
            left_arm: REST_ARM,
            right_arm: 2.4 + 0.35 * (e * 2.0 - 1.0),
            left_leg: 0.05,
            right_leg: 0.05,
            bounce: 0.0,
            seated: false,
        },
        PoseKind::Running => Pose {
            left_arm: 0.2 + 0.7 * swing,
            right_arm: 0.2 - 0.7 * swing,
            left_leg: 0.55 * -swing,
            right_leg: 0.55 * swing,
            bounce: motion.bounce * 0.25,
            seated: false,
        },
        PoseKind::Walking => Pose {
            left_arm: REST_ARM + 0.3 * swing,
            right_arm: REST_ARM - 0.3 * swing,
            left_leg: 0.25 * -swing,
            right_leg: 0.25 * swing,
            bounce: 0.0,
            seated: false,
        },
        PoseKind::Dancing => Pose {
            left_arm: 0.6 + 1.8 * e,
            right_arm: 2.4 - 1.8 * e,
            left_leg: 0.15 + 0.2 * e,
            right_leg: 0.35 - 0.2 * e,
            bounce: motion.bounce * 0.2,
            seated: false,
        },
        PoseKind::Jumping => Pose {
            left_arm: 0.4 + 2.2 * e,
            right_arm: 0.4 + 2.2 * e,
            left_leg: 0.1 + 0.15 * e,
            right_leg: 0.1 + 0.15 * e,
            bounce: motion.bounce,
            seated: false,
        },
        PoseKind::Sitting => Pose {
            left_arm: 0.35,
            right_arm: 0.35,
            left_leg: 0.3,
            right_leg: 0.3,
            bounce: 0.0,
            seated: true,
        },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pose.rs"]
mod tests;
