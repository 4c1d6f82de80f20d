use super::*;

#[test]
fn unknown_names_fall_back_to_neutral() {
    assert_eq!(PoseKind::from_name("moonwalking"), PoseKind::Neutral);
    assert_eq!(PoseKind::from_name(""), PoseKind::Neutral);
    assert_eq!(PoseKind::from_name("Jumping_Jacks"), PoseKind::JumpingJacks);
    assert_eq!(PoseKind::from_name(" waving "), PoseKind::Waving);
}

#[test]
fn actions_without_a_pose_are_neutral() {
    assert_eq!(PoseKind::for_action(Some(Action::Flying)), PoseKind::Neutral);
    assert_eq!(PoseKind::for_action(Some(Action::Swimming)), PoseKind::Neutral);
    assert_eq!(PoseKind::for_action(None), PoseKind::Neutral);
    assert_eq!(PoseKind::for_action(Some(Action::Running)), PoseKind::Running);
}

#[test]
fn neutral_pose_ignores_phase() {
    let a = pose(PoseKind::Neutral, &Motion::at(0.1, 3.0));
    let b = pose(PoseKind::Neutral, &Motion::at(0.7, 3.0));
    assert_eq!(a, b);
}

#[test]
fn jumping_jacks_raise_arms_mid_cycle() {
    let start = pose(PoseKind::JumpingJacks, &Motion::at(0.0, 1.0));
    let mid = pose(PoseKind::JumpingJacks, &Motion::at(0.5, 1.0));
    assert!(mid.left_arm > start.left_arm + 2.0);
    assert!(mid.left_leg > start.left_leg);
    assert_eq!(mid.left_arm, mid.right_arm);
}

#[test]
fn running_swings_limbs_in_opposition() {
    let p = pose(PoseKind::Running, &Motion::at(0.25, 1.0));
    assert!(p.left_leg < 0.0 && p.right_leg > 0.0);
    assert!(p.left_arm > p.right_arm);
}

#[test]
fn sitting_is_seated() {
    assert!(pose(PoseKind::Sitting, &Motion::still()).seated);
    assert!(!pose(PoseKind::Waving, &Motion::still()).seated);
}
