//! Hardcoded rectangle layouts for each pose.
//!
//! Coordinates are logical units on the 16x24 base grid. Fills are applied
//! in slice order, so a later rectangle overwrites an earlier one wherever
//! they overlap.

use super::color::ColorKey;
use super::color::ColorKey::{Blood, Eyes, Hair, Pants, Shirt, Shoes, Skin};
use super::pose::Pose;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FillRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub color: ColorKey,
}

const fn rect(x: u32, y: u32, w: u32, h: u32, color: ColorKey) -> FillRect {
    FillRect { x, y, w, h, color }
}

const DUCK_Y_OFFSET: u32 = 16;

const DUCK: [FillRect; 4] = [
    rect(10, DUCK_Y_OFFSET, 4, 4, Skin),
    rect(12, DUCK_Y_OFFSET, 2, 2, Hair),
    rect(4, 2 + DUCK_Y_OFFSET, 8, 4, Shirt),
    rect(0, 4 + DUCK_Y_OFFSET, 6, 4, Pants),
];

// No head: the body lies collapsed with blood at the neck.
const DEAD: [FillRect; 9] = [
    rect(4, 7, 8, 7, Shirt),
    rect(4, 14, 8, 4, Pants),
    rect(2, 18, 4, 2, Pants),
    rect(10, 18, 4, 2, Pants),
    rect(0, 20, 2, 2, Shoes),
    rect(14, 20, 2, 2, Shoes),
    rect(6, 6, 4, 1, Blood),
    rect(5, 5, 1, 2, Blood),
    rect(10, 5, 1, 2, Blood),
];

const HEAD_AND_TORSO: [FillRect; 4] = [
    rect(5, 0, 6, 3, Hair),
    rect(5, 2, 6, 5, Skin),
    rect(9, 3, 2, 2, Eyes),
    rect(4, 7, 8, 7, Shirt),
];

const ARMS_RAISED: [FillRect; 2] = [rect(2, 5, 2, 4, Skin), rect(12, 5, 2, 4, Skin)];
const ARMS_LEFT_FORWARD: [FillRect; 2] = [rect(2, 8, 2, 4, Skin), rect(12, 10, 2, 4, Skin)];
const ARMS_RIGHT_FORWARD: [FillRect; 2] = [rect(2, 10, 2, 4, Skin), rect(12, 8, 2, 4, Skin)];

const UPPER_PANTS: [FillRect; 1] = [rect(4, 14, 8, 4, Pants)];

const LEGS_JUMP: [FillRect; 2] = [rect(4, 18, 3, 4, Pants), rect(9, 18, 3, 4, Pants)];
const LEGS_RUN1: [FillRect; 2] = [rect(3, 18, 3, 6, Pants), rect(10, 18, 3, 4, Pants)];
const LEGS_RUN3: [FillRect; 2] = [rect(10, 18, 3, 6, Pants), rect(3, 18, 3, 4, Pants)];
const LEGS_STRIDE: [FillRect; 2] = [rect(5, 18, 3, 5, Pants), rect(8, 18, 3, 5, Pants)];

const SHOES_RUN1: [FillRect; 2] = [rect(2, 22, 4, 2, Shoes), rect(10, 20, 4, 2, Shoes)];
const SHOES_RUN3: [FillRect; 2] = [rect(10, 22, 4, 2, Shoes), rect(2, 20, 4, 2, Shoes)];
const SHOES_STRIDE: [FillRect; 2] = [rect(4, 21, 4, 2, Shoes), rect(8, 21, 4, 2, Shoes)];

/// Ordered fill list for a pose
pub fn layout(pose: Pose) -> Vec<FillRect> {
    match pose {
        Pose::Run1 => upright(&ARMS_LEFT_FORWARD, &LEGS_RUN1, &SHOES_RUN1),
        Pose::Run2 => upright(&ARMS_RIGHT_FORWARD, &LEGS_STRIDE, &SHOES_STRIDE),
        Pose::Run3 => upright(&ARMS_LEFT_FORWARD, &LEGS_RUN3, &SHOES_RUN3),
        Pose::Run4 => upright(&ARMS_RIGHT_FORWARD, &LEGS_STRIDE, &SHOES_STRIDE),
        Pose::Jump => upright(&ARMS_RAISED, &LEGS_JUMP, &[]),
        Pose::Duck => DUCK.to_vec(),
        Pose::Dead => DEAD.to_vec(),
    }
}

fn upright(arms: &[FillRect], legs: &[FillRect], shoes: &[FillRect]) -> Vec<FillRect> {
    [&HEAD_AND_TORSO[..], arms, &UPPER_PANTS[..], legs, shoes].concat()
}
