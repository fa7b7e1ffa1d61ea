use std::fmt;
use std::str::FromStr;

use crate::error::SpriteError;
use crate::renderer::canvas::{BASE_HEIGHT, BASE_WIDTH};

/// Character stance selecting which rectangles are drawn
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Pose {
    Run1,
    Run2,
    Run3,
    Run4,
    Jump,
    Duck,
    Dead,
}

impl Pose {
    /// Export order used by the batch driver
    pub const ALL: [Pose; 7] = [
        Pose::Run1,
        Pose::Run2,
        Pose::Run3,
        Pose::Run4,
        Pose::Jump,
        Pose::Duck,
        Pose::Dead,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Pose::Run1 => "run1",
            Pose::Run2 => "run2",
            Pose::Run3 => "run3",
            Pose::Run4 => "run4",
            Pose::Jump => "jump",
            Pose::Duck => "duck",
            Pose::Dead => "dead",
        }
    }

    /// Texture key the game loads this frame under
    pub fn texture_key(self) -> String {
        format!("player_{}", self.name())
    }

    pub fn file_name(self) -> String {
        format!("{}.png", self.texture_key())
    }

    /// Collision body in logical units. Ducking halves the body and
    /// anchors it to the bottom of the frame.
    pub fn hitbox(self) -> Hitbox {
        match self {
            Pose::Duck => Hitbox {
                x: 0,
                y: BASE_HEIGHT / 2,
                width: BASE_WIDTH,
                height: BASE_HEIGHT / 2,
            },
            _ => Hitbox {
                x: 0,
                y: 0,
                width: BASE_WIDTH,
                height: BASE_HEIGHT,
            },
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pose {
    type Err = SpriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Pose::ALL
            .into_iter()
            .find(|pose| pose.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SpriteError::UnknownPose(s.to_string()))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Hitbox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Hitbox {
    /// Scale must already be validated.
    pub(crate) fn scaled(self, scale: u32) -> Hitbox {
        Hitbox {
            x: self.x * scale,
            y: self.y * scale,
            width: self.width * scale,
            height: self.height * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_poses() {
        assert_eq!("run1".parse::<Pose>(), Ok(Pose::Run1));
        assert_eq!(" Dead ".parse::<Pose>(), Ok(Pose::Dead));
        assert_eq!("JUMP".parse::<Pose>(), Ok(Pose::Jump));
        for pose in Pose::ALL {
            assert_eq!(pose.name().parse::<Pose>(), Ok(pose));
        }
    }

    #[test]
    fn test_parse_unknown_pose_fails_fast() {
        assert_eq!(
            "run5".parse::<Pose>(),
            Err(SpriteError::UnknownPose("run5".to_string()))
        );
        assert!("".parse::<Pose>().is_err());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(Pose::Run1.file_name(), "player_run1.png");
        assert_eq!(Pose::Dead.texture_key(), "player_dead");
    }

    #[test]
    fn test_duck_hitbox_is_lower_half() {
        let hb = Pose::Duck.hitbox().scaled(2);
        assert_eq!(hb, Hitbox { x: 0, y: 24, width: 32, height: 24 });
        let full = Pose::Run3.hitbox().scaled(2);
        assert_eq!(full, Hitbox { x: 0, y: 0, width: 32, height: 48 });
    }
}
