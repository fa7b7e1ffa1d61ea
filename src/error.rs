use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpriteError {
    #[error("Unknown pose: {0:?} (expected one of run1, run2, run3, run4, jump, duck, dead)")]
    UnknownPose(String),

    #[error("Invalid scale {0}: must be between 1 and {}", crate::renderer::canvas::MAX_SCALE)]
    InvalidScale(u32),
}

pub type Result<T> = std::result::Result<T, SpriteError>;
