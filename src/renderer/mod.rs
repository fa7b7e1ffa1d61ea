pub mod canvas;
pub mod color;
pub mod layout;
pub mod pose;
pub mod preview;
pub mod sprite;

pub use canvas::Canvas;
pub use pose::Pose;
pub use sprite::SpriteRenderer;
