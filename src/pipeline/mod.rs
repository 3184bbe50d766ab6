pub mod color;
pub mod pitch;
pub mod score;
pub mod sentiment;
pub mod session;
pub mod voice;
