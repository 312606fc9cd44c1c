//! CLI command implementations

pub mod check;
pub mod render;

pub use check::CheckArgs;
pub use render::RenderArgs;
