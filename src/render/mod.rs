// file: src/render/mod.rs
// description: view construction and output backends
// reference: internal module structure

pub mod html;
pub mod text;
pub mod view;

pub use view::{Card, CardImage, DEFAULT_BADGE, Renderer, View};
