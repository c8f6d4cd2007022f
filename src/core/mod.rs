pub mod animator;
pub mod config;
pub mod field;
pub mod language;
pub mod nav;
pub mod pointer;
pub mod render;
pub mod slideshow;

pub use animator::*;
pub use config::*;
pub use field::*;
pub use language::*;
pub use nav::*;
pub use pointer::*;
pub use render::*;
pub use slideshow::*;
