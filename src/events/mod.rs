pub mod keyboard;
pub mod pointer;
pub mod scroll;

pub use keyboard::*;
pub use pointer::*;
pub use scroll::*;
