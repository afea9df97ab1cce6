pub mod boxes;
pub mod material;
pub mod point;
pub mod project;
pub mod rotation;

pub use boxes::*;
pub use material::*;
pub use point::*;
pub use project::*;
pub use rotation::*;
