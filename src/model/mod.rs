//! Pure data structures shared by the transport, validation and store layers.

pub mod draft;
pub mod product;

pub use draft::*;
pub use product::*;
