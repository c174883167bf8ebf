//! tiny-skia backend for `shimmer-core`.
//!
//! `RasterContext` implements `PaintContext`, so a `Shimmer` can paint any
//! `RasterContent` (such as a `Skeleton`) into a pixmap.

pub mod context;
pub mod error;
pub mod shader;
pub mod skeleton;

pub use context::{RasterContent, RasterContext};
pub use error::RasterError;
pub use skeleton::{Bone, Skeleton};
