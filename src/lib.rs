//! Animated gradient-mask shimmer for loading placeholders.
//!
//! Re-exports the engine from `shimmer-core` and the tiny-skia backend as
//! [`raster`].
//!
//! ```no_run
//! use shimmer::raster::{RasterContent, RasterContext, Skeleton};
//! use shimmer::{Color, Point, Shimmer, ShimmerConfig};
//! use std::time::Duration;
//!
//! let skeleton = Skeleton::list_item(Color::from_hex(0xE0E0E0), 300.0);
//! let child: &dyn RasterContent = &skeleton;
//! let mut shimmer = Shimmer::new(ShimmerConfig::default()).unwrap();
//! let mut ctx = RasterContext::new(300, 48).unwrap();
//!
//! shimmer.layout(Some(skeleton.size()));
//! shimmer.advance(Duration::from_millis(16));
//! shimmer.paint(&mut ctx, Point::ZERO, Some(child));
//! ```

pub use shimmer_core::*;
pub use shimmer_raster as raster;
