//! Color ramps for density visualizations
//!
//! A [`ColorPalette`] is an ordered list of foreground colors plus one
//! background color reserved for zero. [`ColorRampQuantizer`] splits a value
//! range into one equal-width bin per foreground color; [`ColorRampScheme`]
//! names the built-in sequential palettes.
//!
//! # Example
//!
//! ```rust
//! use latmap_color::{quantize_matrix, ColorRampScheme};
//! use latmap_density::DensityMatrix;
//!
//! let mut counts = DensityMatrix::new([10], [100], 0u64);
//! counts.accumulate(&5, &50, |c| c + 4);
//!
//! let palette = ColorRampScheme::Blue.palette();
//! let colors = quantize_matrix(&counts, &palette).unwrap();
//! assert_eq!(colors[0][0], "#08306b");
//! assert_eq!(colors[1][1], "#ffffff");
//! ```

pub mod quantizer;
pub mod scheme;

pub use latmap_core::Result;
pub use quantizer::{quantize, quantize_matrix, quantize_with_range, ColorRampQuantizer};
pub use scheme::{ColorPalette, ColorRampScheme, WHITE};
