//! PHE Flip computes the flip (edge-fold) correction of plate heat exchanger
//! plates from the channel spacing of both stacking sides.
//!
//! ```
//! use phe_flip::FlipParam;
//!
//! let param = FlipParam {
//!     spacing_a: 3.,
//!     spacing_b: 2.,
//!     length: 500.,
//!     width: 200.,
//!     thickness: 0.5,
//!     fillet_radius: 30.,
//! };
//! let flip = param.flip().unwrap();
//! assert_eq!(flip.flip_angle, 90. + flip.angle);
//! assert!(flip.length < param.length);
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
pub use crate::error::*;
pub use crate::flip::*;
pub use crate::parse::*;

mod error;
mod flip;
mod parse;
