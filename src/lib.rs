//! # laser-mask
//!
//! Post-processor for raster laser engraving G-code. Marking moves whose laser
//! intensity is below a threshold are rewritten as travel moves with the laser
//! off, and runs of redundant travel moves are collapsed to their last
//! destination. The machine then skips the near-invisible pixels at travel
//! speed.
//!
//! ```rust,ignore
//! use laser_mask::{MaskConfig, transform_file};
//! use std::path::Path;
//!
//! let config = MaskConfig::default().with_threshold(50.0);
//! let stats = transform_file(Path::new("in.nc"), Path::new("out.nc"), &config)?;
//! println!("{} lines changed", stats.reclassified);
//! ```

pub mod config;
pub mod gcode;
pub mod transform;

pub use config::{ConfigError, MaskConfig, load_config};
pub use transform::{LineTransformer, MaskError, TransformStats, transform_file};
