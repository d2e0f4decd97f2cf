//! Small helpers for copying and writing [image] buffers while debugging.
//!
//! Each writer is a single call that replaces the usual "prepare buffer,
//! pick encoder, save" sequence. Buffers are [imageproc]'s `Image<P>`.

pub mod copy;
pub mod error;
pub mod rescale;
pub mod write;

pub use error::{HelperError, Result};
