//! Reconstruction kernels for VP8-style decoders.
//!
//! This crate provides bit-exact pixel routines used in the reconstruction loop of a VP8 decoder:
//! sub-pixel motion compensation filters, the 4x4 inverse transforms with residual add, and the in-loop deblocking filter.
//! All kernels operate on caller-owned buffers addressed by an offset and a (possibly negative) stride.
extern crate log;
extern crate thiserror;

pub mod error;

#[allow(clippy::erasing_op)]
#[allow(clippy::identity_op)]
#[allow(clippy::needless_range_loop)]
#[allow(clippy::too_many_arguments)]
#[allow(clippy::unreadable_literal)]
pub mod dsp;

pub use crate::error::{DSPError, DSPResult};
pub use crate::dsp::{Profile, RefPlane, VP8DSP};
pub use crate::dsp::mbfilter::{LoopFilterMode, LoopFilterParams, SimpleFrame};
