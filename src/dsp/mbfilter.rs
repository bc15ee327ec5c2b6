//! Per-macroblock loop filter.
use log::trace;
use super::VP8DSP;
use crate::error::{DSPError, DSPResult};

const HIGH_EDGE_VAR_THR: [[u8; 64]; 2] = [
  [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3
  ], [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2, 2,
    2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2, 2
  ]];

/// Loop filter type signalled in the frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopFilterMode {
    /// Normal filter for luma and chroma.
    Normal,
    /// Simple filter for luma only.
    Simple,
}

/// Thresholds for filtering one macroblock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopFilterParams {
    /// Filter level, zero disables filtering.
    pub level:      u8,
    /// Interior difference limit.
    pub interior:   i32,
    /// Edge limit for inner block edges.
    pub sub_edge:   i32,
    /// Edge limit for macroblock edges.
    pub mb_edge:    i32,
    /// High edge variance threshold.
    pub hev_thresh: i32,
}

impl LoopFilterParams {
    /// Derives thresholds from filter level (`0..=63`) and sharpness (`0..=7`).
    pub fn new(level: u8, sharpness: u8, is_keyframe: bool) -> DSPResult<Self> {
        if level > 63 {
            return Err(DSPError::InvalidFilterLevel(level));
        }
        if sharpness > 7 {
            return Err(DSPError::InvalidSharpness(sharpness));
        }
        let interior = if sharpness == 0 {
                i32::from(level)
            } else {
                let bound = i32::from(9 - sharpness);
                let shift = (sharpness + 3) >> 2;
                (i32::from(level) >> shift).min(bound)
            }.max(1);
        let sub_edge = i32::from(level) * 2 + interior;
        let mb_edge  = sub_edge + 4;
        let hev_thresh = i32::from(HIGH_EDGE_VAR_THR[if is_keyframe { 1 } else { 0 }][level as usize]);
        Ok(Self { level, interior, sub_edge, mb_edge, hev_thresh })
    }
}

/// Mutable view of a frame with three planes in one buffer.
pub struct SimpleFrame<'a> {
    /// Picture data.
    pub data:   &'a mut [u8],
    /// Start of each plane.
    pub offset: [usize; 3],
    /// Stride of each plane, chroma planes share the same stride.
    pub stride: [usize; 3],
}

impl VP8DSP {
    /// Filters edges of a reconstructed macroblock.
    ///
    /// Left and top macroblock edges are filtered when there is a neighbour, inner edges only when `filter_inner` is set.
    pub fn loop_filter_mb(&self, frm: &mut SimpleFrame, mb_x: usize, mb_y: usize, params: &LoopFilterParams,
                          mode: LoopFilterMode, filter_inner: bool) {
        if params.level == 0 {
            return;
        }
        trace!("loop filter mb {},{}: level {} limits {}/{}/{} hev {}", mb_x, mb_y, params.level,
               params.mb_edge, params.sub_edge, params.interior, params.hev_thresh);
        check!(frm.stride[1] == frm.stride[2]);

        let ystride = frm.stride[0];
        let cstride = frm.stride[1];
        let ypos = frm.offset[0] + mb_x * 16 + mb_y * 16 * ystride;
        let upos = frm.offset[1] + mb_x *  8 + mb_y *  8 * cstride;
        let vpos = frm.offset[2] + mb_x *  8 + mb_y *  8 * cstride;
        let ys = ystride as isize;
        let cs = cstride as isize;

        if mode == LoopFilterMode::Simple {
            if mb_x > 0 {
                (self.h_loop_filter_simple)(frm.data, ypos, ys, params.mb_edge);
            }
            if filter_inner {
                for x in 1..4 {
                    (self.h_loop_filter_simple)(frm.data, ypos + x * 4, ys, params.sub_edge);
                }
            }
            if mb_y > 0 {
                (self.v_loop_filter_simple)(frm.data, ypos, ys, params.mb_edge);
            }
            if filter_inner {
                for y in 1..4 {
                    (self.v_loop_filter_simple)(frm.data, ypos + y * 4 * ystride, ys, params.sub_edge);
                }
            }
            return;
        }

        if mb_x > 0 {
            (self.h_loop_filter16y)(frm.data, ypos, ys, params.mb_edge, params.interior, params.hev_thresh);
            (self.h_loop_filter8uv)(frm.data, upos, vpos, cs, params.mb_edge, params.interior, params.hev_thresh);
        }
        if filter_inner {
            for x in 1..4 {
                (self.h_loop_filter16y_inner)(frm.data, ypos + x * 4, ys, params.sub_edge, params.interior, params.hev_thresh);
            }
            (self.h_loop_filter8uv_inner)(frm.data, upos + 4, vpos + 4, cs, params.sub_edge, params.interior, params.hev_thresh);
        }
        if mb_y > 0 {
            (self.v_loop_filter16y)(frm.data, ypos, ys, params.mb_edge, params.interior, params.hev_thresh);
            (self.v_loop_filter8uv)(frm.data, upos, vpos, cs, params.mb_edge, params.interior, params.hev_thresh);
        }
        if filter_inner {
            for y in 1..4 {
                (self.v_loop_filter16y_inner)(frm.data, ypos + y * 4 * ystride, ys, params.sub_edge, params.interior, params.hev_thresh);
            }
            (self.v_loop_filter8uv_inner)(frm.data, upos + 4 * cstride, vpos + 4 * cstride, cs, params.sub_edge, params.interior, params.hev_thresh);
        }
    }
}
