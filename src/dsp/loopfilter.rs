//! Deblocking loop filter kernels.
//!
//! Pixels across an edge are named `p3 p2 p1 p0 | q0 q1 q2 q3` in filtering direction,
//! `off` points to `q0` and `step` is the distance between neighbouring pixels across the edge.
//! The `v_` functions filter horizontal edges (across rows), the `h_` functions filter vertical edges.
use super::tap;
use super::clip::{clip_int8, crop};

/// Loop filter function type for a single plane.
pub type LoopFilterFunc = fn(buf: &mut [u8], off: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32);
/// Loop filter function type for both chroma planes residing in the same buffer.
pub type LoopFilterUVFunc = fn(buf: &mut [u8], uoff: usize, voff: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32);
/// Simple loop filter function type.
pub type SimpleLoopFilterFunc = fn(buf: &mut [u8], off: usize, stride: isize, flim: i32);

#[inline(always)]
fn px(buf: &[u8], off: usize, step: isize, n: isize) -> i32 {
    i32::from(buf[tap(off, step, n)])
}

/// Reports whether the edge is weak enough to be filtered by the simple filter.
#[inline(always)]
pub fn simple_limit(buf: &[u8], off: usize, step: isize, flim: i32) -> bool {
    let p1 = px(buf, off, step, -2);
    let p0 = px(buf, off, step, -1);
    let q0 = px(buf, off, step,  0);
    let q1 = px(buf, off, step,  1);
    (p0 - q0).abs() * 2 + ((p1 - q1).abs() >> 1) <= flim
}

/// Reports whether the edge should be filtered by the normal filter.
#[inline(always)]
pub fn normal_limit(buf: &[u8], off: usize, step: isize, flim_e: i32, flim_i: i32) -> bool {
    if !simple_limit(buf, off, step, flim_e) {
        return false;
    }
    let p3 = px(buf, off, step, -4);
    let p2 = px(buf, off, step, -3);
    let p1 = px(buf, off, step, -2);
    let p0 = px(buf, off, step, -1);
    let q0 = px(buf, off, step,  0);
    let q1 = px(buf, off, step,  1);
    let q2 = px(buf, off, step,  2);
    let q3 = px(buf, off, step,  3);
    (p3 - p2).abs() <= flim_i && (p2 - p1).abs() <= flim_i && (p1 - p0).abs() <= flim_i &&
    (q3 - q2).abs() <= flim_i && (q2 - q1).abs() <= flim_i && (q1 - q0).abs() <= flim_i
}

/// High edge variance test.
#[inline(always)]
pub fn hev(buf: &[u8], off: usize, step: isize, thresh: i32) -> bool {
    let p1 = px(buf, off, step, -2);
    let p0 = px(buf, off, step, -1);
    let q0 = px(buf, off, step,  0);
    let q1 = px(buf, off, step,  1);
    (p1 - p0).abs() > thresh || (q1 - q0).abs() > thresh
}

/// Adjusts `p0` and `q0` (and `p1`, `q1` when `is4tap` is false).
#[inline(always)]
pub fn filter_common(buf: &mut [u8], off: usize, step: isize, is4tap: bool) {
    let p1 = px(buf, off, step, -2);
    let p0 = px(buf, off, step, -1);
    let q0 = px(buf, off, step,  0);
    let q1 = px(buf, off, step,  1);

    let mut a = 3 * (q0 - p0);
    if is4tap {
        a += clip_int8(p1 - q1);
    }
    let a = clip_int8(a);
    let f1 = (a + 4).min(127) >> 3;
    let f2 = (a + 3).min(127) >> 3;
    buf[tap(off, step, -1)] = crop(p0 + f2);
    buf[tap(off, step,  0)] = crop(q0 - f1);
    if !is4tap {
        let a = (f1 + 1) >> 1;
        buf[tap(off, step, -2)] = crop(p1 + a);
        buf[tap(off, step,  1)] = crop(q1 - a);
    }
}

/// Macroblock edge filter adjusting three pixels on each side.
#[inline(always)]
pub fn filter_mbedge(buf: &mut [u8], off: usize, step: isize) {
    let p2 = px(buf, off, step, -3);
    let p1 = px(buf, off, step, -2);
    let p0 = px(buf, off, step, -1);
    let q0 = px(buf, off, step,  0);
    let q1 = px(buf, off, step,  1);
    let q2 = px(buf, off, step,  2);

    let w = clip_int8(clip_int8(p1 - q1) + 3 * (q0 - p0));
    let a0 = (27 * w + 63) >> 7;
    let a1 = (18 * w + 63) >> 7;
    let a2 = ( 9 * w + 63) >> 7;
    buf[tap(off, step, -3)] = crop(p2 + a2);
    buf[tap(off, step, -2)] = crop(p1 + a1);
    buf[tap(off, step, -1)] = crop(p0 + a0);
    buf[tap(off, step,  0)] = crop(q0 - a0);
    buf[tap(off, step,  1)] = crop(q1 - a1);
    buf[tap(off, step,  2)] = crop(q2 - a2);
}

#[inline(always)]
fn normal_loop_filter(buf: &mut [u8], off: usize, step: isize, along: isize, len: usize,
                      flim_e: i32, flim_i: i32, hev_thresh: i32, mb_edge: bool) {
    for i in 0..len {
        let off = tap(off, along, i as isize);
        if normal_limit(buf, off, step, flim_e, flim_i) {
            if hev(buf, off, step, hev_thresh) {
                filter_common(buf, off, step, true);
            } else if mb_edge {
                filter_mbedge(buf, off, step);
            } else {
                filter_common(buf, off, step, false);
            }
        }
    }
}

#[inline(always)]
fn simple_loop_filter(buf: &mut [u8], off: usize, step: isize, along: isize, flim: i32) {
    for i in 0..16 {
        let off = tap(off, along, i);
        if simple_limit(buf, off, step, flim) {
            filter_common(buf, off, step, true);
        }
    }
}

/// Filters 8 pixels long horizontal edge of a single plane.
pub fn vp8_v_loop_filter8(buf: &mut [u8], off: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    normal_loop_filter(buf, off, stride, 1, 8, flim_e, flim_i, hev_thresh, true);
}
/// Filters 8 pixels long vertical edge of a single plane.
pub fn vp8_h_loop_filter8(buf: &mut [u8], off: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    normal_loop_filter(buf, off, 1, stride, 8, flim_e, flim_i, hev_thresh, true);
}
/// Filters 8 pixels long inner horizontal edge of a single plane.
pub fn vp8_v_loop_filter8_inner(buf: &mut [u8], off: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    normal_loop_filter(buf, off, stride, 1, 8, flim_e, flim_i, hev_thresh, false);
}
/// Filters 8 pixels long inner vertical edge of a single plane.
pub fn vp8_h_loop_filter8_inner(buf: &mut [u8], off: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    normal_loop_filter(buf, off, 1, stride, 8, flim_e, flim_i, hev_thresh, false);
}

/// Filters top luma macroblock edge.
pub fn vp8_v_loop_filter16y(buf: &mut [u8], off: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    normal_loop_filter(buf, off, stride, 1, 16, flim_e, flim_i, hev_thresh, true);
}
/// Filters left luma macroblock edge.
pub fn vp8_h_loop_filter16y(buf: &mut [u8], off: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    normal_loop_filter(buf, off, 1, stride, 16, flim_e, flim_i, hev_thresh, true);
}
/// Filters 16 pixels long inner horizontal luma edge.
pub fn vp8_v_loop_filter16y_inner(buf: &mut [u8], off: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    normal_loop_filter(buf, off, stride, 1, 16, flim_e, flim_i, hev_thresh, false);
}
/// Filters 16 pixels long inner vertical luma edge.
pub fn vp8_h_loop_filter16y_inner(buf: &mut [u8], off: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    normal_loop_filter(buf, off, 1, stride, 16, flim_e, flim_i, hev_thresh, false);
}

pub fn vp8_v_loop_filter8uv(buf: &mut [u8], uoff: usize, voff: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    vp8_v_loop_filter8(buf, uoff, stride, flim_e, flim_i, hev_thresh);
    vp8_v_loop_filter8(buf, voff, stride, flim_e, flim_i, hev_thresh);
}
pub fn vp8_h_loop_filter8uv(buf: &mut [u8], uoff: usize, voff: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    vp8_h_loop_filter8(buf, uoff, stride, flim_e, flim_i, hev_thresh);
    vp8_h_loop_filter8(buf, voff, stride, flim_e, flim_i, hev_thresh);
}
pub fn vp8_v_loop_filter8uv_inner(buf: &mut [u8], uoff: usize, voff: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    vp8_v_loop_filter8_inner(buf, uoff, stride, flim_e, flim_i, hev_thresh);
    vp8_v_loop_filter8_inner(buf, voff, stride, flim_e, flim_i, hev_thresh);
}
pub fn vp8_h_loop_filter8uv_inner(buf: &mut [u8], uoff: usize, voff: usize, stride: isize, flim_e: i32, flim_i: i32, hev_thresh: i32) {
    vp8_h_loop_filter8_inner(buf, uoff, stride, flim_e, flim_i, hev_thresh);
    vp8_h_loop_filter8_inner(buf, voff, stride, flim_e, flim_i, hev_thresh);
}

/// Simple filter for 16 pixels long horizontal edge.
pub fn vp8_v_loop_filter_simple(buf: &mut [u8], off: usize, stride: isize, flim: i32) {
    simple_loop_filter(buf, off, stride, 1, flim);
}
/// Simple filter for 16 pixels long vertical edge.
pub fn vp8_h_loop_filter_simple(buf: &mut [u8], off: usize, stride: isize, flim: i32) {
    simple_loop_filter(buf, off, 1, stride, flim);
}
