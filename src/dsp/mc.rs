//! Sub-pixel motion compensation.
//!
//! Luma and chroma prediction uses either the six-tap filter bank (profile 0) or bilinear interpolation (other profiles).
//! Fractional offsets are given in eighths of a pixel. Even offsets use the six-tap rows of the filter table, odd offsets use
//! the rows with zero outer taps and thus need only four source pixels.
use log::trace;
use super::{pos, tap, RefPlane, VP8DSP};
use super::blockdsp::{edge_emu, put_pixels};
use super::clip::clip_u8;
use crate::error::{DSPError, DSPResult};

/// Six-tap filter magnitudes for offsets 1..=7, signs are `+ - + + - +`.
pub const SUBPEL_FILTERS: [[u8; 6]; 7] = [
    [ 0,  6, 123,  12,  1, 0 ],
    [ 2, 11, 108,  36,  8, 1 ],
    [ 0,  9,  93,  50,  6, 0 ],
    [ 3, 16,  77,  77, 16, 3 ],
    [ 0,  6,  50,  93,  9, 0 ],
    [ 1,  8,  36, 108, 11, 2 ],
    [ 0,  1,  12, 123,  6, 0 ],
];

/// Motion compensation function type.
///
/// Arguments are destination buffer, offset and stride, source buffer, offset and stride,
/// block height and horizontal and vertical fractional offsets.
pub type MCFunc = fn(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize, h: usize, mx: usize, my: usize);

/// Number of source pixels needed before the block by the widest filter.
pub const EDGE_PRE: usize = 2;
/// Number of source pixels needed after the block by the widest filter.
pub const EDGE_POST: usize = 3;
/// Stride of the edge emulation buffer used by [`VP8DSP::mc_block`].
///
/// [`VP8DSP::mc_block`]: ../struct.VP8DSP.html#method.mc_block
pub const MC_BUF_STRIDE: usize = 32;
/// Minimum size of the edge emulation buffer.
pub const MC_BUF_SIZE: usize = MC_BUF_STRIDE * (16 + EDGE_PRE + EDGE_POST);

const TMP_STRIDE: usize = 16;

/// Returns filter class for the fractional offset: 0 for whole pixel, 1 for four-tap and 2 for six-tap filter.
pub fn subpel_class(frac: usize) -> usize {
    match frac {
        0 => 0,
        _ if (frac & 1) != 0 => 1,
        _ => 2,
    }
}

#[inline(always)]
fn filter_px(src: &[u8], idx: usize, step: isize, filt: &[u8; 6], six: bool) -> u8 {
    let s = |n: isize| i32::from(src[tap(idx, step, n)]);
    let mut sum = i32::from(filt[2]) * s(0) - i32::from(filt[1]) * s(-1)
                + i32::from(filt[3]) * s(1) - i32::from(filt[4]) * s(2);
    if six {
        sum += i32::from(filt[0]) * s(-2) + i32::from(filt[5]) * s(3);
    }
    clip_u8((sum + 64) >> 7)
}

fn epel_h(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize,
          w: usize, h: usize, mx: usize, six: bool) {
    check!(mx > 0 && mx < 8);
    let filt = &SUBPEL_FILTERS[mx - 1];
    for y in 0..h {
        let didx = pos(doff, dstride, y);
        let sidx = pos(soff, sstride, y);
        for x in 0..w {
            dst[didx + x] = filter_px(src, sidx + x, 1, filt, six);
        }
    }
}

fn epel_v(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize,
          w: usize, h: usize, my: usize, six: bool) {
    check!(my > 0 && my < 8);
    let filt = &SUBPEL_FILTERS[my - 1];
    for y in 0..h {
        let didx = pos(doff, dstride, y);
        let sidx = pos(soff, sstride, y);
        for x in 0..w {
            dst[didx + x] = filter_px(src, sidx + x, sstride, filt, six);
        }
    }
}

fn epel_hv(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize,
           w: usize, h: usize, mx: usize, my: usize, hsix: bool, vsix: bool) {
    check!(w <= TMP_STRIDE && h <= 16);
    check!(mx > 0 && mx < 8 && my > 0 && my < 8);
    let hfilt = &SUBPEL_FILTERS[mx - 1];
    let vfilt = &SUBPEL_FILTERS[my - 1];
    // rows above and below the block needed by the vertical pass
    let (pre, extra) = if vsix { (2, 5) } else { (1, 3) };

    let mut tmp = [0u8; TMP_STRIDE * (16 + 5)];
    let start = tap(soff, sstride, -(pre as isize));
    for (y, trow) in tmp.chunks_exact_mut(w).take(h + extra).enumerate() {
        let sidx = pos(start, sstride, y);
        for (x, el) in trow.iter_mut().enumerate() {
            *el = filter_px(src, sidx + x, 1, hfilt, hsix);
        }
    }
    for y in 0..h {
        let didx = pos(doff, dstride, y);
        for x in 0..w {
            dst[didx + x] = filter_px(&tmp, (y + pre) * w + x, w as isize, vfilt, vsix);
        }
    }
}

#[inline(always)]
fn bilin_px(src: &[u8], idx: usize, step: isize, frac: usize) -> u8 {
    let a = (8 - frac) as u16;
    let b = frac as u16;
    let s0 = u16::from(src[idx]);
    let s1 = u16::from(src[tap(idx, step, 1)]);
    ((a * s0 + b * s1 + 4) >> 3) as u8
}

fn bilin_h(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize,
           w: usize, h: usize, mx: usize) {
    for y in 0..h {
        let didx = pos(doff, dstride, y);
        let sidx = pos(soff, sstride, y);
        for x in 0..w {
            dst[didx + x] = bilin_px(src, sidx + x, 1, mx);
        }
    }
}

fn bilin_v(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize,
           w: usize, h: usize, my: usize) {
    for y in 0..h {
        let didx = pos(doff, dstride, y);
        let sidx = pos(soff, sstride, y);
        for x in 0..w {
            dst[didx + x] = bilin_px(src, sidx + x, sstride, my);
        }
    }
}

fn bilin_hv(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize,
            w: usize, h: usize, mx: usize, my: usize) {
    check!(w <= TMP_STRIDE && h <= 16);
    let mut tmp = [0u8; TMP_STRIDE * (16 + 1)];
    for (y, trow) in tmp.chunks_exact_mut(w).take(h + 1).enumerate() {
        let sidx = pos(soff, sstride, y);
        for (x, el) in trow.iter_mut().enumerate() {
            *el = bilin_px(src, sidx + x, 1, mx);
        }
    }
    for y in 0..h {
        let didx = pos(doff, dstride, y);
        for x in 0..w {
            dst[didx + x] = bilin_px(&tmp, y * w + x, w as isize, my);
        }
    }
}

macro_rules! mc_funcs {
    (pixels; $name: ident, $size: expr) => {
        /// Copies block of the given width.
        pub fn $name(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize, h: usize, _mx: usize, _my: usize) {
            put_pixels(dst, doff, dstride, src, soff, sstride, $size, h);
        }
    };
    (h; $name: ident, $size: expr, $six: expr) => {
        /// Horizontal-only filter.
        pub fn $name(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize, h: usize, mx: usize, _my: usize) {
            epel_h(dst, doff, dstride, src, soff, sstride, $size, h, mx, $six);
        }
    };
    (v; $name: ident, $size: expr, $six: expr) => {
        /// Vertical-only filter.
        pub fn $name(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize, h: usize, _mx: usize, my: usize) {
            epel_v(dst, doff, dstride, src, soff, sstride, $size, h, my, $six);
        }
    };
    (hv; $name: ident, $size: expr, $hsix: expr, $vsix: expr) => {
        /// Two-pass filter, horizontal pass first.
        pub fn $name(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize, h: usize, mx: usize, my: usize) {
            epel_hv(dst, doff, dstride, src, soff, sstride, $size, h, mx, my, $hsix, $vsix);
        }
    };
    (bilin; $hname: ident, $vname: ident, $hvname: ident, $size: expr) => {
        /// Horizontal bilinear filter.
        pub fn $hname(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize, h: usize, mx: usize, _my: usize) {
            bilin_h(dst, doff, dstride, src, soff, sstride, $size, h, mx);
        }
        /// Vertical bilinear filter.
        pub fn $vname(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize, h: usize, _mx: usize, my: usize) {
            bilin_v(dst, doff, dstride, src, soff, sstride, $size, h, my);
        }
        /// Two-pass bilinear filter.
        pub fn $hvname(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize, h: usize, mx: usize, my: usize) {
            bilin_hv(dst, doff, dstride, src, soff, sstride, $size, h, mx, my);
        }
    };
}

mc_funcs!(pixels; put_vp8_pixels16, 16);
mc_funcs!(pixels; put_vp8_pixels8,   8);
mc_funcs!(pixels; put_vp8_pixels4,   4);

mc_funcs!(h; put_vp8_epel16_h4, 16, false);
mc_funcs!(h; put_vp8_epel16_h6, 16, true);
mc_funcs!(h; put_vp8_epel8_h4,   8, false);
mc_funcs!(h; put_vp8_epel8_h6,   8, true);
mc_funcs!(h; put_vp8_epel4_h4,   4, false);
mc_funcs!(h; put_vp8_epel4_h6,   4, true);

mc_funcs!(v; put_vp8_epel16_v4, 16, false);
mc_funcs!(v; put_vp8_epel16_v6, 16, true);
mc_funcs!(v; put_vp8_epel8_v4,   8, false);
mc_funcs!(v; put_vp8_epel8_v6,   8, true);
mc_funcs!(v; put_vp8_epel4_v4,   4, false);
mc_funcs!(v; put_vp8_epel4_v6,   4, true);

mc_funcs!(hv; put_vp8_epel16_h4v4, 16, false, false);
mc_funcs!(hv; put_vp8_epel16_h6v4, 16, true,  false);
mc_funcs!(hv; put_vp8_epel16_h4v6, 16, false, true);
mc_funcs!(hv; put_vp8_epel16_h6v6, 16, true,  true);
mc_funcs!(hv; put_vp8_epel8_h4v4,   8, false, false);
mc_funcs!(hv; put_vp8_epel8_h6v4,   8, true,  false);
mc_funcs!(hv; put_vp8_epel8_h4v6,   8, false, true);
mc_funcs!(hv; put_vp8_epel8_h6v6,   8, true,  true);
mc_funcs!(hv; put_vp8_epel4_h4v4,   4, false, false);
mc_funcs!(hv; put_vp8_epel4_h6v4,   4, true,  false);
mc_funcs!(hv; put_vp8_epel4_h4v6,   4, false, true);
mc_funcs!(hv; put_vp8_epel4_h6v6,   4, true,  true);

mc_funcs!(bilin; put_vp8_bilinear16_h, put_vp8_bilinear16_v, put_vp8_bilinear16_hv, 16);
mc_funcs!(bilin; put_vp8_bilinear8_h,  put_vp8_bilinear8_v,  put_vp8_bilinear8_hv,   8);
mc_funcs!(bilin; put_vp8_bilinear4_h,  put_vp8_bilinear4_v,  put_vp8_bilinear4_hv,   4);

/// Six-tap filter functions indexed by block width (16, 8, 4), vertical and horizontal filter class.
pub const VP8_EPEL_FUNCS: [[[MCFunc; 3]; 3]; 3] = [
  [
    [ put_vp8_pixels16,  put_vp8_epel16_h4,   put_vp8_epel16_h6   ],
    [ put_vp8_epel16_v4, put_vp8_epel16_h4v4, put_vp8_epel16_h6v4 ],
    [ put_vp8_epel16_v6, put_vp8_epel16_h4v6, put_vp8_epel16_h6v6 ],
  ], [
    [ put_vp8_pixels8,   put_vp8_epel8_h4,    put_vp8_epel8_h6    ],
    [ put_vp8_epel8_v4,  put_vp8_epel8_h4v4,  put_vp8_epel8_h6v4  ],
    [ put_vp8_epel8_v6,  put_vp8_epel8_h4v6,  put_vp8_epel8_h6v6  ],
  ], [
    [ put_vp8_pixels4,   put_vp8_epel4_h4,    put_vp8_epel4_h6    ],
    [ put_vp8_epel4_v4,  put_vp8_epel4_h4v4,  put_vp8_epel4_h6v4  ],
    [ put_vp8_epel4_v6,  put_vp8_epel4_h4v6,  put_vp8_epel4_h6v6  ],
  ]
];

/// Bilinear filter functions with the same layout as [`VP8_EPEL_FUNCS`].
///
/// [`VP8_EPEL_FUNCS`]: ./constant.VP8_EPEL_FUNCS.html
pub const VP8_BILINEAR_FUNCS: [[[MCFunc; 3]; 3]; 3] = [
  [
    [ put_vp8_pixels16,      put_vp8_bilinear16_h,  put_vp8_bilinear16_h  ],
    [ put_vp8_bilinear16_v,  put_vp8_bilinear16_hv, put_vp8_bilinear16_hv ],
    [ put_vp8_bilinear16_v,  put_vp8_bilinear16_hv, put_vp8_bilinear16_hv ],
  ], [
    [ put_vp8_pixels8,       put_vp8_bilinear8_h,   put_vp8_bilinear8_h   ],
    [ put_vp8_bilinear8_v,   put_vp8_bilinear8_hv,  put_vp8_bilinear8_hv  ],
    [ put_vp8_bilinear8_v,   put_vp8_bilinear8_hv,  put_vp8_bilinear8_hv  ],
  ], [
    [ put_vp8_pixels4,       put_vp8_bilinear4_h,   put_vp8_bilinear4_h   ],
    [ put_vp8_bilinear4_v,   put_vp8_bilinear4_hv,  put_vp8_bilinear4_hv  ],
    [ put_vp8_bilinear4_v,   put_vp8_bilinear4_hv,  put_vp8_bilinear4_hv  ],
  ]
];

/// Returns index into the function tables for the block width.
pub fn width_index(size: usize) -> DSPResult<usize> {
    match size {
        16 => Ok(0),
        8  => Ok(1),
        4  => Ok(2),
        _  => Err(DSPError::InvalidBlockSize(size)),
    }
}

impl VP8DSP {
    /// Predicts `size`x`size` block at (`xpos`, `ypos`) from the reference plane displaced by the motion vector in eighth-pel units.
    ///
    /// When the source area (including filter margins) does not fit into the plane it is fetched into `mc_buf`
    /// with edge pixels replicated. For chroma planes in the full-pixel profile the fractional part is dropped.
    pub fn mc_block(&self, dst: &mut [u8], doff: usize, dstride: isize, xpos: usize, ypos: usize,
                    mvx: i16, mvy: i16, refplane: &RefPlane, size: usize, mc_buf: &mut [u8], chroma: bool) -> DSPResult<()> {
        let widx = width_index(size)?;
        if mc_buf.len() < MC_BUF_SIZE {
            return Err(DSPError::BufferTooSmall { need: MC_BUF_SIZE, have: mc_buf.len() });
        }
        let (mvx, mvy) = if chroma && self.profile.full_pixel_chroma() {
                (mvx & !7, mvy & !7)
            } else {
                (mvx, mvy)
            };
        let mx = (mvx & 7) as usize;
        let my = (mvy & 7) as usize;
        let ref_x = (xpos as isize) + ((mvx >> 3) as isize);
        let ref_y = (ypos as isize) + ((mvy >> 3) as isize);

        let bsize = (size + EDGE_PRE + EDGE_POST) as isize;
        let start_x = ref_x - (EDGE_PRE as isize);
        let start_y = ref_y - (EDGE_PRE as isize);
        let (src, soff, sstride) = if (start_x < 0) || (start_x + bsize > (refplane.width as isize)) ||
                                      (start_y < 0) || (start_y + bsize > (refplane.height as isize)) {
                trace!("edge emulation for {}x{} block at {},{}", size, size, ref_x, ref_y);
                edge_emu(refplane, start_x, start_y, bsize as usize, bsize as usize, mc_buf, MC_BUF_STRIDE);
                (mc_buf as &[u8], EDGE_PRE + EDGE_PRE * MC_BUF_STRIDE, MC_BUF_STRIDE as isize)
            } else {
                (refplane.data, refplane.offset + (ref_x as usize) + (ref_y as usize) * refplane.stride, refplane.stride as isize)
            };
        (self.put_pixels_tab[widx][subpel_class(my)][subpel_class(mx)])(dst, doff, dstride, src, soff, sstride, size, mx, my);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::dsp::Profile;
    use rand::{Rng, SeedableRng};
    use rand::rngs::SmallRng;

    const SRC_STRIDE: usize = 32;
    const SRC_OFF: usize = 3 + 3 * SRC_STRIDE;

    fn random_src(rng: &mut SmallRng) -> Vec<u8> {
        (0..SRC_STRIDE * 32).map(|_| rng.gen()).collect()
    }

    fn ref_tap(src: &[u8], x: isize, y: isize) -> i64 {
        i64::from(src[(SRC_OFF as isize + x + y * (SRC_STRIDE as isize)) as usize])
    }

    fn ref_sixtap(pix: [i64; 6], frac: usize) -> i64 {
        let f = &SUBPEL_FILTERS[frac - 1];
        let sum = i64::from(f[0]) * pix[0] - i64::from(f[1]) * pix[1] + i64::from(f[2]) * pix[2]
                + i64::from(f[3]) * pix[3] - i64::from(f[4]) * pix[4] + i64::from(f[5]) * pix[5];
        ((sum + 64) >> 7).max(0).min(255)
    }

    fn ref_epel(src: &[u8], w: usize, h: usize, mx: usize, my: usize) -> Vec<u8> {
        // full-precision rows needed by the vertical filter, then the vertical filter
        let mut out = Vec::with_capacity(w * h);
        for y in 0..h as isize {
            for x in 0..w as isize {
                let hrow = |yy: isize| -> i64 {
                    if mx == 0 {
                        ref_tap(src, x, yy)
                    } else {
                        let pix = [ref_tap(src, x - 2, yy), ref_tap(src, x - 1, yy), ref_tap(src, x, yy),
                                   ref_tap(src, x + 1, yy), ref_tap(src, x + 2, yy), ref_tap(src, x + 3, yy)];
                        ref_sixtap(pix, mx)
                    }
                };
                let val = if my == 0 {
                        hrow(y)
                    } else {
                        ref_sixtap([hrow(y - 2), hrow(y - 1), hrow(y), hrow(y + 1), hrow(y + 2), hrow(y + 3)], my)
                    };
                out.push(val as u8);
            }
        }
        out
    }

    fn ref_bilin(src: &[u8], w: usize, h: usize, mx: usize, my: usize) -> Vec<u8> {
        let mut out = Vec::with_capacity(w * h);
        let mx = mx as i64;
        let my = my as i64;
        for y in 0..h as isize {
            for x in 0..w as isize {
                let hrow = |yy: isize| ((8 - mx) * ref_tap(src, x, yy) + mx * ref_tap(src, x + 1, yy) + 4) >> 3;
                let val = if my == 0 {
                        if mx == 0 { ref_tap(src, x, y) } else { hrow(y) }
                    } else if mx == 0 {
                        ((8 - my) * ref_tap(src, x, y) + my * ref_tap(src, x, y + 1) + 4) >> 3
                    } else {
                        ((8 - my) * hrow(y) + my * hrow(y + 1) + 4) >> 3
                    };
                out.push(val as u8);
            }
        }
        out
    }

    fn run_table(tab: &[[[MCFunc; 3]; 3]; 3], src: &[u8], size: usize, h: usize, mx: usize, my: usize) -> Vec<u8> {
        let mut dst = vec![0u8; size * h];
        let widx = width_index(size).unwrap();
        (tab[widx][subpel_class(my)][subpel_class(mx)])(&mut dst, 0, size as isize, src, SRC_OFF, SRC_STRIDE as isize, h, mx, my);
        dst
    }

    #[test]
    fn test_subpel_class() {
        let classes: Vec<usize> = (0..8).map(subpel_class).collect();
        assert_eq!(classes, vec![0, 1, 2, 1, 2, 1, 2, 1]);
        for (i, filt) in SUBPEL_FILTERS.iter().enumerate() {
            let sum = i32::from(filt[0]) - i32::from(filt[1]) + i32::from(filt[2])
                    + i32::from(filt[3]) - i32::from(filt[4]) + i32::from(filt[5]);
            assert_eq!(sum, 128);
            assert_eq!(subpel_class(i + 1) == 1, filt[0] == 0 && filt[5] == 0);
        }
    }
    #[test]
    fn test_epel_dc_preservation() {
        let src = [100u8; SRC_STRIDE * 32];
        for &size in [16, 8, 4].iter() {
            for my in 0..8 {
                for mx in 0..8 {
                    let out = run_table(&VP8_EPEL_FUNCS, &src, size, size, mx, my);
                    assert!(out.iter().all(|&el| el == 100), "size {} mx {} my {}", size, mx, my);
                    let out = run_table(&VP8_BILINEAR_FUNCS, &src, size, size, mx, my);
                    assert!(out.iter().all(|&el| el == 100), "bilinear size {} mx {} my {}", size, mx, my);
                }
            }
        }
    }
    #[test]
    fn test_epel_h6_constant_row() {
        let src = [100u8; SRC_STRIDE * 32];
        let mut dst = [0u8; 16 * 4];
        put_vp8_epel16_h6(&mut dst, 0, 16, &src, SRC_OFF, SRC_STRIDE as isize, 4, 4, 0);
        assert!(dst.iter().all(|&el| el == 100));
        put_vp8_epel16_h4(&mut dst, 0, 16, &src, SRC_OFF, SRC_STRIDE as isize, 4, 5, 0);
        assert!(dst.iter().all(|&el| el == 100));
    }
    #[test]
    fn test_epel_matches_reference() {
        let mut rng = SmallRng::seed_from_u64(0x5EED);
        for _ in 0..8 {
            let src = random_src(&mut rng);
            for &size in [16, 8, 4].iter() {
                for my in 0..8 {
                    for mx in 0..8 {
                        assert_eq!(run_table(&VP8_EPEL_FUNCS, &src, size, size, mx, my),
                                   ref_epel(&src, size, size, mx, my), "size {} mx {} my {}", size, mx, my);
                        assert_eq!(run_table(&VP8_BILINEAR_FUNCS, &src, size, size, mx, my),
                                   ref_bilin(&src, size, size, mx, my), "bilinear size {} mx {} my {}", size, mx, my);
                    }
                }
            }
        }
    }
    #[test]
    fn test_epel_extremes() {
        // alternating black and white columns give the largest filter sums
        let mut src = [0u8; SRC_STRIDE * 32];
        for (i, el) in src.iter_mut().enumerate() {
            *el = if ((i % SRC_STRIDE) + (i / SRC_STRIDE)) & 1 == 0 { 255 } else { 0 };
        }
        for my in 0..8 {
            for mx in 0..8 {
                assert_eq!(run_table(&VP8_EPEL_FUNCS, &src, 8, 8, mx, my), ref_epel(&src, 8, 8, mx, my));
            }
        }
    }
    #[test]
    fn test_epel_golden() {
        // ramp 0, 10, 20, ... filtered half-way between pixels
        let mut src = [0u8; SRC_STRIDE * 32];
        for (i, el) in src.iter_mut().enumerate() {
            *el = ((i % SRC_STRIDE) * 10).min(255) as u8;
        }
        let mut dst = [0u8; 4];
        put_vp8_epel4_h6(&mut dst, 0, 4, &src, SRC_OFF, SRC_STRIDE as isize, 1, 4, 0);
        assert_eq!(dst, [35, 45, 55, 65]);
        put_vp8_epel4_h4(&mut dst, 0, 4, &src, SRC_OFF, SRC_STRIDE as isize, 1, 1, 0);
        assert_eq!(dst, [31, 41, 51, 61]);
        put_vp8_bilinear4_h(&mut dst, 0, 4, &src, SRC_OFF, SRC_STRIDE as isize, 1, 3, 0);
        assert_eq!(dst, [34, 44, 54, 64]);
    }
    #[test]
    fn test_negative_stride() {
        let mut rng = SmallRng::seed_from_u64(42);
        let src = random_src(&mut rng);
        let fwd = run_table(&VP8_EPEL_FUNCS, &src, 8, 8, 2, 5);
        let mut dst = [0u8; 8 * 8];
        (VP8_EPEL_FUNCS[1][1][2])(&mut dst, 7 * 8, -8, &src, SRC_OFF, SRC_STRIDE as isize, 8, 2, 5);
        for (y, row) in fwd.chunks(8).enumerate() {
            assert_eq!(row, &dst[(7 - y) * 8..][..8]);
        }
    }
    #[test]
    fn test_mc_block() {
        let mut rng = SmallRng::seed_from_u64(7);
        let data: Vec<u8> = (0..64 * 64).map(|_| rng.gen()).collect();
        let plane = RefPlane::new(&data, 0, 64, 64, 64).unwrap();
        let dsp = VP8DSP::new(Profile::Normal);
        let mut mc_buf = [0u8; MC_BUF_SIZE];

        // inside the plane: same as direct kernel call
        let mut dst = [0u8; 16 * 16];
        dsp.mc_block(&mut dst, 0, 16, 16, 16, 3 * 8 + 2, -(2 * 8) + 4, &plane, 16, &mut mc_buf, false).unwrap();
        let mut expected = [0u8; 16 * 16];
        put_vp8_epel16_h6v6(&mut expected, 0, 16, &data, 19 + 14 * 64, 64, 16, 2, 4);
        assert_eq!(dst[..], expected[..]);

        // outside the plane: edge pixels replicated
        let flat = [77u8; 64 * 64];
        let plane = RefPlane::new(&flat, 0, 64, 64, 64).unwrap();
        let mut dst = [0u8; 8 * 8];
        dsp.mc_block(&mut dst, 0, 8, 0, 0, -50, -33, &plane, 8, &mut mc_buf, true).unwrap();
        assert!(dst.iter().all(|&el| el == 77));

        assert_eq!(dsp.mc_block(&mut dst, 0, 8, 0, 0, 0, 0, &plane, 12, &mut mc_buf, false),
                   Err(DSPError::InvalidBlockSize(12)));
        let mut small_buf = [0u8; 16];
        assert_eq!(dsp.mc_block(&mut dst, 0, 8, 0, 0, 0, 0, &plane, 8, &mut small_buf, false),
                   Err(DSPError::BufferTooSmall { need: MC_BUF_SIZE, have: 16 }));
    }
    #[test]
    fn test_mc_block_full_pixel_chroma() {
        let data: Vec<u8> = (0..32 * 32).map(|i| (i * 7) as u8).collect();
        let plane = RefPlane::new(&data, 0, 32, 32, 32).unwrap();
        let dsp = VP8DSP::new(Profile::FullPixel);
        let mut mc_buf = [0u8; MC_BUF_SIZE];
        let mut dst = [0u8; 4 * 4];
        dsp.mc_block(&mut dst, 0, 4, 8, 8, 8 + 3, 16 + 5, &plane, 4, &mut mc_buf, true).unwrap();
        for y in 0..4 {
            assert_eq!(&dst[y * 4..][..4], &data[9 + (10 + y) * 32..][..4]);
        }
        // luma still uses bilinear interpolation
        dsp.mc_block(&mut dst, 0, 4, 8, 8, 8 + 4, 0, &plane, 4, &mut mc_buf, false).unwrap();
        let mut expected = [0u8; 4 * 4];
        put_vp8_bilinear4_h(&mut expected, 0, 4, &data, 9 + 8 * 32, 32, 4, 4, 0);
        assert_eq!(dst, expected);
    }
}
