//! Inverse transforms with residual add.
use super::pos;
use super::clip::clip_u8;

const COS_PI8_SQRT2_MINUS1: i32 = 20091;
const SIN_PI8_SQRT2: i32 = 35468;

#[inline(always)]
fn mul_20091(a: i32) -> i32 { ((a * COS_PI8_SQRT2_MINUS1) >> 16) + a }
#[inline(always)]
fn mul_35468(a: i32) -> i32 { (a * SIN_PI8_SQRT2) >> 16 }

macro_rules! idct4 {
    ($s0: expr, $s1: expr, $s2: expr, $s3: expr) => {{
        let s0 = i32::from($s0);
        let s1 = i32::from($s1);
        let s2 = i32::from($s2);
        let s3 = i32::from($s3);
        let t0 = s0 + s2;
        let t1 = s0 - s2;
        let t2 = mul_35468(s1) - mul_20091(s3);
        let t3 = mul_20091(s1) + mul_35468(s3);
        [t0 + t3, t1 + t2, t1 - t2, t0 - t3]
    }}
}

/// Inverse transforms 4x4 block and adds the result to the destination, coefficients are zeroed.
pub fn vp8_idct_add(dst: &mut [u8], off: usize, stride: isize, coeffs: &mut [i16; 16]) {
    let mut tmp = [0i16; 16];
    for i in 0..4 {
        let out = idct4!(coeffs[i], coeffs[i + 4], coeffs[i + 8], coeffs[i + 12]);
        for (el, &val) in tmp[i * 4..][..4].iter_mut().zip(out.iter()) {
            *el = val as i16;
        }
    }
    *coeffs = [0; 16];
    for i in 0..4 {
        let out = idct4!(tmp[i], tmp[i + 4], tmp[i + 8], tmp[i + 12]);
        let row = pos(off, stride, i);
        for (el, &diff) in dst[row..][..4].iter_mut().zip(out.iter()) {
            *el = clip_u8(i32::from(*el) + ((diff + 4) >> 3));
        }
    }
}

/// Adds rounded DC value to 4x4 block, DC coefficient is zeroed.
pub fn vp8_idct_dc_add(dst: &mut [u8], off: usize, stride: isize, coeffs: &mut [i16; 16]) {
    let dc = (i32::from(coeffs[0]) + 4) >> 3;
    coeffs[0] = 0;
    for y in 0..4 {
        let row = pos(off, stride, y);
        for el in dst[row..][..4].iter_mut() {
            *el = clip_u8(i32::from(*el) + dc);
        }
    }
}

/// Applies DC-only transform to four horizontally adjacent luma blocks.
pub fn vp8_idct_dc_add4y(dst: &mut [u8], off: usize, stride: isize, coeffs: &mut [[i16; 16]; 4]) {
    for (i, blk) in coeffs.iter_mut().enumerate() {
        vp8_idct_dc_add(dst, off + i * 4, stride, blk);
    }
}

/// Applies DC-only transform to 2x2 group of chroma blocks.
pub fn vp8_idct_dc_add4uv(dst: &mut [u8], off: usize, stride: isize, coeffs: &mut [[i16; 16]; 4]) {
    for (i, blk) in coeffs.iter_mut().enumerate() {
        let boff = pos(off, stride, (i >> 1) * 4) + (i & 1) * 4;
        vp8_idct_dc_add(dst, boff, stride, blk);
    }
}

/// Inverse Walsh-Hadamard transform of luma DCs distributed into the first coefficient of each luma block.
pub fn vp8_luma_dc_wht(blocks: &mut [[[i16; 16]; 4]; 4], dc: &mut [i16; 16]) {
    for i in 0..4 {
        let t0 = i32::from(dc[i])     + i32::from(dc[i + 12]);
        let t1 = i32::from(dc[i + 4]) + i32::from(dc[i + 8]);
        let t2 = i32::from(dc[i + 4]) - i32::from(dc[i + 8]);
        let t3 = i32::from(dc[i])     - i32::from(dc[i + 12]);
        dc[i]      = (t0 + t1) as i16;
        dc[i + 4]  = (t3 + t2) as i16;
        dc[i + 8]  = (t0 - t1) as i16;
        dc[i + 12] = (t3 - t2) as i16;
    }
    for (i, row) in dc.chunks_mut(4).enumerate() {
        let t0 = i32::from(row[0]) + i32::from(row[3]) + 3;
        let t1 = i32::from(row[1]) + i32::from(row[2]);
        let t2 = i32::from(row[1]) - i32::from(row[2]);
        let t3 = i32::from(row[0]) - i32::from(row[3]) + 3;
        for el in row.iter_mut() {
            *el = 0;
        }
        blocks[i][0][0] = ((t0 + t1) >> 3) as i16;
        blocks[i][1][0] = ((t3 + t2) >> 3) as i16;
        blocks[i][2][0] = ((t0 - t1) >> 3) as i16;
        blocks[i][3][0] = ((t3 - t2) >> 3) as i16;
    }
}

/// DC-only variant of [`vp8_luma_dc_wht`].
///
/// [`vp8_luma_dc_wht`]: ./fn.vp8_luma_dc_wht.html
pub fn vp8_luma_dc_wht_dc(blocks: &mut [[[i16; 16]; 4]; 4], dc: &mut [i16; 16]) {
    let val = ((i32::from(dc[0]) + 3) >> 3) as i16;
    dc[0] = 0;
    for row in blocks.iter_mut() {
        for blk in row.iter_mut() {
            blk[0] = val;
        }
    }
}
