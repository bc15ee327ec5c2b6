//! Block clear/fill/copy primitives and edge emulation.
use super::{pos, RefPlane};

/// Fills `w`x`h` region starting at `off` with `value`.
pub fn fill_block(block: &mut [u8], off: usize, value: u8, stride: isize, h: usize, w: usize) {
    for y in 0..h {
        let start = pos(off, stride, y);
        for el in block[start..][..w].iter_mut() {
            *el = value;
        }
    }
}

/// Fills 16 pixels wide block.
pub fn fill_block16(block: &mut [u8], off: usize, value: u8, stride: isize, h: usize) {
    fill_block(block, off, value, stride, h, 16);
}

/// Fills 8 pixels wide block.
pub fn fill_block8(block: &mut [u8], off: usize, value: u8, stride: isize, h: usize) {
    fill_block(block, off, value, stride, h, 8);
}

/// Zeroes single 4x4 coefficient block.
pub fn clear_block(coeffs: &mut [i16; 16]) {
    *coeffs = [0; 16];
}

/// Zeroes coefficient storage for the whole macroblock (16 luma and 8 chroma blocks).
pub fn clear_blocks(coeffs: &mut [[i16; 16]; 24]) {
    for blk in coeffs.iter_mut() {
        clear_block(blk);
    }
}

/// Zeroes single 8x8 coefficient block.
pub fn clear_block8x8(coeffs: &mut [i16; 64]) {
    *coeffs = [0; 64];
}

/// Zeroes six 8x8 coefficient blocks of 4:2:0 macroblock.
pub fn clear_blocks8x8(coeffs: &mut [[i16; 64]; 6]) {
    for blk in coeffs.iter_mut() {
        clear_block8x8(blk);
    }
}

/// Copies `w`x`h` block without any filtering.
pub fn put_pixels(dst: &mut [u8], doff: usize, dstride: isize, src: &[u8], soff: usize, sstride: isize, w: usize, h: usize) {
    for y in 0..h {
        let didx = pos(doff, dstride, y);
        let sidx = pos(soff, sstride, y);
        dst[didx..][..w].copy_from_slice(&src[sidx..][..w]);
    }
}

/// Copies block from the plane with pixels beyond the plane borders being replaced with replicated edge pixels.
pub fn edge_emu(src: &RefPlane, xpos: isize, ypos: isize, bw: usize, bh: usize, dst: &mut [u8], dstride: usize) {
    let w = src.width as isize;
    let h = src.height as isize;
    for (y, drow) in dst.chunks_mut(dstride).take(bh).enumerate() {
        let srcy = ((y as isize) + ypos).max(0).min(h - 1) as usize;
        let row = &src.data[src.offset + srcy * src.stride..][..src.width];
        for (x, el) in drow[..bw].iter_mut().enumerate() {
            let srcx = ((x as isize) + xpos).max(0).min(w - 1) as usize;
            *el = row[srcx];
        }
    }
}
