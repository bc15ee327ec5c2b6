//! Clipping helpers shared by all kernels.

/// Number of out-of-range entries on each side of the crop table.
pub const MAX_NEG_CROP: usize = 256;

const fn gen_crop_tab() -> [u8; 256 + 2 * MAX_NEG_CROP] {
    let mut tab = [0u8; 256 + 2 * MAX_NEG_CROP];
    let mut i = 0;
    while i < tab.len() {
        tab[i] = if i < MAX_NEG_CROP {
                0
            } else if i >= MAX_NEG_CROP + 255 {
                255
            } else {
                (i - MAX_NEG_CROP) as u8
            };
        i += 1;
    }
    tab
}

/// Crop table covering `-256..=511`, entry `v + MAX_NEG_CROP` holds `v` clamped to `0..=255`.
pub static CROP_TAB: [u8; 256 + 2 * MAX_NEG_CROP] = gen_crop_tab();

/// Clamps a value to `0..=255`.
#[inline(always)]
pub fn clip_u8(val: i32) -> u8 {
    val.max(0).min(255) as u8
}

/// Clamps a value known to lie in `-256..=511` through the crop table.
///
/// All loop filter updates stay inside that window (a pixel plus a correction of at most 128 in magnitude).
#[inline(always)]
pub fn crop(val: i32) -> u8 {
    check!(val >= -(MAX_NEG_CROP as i32) && val < 256 + (MAX_NEG_CROP as i32));
    CROP_TAB[(val + MAX_NEG_CROP as i32) as usize]
}

/// Clamps a value to the signed 8-bit range `-128..=127`.
#[inline(always)]
pub fn clip_int8(val: i32) -> i32 {
    i32::from(clip_u8(val + 128)) - 128
}
