//! VP8 reconstruction DSP.
use log::debug;
use crate::error::{DSPError, DSPResult};

/// Precondition check that stays on in release builds with `checked` feature.
macro_rules! check {
    ($cond: expr) => {
        if cfg!(feature = "checked") {
            assert!($cond);
        } else {
            debug_assert!($cond);
        }
    };
}

pub mod clip;
pub mod blockdsp;
pub mod mc;
pub mod idct;
pub mod loopfilter;
pub mod mbfilter;

use self::mc::*;
use self::idct::*;
use self::loopfilter::*;

/// Returns index of sample `n` rows (or taps) away from `off`.
#[inline(always)]
pub(crate) fn pos(off: usize, stride: isize, n: usize) -> usize {
    off.wrapping_add((stride * (n as isize)) as usize)
}

/// Same as [`pos`] but for a signed distance.
#[inline(always)]
pub(crate) fn tap(off: usize, step: isize, n: isize) -> usize {
    off.wrapping_add((step * n) as usize)
}

/// Read-only view of a single reference plane.
#[derive(Clone, Copy)]
pub struct RefPlane<'a> {
    /// Buffer containing the plane.
    pub data:   &'a [u8],
    /// Offset of the top-left plane sample.
    pub offset: usize,
    /// Distance between rows.
    pub stride: usize,
    /// Plane width in samples.
    pub width:  usize,
    /// Plane height in samples.
    pub height: usize,
}

impl<'a> RefPlane<'a> {
    /// Creates a new plane view, checking that the buffer covers the whole plane.
    pub fn new(data: &'a [u8], offset: usize, stride: usize, width: usize, height: usize) -> DSPResult<Self> {
        if width == 0 || height == 0 || width > stride {
            return Err(DSPError::InvalidBlockSize(width));
        }
        let need = offset + stride * (height - 1) + width;
        if data.len() < need {
            return Err(DSPError::BufferTooSmall { need, have: data.len() });
        }
        Ok(Self { data, offset, stride, width, height })
    }
}

/// Bitstream profile (version) deciding the interpolation filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Six-tap interpolation.
    Normal,
    /// Bilinear interpolation, intended for the simple loop filter.
    Simple,
    /// Bilinear interpolation, intended for streams without loop filter.
    Bilinear,
    /// Bilinear luma interpolation, whole-pixel chroma motion.
    FullPixel,
}

impl Profile {
    /// Converts bitstream version number into profile.
    pub fn from_version(version: u8) -> DSPResult<Self> {
        match version {
            0 => Ok(Profile::Normal),
            1 => Ok(Profile::Simple),
            2 => Ok(Profile::Bilinear),
            3 => Ok(Profile::FullPixel),
            _ => Err(DSPError::InvalidProfile(version)),
        }
    }
    /// Returns bitstream version number.
    pub fn version(self) -> u8 {
        match self {
            Profile::Normal     => 0,
            Profile::Simple     => 1,
            Profile::Bilinear   => 2,
            Profile::FullPixel  => 3,
        }
    }
    /// Reports whether motion compensation uses bilinear filter instead of six-tap one.
    pub fn is_bilinear(self) -> bool { self != Profile::Normal }
    /// Reports whether chroma motion vectors are rounded to whole pixels.
    pub fn full_pixel_chroma(self) -> bool { self == Profile::FullPixel }
}

/// Coefficient-to-pixel transform function type.
pub type IDCTAddFunc = fn(dst: &mut [u8], off: usize, stride: isize, coeffs: &mut [i16; 16]);
/// Transform function type for four DC-only blocks.
pub type IDCTDCAdd4Func = fn(dst: &mut [u8], off: usize, stride: isize, coeffs: &mut [[i16; 16]; 4]);
/// Luma DC transform function type.
pub type LumaDCWHTFunc = fn(blocks: &mut [[[i16; 16]; 4]; 4], dc: &mut [i16; 16]);

/// Set of VP8 reconstruction functions for one stream.
#[derive(Clone)]
pub struct VP8DSP {
    /// Profile the function set was created for.
    pub profile:                Profile,
    /// Motion compensation functions indexed by block width (16, 8, 4), vertical and horizontal filter class.
    pub put_pixels_tab:         [[[MCFunc; 3]; 3]; 3],

    pub idct_add:               IDCTAddFunc,
    pub idct_dc_add:            IDCTAddFunc,
    pub idct_dc_add4y:          IDCTDCAdd4Func,
    pub idct_dc_add4uv:         IDCTDCAdd4Func,
    pub luma_dc_wht:            LumaDCWHTFunc,
    pub luma_dc_wht_dc:         LumaDCWHTFunc,

    pub v_loop_filter16y:       LoopFilterFunc,
    pub h_loop_filter16y:       LoopFilterFunc,
    pub v_loop_filter8uv:       LoopFilterUVFunc,
    pub h_loop_filter8uv:       LoopFilterUVFunc,
    pub v_loop_filter16y_inner: LoopFilterFunc,
    pub h_loop_filter16y_inner: LoopFilterFunc,
    pub v_loop_filter8uv_inner: LoopFilterUVFunc,
    pub h_loop_filter8uv_inner: LoopFilterUVFunc,
    pub v_loop_filter_simple:   SimpleLoopFilterFunc,
    pub h_loop_filter_simple:   SimpleLoopFilterFunc,
}

impl VP8DSP {
    /// Creates a new function set for the profile.
    pub fn new(profile: Profile) -> Self {
        debug!("VP8 DSP for profile {} ({})", profile.version(), if profile.is_bilinear() { "bilinear" } else { "six-tap" });
        Self {
            profile,
            put_pixels_tab:         if profile.is_bilinear() { VP8_BILINEAR_FUNCS } else { VP8_EPEL_FUNCS },

            idct_add:               vp8_idct_add,
            idct_dc_add:            vp8_idct_dc_add,
            idct_dc_add4y:          vp8_idct_dc_add4y,
            idct_dc_add4uv:         vp8_idct_dc_add4uv,
            luma_dc_wht:            vp8_luma_dc_wht,
            luma_dc_wht_dc:         vp8_luma_dc_wht_dc,

            v_loop_filter16y:       vp8_v_loop_filter16y,
            h_loop_filter16y:       vp8_h_loop_filter16y,
            v_loop_filter8uv:       vp8_v_loop_filter8uv,
            h_loop_filter8uv:       vp8_h_loop_filter8uv,
            v_loop_filter16y_inner: vp8_v_loop_filter16y_inner,
            h_loop_filter16y_inner: vp8_h_loop_filter16y_inner,
            v_loop_filter8uv_inner: vp8_v_loop_filter8uv_inner,
            h_loop_filter8uv_inner: vp8_h_loop_filter8uv_inner,
            v_loop_filter_simple:   vp8_v_loop_filter_simple,
            h_loop_filter_simple:   vp8_h_loop_filter_simple,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_profiles() {
        for ver in 0..4 {
            assert_eq!(Profile::from_version(ver).map(|p| p.version()), Ok(ver));
        }
        assert_eq!(Profile::from_version(4), Err(DSPError::InvalidProfile(4)));
        assert!(!Profile::Normal.is_bilinear());
        assert!(Profile::Simple.is_bilinear());
        assert!(Profile::FullPixel.full_pixel_chroma());
        assert!(!Profile::Bilinear.full_pixel_chroma());
    }
    #[test]
    fn test_ref_plane() {
        let buf = [0u8; 100];
        assert!(RefPlane::new(&buf, 2, 10, 8, 9).is_ok());
        assert_eq!(RefPlane::new(&buf, 2, 10, 10, 10).err(), Some(DSPError::BufferTooSmall { need: 102, have: 100 }));
        assert_eq!(RefPlane::new(&buf, 0, 4, 8, 2).err(), Some(DSPError::InvalidBlockSize(8)));
    }
    #[test]
    fn test_dsp_tables() {
        let dsp = VP8DSP::new(Profile::Normal);
        assert!(dsp.put_pixels_tab[0][2][2] as usize == put_vp8_epel16_h6v6 as usize);
        let dsp = VP8DSP::new(Profile::Bilinear);
        assert!(dsp.put_pixels_tab[2][1][0] as usize == put_vp8_bilinear4_v as usize);
        assert!(dsp.put_pixels_tab[1][0][0] as usize == put_vp8_pixels8 as usize);
    }
}
