//! Renderer module for frameshell
//!
//! Rendering in this build is a single clear+present per frame. The
//! `Renderer` trait is the seam the frame loop drives, so the loop can run
//! against the wgpu implementation or a recording double in tests.

use crate::utils::error::Result;

pub mod wgpu_renderer;

pub use wgpu_renderer::WgpuRenderer;

/// Renderer trait defining the per-frame presentation interface
pub trait Renderer {
    /// Current drawable surface size in physical pixels
    ///
    /// Re-read every frame; a zero dimension means the surface is not
    /// currently drawable (e.g. minimized) and the caller skips the frame.
    fn surface_size(&self) -> (u32, u32);

    /// Clear the surface at the given size and present the frame
    ///
    /// Callers pass the size they observed so the implementation can
    /// reconfigure when it changed. Only called with positive dimensions.
    fn present_clear(&mut self, width: u32, height: u32) -> Result<()>;
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn surface_size(&self) -> (u32, u32) {
        (**self).surface_size()
    }

    fn present_clear(&mut self, width: u32, height: u32) -> Result<()> {
        (**self).present_clear(width, height)
    }
}
