use bitflags::bitflags;
use std::ffi::c_void;

use crate::colour::Rgba;

/// Entry points that must resolve for the driver to be usable.
pub const REQUIRED_SYMBOLS: &[&str] = &["glClear", "glClearColor", "glViewport"];

bitflags! {
    /// Buffers cleared by [`Driver::clear`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: u32 {
        const COLOR = 0x0000_4000;
        const DEPTH = 0x0000_0100;
        const STENCIL = 0x0000_0400;
    }
}

/// The slice of the graphics driver this crate calls into.
///
/// `load` must succeed before any other method is called; [`super::Renderer`]
/// only hands out a driver once it has.
pub trait Driver {
    /// Populate the function table from `resolve`. Returns the required
    /// symbols that resolved to null. Entries that did resolve stay loaded
    /// even when this fails.
    fn load(&mut self, resolve: &mut dyn FnMut(&str) -> *const c_void) -> Result<(), Vec<String>>;
    fn clear_color(&mut self, color: Rgba);
    fn clear(&mut self, mask: ClearMask);
    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32);
}

impl<D: Driver + ?Sized> Driver for &mut D {
    fn load(&mut self, resolve: &mut dyn FnMut(&str) -> *const c_void) -> Result<(), Vec<String>> {
        (**self).load(resolve)
    }

    fn clear_color(&mut self, color: Rgba) {
        (**self).clear_color(color)
    }

    fn clear(&mut self, mask: ClearMask) {
        (**self).clear(mask)
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        (**self).viewport(x, y, width, height)
    }
}

/// Calls straight into the process-wide function table of the `gl` crate.
#[derive(Default)]
pub struct GlDriver;

impl Driver for GlDriver {
    fn load(&mut self, resolve: &mut dyn FnMut(&str) -> *const c_void) -> Result<(), Vec<String>> {
        let mut missing = Vec::new();
        gl::load_with(|name| {
            let ptr = resolve(name);
            if ptr.is_null() && REQUIRED_SYMBOLS.contains(&name) {
                missing.push(name.to_string());
            }
            ptr as *const _
        });
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    fn clear_color(&mut self, color: Rgba) {
        unsafe {
            gl::ClearColor(color.r(), color.g(), color.b(), color.a());
        }
    }

    fn clear(&mut self, mask: ClearMask) {
        unsafe {
            gl::Clear(mask.bits());
        }
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        unsafe {
            gl::Viewport(x, y, width, height);
        }
    }
}

/// A driver with no GPU behind it. Records every call so the resulting
/// state can be inspected, which is what headless tests need.
#[derive(Debug, Default)]
pub struct HeadlessDriver {
    pub resolved: Vec<String>,
    pub clear_color: Option<Rgba>,
    pub clears: Vec<ClearMask>,
    pub viewport: Option<[i32; 4]>,
}

impl Driver for HeadlessDriver {
    fn load(&mut self, resolve: &mut dyn FnMut(&str) -> *const c_void) -> Result<(), Vec<String>> {
        let mut missing = Vec::new();
        for &name in REQUIRED_SYMBOLS {
            if resolve(name).is_null() {
                missing.push(name.to_string());
            } else {
                self.resolved.push(name.to_string());
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    fn clear_color(&mut self, color: Rgba) {
        self.clear_color = Some(color);
    }

    fn clear(&mut self, mask: ClearMask) {
        self.clears.push(mask);
    }

    fn viewport(&mut self, x: i32, y: i32, width: i32, height: i32) {
        self.viewport = Some([x, y, width, height]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn mask_bits_match_gl_constants() {
        assert_eq!(ClearMask::COLOR.bits(), gl::COLOR_BUFFER_BIT);
        assert_eq!(ClearMask::DEPTH.bits(), gl::DEPTH_BUFFER_BIT);
        assert_eq!(ClearMask::STENCIL.bits(), gl::STENCIL_BUFFER_BIT);
    }

    #[test]
    fn headless_load_keeps_partial_resolution() {
        let mut driver = HeadlessDriver::default();
        let mut resolve = |name: &str| {
            if name == "glViewport" {
                ptr::null()
            } else {
                ptr::NonNull::<c_void>::dangling().as_ptr() as *const c_void
            }
        };
        let missing = driver.load(&mut resolve).unwrap_err();
        assert_eq!(missing, vec!["glViewport".to_string()]);
        assert_eq!(driver.resolved, vec!["glClear", "glClearColor"]);
    }
}
