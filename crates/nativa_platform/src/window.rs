//! Window descriptor and handles

use crate::error::{PlatformError, Result};
use crate::style::{StyleFlag, StyleFlags};

slotmap::new_key_type! {
    /// Generation-checked handle to a window created through an
    /// [`Application`](crate::Application)
    ///
    /// A handle stops resolving once its window is closed, whether the host
    /// closed it or the user did.
    pub struct WindowHandle;
}

/// Everything the window factory needs to create one native window
///
/// Host-constructed and transient: the factory reads it and does not keep it.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowDescriptor {
    /// Origin x in screen points
    pub x: f64,
    /// Origin y in screen points
    pub y: f64,
    /// Content width in screen points
    pub width: f64,
    /// Content height in screen points
    pub height: f64,
    /// Resolved style set
    pub style: StyleFlags,
    /// Backend-defined backing store mode
    pub backing: u32,
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 800.0,
            height: 600.0,
            style: StyleFlags::TITLED | StyleFlags::CLOSABLE | StyleFlags::RESIZABLE,
            backing: 0,
        }
    }
}

impl WindowDescriptor {
    /// Create a descriptor with the given content size
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set the window origin
    pub fn origin(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the content size
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the style from flags; order and duplicates are irrelevant
    pub fn style<I>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = StyleFlag>,
    {
        self.style = flags.into_iter().collect();
        self
    }

    /// Set the style from raw host ordinals
    pub fn style_ordinals(mut self, ordinals: &[u32]) -> Result<Self> {
        self.style = StyleFlags::from_ordinals(ordinals)?;
        Ok(self)
    }

    /// Set the backing store mode
    pub fn backing(mut self, backing: u32) -> Self {
        self.backing = backing;
        self
    }

    /// Check the geometry preconditions of the window factory
    pub fn validate(&self) -> Result<()> {
        let geometry = [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ];
        if let Some((name, value)) = geometry.iter().find(|(_, v)| !v.is_finite()) {
            return Err(PlatformError::InvalidGeometry(format!(
                "{name} is not finite ({value})"
            )));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(PlatformError::InvalidGeometry(format!(
                "size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
