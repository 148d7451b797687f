//! Opaque style and font handles
//!
//! The model only carries enough presentation state for the external binary
//! writer to reproduce a file; it is not a styling API. Styles and fonts live
//! in the workbook's registry and cells reference them by handle.

/// Handle to a style slot in a workbook's [`StyleRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleHandle(u32);

/// Handle to a font slot in a workbook's [`StyleRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontHandle(u32);

/// Cell presentation payload
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    /// Font used by the style (None = writer default)
    pub font: Option<FontHandle>,
    /// Number format string (None = general)
    pub number_format: Option<String>,
    /// Wrap text within the cell
    pub wrap_text: bool,
}

/// Font payload referenced by styles
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    /// Font name (None = writer default)
    pub name: Option<String>,
    /// Point size
    pub size: Option<f32>,
    /// Bold weight
    pub bold: bool,
    /// Italic slant
    pub italic: bool,
}

/// Style and font registry owned by a workbook.
///
/// Every `create_*` call allocates a fresh slot and returns a new handle,
/// even for identical payloads. Handles are never deduplicated; two calls
/// with the same style yield independent slots that can later be mutated
/// without affecting each other.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleRegistry {
    styles: Vec<Style>,
    fonts: Vec<Font>,
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style, returning its fresh handle
    pub fn create_style(&mut self, style: Style) -> StyleHandle {
        let handle = StyleHandle(self.styles.len() as u32);
        self.styles.push(style);
        handle
    }

    /// Register a font, returning its fresh handle
    pub fn create_font(&mut self, font: Font) -> FontHandle {
        let handle = FontHandle(self.fonts.len() as u32);
        self.fonts.push(font);
        handle
    }

    /// Get a style by handle
    pub fn style(&self, handle: StyleHandle) -> Option<&Style> {
        self.styles.get(handle.0 as usize)
    }

    /// Get a mutable style by handle
    pub fn style_mut(&mut self, handle: StyleHandle) -> Option<&mut Style> {
        self.styles.get_mut(handle.0 as usize)
    }

    /// Get a font by handle
    pub fn font(&self, handle: FontHandle) -> Option<&Font> {
        self.fonts.get(handle.0 as usize)
    }

    /// Get a mutable font by handle
    pub fn font_mut(&mut self, handle: FontHandle) -> Option<&mut Font> {
        self.fonts.get_mut(handle.0 as usize)
    }

    /// Number of registered styles
    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Number of registered fonts
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }
}
