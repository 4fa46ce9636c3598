#![forbid(unsafe_code)]

//! Measurement primitives for panel positioning.

/// Layout axis used when deriving a panel offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Offsets scale with the surface width.
    Horizontal,
    /// Offsets scale with the surface height.
    Vertical,
}

/// Pixel dimensions of the rendering surface.
///
/// A freshly mounted surface has no layout yet; callers model that as the
/// absence of a `Size` (see [`Measure`]), not as a zero-filled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The extent along the given axis.
    #[inline]
    pub const fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Whether both dimensions are non-zero.
    ///
    /// Offset math against a zero extent collapses every panel onto the
    /// active position, so initialization waits for a measurable size.
    #[inline]
    pub const fn is_measurable(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Read-only query for the rendering surface's current pixel size.
///
/// Returns `None` before first layout. Implementations must not block and
/// must not fail; an unavailable measurement degrades to a zero extent at
/// the call sites, never to an error.
pub trait Measure {
    /// The surface's current size, if it has been laid out.
    fn measure(&self) -> Option<Size>;
}

/// A fixed measurement, for tests and headless use.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedMeasure(Option<Size>);

impl FixedMeasure {
    /// A measurement that always reports the given size.
    pub const fn new(size: Size) -> Self {
        Self(Some(size))
    }

    /// A measurement for a surface that has not been laid out.
    pub const fn unmeasured() -> Self {
        Self(None)
    }
}

impl Measure for FixedMeasure {
    fn measure(&self) -> Option<Size> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_follows_axis() {
        let size = Size::new(300, 200);
        assert_eq!(size.extent(Axis::Horizontal), 300);
        assert_eq!(size.extent(Axis::Vertical), 200);
    }

    #[test]
    fn zero_size_is_not_measurable() {
        assert!(!Size::default().is_measurable());
        assert!(!Size::new(300, 0).is_measurable());
        assert!(!Size::new(0, 200).is_measurable());
    }

    #[test]
    fn nonzero_size_is_measurable() {
        assert!(Size::new(1, 1).is_measurable());
        assert!(Size::new(300, 200).is_measurable());
    }

    #[test]
    fn fixed_measure_reports_size() {
        let m = FixedMeasure::new(Size::new(640, 480));
        assert_eq!(m.measure(), Some(Size::new(640, 480)));
    }

    #[test]
    fn unmeasured_reports_none() {
        assert_eq!(FixedMeasure::unmeasured().measure(), None);
    }
}
