//! Size and axis primitives shared by the solver, containers and blocks.

/// The axis along which a container arranges its children.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
    /// Children are placed left to right; the main axis is width.
    #[default]
    Horizontal,
    /// Children are placed top to bottom; the main axis is height.
    Vertical,
}

impl Direction {
    /// The perpendicular direction.
    #[inline]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// A width/height pair in terminal cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Size {
    /// Zero-sized extent.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Build a size from its main- and cross-axis extents.
    #[inline]
    pub const fn from_axes(direction: Direction, main: u16, cross: u16) -> Self {
        match direction {
            Direction::Horizontal => Self::new(main, cross),
            Direction::Vertical => Self::new(cross, main),
        }
    }

    /// Extent along `direction`.
    #[inline]
    pub const fn along(self, direction: Direction) -> u16 {
        match direction {
            Direction::Horizontal => self.width,
            Direction::Vertical => self.height,
        }
    }

    /// Extent perpendicular to `direction`.
    #[inline]
    pub const fn across(self, direction: Direction) -> u16 {
        self.along(direction.cross())
    }

    /// Get the area (number of cells).
    #[inline]
    pub const fn area(self) -> u32 {
        (self.width as u32) * (self.height as u32)
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Debug for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Size({}x{})", self.width, self.height)
    }
}

impl From<(u16, u16)> for Size {
    #[inline]
    fn from((width, height): (u16, u16)) -> Self {
        Self::new(width, height)
    }
}
