//! Near-plane visibility of the window triangle.

/// One bit per window vertex, set when the vertex is in front of the near
/// plane. Bit 0 is the oldest vertex, bit 2 the newest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityMask(u8);

impl VisibilityMask {
    pub const EMPTY: Self = Self(0);

    /// Shift in the newest vertex's bit; the oldest falls off.
    #[must_use]
    pub fn push(self, visible: bool) -> Self {
        Self((self.0 >> 1) | (u8::from(visible) << 2))
    }

    /// Force `corner` (0 oldest, 2 newest) to visible. Used when a clipped
    /// vertex takes a hidden corner's place: it lies on the plane and must
    /// not be re-tested against it.
    #[must_use]
    pub fn mark_visible(self, corner: usize) -> Self {
        debug_assert!(corner < 3);
        Self(self.0 | (1 << corner))
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn case(self) -> Case {
        Case::from_bits(self.0)
    }
}

/// The eight topological cases of a triangle against the near plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Case {
    /// 000: entirely behind.
    Hidden,
    /// 001
    OldestOnly,
    /// 010
    MiddleOnly,
    /// 011: newest corner behind.
    NewestHidden,
    /// 100
    NewestOnly,
    /// 101: middle corner behind.
    MiddleHidden,
    /// 110: oldest corner behind.
    OldestHidden,
    /// 111: entirely in front.
    Visible,
}

impl Case {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Case::Hidden,
            0b001 => Case::OldestOnly,
            0b010 => Case::MiddleOnly,
            0b011 => Case::NewestHidden,
            0b100 => Case::NewestOnly,
            0b101 => Case::MiddleHidden,
            0b110 => Case::OldestHidden,
            _ => Case::Visible,
        }
    }

    /// Number of corners in front of the plane.
    pub fn visible_corners(self) -> u32 {
        match self {
            Case::Hidden => 0,
            Case::OldestOnly | Case::MiddleOnly | Case::NewestOnly => 1,
            Case::NewestHidden | Case::MiddleHidden | Case::OldestHidden => 2,
            Case::Visible => 3,
        }
    }
}
