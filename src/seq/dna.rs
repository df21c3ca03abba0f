use std::fmt;

/// One of the four recognised nucleotide symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    A,
    T,
    G,
    C,
}

impl Base {
    /// Every base, in display order.
    pub const ALL: [Base; 4] = [Base::A, Base::T, Base::G, Base::C];

    /// Exact, case-sensitive match against an ASCII byte. Anything else
    /// (lowercase, `N`, UTF-8 continuation bytes) is not a base.
    #[inline(always)]
    pub fn from_byte(b: u8) -> Option<Base> {
        match b {
            b'A' => Some(Base::A),
            b'T' => Some(Base::T),
            b'G' => Some(Base::G),
            b'C' => Some(Base::C),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn from_char(c: char) -> Option<Base> {
        if c.is_ascii() {
            Base::from_byte(c as u8)
        } else {
            None
        }
    }

    /// Slot of this base inside a `[_; 4]` laid out like `Base::ALL`.
    #[inline(always)]
    pub fn index(self) -> usize {
        match self {
            Base::A => 0,
            Base::T => 1,
            Base::G => 2,
            Base::C => 3,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::T => 'T',
            Base::G => 'G',
            Base::C => 'C',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Base::A => "A",
            Base::T => "T",
            Base::G => "G",
            Base::C => "C",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
