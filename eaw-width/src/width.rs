/// The number of terminal columns occupied by a code point.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd)]
#[repr(u8)]
pub enum Width {
    #[default]
    Narrow = 1,
    Wide = 2,
}

impl Width {
    /// Maps an East Asian Width classification code to a width.
    /// Fullwidth (`F`) and Wide (`W`) take two columns; every other
    /// class (Narrow, Halfwidth, Ambiguous, Neutral) takes one.
    pub fn from_class(class: char) -> Self {
        match class {
            'F' | 'W' => Self::Wide,
            _ => Self::Narrow,
        }
    }

    pub fn columns(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.columns())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use k9::assert_equal as assert_eq;

    #[test]
    fn classes() {
        assert_eq!(Width::from_class('F'), Width::Wide);
        assert_eq!(Width::from_class('W'), Width::Wide);
        for class in ['N', 'A', 'H', 'w', 'f', '?'] {
            assert_eq!(Width::from_class(class), Width::Narrow);
        }
    }

    #[test]
    fn columns() {
        assert_eq!(Width::Narrow.columns(), 1);
        assert_eq!(Width::Wide.columns(), 2);
        assert_eq!(Width::default(), Width::Narrow);
        assert_eq!(Width::Wide.to_string(), "2");
    }
}
