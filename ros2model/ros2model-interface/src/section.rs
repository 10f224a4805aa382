//! Section state machines for multi-part definition files.
//!
//! A `---` line advances the state; the state decides which field map
//! receives the following declarations.

/// Lines containing this are section delimiters in `.srv` and `.action` files.
pub const SECTION_DELIMITER: &str = "---";

pub fn is_section_delimiter(line: &str) -> bool {
    line.contains(SECTION_DELIMITER)
}

/// Where parsed fields are routed while folding over a file.
pub trait SectionState: Copy + Default {
    /// Number of field maps a file of this kind produces.
    const SECTIONS: usize;

    /// State after a delimiter line, or `None` if delimiters are not
    /// recognized (the line is then classified like any other).
    fn advance(self) -> Option<Self>;

    /// Index of the field map receiving fields; `None` discards them.
    fn slot(self) -> Option<usize>;
}

/// `.msg` files have a single section and no delimiters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageSection {
    #[default]
    Body,
}

impl SectionState for MessageSection {
    const SECTIONS: usize = 1;

    fn advance(self) -> Option<Self> {
        None
    }

    fn slot(self) -> Option<usize> {
        Some(0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ServiceSection {
    #[default]
    Request,
    /// Entered at the first delimiter and never left.
    Response,
}

impl SectionState for ServiceSection {
    const SECTIONS: usize = 2;

    fn advance(self) -> Option<Self> {
        Some(Self::Response)
    }

    fn slot(self) -> Option<usize> {
        match self {
            Self::Request => Some(0),
            Self::Response => Some(1),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActionSection {
    #[default]
    Goal,
    Result,
    Feedback,
    /// Past the third section; fields here are dropped without error.
    Overflow,
}

impl SectionState for ActionSection {
    const SECTIONS: usize = 3;

    fn advance(self) -> Option<Self> {
        Some(match self {
            Self::Goal => Self::Result,
            Self::Result => Self::Feedback,
            Self::Feedback | Self::Overflow => Self::Overflow,
        })
    }

    fn slot(self) -> Option<usize> {
        match self {
            Self::Goal => Some(0),
            Self::Result => Some(1),
            Self::Feedback => Some(2),
            Self::Overflow => None,
        }
    }
}
