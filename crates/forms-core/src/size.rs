//! Column size classes for field wrappers

/// Class used when a field has no size, or an unknown one.
pub const FULL_WIDTH: &str = "col-12";

const DEFAULT_SIZES: &[(&str, &str)] = &[
    ("1/12", "col-1"),
    ("2/12", "col-2"),
    ("3/12", "col-3"),
    ("4/12", "col-4"),
    ("5/12", "col-5"),
    ("6/12", "col-6"),
    ("7/12", "col-7"),
    ("8/12", "col-8"),
    ("9/12", "col-9"),
    ("10/12", "col-10"),
    ("11/12", "col-11"),
    ("12/12", "col-12"),
    ("12", FULL_WIDTH),
];

/// Fixed lookup from a fieldset `size` key to a grid column class.
#[derive(Debug, Clone, Copy)]
pub struct SizeTable {
    entries: &'static [(&'static str, &'static str)],
}

impl Default for SizeTable {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SIZES,
        }
    }
}

impl SizeTable {
    /// Column class for `size`; absent or unknown keys are full width.
    pub fn class_for(&self, size: Option<&str>) -> &'static str {
        let Some(size) = size.map(str::trim) else {
            return FULL_WIDTH;
        };

        match self.entries.iter().find(|(key, _)| *key == size) {
            Some((_, class)) => *class,
            None => {
                tracing::debug!("Unknown field size {:?}, using {}", size, FULL_WIDTH);
                FULL_WIDTH
            }
        }
    }
}
