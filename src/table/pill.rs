/// A small rounded badge, e.g. a count or a status tag.
///
/// Drawn as `(text)` with one column of margin on either side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pill {
    pub text: String,
    /// Hidden when the viewport is narrow.
    pub optional: bool,
}

impl Pill {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}
