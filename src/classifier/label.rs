// News labels and their page messages.

use serde::Serialize;

/// The two verdicts the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// Class 0
    Fake,
    /// Class 1
    Real,
}

impl Label {
    /// Map a raw class id to a label. Anything but 0 or 1 is unrecognized.
    pub fn from_class(class: i64) -> Option<Label> {
        match class {
            0 => Some(Label::Fake),
            1 => Some(Label::Real),
            _ => None,
        }
    }

    pub fn class(self) -> i64 {
        match self {
            Label::Fake => 0,
            Label::Real => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Label::Fake => "FAKE",
            Label::Real => "REAL",
        }
    }

    /// The sentence shown to the user, without markup.
    pub fn message(self) -> String {
        format!("The news is {}.", self.as_str())
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_class() {
        assert_eq!(Label::from_class(0), Some(Label::Fake));
        assert_eq!(Label::from_class(1), Some(Label::Real));
        assert_eq!(Label::from_class(2), None);
        assert_eq!(Label::from_class(-1), None);
    }

    #[test]
    fn test_class_round_trips() {
        for label in [Label::Fake, Label::Real] {
            assert_eq!(Label::from_class(label.class()), Some(label));
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(Label::Fake.message(), "The news is FAKE.");
        assert_eq!(Label::Real.message(), "The news is REAL.");
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Label::Fake).unwrap(), "\"fake\"");
    }
}
