//! Runtime selection between the two label syntaxes.
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::html::escape_html_label_into;
use crate::label::escape_label_into;

/// The flavour of dot label some text is destined for.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LabelKind {
    /// Quoted string label, `label="..."`.
    #[default]
    Plain,
    /// HTML-like label, `label=<...>`.
    Html,
}

impl LabelKind {
    /// Escape `text` for this kind of label.
    pub fn escape(self, text: &str) -> String {
        let mut result = String::with_capacity(text.len());
        self.escape_into(&mut result, text);
        result
    }

    /// Append the escaped form of `text` to `buf`.
    pub fn escape_into(self, buf: &mut String, text: &str) {
        match self {
            LabelKind::Plain => escape_label_into(buf, text),
            LabelKind::Html => escape_html_label_into(buf, text),
        }
    }

    /// Opening and closing delimiters dot expects around this kind of label.
    pub fn delimiters(self) -> (char, char) {
        match self {
            LabelKind::Plain => ('"', '"'),
            LabelKind::Html => ('<', '>'),
        }
    }

    fn name(self) -> &'static str {
        match self {
            LabelKind::Plain => "plain",
            LabelKind::Html => "html",
        }
    }
}

impl Display for LabelKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LabelKind {
    type Err = ParseLabelKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [LabelKind::Plain, LabelKind::Html]
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseLabelKindError { input: s.to_string() })
    }
}

/// Error returned when a string does not name a [`LabelKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelKindError {
    input: String,
}

impl Display for ParseLabelKindError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "unknown label kind '{}', expected 'plain' or 'html'", self.input.escape_default())
    }
}

impl std::error::Error for ParseLabelKindError {}
