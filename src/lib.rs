#![doc = include_str!("../README.md")]

mod html;
mod kind;
mod label;
mod trace;

pub use self::{
    html::{escape_html_label_into, escape_html_label_string},
    kind::{LabelKind, ParseLabelKindError},
    label::{escape_label_into, escape_label_string},
};

/// The version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
