//! The template: rows of sectors of text.
//!
//! A [`Template`] is an ordered list of [`Row`]s. A row is either a list of
//! [`Sector`]s laid out side by side, or a [`Row::Rule`] marker that draws a
//! full-width horizontal rule. A sector holds one text value or several
//! stacked ones ("sub-lines"), each wrapped independently.
//!
//! # Example
//!
//! ```rust
//! use gridbox::{Row, Sector, Template};
//!
//! let template = Template::new()
//!     .row(["Name", "Status"])
//!     .rule()
//!     .row([Sector::from(vec!["Alice", "admin"]), Sector::from("Active")]);
//!
//! assert_eq!(template.rows().len(), 3);
//! assert_eq!(template.max_sectors(), 2);
//! assert_eq!(template.rows()[1], Row::Rule);
//! ```
//!
//! Templates also load from documents, where `null` stands for a rule:
//!
//! ```rust
//! use gridbox::Template;
//!
//! let template = Template::from_json(r#"[["Hello", ["a", "b"]], null]"#).unwrap();
//! assert_eq!(template.rows().len(), 2);
//! ```

use serde::Deserialize;

use crate::error::Result;

/// One cell of a row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Sector {
    /// A single text value.
    Text(String),
    /// Stacked text values, wrapped one after another.
    Lines(Vec<String>),
}

impl Sector {
    /// The text values of this sector, in order.
    pub fn values(&self) -> &[String] {
        match self {
            Sector::Text(text) => std::slice::from_ref(text),
            Sector::Lines(lines) => lines,
        }
    }
}

impl From<&str> for Sector {
    fn from(text: &str) -> Self {
        Sector::Text(text.to_string())
    }
}

impl From<String> for Sector {
    fn from(text: String) -> Self {
        Sector::Text(text)
    }
}

impl From<Vec<&str>> for Sector {
    fn from(lines: Vec<&str>) -> Self {
        Sector::Lines(lines.into_iter().map(String::from).collect())
    }
}

impl From<Vec<String>> for Sector {
    fn from(lines: Vec<String>) -> Self {
        Sector::Lines(lines)
    }
}

/// One row of a template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<Vec<Sector>>")]
pub enum Row {
    /// Sectors laid out side by side.
    Content(Vec<Sector>),
    /// A full-width horizontal rule.
    Rule,
}

impl Row {
    /// Builds a content row from anything convertible to sectors.
    pub fn content<I, S>(sectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sector>,
    {
        Row::Content(sectors.into_iter().map(Into::into).collect())
    }

    /// The sectors of a content row; `None` for a rule.
    pub fn sectors(&self) -> Option<&[Sector]> {
        match self {
            Row::Content(sectors) => Some(sectors),
            Row::Rule => None,
        }
    }

    pub fn is_rule(&self) -> bool {
        matches!(self, Row::Rule)
    }
}

impl From<Option<Vec<Sector>>> for Row {
    fn from(value: Option<Vec<Sector>>) -> Self {
        match value {
            Some(sectors) => Row::Content(sectors),
            None => Row::Rule,
        }
    }
}

/// An ordered list of rows to render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Template {
    rows: Vec<Row>,
}

impl Template {
    /// Creates an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a content row.
    pub fn row<I, S>(mut self, sectors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sector>,
    {
        self.rows.push(Row::content(sectors));
        self
    }

    /// Appends a rule row.
    pub fn rule(mut self) -> Self {
        self.rows.push(Row::Rule);
        self
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The largest number of sectors in any content row (0 if there are none).
    pub fn max_sectors(&self) -> usize {
        self.rows
            .iter()
            .filter_map(Row::sectors)
            .map(<[Sector]>::len)
            .max()
            .unwrap_or(0)
    }

    /// Parses a template from JSON.
    pub fn from_json(source: &str) -> Result<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a template from YAML.
    pub fn from_yaml(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }
}

impl From<Vec<Row>> for Template {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

impl FromIterator<Row> for Template {
    fn from_iter<T: IntoIterator<Item = Row>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
