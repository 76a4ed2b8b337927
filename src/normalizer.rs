//! Conversion of the plain-text recipe dialect into markup.
//!
//! The dialect carries one semantic token per line. Lines are classified by a
//! small state machine and emitted as the same HTML structure the field
//! extractor expects from native pages: an `<h1>` title, `<h3>` section
//! labels followed by `<ul>`/`<ol>` lists, and `<p>` paragraphs.

use crate::vocabulary::{
    INGREDIENTS_LABEL, INLINE_ATTRIBUTES, INLINE_ORIGIN, INLINE_VESSEL, PREPARATION_LABEL,
    SECTION_HEADING, STEP_VERBS, TITLE_STOPLIST, UNIT_KEYWORDS,
};
use html_escape::encode_text;
use log::debug;

/// Section the normalizer is currently in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    None,
    Ingredients(IngredientsState),
    Preparation,
}

/// Once tips start, the ingredient list stays closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientsState {
    Collecting,
    Closed,
}

/// What a single plain-text line turns into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    IngredientsLabel,
    PreparationLabel,
    Attribute,
    Vessel,
    Origin,
    Title,
    ListItem,
    Paragraph,
}

impl Section {
    /// Tag of the list left open by this section, if any.
    fn open_list(self) -> Option<&'static str> {
        match self {
            Section::Ingredients(IngredientsState::Collecting) => Some("ul"),
            Section::Preparation => Some("ol"),
            _ => None,
        }
    }

    /// Classifies a trimmed, non-empty line in this section.
    pub fn classify(self, line: &str, title_seen: bool) -> LineKind {
        if line == INGREDIENTS_LABEL {
            return LineKind::IngredientsLabel;
        }
        if line == PREPARATION_LABEL {
            return LineKind::PreparationLabel;
        }
        if INLINE_ATTRIBUTES.contains(&line) {
            return LineKind::Attribute;
        }
        if line.contains(INLINE_VESSEL) {
            return LineKind::Vessel;
        }
        if line.contains(INLINE_ORIGIN) {
            return LineKind::Origin;
        }

        match self {
            Section::None if !title_seen && is_title_line(line) => LineKind::Title,
            Section::None => LineKind::Paragraph,
            Section::Ingredients(IngredientsState::Collecting) => {
                let lower = line.to_lowercase();
                if UNIT_KEYWORDS.iter().any(|unit| lower.contains(unit)) {
                    LineKind::ListItem
                } else {
                    LineKind::Paragraph
                }
            }
            Section::Ingredients(IngredientsState::Closed) => LineKind::Paragraph,
            Section::Preparation => {
                if STEP_VERBS.iter().any(|verb| line.starts_with(verb)) {
                    LineKind::ListItem
                } else {
                    LineKind::Paragraph
                }
            }
        }
    }

    /// State after consuming a line of the given kind.
    pub fn next(self, kind: LineKind) -> Section {
        match (self, kind) {
            (_, LineKind::IngredientsLabel) => Section::Ingredients(IngredientsState::Collecting),
            (_, LineKind::PreparationLabel) => Section::Preparation,
            (Section::Ingredients(IngredientsState::Collecting), LineKind::Paragraph) => {
                Section::Ingredients(IngredientsState::Closed)
            }
            (section, _) => section,
        }
    }
}

fn is_title_line(line: &str) -> bool {
    line.chars().any(char::is_alphabetic)
        && line.chars().count() > 3
        && !TITLE_STOPLIST.iter().any(|word| line.contains(word))
}

/// Incremental plain-text to markup converter.
pub struct PlainTextNormalizer {
    section: Section,
    title_seen: bool,
    parts: Vec<String>,
}

impl Default for PlainTextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PlainTextNormalizer {
    /// Starts an empty document with no section open.
    pub fn new() -> Self {
        Self {
            section: Section::None,
            title_seen: false,
            parts: vec!["<html><body>".to_string()],
        }
    }

    /// Section the next line will be classified in.
    pub fn section(&self) -> Section {
        self.section
    }

    /// Feeds one line; blank lines are ignored.
    pub fn push_line(&mut self, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        let kind = self.section.classify(line, self.title_seen);
        let next = self.section.next(kind);

        // Leaving a list (new label or first tip) closes it
        if let Some(tag) = self.section.open_list() {
            if is_label(kind) || next.open_list().is_none() {
                self.parts.push(format!("</{tag}>"));
            }
        }

        let text = encode_text(line);
        match kind {
            LineKind::IngredientsLabel | LineKind::PreparationLabel => {
                let list = if kind == LineKind::IngredientsLabel {
                    "ul"
                } else {
                    "ol"
                };
                self.parts
                    .push(format!("<{SECTION_HEADING}>{text}</{SECTION_HEADING}><{list}>"));
            }
            LineKind::Attribute => self
                .parts
                .push(format!("<span class=\"attribute\">{text}</span>")),
            LineKind::Vessel => self
                .parts
                .push(format!("<span class=\"vessel\">{text}</span>")),
            LineKind::Origin => self
                .parts
                .push(format!("<span class=\"origin\">{text}</span>")),
            LineKind::Title => {
                self.title_seen = true;
                self.parts.push(format!("<h1>{text}</h1>"));
            }
            LineKind::ListItem => self.parts.push(format!("<li>{text}</li>")),
            LineKind::Paragraph => self.parts.push(format!("<p>{text}</p>")),
        }

        self.section = next;
    }

    /// Closes any open list and returns the document.
    pub fn finish(mut self) -> String {
        if let Some(tag) = self.section.open_list() {
            self.parts.push(format!("</{tag}>"));
        }
        self.parts.push("</body></html>".to_string());
        self.parts.join("\n")
    }
}

fn is_label(kind: LineKind) -> bool {
    matches!(kind, LineKind::IngredientsLabel | LineKind::PreparationLabel)
}

/// Converts a plain-dialect document into markup.
pub fn to_markup(text: &str) -> String {
    let mut normalizer = PlainTextNormalizer::new();
    for line in text.lines() {
        normalizer.push_line(line);
    }
    let html = normalizer.finish();
    debug!("Normalized plain text into {} bytes of markup", html.len());
    html
}
