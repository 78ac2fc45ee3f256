use log::{debug, warn};
use std::fmt;

use crate::errors::ChangelogError;

// @module: Bilingual changelog parsing

// @const: Line separating the Chinese block from the English block
pub const DELIMITER: &str = "====================";

// @const: Prefix marking a postscript line
pub const POSTSCRIPT_PREFIX: &str = "PS:";

// @const: Marker removed from postscript lines (prefix plus one space)
pub const POSTSCRIPT_MARKER: &str = "PS: ";

/// Language of a changelog section, by its position around the delimiter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    // @section: index 0
    Chinese,
    // @section: index 1
    English,
}

impl Language {
    // @returns: Section index in the split input
    pub fn section_index(&self) -> usize {
        match self {
            Self::Chinese => 0,
            Self::English => 1,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Chinese => write!(f, "cn"),
            Self::English => write!(f, "en"),
        }
    }
}

/// A single non-empty, trimmed line of a section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItem {
    /// Regular changelog entry, stored verbatim
    Entry(String),

    /// Postscript note with its `PS: ` marker removed
    Postscript(String),
}

impl LineItem {
    /// Classify an already trimmed line.
    ///
    /// Classification only looks at the `PS:` prefix. The stored postscript
    /// text drops the first literal `PS: ` and nothing else, so `PS:note`
    /// keeps its prefix.
    pub fn classify(line: &str) -> Self {
        if line.starts_with(POSTSCRIPT_PREFIX) {
            LineItem::Postscript(line.replacen(POSTSCRIPT_MARKER, "", 1))
        } else {
            LineItem::Entry(line.to_string())
        }
    }
}

/// The four ordered line collections extracted from a bilingual changelog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangelogSections {
    /// Chinese changelog entries
    pub changelog_cn: Vec<String>,

    /// English changelog entries
    pub changelog_en: Vec<String>,

    /// Chinese postscript notes
    pub ps_cn: Vec<String>,

    /// English postscript notes
    pub ps_en: Vec<String>,
}

impl ChangelogSections {
    // @returns: (cn_entries, en_entries, cn_postscripts, en_postscripts)
    pub fn into_parts(self) -> (Vec<String>, Vec<String>, Vec<String>, Vec<String>) {
        (self.changelog_cn, self.changelog_en, self.ps_cn, self.ps_en)
    }

    // @returns: Entries for one language
    pub fn entries(&self, language: Language) -> &[String] {
        match language {
            Language::Chinese => &self.changelog_cn,
            Language::English => &self.changelog_en,
        }
    }

    // @returns: Postscripts for one language
    pub fn postscripts(&self, language: Language) -> &[String] {
        match language {
            Language::Chinese => &self.ps_cn,
            Language::English => &self.ps_en,
        }
    }

    fn push(&mut self, language: Language, item: LineItem) {
        let (target, text) = match (language, item) {
            (Language::Chinese, LineItem::Entry(text)) => (&mut self.changelog_cn, text),
            (Language::English, LineItem::Entry(text)) => (&mut self.changelog_en, text),
            (Language::Chinese, LineItem::Postscript(text)) => (&mut self.ps_cn, text),
            (Language::English, LineItem::Postscript(text)) => (&mut self.ps_en, text),
        };
        target.push(text);
    }
}

/// Split a section into trimmed, non-empty lines
pub fn section_lines(section: &str) -> impl Iterator<Item = &str> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Parse a bilingual changelog into entries and postscripts per language.
///
/// The text is split on the literal [`DELIMITER`] substring; section 0 is
/// Chinese and section 1 is English. Anything after a second delimiter is
/// ignored.
pub fn parse_input(text: &str) -> Result<ChangelogSections, ChangelogError> {
    let sections: Vec<&str> = text.split(DELIMITER).collect();

    if sections.len() < 2 {
        return Err(ChangelogError::MalformedInput(format!(
            "input must contain '{}' as the section delimiter",
            DELIMITER
        )));
    }

    if sections.len() > 2 {
        warn!(
            "Found {} sections, ignoring everything after the English section",
            sections.len()
        );
    }

    let mut parsed = ChangelogSections::default();

    for language in [Language::Chinese, Language::English] {
        for line in section_lines(sections[language.section_index()]) {
            parsed.push(language, LineItem::classify(line));
        }

        debug!(
            "Section {}: {} entries, {} postscripts",
            language,
            parsed.entries(language).len(),
            parsed.postscripts(language).len()
        );
    }

    Ok(parsed)
}
