use crate::chapters::{chapter_filename, escape_xml};
use crate::numeral::Numeral;
use anyhow::{ensure, Result};
use std::fmt;
use std::io::Write;

/// Text of the first table column for a chapter.
pub enum ChapterLabel {
    /// Chapter 0, shown as 序章.
    Prologue,
    Numbered(Numeral),
}

impl ChapterLabel {
    pub fn for_chapter(number: u64) -> Self {
        if number == 0 {
            ChapterLabel::Prologue
        } else {
            ChapterLabel::Numbered(Numeral::from(number))
        }
    }
}

impl fmt::Display for ChapterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChapterLabel::Prologue => f.write_str("序章"),
            ChapterLabel::Numbered(numeral) => write!(f, "第{}章", numeral),
        }
    }
}

/// Append one table row per chapter in `start..=end` to `sink`.
///
/// Returns the number of rows written.
pub fn write_rows<W: Write>(sink: &mut W, start: u64, end: u64, placeholder: &str) -> Result<u64> {
    ensure!(
        start <= end,
        "Ending chapter {} is before beginning chapter {}",
        end,
        start
    );

    let placeholder = escape_xml(placeholder);
    for number in start..=end {
        let label = ChapterLabel::for_chapter(number);
        let href = format!("../Text/{}", chapter_filename(number));
        write!(
            sink,
            "      <tr>\n        <td class=\"mbt05 w50 tdtop\"><a class=\"nodeco color1 contbox\" href=\"{href}\">{label}</a></td>\n\n        <td class=\"mbt05 left\"><a class=\"nodeco color1\" href=\"{href}\">{placeholder}</a></td>\n      </tr>\n",
        )?;
        log::debug!("row for chapter {}: {}", number, label);
    }

    Ok(end - start + 1)
}
