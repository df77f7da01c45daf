use anyhow::{Context, Result};
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

pub struct ChapterLayout<'a> {
    pub output_dir: &'a Path,
    pub stylesheet: &'a str,
}

/// Write `chapter{n}.xhtml` for every line of `titles`, numbering from `start`.
///
/// Returns the paths written, in order.
pub fn write_chapters<R: BufRead>(
    titles: R,
    start: u64,
    layout: &ChapterLayout<'_>,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(layout.output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            layout.output_dir.display()
        )
    })?;

    let mut written = Vec::new();
    for (number, line) in (start..).zip(titles.lines()) {
        let line = line.context("Failed to read chapter titles")?;
        let title = line.trim_end_matches(['\r', '\n']);
        if title.trim().is_empty() {
            log::warn!("chapter {} has an empty title", number);
        }

        let path = layout.output_dir.join(chapter_filename(number));
        fs::write(&path, render_chapter(number, title, layout.stylesheet))
            .with_context(|| format!("Failed to write chapter: {}", path.display()))?;
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

pub fn chapter_filename(number: u64) -> String {
    format!("chapter{}.xhtml", number)
}

fn render_chapter(number: u64, title: &str, stylesheet: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8" standalone="no"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.1//EN"
  "http://www.w3.org/TR/xhtml11/DTD/xhtml11.dtd">

<html xmlns="http://www.w3.org/1999/xhtml">

<head>
  <title>chapter{number}</title>
  <link href="{stylesheet}" rel="stylesheet" type="text/css" />
</head>

<body>
  <h1>{title}</h1>

  <p>(This article)</p>

</body>
</html>"#,
        number = number,
        stylesheet = escape_xml(stylesheet),
        title = escape_xml(title),
    )
}

pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
