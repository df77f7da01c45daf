mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use epub_zh_chapters::{chapters, numeral, prompt, toc};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Numeral { values } => print_numerals(&values),
        Command::Chapters {
            start,
            titles,
            output,
            stylesheet,
        } => {
            let start = match start {
                Some(start) => start,
                None => prompt::read_start(&mut io::stdin().lock(), &mut io::stdout())?,
            };
            let layout = chapters::ChapterLayout {
                output_dir: &output,
                stylesheet: &stylesheet,
            };
            let file = File::open(&titles)
                .with_context(|| format!("Failed to open titles file: {}", titles.display()))?;
            let written = chapters::write_chapters(BufReader::new(file), start, &layout)?;
            log::info!(
                "Wrote {} chapter files to {}",
                written.len(),
                output.display()
            );
            Ok(())
        }
        Command::Toc {
            start,
            end,
            output,
            placeholder,
        } => {
            let (start, end) = resolve_range(start, end)?;
            let rows = write_toc(&output, start, end, &placeholder)?;
            log::info!("Wrote {} rows to {}", rows, output.display());
            Ok(())
        }
    }
}

fn print_numerals(values: &[String]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    let mut line = String::new();
    for value in values {
        line.clear();
        numeral::convert_decimal(value, &mut line)
            .with_context(|| format!("Cannot convert {:?}", value))?;
        writeln!(stdout, "{}", line)?;
    }
    Ok(())
}

fn resolve_range(start: Option<u64>, end: Option<u64>) -> Result<(u64, u64)> {
    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout();
    let start = match start {
        Some(start) => start,
        None => prompt::read_start(&mut stdin, &mut stdout)?,
    };
    let end = match end {
        Some(end) => end,
        None => prompt::read_end(&mut stdin, &mut stdout, start)?,
    };
    Ok((start, end))
}

fn write_toc(path: &Path, start: u64, end: u64, placeholder: &str) -> Result<u64> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut sink = BufWriter::new(file);
    let rows = toc::write_rows(&mut sink, start, end, placeholder)?;
    sink.flush()
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(rows)
}
