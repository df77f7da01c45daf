use anyhow::{bail, Context, Result};
use std::io::{BufRead, Write};

/// Ask for the first chapter number until a valid one is entered.
pub fn read_start<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u64> {
    ask(input, output, "Please enter the beginning chapter: ", |_| None)
}

/// Ask for the last chapter number, which may not precede `start`.
pub fn read_end<R: BufRead, W: Write>(input: &mut R, output: &mut W, start: u64) -> Result<u64> {
    let question = format!("Please enter the ending chapter(>= {start}): ");
    ask(input, output, &question, |end| {
        (end < start).then(|| format!("Error! Please enter a number of at least {start}."))
    })
}

fn ask<R, W, F>(input: &mut R, output: &mut W, question: &str, reject: F) -> Result<u64>
where
    R: BufRead,
    W: Write,
    F: Fn(u64) -> Option<String>,
{
    let mut line = String::new();
    loop {
        write!(output, "{question}")?;
        output.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            bail!("Input ended before a chapter number was entered");
        }

        let complaint = match line.trim().parse::<u64>() {
            Ok(value) => match reject(value) {
                None => return Ok(value),
                Some(complaint) => complaint,
            },
            Err(_) => "Error! Please enter a whole number of 0 or more.".to_string(),
        };
        writeln!(output, "{complaint}")?;
        log::debug!("rejected chapter input {:?}", line.trim());
    }
}
