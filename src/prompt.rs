use std::io::{BufRead, Write};

use log::debug;
use machine_learning::{LanguageNet, extract_features};

use crate::error::{AppErr, Result};

/// Runs the interactive classification loop.
///
/// Asks for a line of text, classifies it and prints the language, until the
/// user types `quit_token` or the input ends. Bytes that aren't valid UTF-8
/// are replaced rather than ending the session.
///
/// # Returns
/// The amount of lines classified.
pub fn run<R, W>(net: &LanguageNet, mut input: R, mut output: W, quit_token: &str) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let io_err = |e: std::io::Error| AppErr::io("<stdio>", e);
    let mut line = Vec::new();
    let mut classified = 0;

    loop {
        writeln!(
            output,
            "Enter text to classify or ({quit_token}) to exit the program: "
        )
        .map_err(io_err)?;
        output.flush().map_err(io_err)?;

        line.clear();
        if input.read_until(b'\n', &mut line).map_err(io_err)? == 0 {
            break;
        }

        let text = String::from_utf8_lossy(&line);
        let text = text.trim_end_matches(['\r', '\n']);
        if text == quit_token {
            break;
        }

        let features = extract_features(text);
        debug!("scores: {}", net.scores(features.view())?);
        let language = net.classify(features.view())?;
        writeln!(output, "The language is: {language}").map_err(io_err)?;
        classified += 1;
    }

    Ok(classified)
}
