//! Interactive prompt for the new folder name

use crate::config::validation::folder_name_error;
use std::io::{self, BufRead, Write};

/// Ask for a folder name, offering `suggested` as the default
///
/// An empty answer accepts the suggestion. A rejected name is explained and
/// asked for again. Returns `None` when the input ends before a valid name
/// is given, which the caller treats as a cancellation.
pub fn prompt_for_name(
    input: &mut dyn BufRead,
    output: &mut dyn Write,
    suggested: &str,
) -> io::Result<Option<String>> {
    loop {
        write!(output, "Enter a new folder name [{suggested}]: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(None);
        }

        let answer = line.trim_end_matches(['\r', '\n']);
        let name = if answer.is_empty() { suggested } else { answer };

        match folder_name_error(name) {
            Some(message) => writeln!(output, "{message}")?,
            None => return Ok(Some(name.to_owned())),
        }
    }
}
