use std::io::{BufRead, Write};

use anyhow::{Context, Result, anyhow};

use crate::error::FormError;
use crate::model::Position;

/// Line-oriented questions on any reader/writer pair (stdin/stdout in the binary).
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn position(&mut self) -> Result<Position> {
        writeln!(self.output, "\nChoose position for form list\n")?;
        for position in Position::ALL {
            writeln!(self.output, "\t{} - {}", position.code(), position.label())?;
        }
        let raw = self.ask("\nType corresponding number: ")?;
        let position = raw.parse::<Position>()?;
        writeln!(self.output, "\n{} selected", position.label())?;
        Ok(position)
    }

    /// Reads `top, window` from one comma-separated line.
    pub fn counts(&mut self) -> Result<(usize, usize)> {
        writeln!(
            self.output,
            "\nGather top __ performers from the last __ game weeks"
        )?;
        let raw = self.ask("Type number of performers & game weeks (with a comma in between): ")?;
        let mut parts = raw.split(',').map(str::trim);
        let (Some(top), Some(window), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(anyhow!(FormError::invalid_argument(format!(
                "expected two comma-separated numbers, got {raw:?}"
            ))));
        };
        Ok((parse_count(top)?, parse_count(window)?))
    }

    pub fn number(&mut self, label: &str) -> Result<usize> {
        let raw = self.ask(&format!("\n{label}: "))?;
        Ok(parse_count(&raw)?)
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush().context("flush prompt")?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("read prompt answer")?;
        if read == 0 {
            return Err(anyhow!("input closed before an answer was given"));
        }
        Ok(line.trim().to_string())
    }
}

fn parse_count(raw: &str) -> std::result::Result<usize, FormError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| FormError::invalid_argument(format!("{raw:?} is not a whole number")))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn position_menu_echoes_choice() {
        let mut p = prompt("3\n");
        assert_eq!(p.position().unwrap(), Position::Midfielder);
        let shown = String::from_utf8(p.output.clone()).unwrap();
        assert!(shown.contains("4 - Forward"));
        assert!(shown.contains("Midfielder selected"));
    }

    #[test]
    fn counts_need_two_numbers() {
        assert_eq!(prompt(" 5 , 3\n").counts().unwrap(), (5, 3));
        assert!(prompt("5\n").counts().is_err());
        assert!(prompt("5,3,1\n").counts().is_err());
        assert!(prompt("five,3\n").counts().is_err());
    }

    #[test]
    fn closed_input_is_an_error() {
        assert!(prompt("").position().is_err());
    }
}
