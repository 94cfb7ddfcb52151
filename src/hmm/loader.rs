//!
//! Text format of a model
//!
//! Lines that are blank or start with `#` are skipped. The remaining
//! content lines are, in order:
//!
//! 1. observation symbol names
//! 2. state names
//! 3. initial distribution (n values)
//! 4. transition matrix (n lines of n values)
//! 5. emission matrix (n lines of m values)
//!
//! and nothing else.
//!
use super::model::Model;
use crate::error::{HmmError, Result};
use itertools::Itertools;
use log::{debug, info};
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

///
/// Iterator-like reader of content lines, remembering the line number
///
struct ContentLines<R: BufRead> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> ContentLines<R> {
    fn new(reader: R) -> Self {
        ContentLines {
            lines: reader.lines(),
            line_no: 0,
        }
    }
    ///
    /// Next content line with its 1-based line number, or `None` at the end.
    ///
    fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        for line in &mut self.lines {
            let line = line?;
            self.line_no += 1;
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            return Ok(Some((self.line_no, line)));
        }
        Ok(None)
    }
    ///
    /// Next content line, where the end of input is a `Format` error.
    ///
    fn expect_line(&mut self, what: &str) -> Result<(usize, String)> {
        match self.next_line()? {
            Some(line) => Ok(line),
            None => Err(HmmError::format(
                self.line_no + 1,
                format!("unexpected end of input: missing {}", what),
            )),
        }
    }
    fn names(&mut self, what: &str) -> Result<Vec<String>> {
        let (_, line) = self.expect_line(what)?;
        Ok(line.split_whitespace().map(|s| s.to_string()).collect())
    }
    fn floats(&mut self, len: usize, what: &str) -> Result<Vec<f64>> {
        let (line_no, line) = self.expect_line(what)?;
        parse_floats(line_no, &line, len, what)
    }
}

fn parse_floats(line_no: usize, line: &str, len: usize, what: &str) -> Result<Vec<f64>> {
    let values: Vec<f64> = line
        .split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| {
                HmmError::format(
                    line_no,
                    format!("non-numeric value `{}` in {}", token, what),
                )
            })
        })
        .collect::<Result<_>>()?;
    if values.len() != len {
        return Err(HmmError::format(
            line_no,
            format!("expected {} values in {}, got {}", len, what, values.len()),
        ));
    }
    Ok(values)
}

impl Model {
    ///
    /// Parse and validate a model from the text format.
    ///
    /// Syntax problems are `Format` errors and are reported before any
    /// stochastic check; a well-formed but invalid model is a `Validation`
    /// error.
    ///
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Model> {
        let mut lines = ContentLines::new(reader);

        let observations = lines.names("observation names")?;
        let states = lines.names("state names")?;
        let n = states.len();
        let m = observations.len();

        let initial = lines.floats(n, "initial distribution")?;
        let transition = (0..n)
            .map(|i| lines.floats(n, &format!("transition matrix row {}", i)))
            .collect::<Result<Vec<_>>>()?;
        let emission = (0..n)
            .map(|i| lines.floats(m, &format!("emission matrix row {}", i)))
            .collect::<Result<Vec<_>>>()?;

        if let Some((line_no, line)) = lines.next_line()? {
            debug!("trailing content {:?}", line);
            return Err(HmmError::format(line_no, "extra information after emission matrix"));
        }

        let model = Model::new(observations, states, initial, transition, emission)?;
        info!(
            "loaded model n_states={} n_observations={}",
            model.state_count(),
            model.observation_count()
        );
        Ok(model)
    }
    ///
    /// `Model::from_reader` of a file
    ///
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Model> {
        let file = std::fs::File::open(path.as_ref())?;
        debug!("reading model from {}", path.as_ref().display());
        Model::from_reader(std::io::BufReader::new(file))
    }
}

impl FromStr for Model {
    type Err = HmmError;
    fn from_str(s: &str) -> Result<Model> {
        Model::from_reader(s.as_bytes())
    }
}

/// Writes the model in the text format, so that the output can be parsed back.
impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "# observations")?;
        writeln!(f, "{}", self.observation_names().iter().join(" "))?;
        writeln!(f, "# states")?;
        writeln!(f, "{}", self.state_names().iter().join(" "))?;
        writeln!(f, "# initial")?;
        writeln!(f, "{}", self.initial().iter().join(" "))?;
        writeln!(f, "# transition")?;
        for row in self.transition().rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        writeln!(f, "# emission")?;
        for row in self.emission().rows() {
            writeln!(f, "{}", row.iter().join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Location;
    use crate::hmm::mocks::{mock_dna, mock_two_state};

    const TWO_STATE: &str = "\
# observations
a b

# states
S1 S2
0.6 0.4
0.7 0.3
0.4 0.6
# emission
0.5 0.5
0.1 0.9
";

    #[test]
    fn load_two_state() {
        let hmm: Model = TWO_STATE.parse().unwrap();
        assert_eq!(hmm, mock_two_state());
    }

    #[test]
    fn load_display_roundtrip() {
        let hmm = mock_dna();
        let text = hmm.to_string();
        println!("{}", text);
        let hmm2: Model = text.parse().unwrap();
        assert_eq!(hmm, hmm2);
    }

    #[test]
    fn load_extra_line() {
        let text = format!("{}\n# trailing comment is fine\n0.1 0.9\n", TWO_STATE);
        let e = text.parse::<Model>().unwrap_err();
        assert!(e.is_format());
        assert!(matches!(e, HmmError::Format { line: 14, .. }), "{:?}", e);

        let text = format!("{}\n# trailing comment is fine\n\n", TWO_STATE);
        assert!(text.parse::<Model>().is_ok());
    }

    #[test]
    fn load_missing_line() {
        let text = "a b\nS1 S2\n0.6 0.4\n0.7 0.3\n0.4 0.6\n0.5 0.5\n";
        let e = text.parse::<Model>().unwrap_err();
        assert!(e.is_format());
        assert_eq!(
            e.to_string(),
            "format error at line 7: unexpected end of input: missing emission matrix row 1"
        );
        assert!("".parse::<Model>().unwrap_err().is_format());
    }

    #[test]
    fn load_wrong_token_count() {
        let text = "a b\nS1 S2\n0.6 0.4\n0.7 0.3 0.0\n0.4 0.6\n0.5 0.5\n0.1 0.9\n";
        let e = text.parse::<Model>().unwrap_err();
        assert_eq!(
            e.to_string(),
            "format error at line 4: expected 2 values in transition matrix row 0, got 3"
        );
    }

    #[test]
    fn load_non_numeric() {
        let text = "a b\nS1 S2\n0.6 x\n0.7 0.3\n0.4 0.6\n0.5 0.5\n0.1 0.9\n";
        let e = text.parse::<Model>().unwrap_err();
        assert!(e.is_format());
        assert!(e.to_string().contains("non-numeric value `x`"));
    }

    #[test]
    fn load_format_before_validation() {
        // transition row 0 is invalid, but the missing line is reported
        let text = "a b\nS1 S2\n0.6 0.4\n0.7 0.7\n0.4 0.6\n0.5 0.5\n";
        assert!(text.parse::<Model>().unwrap_err().is_format());
    }

    #[test]
    fn load_invalid_row() {
        let text = "a b\nS1 S2 S3\n0.6 0.4 0.0\n0.7 0.3 0.0\n0.4 0.6 0.0\n0.5 0.47 0.0\n0.5 0.5\n0.1 0.9\n0.5 0.5\n";
        let e = text.parse::<Model>().unwrap_err();
        match e {
            HmmError::Validation { location, reason } => {
                assert_eq!(location, Location::TransitionRow(2));
                assert_eq!(reason, "does not sum to 1: got 0.97");
            }
            e => panic!("unexpected {:?}", e),
        }
    }

    #[test]
    fn load_invalid_probability() {
        let text = "a b\nS1 S2\n1.2 -0.2\n0.7 0.3\n0.4 0.6\n0.5 0.5\n0.1 0.9\n";
        let e = text.parse::<Model>().unwrap_err();
        assert!(matches!(
            e,
            HmmError::Validation {
                location: Location::Initial,
                ..
            }
        ));
    }

    #[test]
    fn load_missing_file() {
        let e = Model::from_file("/nonexistent/model.hmm").unwrap_err();
        assert!(matches!(e, HmmError::Io(_)));
    }
}
