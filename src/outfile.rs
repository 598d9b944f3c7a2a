//! Outfile parsing: `KEY=VALUE` property lines and per-window metric samples.

use std::collections::BTreeMap;
use std::io::BufRead;

use thiserror::Error;

/// Run metadata parsed from `KEY=VALUE` lines, keyed by property name.
///
/// Values are kept verbatim as read, trailing newline included. A repeated
/// key keeps its last occurrence.
pub type Properties = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum OutfileError {
    #[error("failed to read outfile")]
    Io(#[from] std::io::Error),
    #[error("line {line}: `{text}` is not a valid metric value")]
    InvalidSample {
        line: usize,
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Read an experiment outfile into its properties and metric samples.
///
/// A line containing `=` is a property line and is split at the first `=`;
/// everything after it becomes the value, untouched. Any other line is one
/// floating-point metric reading, appended in file order. A non-property
/// line that does not parse as a float fails the whole read.
pub fn read_outfile<R: BufRead>(mut reader: R) -> Result<(Properties, Vec<f64>), OutfileError> {
    let mut props = Properties::new();
    let mut metric_values = Vec::new();
    let mut line = String::new();
    let mut line_num = 0usize;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        line_num += 1;

        if let Some((key, value)) = line.split_once('=') {
            props.insert(key.to_string(), value.to_string());
        } else {
            let text = line.trim();
            let value = text
                .parse::<f64>()
                .map_err(|source| OutfileError::InvalidSample {
                    line: line_num,
                    text: text.to_string(),
                    source,
                })?;
            metric_values.push(value);
        }
    }

    Ok((props, metric_values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> Result<(Properties, Vec<f64>), OutfileError> {
        read_outfile(Cursor::new(input))
    }

    #[test]
    fn parses_properties_and_samples() {
        let (props, samples) = read("alpha=1\nbeta=hello\n0.5\n0.75\n1.0\n").unwrap();

        assert_eq!(props.len(), 2);
        assert_eq!(props["alpha"], "1\n");
        assert_eq!(props["beta"], "hello\n");
        assert_eq!(samples, vec![0.5, 0.75, 1.0]);
    }

    #[test]
    fn splits_property_at_first_equals_only() {
        let (props, samples) = read("key=a=b\n").unwrap();

        assert_eq!(props["key"], "a=b\n");
        assert!(samples.is_empty());
        // Rejoining key, "=", value reconstructs the line byte for byte.
        assert_eq!(format!("key={}", props["key"]), "key=a=b\n");
    }

    #[test]
    fn duplicate_key_keeps_last_occurrence() {
        let (props, _) = read("k=1\nk=2\n").unwrap();

        assert_eq!(props.len(), 1);
        assert_eq!(props["k"], "2\n");
    }

    #[test]
    fn parses_scientific_and_negative_samples() {
        let (_, samples) = read("1e-3\n-0.5\n").unwrap();

        assert_eq!(samples, vec![0.001, -0.5]);
    }

    #[test]
    fn handles_missing_final_newline() {
        let (props, samples) = read("run=7\n0.25").unwrap();

        assert_eq!(props["run"], "7\n");
        assert_eq!(samples, vec![0.25]);
    }

    #[test]
    fn interleaved_lines_keep_sample_order() {
        let (props, samples) = read("0.1\nname=x\n0.2\n0.3\n").unwrap();

        assert_eq!(props.len(), 1);
        assert_eq!(samples, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn malformed_sample_fails_with_line_number() {
        let err = read("alpha=1\nnot_a_number\n0.5\n").unwrap_err();

        match err {
            OutfileError::InvalidSample { line, text, .. } => {
                assert_eq!(line, 2);
                assert_eq!(text, "not_a_number");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rereading_same_input_is_identical() {
        let input = "alpha=1\n0.5\n0.75\n";
        let first = read(input).unwrap();
        let second = read(input).unwrap();

        assert_eq!(first, second);
    }
}
