use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Command result that can be printed as text or JSON.
pub trait Report: Serialize {
    fn text_lines(&self) -> Vec<String>;
}

pub fn render<R: Report>(report: &R, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    write_report(&mut stdout.lock(), report, format, pretty)
}

pub fn write_report<W: Write, R: Report>(
    out: &mut W,
    report: &R,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Text => {
            for line in report.text_lines() {
                writeln!(out, "{line}")?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Greeting {
        name: &'static str,
    }

    impl Report for Greeting {
        fn text_lines(&self) -> Vec<String> {
            vec![format!("hello {}", self.name), String::from("bye")]
        }
    }

    fn rendered(format: OutputFormat, pretty: bool) -> String {
        let mut buffer = Vec::new();
        write_report(&mut buffer, &Greeting { name: "btc" }, format, pretty).expect("renders");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn text_output_writes_one_line_per_entry() {
        assert_eq!(rendered(OutputFormat::Text, false), "hello btc\nbye\n");
    }

    #[test]
    fn json_output_is_compact_unless_pretty() {
        assert_eq!(rendered(OutputFormat::Json, false), "{\"name\":\"btc\"}\n");
        assert_eq!(
            rendered(OutputFormat::Json, true),
            "{\n  \"name\": \"btc\"\n}\n"
        );
    }
}
