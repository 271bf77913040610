use std::fmt::{self, Write};
use std::str::FromStr;

use crate::error::{BeepError, Result};
use crate::parser::NoteEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tuple-like literal, `([440, 0.1], [493, 0.05])`.
    #[default]
    Text,
    Json,
    /// `frequency,pause` header plus one line per note.
    Csv,
    /// C array for pasting into buzzer firmware, pauses in milliseconds.
    Source,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Csv,
        OutputFormat::Source,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Source => "source",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = BeepError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" | "plain" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "source" | "src" | "c" => Ok(OutputFormat::Source),
            _ => Err(BeepError::UnknownFormat(s.trim().to_string())),
        }
    }
}

/// Renders notes in the given format. The result has no trailing newline.
pub fn render(events: &[NoteEvent], format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Text => render_text(events),
        OutputFormat::Json => serde_json::to_string_pretty(events)?,
        OutputFormat::Csv => render_csv(events),
        OutputFormat::Source => render_source(events),
    };
    Ok(rendered)
}

/// Parses the format name and renders in one step.
pub fn render_named(events: &[NoteEvent], format: &str) -> Result<String> {
    render(events, format.parse()?)
}

fn render_text(events: &[NoteEvent]) -> String {
    let pairs: Vec<String> = events
        .iter()
        .map(|e| format!("[{}, {}]", e.frequency(), e.pause()))
        .collect();

    // a lone element gets a trailing comma, like a one-item tuple
    match pairs.len() {
        1 => format!("({},)", pairs[0]),
        _ => format!("({})", pairs.join(", ")),
    }
}

fn render_csv(events: &[NoteEvent]) -> String {
    let mut out = String::from("frequency,pause");
    for e in events {
        let _ = write!(out, "\n{},{}", e.frequency(), e.pause());
    }
    out
}

fn render_source(events: &[NoteEvent]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "// frequency (Hz), pause (ms)");
    let _ = writeln!(out, "#define NOTES_LEN {}", events.len());
    if events.is_empty() {
        // zero-length arrays are not valid C
        out.push_str("const int NOTES[1][2] = { {0, 0} };");
        return out;
    }
    out.push_str("const int NOTES[][2] = {\n");
    for e in events {
        let pause_ms = (e.pause() * 1000.0).round() as u32;
        let _ = writeln!(out, "    {{{}, {}}},", e.frequency(), pause_ms);
    }
    out.push_str("};");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_format_names() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" txt ".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("c".parse::<OutputFormat>().unwrap(), OutputFormat::Source);
        for format in OutputFormat::ALL {
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_unknown_format() {
        let err = "yaml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, BeepError::UnknownFormat(ref f) if f == "yaml"));
        assert!(err.to_string().contains("yaml"));
        assert!(render_named(&parse("A"), "xml").is_err());
    }

    #[test]
    fn test_text() {
        assert_eq!(
            render(&parse("A-B"), OutputFormat::Text).unwrap(),
            "([440, 0], [493, 0.05])"
        );
        assert_eq!(render(&parse("A"), OutputFormat::Text).unwrap(), "([440, 0.05],)");
        assert_eq!(render(&[], OutputFormat::Text).unwrap(), "()");
    }

    #[test]
    fn test_json() {
        let json = render(&parse("A B"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, serde_json::json!([[440, 0.1], [493, 0.05]]));
        assert_eq!(render(&[], OutputFormat::Json).unwrap(), "[]");
    }

    #[test]
    fn test_csv() {
        assert_eq!(
            render(&parse("A B-C"), OutputFormat::Csv).unwrap(),
            "frequency,pause\n440,0.1\n493,0\n523,0.05"
        );
        assert_eq!(render(&[], OutputFormat::Csv).unwrap(), "frequency,pause");
    }

    #[test]
    fn test_source() {
        let src = render(&parse("^A  B"), OutputFormat::Source).unwrap();
        assert!(src.contains("#define NOTES_LEN 2"));
        assert!(src.contains("{466, 150},"));
        assert!(src.contains("{493, 50},"));
        assert!(src.ends_with("};"));

        let empty = render(&[], OutputFormat::Source).unwrap();
        assert!(empty.contains("#define NOTES_LEN 0"));
    }
}
