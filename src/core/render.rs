//! Renderer module
//!
//! Renders a ranked report to text, json or jsonl

use crate::core::rank::RankedEntry;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Jsonl,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            _ => Err(format!("Unknown format: {}. Available: text, json, jsonl", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for ranked reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string. An empty report renders as nothing for
    /// text/jsonl and as `[]` for json.
    pub fn render(&self, report: &[RankedEntry]) -> String {
        match self.config.format {
            OutputFormat::Text => Self::render_text(report),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Jsonl => self.render_jsonl(report),
        }
    }

    /// Render to a writer, ending with a newline when anything was written
    pub fn render_to<W: Write>(
        &self,
        report: &[RankedEntry],
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render(report);
        if !output.is_empty() {
            writer.write_all(output.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// `<trigram>: <count>` per line
    fn render_text(report: &[RankedEntry]) -> String {
        report
            .iter()
            .map(|entry| format!("{}: {}", entry.trigram, entry.count))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_json(&self, report: &[RankedEntry]) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(report).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(report).unwrap_or_else(|_| "[]".to_string())
        }
    }

    fn render_jsonl(&self, report: &[RankedEntry]) -> String {
        report
            .iter()
            .filter_map(|entry| {
                if self.config.pretty {
                    serde_json::to_string_pretty(entry).ok()
                } else {
                    serde_json::to_string(entry).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<RankedEntry> {
        vec![
            RankedEntry::new("a b c", 2),
            RankedEntry::new("b c d", 1),
        ]
    }

    fn render(format: OutputFormat, report: &[RankedEntry]) -> String {
        Renderer::with_config(RenderConfig::with_pretty(format, false)).render(report)
    }

    #[test]
    fn test_text_lines() {
        assert_eq!(render(OutputFormat::Text, &sample()), "a b c: 2\nb c d: 1");
    }

    #[test]
    fn test_empty_report() {
        assert_eq!(render(OutputFormat::Text, &[]), "");
        assert_eq!(render(OutputFormat::Jsonl, &[]), "");
        assert_eq!(render(OutputFormat::Json, &[]), "[]");

        let mut out = Vec::new();
        Renderer::with_config(RenderConfig::default())
            .render_to(&[], &mut out)
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_json_array() {
        let json = render(OutputFormat::Json, &sample());
        let parsed: Vec<RankedEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn test_jsonl_one_object_per_line() {
        let jsonl = render(OutputFormat::Jsonl, &sample());
        let lines: Vec<_> = jsonl.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"trigram":"a b c","count":2}"#);
    }

    #[test]
    fn test_render_to_appends_newline() {
        let mut out = Vec::new();
        Renderer::with_config(RenderConfig::default())
            .render_to(&sample(), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a b c: 2\nb c d: 1\n");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert!("md".parse::<OutputFormat>().is_err());
    }
}
