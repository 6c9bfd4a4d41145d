use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::stats::{DomainRecord, DomainReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks a format tag before any counting work is done.
pub fn is_supported_format(tag: &str) -> bool {
    tag.parse::<OutputFormat>().is_ok()
}

// YAML consumers expect lowercase keys, JSON consumers capitalized ones.
#[derive(Serialize)]
struct YamlDomain<'a> {
    name: &'a str,
    occurences: u64,
}

#[derive(Serialize)]
struct JsonDomain<'a> {
    #[serde(rename = "Name")]
    name: &'a str,
    #[serde(rename = "Occurences")]
    occurences: u64,
}

impl<'a> From<&'a DomainRecord> for YamlDomain<'a> {
    fn from(record: &'a DomainRecord) -> Self {
        Self {
            name: &record.name,
            occurences: record.count,
        }
    }
}

impl<'a> From<&'a DomainRecord> for JsonDomain<'a> {
    fn from(record: &'a DomainRecord) -> Self {
        Self {
            name: &record.name,
            occurences: record.count,
        }
    }
}

impl DomainReport {
    /// Writes the report in the format named by `tag` (`"yaml"` or `"json"`).
    pub fn write_to<W: Write + ?Sized>(&self, sink: &mut W, tag: &str) -> Result<()> {
        let format = tag.parse::<OutputFormat>()?;
        self.write_as(sink, format)
    }

    pub fn write_as<W: Write + ?Sized>(&self, sink: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Yaml => self.write_yaml(sink)?,
            OutputFormat::Json => self.write_json(sink)?,
        }
        sink.flush()?;
        Ok(())
    }

    fn write_yaml<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        let domains: Vec<YamlDomain<'_>> = self.domains.iter().map(YamlDomain::from).collect();
        serde_yaml::to_writer(&mut *sink, &domains)?;
        Ok(())
    }

    fn write_json<W: Write + ?Sized>(&self, sink: &mut W) -> Result<()> {
        let domains: Vec<JsonDomain<'_>> = self.domains.iter().map(JsonDomain::from).collect();
        serde_json::to_writer(&mut *sink, &domains)?;
        writeln!(sink)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DomainReport {
        DomainReport {
            domains: vec![DomainRecord::new("mail.com", 2), DomainRecord::new("gmail.com", 1)],
            ..Default::default()
        }
    }

    fn render(report: &DomainReport, tag: &str) -> Result<String> {
        let mut buf = Vec::new();
        report.write_to(&mut buf, tag)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn parses_format_tags() {
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(is_supported_format("json"));
        assert!(is_supported_format("yaml"));
        assert!(!is_supported_format("csv"));
        assert!(!is_supported_format("YAML"));
    }

    #[test]
    fn writes_json_with_capitalized_keys() {
        let out = render(&sample(), "json").unwrap();
        assert_eq!(
            out,
            "[{\"Name\":\"mail.com\",\"Occurences\":2},{\"Name\":\"gmail.com\",\"Occurences\":1}]\n"
        );
    }

    #[test]
    fn writes_yaml_block_list() {
        let out = render(&sample(), "yaml").unwrap();
        assert_eq!(
            out,
            "- name: mail.com\n  occurences: 2\n- name: gmail.com\n  occurences: 1\n"
        );
    }

    #[test]
    fn empty_report_renders_empty_list() {
        let empty = DomainReport::default();
        assert_eq!(render(&empty, "json").unwrap(), "[]\n");
        assert_eq!(render(&empty, "yaml").unwrap(), "[]\n");
    }

    #[test]
    fn rejects_unknown_format() {
        match render(&sample(), "csv") {
            Err(Error::UnsupportedFormat(tag)) => assert_eq!(tag, "csv"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn unknown_format_writes_nothing() {
        let mut buf = Vec::new();
        assert!(sample().write_to(&mut buf, "xml").is_err());
        assert!(buf.is_empty());
    }
}
