use crate::nbs_analysis::domain::Stanza;
use crate::shared::Result;

/// Control-field parser for package-index records
///
/// This service contains pure parsing logic for the stanza format used by
/// Packages and Sources indices: `Field: value` lines, continuation lines
/// starting with whitespace, records separated by blank lines. It has no
/// I/O dependencies; decompression happens in the adapters that feed it.
pub struct ControlParser;

impl ControlParser {
    /// Parses a full index file into stanzas
    ///
    /// Records lacking the mandatory Package field are rejected. When the
    /// index carries consecutive records for the same package name, the
    /// last record wins (indices occasionally repeat a package while a
    /// publication is in flight).
    ///
    /// # Arguments
    /// * `text` - The decompressed index content
    ///
    /// # Returns
    /// All parsed stanzas in file order
    ///
    /// # Errors
    /// Returns an error if a record has no Package field, a continuation
    /// line appears before any field, or a line is not part of the format
    pub fn parse_stanzas(text: &str) -> Result<Vec<Stanza>> {
        let mut stanzas: Vec<Stanza> = Vec::new();
        let mut current = Stanza::new();
        let mut current_start = 1usize;
        let mut last_field: Option<String> = None;

        for (index, line) in text.lines().enumerate() {
            let lineno = index + 1;

            if line.trim().is_empty() {
                Self::flush(&mut stanzas, &mut current, current_start)?;
                current_start = lineno + 1;
                last_field = None;
                continue;
            }

            if line.starts_with(' ') || line.starts_with('\t') {
                match &last_field {
                    Some(field) => current.append(field, line.trim()),
                    None => anyhow::bail!(
                        "continuation line at line {} appears before any field",
                        lineno
                    ),
                }
                continue;
            }

            match line.split_once(':') {
                Some((name, value)) if !name.trim().is_empty() => {
                    let name = name.trim();
                    current.insert(name, value.trim().to_string());
                    last_field = Some(name.to_string());
                }
                _ => anyhow::bail!(
                    "line {} is neither a field nor a continuation: '{}'",
                    lineno,
                    line
                ),
            }
        }

        Self::flush(&mut stanzas, &mut current, current_start)?;
        Ok(stanzas)
    }

    /// Completes the current record: enforces the Package requirement and
    /// collapses an adjacent duplicate (same package name as the previous
    /// record) by keeping the newer stanza.
    fn flush(stanzas: &mut Vec<Stanza>, current: &mut Stanza, start_line: usize) -> Result<()> {
        if current.is_empty() {
            return Ok(());
        }

        let stanza = std::mem::take(current);
        if stanza.package().is_none() {
            anyhow::bail!("record at line {} has no Package field", start_line);
        }

        let duplicate_of_last = stanzas
            .last()
            .is_some_and(|prev| prev.package() == stanza.package());
        if duplicate_of_last {
            if let Some(prev) = stanzas.last_mut() {
                *prev = stanza;
            }
        } else {
            stanzas.push(stanza);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_stanza() {
        let text = "Package: libfoo1\nVersion: 1.0-1\nDepends: libc6\n";
        let stanzas = ControlParser::parse_stanzas(text).unwrap();

        assert_eq!(stanzas.len(), 1);
        assert_eq!(stanzas[0].package(), Some("libfoo1"));
        assert_eq!(stanzas[0].field("Depends"), Some("libc6"));
    }

    #[test]
    fn test_parse_multiple_stanzas() {
        let text = "Package: libfoo1\nVersion: 1.0-1\n\nPackage: bar\nDepends: libfoo1\n";
        let stanzas = ControlParser::parse_stanzas(text).unwrap();

        assert_eq!(stanzas.len(), 2);
        assert_eq!(stanzas[0].package(), Some("libfoo1"));
        assert_eq!(stanzas[1].package(), Some("bar"));
    }

    #[test]
    fn test_parse_continuation_lines_joined() {
        let text = "Package: bar\nDepends: libfoo1,\n libbaz2 | libqux3,\n libquux4\n";
        let stanzas = ControlParser::parse_stanzas(text).unwrap();

        assert_eq!(
            stanzas[0].field("Depends"),
            Some("libfoo1, libbaz2 | libqux3, libquux4")
        );
    }

    #[test]
    fn test_parse_trailing_blank_lines() {
        let text = "Package: libfoo1\nVersion: 1.0\n\n\n";
        let stanzas = ControlParser::parse_stanzas(text).unwrap();
        assert_eq!(stanzas.len(), 1);
    }

    #[test]
    fn test_parse_missing_package_field() {
        let text = "Version: 1.0-1\nDepends: libc6\n";
        let result = ControlParser::parse_stanzas(text);

        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("no Package field"));
    }

    #[test]
    fn test_parse_missing_package_reports_record_line() {
        let text = "Package: ok\n\nVersion: 1.0\n";
        let result = ControlParser::parse_stanzas(text);

        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("line 3"));
    }

    #[test]
    fn test_parse_continuation_before_field() {
        let text = " leading continuation\nPackage: foo\n";
        let result = ControlParser::parse_stanzas(text);

        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("before any field"));
    }

    #[test]
    fn test_parse_garbage_line() {
        let text = "Package: foo\nnot a field line\n";
        let result = ControlParser::parse_stanzas(text);

        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("neither a field nor a continuation"));
    }

    #[test]
    fn test_parse_adjacent_duplicate_keeps_last() {
        let text = "Package: libfoo1\nVersion: 1.0-1\n\nPackage: libfoo1\nVersion: 1.0-2\n";
        let stanzas = ControlParser::parse_stanzas(text).unwrap();

        assert_eq!(stanzas.len(), 1);
        assert_eq!(stanzas[0].field("Version"), Some("1.0-2"));
    }

    #[test]
    fn test_parse_non_adjacent_same_name_kept() {
        let text =
            "Package: libfoo1\nVersion: 1.0-1\n\nPackage: bar\nVersion: 2.0\n\nPackage: libfoo1\nVersion: 1.0-2\n";
        let stanzas = ControlParser::parse_stanzas(text).unwrap();

        // only adjacent runs collapse; interleaved repeats stay separate
        assert_eq!(stanzas.len(), 3);
    }

    #[test]
    fn test_parse_empty_input() {
        let stanzas = ControlParser::parse_stanzas("").unwrap();
        assert!(stanzas.is_empty());
    }

    #[test]
    fn test_parse_field_value_with_colon() {
        let text = "Package: foo\nDescription: tool: does things\n";
        let stanzas = ControlParser::parse_stanzas(text).unwrap();
        assert_eq!(stanzas[0].field("Description"), Some("tool: does things"));
    }
}
