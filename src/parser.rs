use std::fs;
use std::path::Path;

use crate::error::{Result, SuffixError};
use crate::normalize::decode_label;
use crate::types::{Category, Rule};

/// Section markers of the public suffix list
const BEGIN_ICANN: &str = "===BEGIN ICANN DOMAINS===";
const BEGIN_PRIVATE: &str = "===BEGIN PRIVATE DOMAINS===";

/// Parse rules from public suffix list text.
///
/// Rules before any section marker are treated as ICANN rules.
pub fn parse_rules(text: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    let mut category = Category::Icann;

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers
        let line = line.trim();

        if let Some(comment) = line.strip_prefix("//") {
            let comment = comment.trim();
            if comment.starts_with(BEGIN_ICANN) {
                category = Category::Icann;
            } else if comment.starts_with(BEGIN_PRIVATE) {
                category = Category::Private;
            }
            continue;
        }

        // Only the first token is the rule; the rest of the line is ignored
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };

        let rule = parse_single_rule(token, category, line_num)?;
        rules.push(rule);
    }

    tracing::debug!(
        rules = rules.len(),
        private = rules
            .iter()
            .filter(|r| r.category() == Category::Private)
            .count(),
        exceptions = rules.iter().filter(|r| r.is_exception()).count(),
        "parsed public suffix list"
    );

    Ok(rules)
}

/// Parse rules from a public suffix list file.
pub fn parse_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<Rule>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        SuffixError::ParseError(format!(
            "Failed to read rules file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_rules(&text)
}

/// Parse a single rule token such as `*.kawasaki.jp` or `!city.kawasaki.jp`
fn parse_single_rule(token: &str, category: Category, line_num: usize) -> Result<Rule> {
    let source = token.to_lowercase();
    let (exception, pattern) = match source.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, source.as_str()),
    };

    let parts = pattern
        .split('.')
        .rev()
        .map(|label| decode_label(label).into_owned())
        .collect();

    Rule::new(parts, exception, category, source.as_str()).map_err(|e| {
        SuffixError::ParseErrorAtLine {
            line: line_num,
            message: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_rule() {
        let rules = parse_rules("co.uk").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].parts(), &["uk".to_string(), "co".to_string()]);
        assert_eq!(rules[0].category(), Category::Icann);
        assert!(!rules[0].is_exception());
        assert_eq!(rules[0].source(), "co.uk");
    }

    #[test]
    fn test_parse_exception_and_wildcard() {
        let rules = parse_rules("*.kawasaki.jp\n!city.kawasaki.jp").unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].parts()[2], "*");
        assert!(!rules[0].is_exception());
        assert!(rules[1].is_exception());
        assert_eq!(
            rules[1].parts(),
            &["jp".to_string(), "kawasaki".to_string(), "city".to_string()]
        );
        assert_eq!(rules[1].source(), "!city.kawasaki.jp");
    }

    #[test]
    fn test_parse_sections() {
        let text = r#"
// This Source Code Form is subject to the terms of the Mozilla Public License.

// ===BEGIN ICANN DOMAINS===
com
// uk : https://en.wikipedia.org/wiki/.uk
co.uk
// ===END ICANN DOMAINS===
// ===BEGIN PRIVATE DOMAINS===
// GitHub, Inc.
github.io
// ===END PRIVATE DOMAINS===
"#;
        let rules = parse_rules(text).unwrap();
        assert_eq!(rules.len(), 3);
        assert_eq!(rules[0].category(), Category::Icann);
        assert_eq!(rules[1].category(), Category::Icann);
        assert_eq!(rules[2].category(), Category::Private);
        assert_eq!(rules[2].source(), "github.io");
    }

    #[test]
    fn test_parse_ignores_trailing_text() {
        let rules = parse_rules("  com   trailing garbage").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].source(), "com");
    }

    #[test]
    fn test_parse_lowercases_and_decodes() {
        let rules = parse_rules("XN--55QX5D.CN").unwrap();
        assert_eq!(rules[0].parts(), &["cn".to_string(), "公司".to_string()]);

        let rules = parse_rules("公司.cn").unwrap();
        assert_eq!(rules[0].parts(), &["cn".to_string(), "公司".to_string()]);
    }

    #[test]
    fn test_parse_rejects_empty_label() {
        let result = parse_rules("com\nfoo..bar");
        match result {
            Err(SuffixError::ParseErrorAtLine { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected ParseErrorAtLine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_bare_exception_marker() {
        assert!(parse_rules("!").is_err());
    }

    #[test]
    fn test_parse_file() {
        use std::io::Write;
        let dir = std::env::temp_dir().join("public_suffix_parser_test");
        let _ = fs::create_dir_all(&dir);
        let file_path = dir.join("list.dat");
        let mut f = fs::File::create(&file_path).unwrap();
        writeln!(f, "// ===BEGIN ICANN DOMAINS===").unwrap();
        writeln!(f, "com").unwrap();
        writeln!(f, "// ===BEGIN PRIVATE DOMAINS===").unwrap();
        writeln!(f, "blogspot.com").unwrap();
        drop(f);

        let rules = parse_rules_from_file(&file_path).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[1].category(), Category::Private);

        let _ = fs::remove_file(&file_path);
        let _ = fs::remove_dir(&dir);
    }

    #[test]
    fn test_parse_file_not_found() {
        let result = parse_rules_from_file("/nonexistent/path/public_suffix_list.dat");
        assert!(matches!(result, Err(SuffixError::ParseError(_))));
    }
}
