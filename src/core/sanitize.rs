// src/core/sanitize.rs

/// Formatting tags the game wraps around disabled (italic) cells.
/// They contain the field delimiter, so they must go before splitting.
pub const DECORATOR_TAGS: &[&str] = &["|c:disabled|", "|/c|"];

pub fn strip_decorators(line: &str) -> String {
    let mut out = s!(line);
    for tag in DECORATOR_TAGS {
        if out.contains(tag) {
            out = out.replace(tag, "");
        }
    }
    out
}

/// A rule/separator token: non-empty and only made of `-`, `=` or `+`.
pub fn is_rule(cell: &str) -> bool {
    let t = cell.trim();
    !t.is_empty() && t.chars().all(|c| matches!(c, '-' | '=' | '+'))
}

/// File-system safe stem for cache names: "Coaching Candidates (2)" → "Coaching_Candidates_2".
pub fn sanitize_file_stem(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!("staff") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decorators_are_removed_before_split() {
        let line = "| |c:disabled|John Smith|/c| | 12 |";
        assert_eq!(strip_decorators(line), "| John Smith | 12 |");
    }

    #[test]
    fn rules_are_dash_only() {
        assert!(is_rule(" ------ "));
        assert!(is_rule("=+="));
        assert!(!is_rule(""));
        assert!(!is_rule("-5"));
    }

    #[test]
    fn file_stem_is_collapsed() {
        assert_eq!(sanitize_file_stem("Coaching  Candidates (2)"), "Coaching_Candidates_2");
        assert_eq!(sanitize_file_stem("!!!"), "staff");
    }
}
