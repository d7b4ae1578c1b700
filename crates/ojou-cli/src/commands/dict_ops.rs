use std::path::Path;
use std::process;

use ojou_core::RegisteredWords;

/// One `source<TAB>target<TAB>pos` line per entry; `*` marks an unset predicate.
pub fn format_entries(dict: &RegisteredWords) -> String {
    let mut out = String::new();
    for c in dict.list() {
        let source = c.source_surface.as_deref().unwrap_or("*");
        let pos = c
            .source_pos_prefix
            .as_ref()
            .map_or_else(|| "*".to_string(), |p| p.join(","));
        out.push_str(&format!("{source}\t{}\t{pos}\n", c.target_surface));
    }
    out
}

pub fn list(file: &str) {
    let dict = die!(RegisteredWords::open(Path::new(file)), "Error loading {file}: {}");
    print!("{}", format_entries(&dict));
    eprintln!("{} entries", dict.len());
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_format_entries_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[words]]
source = "私"
target = "わたくし"
pos = ["名詞", "代名詞"]

[[words]]
target = "ですこと"
"#
        )
        .unwrap();
        let dict = RegisteredWords::open(file.path()).unwrap();
        assert_eq!(
            format_entries(&dict),
            "*\tですこと\t*\n私\tわたくし\t名詞,代名詞\n"
        );
    }
}
