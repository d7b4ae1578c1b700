const SETTINGS: &str = "src/default_settings.toml";
const REQUIRED_TABLES: [&str; 2] = ["frontend", "tokenizer"];

fn main() {
    println!("cargo:rerun-if-changed={SETTINGS}");
    check_settings(include_str!("src/default_settings.toml"));
}

/// Reject a broken embedded default before it can reach `settings()`.
fn check_settings(content: &str) {
    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("{SETTINGS} contains invalid TOML: {e}"),
    };
    for name in REQUIRED_TABLES {
        if !table.get(name).is_some_and(toml::Value::is_table) {
            panic!("{SETTINGS} is missing the [{name}] table");
        }
    }
}
