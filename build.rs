use std::fs;

const DEFAULT_CONFIG: &str = "src/default_config.toml";

/// Keys the bundled config must define, with the TOML type `Config` expects.
const REQUIRED_KEYS: &[(&str, &str, &str)] = &[
    ("input", "normalize_line_endings", "boolean"),
    ("status", "style", "string"),
];

fn main() {
    println!("cargo:rerun-if-changed={DEFAULT_CONFIG}");

    let content = fs::read_to_string(DEFAULT_CONFIG)
        .unwrap_or_else(|e| panic!("Failed to read {DEFAULT_CONFIG}: {e}"));
    let table = content
        .parse::<toml::Table>()
        .unwrap_or_else(|e| panic!("Invalid {DEFAULT_CONFIG}: {e}"));

    for (section, key, kind) in REQUIRED_KEYS {
        let value = table
            .get(*section)
            .and_then(|s| s.get(*key))
            .unwrap_or_else(|| panic!("{DEFAULT_CONFIG} is missing [{section}] {key}"));
        if value.type_str() != *kind {
            panic!(
                "{DEFAULT_CONFIG}: [{section}] {key} must be a {kind}, found {}",
                value.type_str()
            );
        }
    }
}
