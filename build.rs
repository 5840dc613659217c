//! Build script to generate the embedded color list
//!
//! Reads the base color names and generates Rust source code with a const array.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// The hardest tier draws from this many colors
const MIN_COLORS: usize = 10;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_color_list(
        "data/colors.txt",
        &Path::new(&out_dir).join("colors.rs"),
        "COLOR_NAMES",
        "Base color names, in palette order",
    );

    // Rebuild if the color list changes
    println!("cargo:rerun-if-changed=data/colors.txt");
}

fn generate_color_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let names: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty())
        .collect();
    let count = names.len();

    assert!(
        count >= MIN_COLORS,
        "{input_path} lists {count} colors, at least {MIN_COLORS} are required"
    );
    assert!(
        count <= usize::from(u8::MAX),
        "{input_path} lists {count} colors, at most {} are supported",
        u8::MAX
    );

    let mut seen = HashSet::new();
    for name in &names {
        assert!(
            name.chars().all(|c| c.is_ascii_lowercase()),
            "Color '{name}' must be a single lowercase ASCII word"
        );
        assert!(seen.insert(name), "Color '{name}' is listed twice");
    }

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated color list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for name in &names {
        writeln!(output, "    \"{name}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of colors in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
