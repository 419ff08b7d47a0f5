//! Build script to generate embedded word lists
//!
//! Reads `data/<language>/<category>.txt` and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (language, category file, constant name, description)
const LISTS: &[(&str, &str, &str, &str)] = &[
    (
        "en",
        "answers",
        "EN_ANSWERS",
        "Curated English solution words",
    ),
    (
        "en",
        "allowed",
        "EN_ALLOWED",
        "Full English dictionary of five-letter words",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for &(language, category, const_name, doc_comment) in LISTS {
        let input_path = format!("data/{language}/{category}.txt");
        let file_name = format!("{}.rs", const_name.to_lowercase());

        generate_word_list(
            &input_path,
            &Path::new(&out_dir).join(file_name),
            const_name,
            doc_comment,
        );

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} words)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
