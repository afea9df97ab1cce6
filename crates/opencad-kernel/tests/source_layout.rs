//! Source files stay within the workspace's 100-column line limit.

use std::fs;
use std::path::{Path, PathBuf};

const MAX_WIDTH: usize = 100;

fn rust_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            rust_files(&path, out);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            out.push(path);
        }
    }
}

#[test]
fn no_line_exceeds_max_width() {
    let kernel = Path::new(env!("CARGO_MANIFEST_DIR"));
    let types = kernel.join("../opencad-types");
    let mut files = Vec::new();
    for root in [kernel, types.as_path()] {
        rust_files(&root.join("src"), &mut files);
        rust_files(&root.join("tests"), &mut files);
    }
    assert!(files.len() > 10, "found only {} sources", files.len());

    let mut wide = Vec::new();
    for file in &files {
        let text = fs::read_to_string(file).unwrap();
        for (i, line) in text.lines().enumerate() {
            let width = line.chars().count();
            if width > MAX_WIDTH {
                wide.push(format!("{}:{} ({width})", file.display(), i + 1));
            }
        }
    }
    let report = wide.join("\n");
    assert!(wide.is_empty(), "lines over {MAX_WIDTH} columns:\n{report}");
}
