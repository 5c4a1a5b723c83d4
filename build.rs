use lightningcss::{
    bundler::{Bundler, FileProvider},
    stylesheet::{MinifyOptions, ParserOptions, PrinterOptions},
};
use std::fs;
use std::path::{Path, PathBuf};

const CSS_ENTRY: &str = "assets/css/main.css";
const CSS_OUTPUT: &str = "assets/dist/bundle.css";

/// Sheets pulled in by `@import "..."` lines of `entry`, resolved next to it
fn imported_sheets(entry: &Path) -> Vec<PathBuf> {
    let dir = entry.parent().unwrap_or(Path::new("."));
    let source = fs::read_to_string(entry).unwrap_or_default();

    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix("@import"))
        .filter_map(|rest| {
            let rest = rest.trim().trim_start_matches("url(");
            let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
            let name = rest[1..].split(quote).next()?;
            Some(dir.join(name))
        })
        .collect()
}

fn main() {
    let entry = Path::new(CSS_ENTRY);

    // Sidebar and layout sheets are separate files behind main.css
    println!("cargo:rerun-if-changed={}", CSS_ENTRY);
    for sheet in imported_sheets(entry) {
        println!("cargo:rerun-if-changed={}", sheet.display());
    }

    fs::create_dir_all("assets/dist").expect("Failed to create assets/dist directory");

    let fs_provider = FileProvider::new();
    let mut bundler = Bundler::new(&fs_provider, None, ParserOptions::default());

    let mut stylesheet = bundler.bundle(entry).expect("Failed to bundle CSS");

    stylesheet
        .minify(MinifyOptions::default())
        .expect("Failed to minify CSS");

    let css = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .expect("Failed to generate CSS output");

    fs::write(CSS_OUTPUT, css.code).expect("Failed to write bundle.css");
}
