//! The `languages` command: list the accepted `--lang` selectors.

use std::fmt::Write as _;

use mapgen_codegen::Language;

/// Render the selector table.
pub fn render_languages() -> String {
    let mut out = String::new();
    for language in Language::ALL {
        let marker = if language == Language::DEFAULT {
            " (default)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  {:<12}{:<12}{}{marker}",
            language.selector(),
            language.display_name(),
            language.file_name()
        );
    }
    out
}

pub fn list_languages() {
    println!("Target languages:");
    print!("{}", render_languages());
}
