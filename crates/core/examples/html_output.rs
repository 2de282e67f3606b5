//! Rendering a diff as highlighted, escaped HTML

use redpen_core::{generate_diff, render_diff_html, HtmlConfig};

fn main() {
    let original = "I has a apple & a <pear>.";
    let fixed = "I have an apple & a <pear>.";

    let parts = generate_diff(original, fixed);

    // Default class names
    println!("{}\n", render_diff_html(&parts));

    // Custom class names for an existing stylesheet
    let config = HtmlConfig::new()
        .with_added_class("hl-ins")
        .with_removed_class("hl-del")
        .with_changed_class("hl-fix");

    println!("{}", config.render(&parts));
}
