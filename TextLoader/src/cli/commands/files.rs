//! CLI command for listing discovered translation files

use crate::catalog::find_translation_files;
use crate::config::LoaderConfig;

/// List the files the loader would read, in load order
pub fn execute(config: &LoaderConfig) -> anyhow::Result<()> {
    let files = find_translation_files(&config.plugin_root, config.extension());
    if files.is_empty() {
        println!(
            "No .{} files found in {}",
            config.extension(),
            config.plugin_root.display()
        );
        return Ok(());
    }

    for file in &files {
        println!("{}", file.display());
    }
    println!("{} files", files.len());
    Ok(())
}
