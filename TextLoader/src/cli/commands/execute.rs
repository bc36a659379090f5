//! Command execution implementations

use super::Commands;
use super::{entries, files, table};
use crate::config::LoaderConfig;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self, config: &LoaderConfig) -> anyhow::Result<()> {
        match self {
            Commands::Table { file, separator } => {
                let separator = match separator {
                    Some(s) => crate::formats::table::Separator::try_from(s.as_str())?,
                    None => config.separator()?,
                };
                table::execute(file, separator)
            }
            Commands::Files { root, extension } => {
                let mut config = config.clone();
                if let Some(root) = root {
                    config.plugin_root.clone_from(root);
                }
                if let Some(extension) = extension {
                    config.extension.clone_from(extension);
                }
                files::execute(&config)
            }
            Commands::Entries {
                language,
                root,
                source,
                json,
            } => {
                let mut config = config.clone();
                if let Some(root) = root {
                    config.plugin_root.clone_from(root);
                }
                entries::execute(&config, language, source.as_deref(), *json)
            }
        }
    }
}
