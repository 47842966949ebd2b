//! Configuration display command.

use std::path::Path;

use crate::output::{self, OutputFormat};
use filescope_core::config::AppConfig;
use filescope_core::error::AppError;

/// Execute `config`
pub async fn execute(config: &AppConfig, path: &Path, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Table => {
            let source = if path.exists() {
                path.display().to_string()
            } else {
                format!("{} (not found, using defaults)", path.display())
            };
            output::print_kv("Source", &source);
            output::print_kv(
                "Prefetch depth",
                &config.browser.max_prefetch_depth.to_string(),
            );
            output::print_kv("Sort children", &config.browser.sort_children.to_string());
            output::print_kv("Channel size", &config.search.channel_capacity.to_string());
            output::print_kv("Log level", &config.logging.level);
            output::print_kv("Log format", &config.logging.format);
        }
        OutputFormat::Json => output::print_item(config, format),
    }
    Ok(())
}
