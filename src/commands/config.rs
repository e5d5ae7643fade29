use crate::cli::ConfigCommands;
use crate::services::config::{Settings, default_config_path};
use crate::services::output::print_one;

pub fn handle_config_commands(
    json: bool,
    command: &ConfigCommands,
    settings: &Settings,
) -> anyhow::Result<()> {
    match command {
        ConfigCommands::Show => {
            print_one(json, settings.effective(), |c| {
                format!(
                    "config: {}\nsource: {}\napi_key: {}\nimage_type: {}\norientation: {}\nsafesearch: {}\nper_page: {}",
                    c.config_path,
                    c.source,
                    c.api_key,
                    c.image_type,
                    c.orientation,
                    c.safesearch,
                    c.per_page
                )
            })?;
        }
        ConfigCommands::Path => {
            let path = default_config_path()?.display().to_string();
            print_one(json, path, |p| p.clone())?;
        }
    }
    Ok(())
}
