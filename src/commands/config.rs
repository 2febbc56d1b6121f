use crate::commands::AppContext;
use crate::core::{
    config::ConfigKey,
    error::Result,
    output::{print_info, print_success},
};

pub fn execute_config_get(ctx: &AppContext, key: Option<String>) -> Result<()> {
    let keys = match key {
        Some(key) => vec![key.parse::<ConfigKey>()?],
        None => ConfigKey::ALL.to_vec(),
    };

    for key in keys {
        let value = ctx
            .config
            .raw_value(key)?
            .unwrap_or_else(|| "(not set)".to_string());
        println!("{key} = {value}");
    }

    Ok(())
}

pub fn execute_config_set(ctx: &mut AppContext, key: String, value: String) -> Result<()> {
    let key = key.parse::<ConfigKey>()?;

    if key == ConfigKey::EditorPath {
        // The settings file mirrors the primary editor for older front ends
        ctx.settings.settings.editor_path = Some(value.clone().into());
        if let Err(e) = ctx.settings.save() {
            log::warn!("Could not mirror editor path into settings file: {e}");
        }
    }

    ctx.config.save_value(key, &value)?;
    if value.is_empty() {
        print_info(&format!("{key} cleared"));
    } else {
        print_success(&format!("{key} = {value}"));
    }
    Ok(())
}
