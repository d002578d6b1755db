//! Dump the settings metadata table as JSON, grouped the way an inspector panel shows it.
//!
//! Usage:
//!   cargo run -p debug --bin settings_table > settings-table.json

use lighting_settings::{descriptors_in, Group, LightingSettings};

fn main() -> Result<(), String> {
    env_logger::init();
    let defaults = LightingSettings::default();
    let groups: Vec<serde_json::Value> = Group::ALL
        .iter()
        .map(|group| {
            let fields: Vec<serde_json::Value> = descriptors_in(*group)
                .map(|desc| {
                    serde_json::json!({
                        "name": desc.name,
                        "label": desc.label(),
                        "help": desc.help_text,
                        "kind": desc.kind,
                        "default": defaults.get(desc.key),
                    })
                })
                .collect();
            serde_json::json!({ "title": group.title(), "fields": fields })
        })
        .collect();
    let output = serde_json::to_string_pretty(&groups).map_err(|e| e.to_string())?;
    println!("{}", output);
    Ok(())
}
