use crate::config::{BusinessConfig, Config, FeatureFlags, GoogleConfig, SitePaths, ThemeConfig};
use crate::error::Result;
use dialoguer::{Confirm, Input, Select};
use tracing::info;

/// Interactive wizard that builds config.json section by section.
pub fn execute(paths: &SitePaths) -> Result<()> {
    let existing = Config::load(paths);

    let config = Config {
        business: configure_business(&existing.business)?,
        website: crate::config::WebsiteConfig {
            theme: configure_theme()?,
            features: configure_features()?,
        },
        google: configure_google(&existing.google)?,
    };

    config.save(paths)?;

    info!(path = ?paths.config_file(), "Configuration saved");
    println!("Next steps:");
    println!("  1. Place OAuth credentials at {:?}", paths.credentials_file());
    println!("  2. Verify the setup:  handicraft-sync check");
    println!("  3. Sync your data:    handicraft-sync sync");

    Ok(())
}

fn configure_business(current: &BusinessConfig) -> Result<BusinessConfig> {
    let name: String = Input::new()
        .with_prompt("Business name")
        .default(current.name.clone())
        .interact_text()?;

    let tagline: String = Input::new()
        .with_prompt("Tagline")
        .default(current.tagline.clone())
        .interact_text()?;

    let whatsapp_phone: String = Input::new()
        .with_prompt("WhatsApp phone (+91XXXXXXXXXX)")
        .default(current.whatsapp_phone.clone())
        .allow_empty(true)
        .interact_text()?;

    let whatsapp_message: String = Input::new()
        .with_prompt("Default WhatsApp message")
        .default(current.whatsapp_message.clone())
        .interact_text()?;

    Ok(BusinessConfig {
        name,
        tagline,
        whatsapp_phone,
        whatsapp_message,
    })
}

fn configure_google(current: &GoogleConfig) -> Result<GoogleConfig> {
    let sheet_id: String = Input::new()
        .with_prompt("Google Sheet ID")
        .default(current.sheet_id.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    let drive_folder_id: String = Input::new()
        .with_prompt("Google Drive folder ID")
        .default(current.drive_folder_id.clone().unwrap_or_default())
        .allow_empty(true)
        .interact_text()?;

    Ok(GoogleConfig {
        sheet_id: Some(sheet_id).filter(|s| !s.is_empty()),
        drive_folder_id: Some(drive_folder_id).filter(|s| !s.is_empty()),
    })
}

fn configure_theme() -> Result<ThemeConfig> {
    let presets = [
        ("Amber/Orange (default)", "#f59e0b", "#ea580c", "#dc2626"),
        ("Blue/Teal", "#0ea5e9", "#0891b2", "#0284c7"),
        ("Green/Emerald", "#10b981", "#059669", "#047857"),
        ("Purple/Violet", "#8b5cf6", "#7c3aed", "#6d28d9"),
    ];

    let mut items: Vec<&str> = presets.iter().map(|(label, ..)| *label).collect();
    items.push("Custom");

    let choice = Select::new()
        .with_prompt("Color scheme")
        .items(&items)
        .default(0)
        .interact()?;

    let theme = match presets.get(choice) {
        Some((_, primary, secondary, accent)) => ThemeConfig {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
        },
        None => custom_theme()?,
    };

    Ok(theme)
}

fn custom_theme() -> Result<ThemeConfig> {
    let default = ThemeConfig::default();

    let primary: String = Input::new()
        .with_prompt("Primary color (hex)")
        .default(default.primary)
        .interact_text()?;

    let secondary: String = Input::new()
        .with_prompt("Secondary color (hex)")
        .default(default.secondary)
        .interact_text()?;

    let accent: String = Input::new()
        .with_prompt("Accent color (hex)")
        .default(default.accent)
        .interact_text()?;

    Ok(ThemeConfig {
        primary,
        secondary,
        accent,
    })
}

fn configure_features() -> Result<FeatureFlags> {
    let show_availability = Confirm::new()
        .with_prompt("Show availability status?")
        .default(true)
        .interact()?;

    let show_sizes = Confirm::new()
        .with_prompt("Show product sizes?")
        .default(true)
        .interact()?;

    let show_notes = Confirm::new()
        .with_prompt("Show product notes?")
        .default(true)
        .interact()?;

    let enable_category_filter = Confirm::new()
        .with_prompt("Enable category filtering?")
        .default(true)
        .interact()?;

    Ok(FeatureFlags {
        show_availability,
        show_sizes,
        show_notes,
        enable_category_filter,
    })
}
