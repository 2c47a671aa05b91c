//! Guided export flow.
//!
//! Walks the user through: input path → file discovery → tint color →
//! blend mode → opacity → output directory → suffix → confirmation.
//! Builds an `ExportArgs` and delegates to `cli::export::execute()`.

use console::Style;
use dialoguer::{Confirm, Input, Select};
use glaze_core::pipeline::FileDiscovery;
use glaze_core::{BlendMode, Config, Rgb};
use std::path::PathBuf;

use crate::cli::export::ExportArgs;

use super::theme::glaze_theme;

/// Blend modes in menu order, with the labels the selection presents.
/// The tint mode leads because it is the default.
const MODE_ITEMS: &[(&str, BlendMode)] = &[
    ("Tint (Source Atop) - default", BlendMode::SourceAtop),
    ("Normal (Source Over)", BlendMode::Normal),
    ("Multiply", BlendMode::Multiply),
    ("Screen", BlendMode::Screen),
    ("Overlay", BlendMode::Overlay),
    ("Darken", BlendMode::Darken),
    ("Lighten", BlendMode::Lighten),
    ("Color Burn", BlendMode::ColorBurn),
    ("Color Dodge", BlendMode::ColorDodge),
    ("Hard Light", BlendMode::HardLight),
    ("Soft Light", BlendMode::SoftLight),
    ("Difference", BlendMode::Difference),
];

/// Walk the user through the full export flow.
pub async fn guided_export(config: &Config) -> anyhow::Result<()> {
    let theme = glaze_theme();

    // ── Steps 1+2: Input path with file discovery ─────────────────────────
    // Combined loop: re-prompts on both "path not found" and "no images found".

    let (input, files) = loop {
        let Some(raw_path) = super::handle_interrupt(
            Input::<String>::with_theme(&theme)
                .with_prompt("Path to image or folder")
                .interact_text(),
        )?
        else {
            return Ok(());
        };

        let path = PathBuf::from(shellexpand::tilde(&raw_path).into_owned());

        if !path.exists() {
            let warn = Style::new().for_stderr().yellow();
            eprintln!(
                "  {}",
                warn.apply_to(format!("Path not found: {}", path.display()))
            );
            continue;
        }

        let discovery = FileDiscovery::new(config.processing.clone());
        let found = discovery.discover(&path);

        if found.is_empty() {
            let warn = Style::new().for_stderr().yellow();
            eprintln!(
                "  {}",
                warn.apply_to("No supported images found at that path.")
            );
            continue;
        }

        break (path, found);
    };

    let total_size = FileDiscovery::total_size(&files);
    let dim = Style::new().for_stderr().dim();
    eprintln!(
        "  {}",
        dim.apply_to(format!(
            "Found {} image(s) ({:.1} MB)",
            files.len(),
            total_size as f64 / 1_000_000.0
        ))
    );

    // ── Step 3: Tint color ──────────────────────────────────────────────────

    let Some(color) = super::handle_interrupt(
        Input::<String>::with_theme(&theme)
            .with_prompt("Tint color (hex)")
            .default(config.tint.color.clone())
            .validate_with(|s: &String| -> Result<(), &str> {
                if Rgb::from_hex(s).is_some() {
                    Ok(())
                } else {
                    Err("Expected a '#rrggbb' hex color")
                }
            })
            .interact_text(),
    )?
    else {
        return Ok(());
    };

    // ── Step 4: Blend mode ──────────────────────────────────────────────────

    let mode_labels: Vec<&str> = MODE_ITEMS.iter().map(|(label, _)| *label).collect();
    let default_mode = BlendMode::parse(&config.tint.mode).unwrap_or_default();
    let default_index = MODE_ITEMS
        .iter()
        .position(|(_, m)| *m == default_mode)
        .unwrap_or(0);

    let mode_choice = Select::with_theme(&theme)
        .with_prompt("Blend mode")
        .items(&mode_labels)
        .default(default_index)
        .interact_opt()?;

    let Some(mode_choice) = mode_choice else {
        return Ok(()); // Esc
    };
    let mode = MODE_ITEMS[mode_choice].1;

    // ── Step 5: Opacity ─────────────────────────────────────────────────────

    let Some(opacity) = super::handle_interrupt(
        Input::<u8>::with_theme(&theme)
            .with_prompt("Tint opacity (0-255)")
            .default(config.tint.opacity)
            .interact_text(),
    )?
    else {
        return Ok(());
    };

    // ── Step 6: Output directory ────────────────────────────────────────────

    let dir_items = &[
        format!("A '{}' folder next to each source (default)", config.export.dir_name),
        "A custom directory".to_string(),
    ];
    let dir_choice = Select::with_theme(&theme)
        .with_prompt("Output directory")
        .items(dir_items)
        .default(0)
        .interact_opt()?;

    let out_dir = match dir_choice {
        Some(0) => None,
        Some(1) => {
            let Some(dir) = super::handle_interrupt(
                Input::<String>::with_theme(&theme)
                    .with_prompt("Output directory path")
                    .interact_text(),
            )?
            else {
                return Ok(());
            };
            Some(PathBuf::from(shellexpand::tilde(&dir).into_owned()))
        }
        _ => return Ok(()), // Esc
    };

    // ── Step 7: Filename suffix ─────────────────────────────────────────────

    let append_suffix = Confirm::with_theme(&theme)
        .with_prompt("Append a suffix to output file names?")
        .default(!config.export.suffix.is_empty())
        .interact_opt()?;

    let suffix = match append_suffix {
        Some(true) => {
            let default = if config.export.suffix.is_empty() {
                "_processed".to_string()
            } else {
                config.export.suffix.clone()
            };
            let Some(suffix) = super::handle_interrupt(
                Input::<String>::with_theme(&theme)
                    .with_prompt("Suffix")
                    .default(default)
                    .interact_text(),
            )?
            else {
                return Ok(());
            };
            Some(suffix)
        }
        Some(false) => Some(String::new()),
        None => return Ok(()), // Esc
    };

    // ── Step 8: Confirmation ────────────────────────────────────────────────

    eprintln!();
    let bold = Style::new().for_stderr().bold();
    let dim = Style::new().for_stderr().dim();
    eprintln!(
        "  {}",
        bold.apply_to(format!("Ready to export {} image(s)", files.len()))
    );
    let out_label = match &out_dir {
        Some(p) => p.display().to_string(),
        None => format!("[source]/{}", config.export.dir_name),
    };
    eprintln!(
        "  {}",
        dim.apply_to(format!(
            "Tint: {color} at {opacity} ({mode}) | Output: {out_label}"
        ))
    );
    eprintln!();

    let confirm = Confirm::with_theme(&theme)
        .with_prompt("Start export?")
        .default(true)
        .interact_opt()?;

    if !matches!(confirm, Some(true)) {
        return Ok(());
    }

    // ── Step 9: Build ExportArgs and delegate ───────────────────────────────

    let args = ExportArgs {
        inputs: vec![input],
        color: Some(color),
        opacity: Some(opacity),
        mode: Some(mode.as_str().to_string()),
        out_dir,
        suffix,
        ..ExportArgs::default()
    };

    crate::cli::export::execute(args).await?;

    // ── Post-export menu ────────────────────────────────────────────────────

    eprintln!();
    let post_items = &["Export more images", "Back to main menu"];
    let post_choice = Select::with_theme(&theme)
        .with_prompt("What next?")
        .items(post_items)
        .default(0)
        .interact_opt()?;

    if matches!(post_choice, Some(0)) {
        // Recurse into another guided_export
        Box::pin(guided_export(config)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_items_cover_every_blend_mode() {
        assert_eq!(MODE_ITEMS.len(), BlendMode::ALL.len());
        for mode in BlendMode::ALL {
            assert!(MODE_ITEMS.iter().any(|(_, m)| *m == mode));
        }
    }

    #[test]
    fn test_default_mode_leads_the_menu() {
        assert_eq!(MODE_ITEMS[0].1, BlendMode::default());
    }
}
