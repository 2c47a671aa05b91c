//! Exporter setup: input checks, config overrides, tint resolution.

use glaze_core::{BlendMode, Config, Exporter, ReportFormat, Rgb, Tint};

use super::{ExportArgs, ExportContext};

/// Validate inputs, load config, apply flag overrides, and assemble
/// everything needed for an export run.
pub(crate) fn setup_exporter(args: &ExportArgs) -> anyhow::Result<ExportContext> {
    // Validate input paths exist before touching anything else
    for input in &args.inputs {
        if !input.exists() {
            anyhow::bail!(
                "Input path does not exist: {:?}\n\n  Hint: Check the file path and try again.",
                input
            );
        }
    }

    // Load configuration
    let mut config = Config::load()?;

    // CLI flags override the configured tint
    if let Some(color) = &args.color {
        config.tint.color = color.clone();
    }
    if let Some(opacity) = args.opacity {
        config.tint.opacity = opacity;
    }
    if let Some(mode) = &args.mode {
        config.tint.mode = mode.clone();
    }

    let color = Rgb::from_hex(&config.tint.color).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid tint color '{}': expected a '#rrggbb' hex color.",
            config.tint.color
        )
    })?;
    let mode = BlendMode::parse(&config.tint.mode).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown blend mode '{}'.\n\n  Valid modes: {}",
            config.tint.mode,
            mode_names()
        )
    })?;
    let tint = Tint::new(color, config.tint.opacity, mode);

    // Report format: flag wins, otherwise the configured default
    let report_format = match args.report_format {
        Some(format) => format.to_core(),
        None => ReportFormat::parse(&config.report.format).ok_or_else(|| {
            anyhow::anyhow!("Invalid report.format in config: '{}'", config.report.format)
        })?,
    };
    let pretty = args.pretty || config.report.pretty;

    let suffix = args
        .suffix
        .clone()
        .unwrap_or_else(|| config.export.suffix.clone());

    Ok(ExportContext {
        exporter: Exporter::new(&config),
        tint,
        output_dir: args.out_dir.clone(),
        dir_name: config.export.dir_name.clone(),
        suffix,
        report_format,
        pretty,
    })
}

/// Comma-separated list of every accepted blend mode name.
pub(crate) fn mode_names() -> String {
    BlendMode::ALL
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_lists_all_modes() {
        let names = mode_names();
        assert!(names.contains("source-atop"));
        assert!(names.contains("multiply"));
        assert_eq!(names.matches(", ").count(), BlendMode::ALL.len() - 1);
    }
}
