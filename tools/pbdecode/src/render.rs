//! Terminal rendering for decode results and configuration listings

use colored::Colorize;
use pseudobin_codec::numfmt::{f64_shortest, i64_to_string};
use pseudobin_codec::{Reading, Segments, TableSet, Variant};
use pseudobin_config::{Preset, ValidationResult};
use std::collections::BTreeMap;

/// Raw message with the decoded window highlighted
pub fn highlight(segments: &Segments<'_>) -> String {
    format!(
        "{}{}{}",
        segments.before.dimmed(),
        segments.window.bright_green().bold(),
        segments.after.dimmed()
    )
}

/// Join lines, each terminated by a newline
fn lines(lines: Vec<String>) -> String {
    lines.into_iter().map(|line| line + "\n").collect()
}

pub fn reading(reading: &Reading<'_>) -> String {
    let window = reading.window;
    lines(vec![
        format!("{} {}", "Message:  ".bright_cyan(), highlight(&reading.segments)),
        format!(
            "{} start {}, width {}, end {}",
            "Window:   ".bright_cyan(),
            window.start(),
            window.width(),
            window.end()
        ),
        format!(
            "{} {} ({})",
            "Format:   ".bright_cyan(),
            reading.variant.label(),
            reading.variant
        ),
        format!(
            "{} {}",
            "Decoded:  ".bright_cyan(),
            i64_to_string(reading.decoded)
        ),
        format!(
            "{} {}",
            "Processed:".bright_cyan(),
            reading.processed.text.bright_yellow()
        ),
    ])
}

pub fn presets(presets: &BTreeMap<String, Preset>) -> String {
    if presets.is_empty() {
        return format!("{}\n", "No presets configured".yellow());
    }

    let mut out = Vec::new();
    for (name, preset) in presets {
        out.push(name.bright_yellow().to_string());
        if let Some(description) = &preset.description {
            out.push(format!("  {}", description.dimmed()));
        }
        out.push(format!(
            "  start_offset {}, width {}",
            preset.start_offset, preset.width
        ));
        out.push(format!(
            "  value * {} / {} + {}",
            f64_shortest(preset.multiplier),
            f64_shortest(preset.divider),
            f64_shortest(preset.adder)
        ));
        if let Some(variant) = preset.variant {
            out.push(format!("  variant {}", variant));
        }
        if let Some(digits) = preset.digits {
            out.push(format!("  digits {}", digits));
        }
    }
    lines(out)
}

pub fn tables(tables: &TableSet) -> String {
    let mut out = Vec::new();
    for variant in Variant::ALL {
        let table = tables.get(variant);
        let symbols: String = (0..table.base()).map(|d| table.symbol(d).unwrap_or(' ')).collect();
        out.push(format!(
            "{} {}",
            variant.as_str().bright_yellow(),
            format!("({})", variant.label()).dimmed()
        ));
        out.push(format!(
            "  base {}, {} characters",
            table.base(),
            table.len()
        ));
        out.push(format!("  digits {}", symbols.bright_green()));
        let unmapped = table.unmapped_digits();
        if !unmapped.is_empty() {
            out.push(format!("  {} {:?}", "unmapped".yellow(), unmapped));
        }
    }
    lines(out)
}

pub fn validation(result: &ValidationResult) -> String {
    let mut out = Vec::new();
    for error in &result.errors {
        out.push(format!("{} {}", "ERROR".red(), error));
    }
    for warning in &result.warnings {
        out.push(format!("{} {}", "WARN".yellow(), warning));
    }
    if result.is_valid {
        out.push("Configuration is valid".bright_green().to_string());
    }
    lines(out)
}
