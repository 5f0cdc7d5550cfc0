use eframe::egui::{Context, RichText, Ui, Visuals};

use crate::analysis::TrailingComparison;
use crate::config::{CURRENCY_LABEL, SERIES_A_LABEL, SERIES_B_LABEL};
use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    let uppercase_text = text.into().to_uppercase();
    RichText::new(uppercase_text)
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Sets up custom visuals for the entire application.
/// Process-wide; called once when the app is created.
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.central_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a section heading with standard spacing
pub fn section_heading(ui: &mut Ui, text: impl Into<String>) {
    ui.add_space(10.0);
    ui.heading(colored_heading(text));
    ui.add_space(5.0);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Formats an amount with thousands separators and a fixed number of decimals
/// (`3521.456` -> `3,521.46`).
pub fn format_amount(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // No sign on values that round to zero
    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };

    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

/// Two-decimal amount, or a dash for a missing value.
pub fn format_optional_amount(value: Option<f64>) -> String {
    value
        .map(|v| format_amount(v, 2))
        .unwrap_or_else(|| "–".to_string())
}

/// "LSTM average is higher by 28.00 IDR than GRU", when both means exist.
pub fn comparison_sentence(cmp: &TrailingComparison) -> Option<String> {
    let diff = cmp.difference?;
    let direction = cmp.direction?;
    Some(format!(
        "{} average is {} by {:.2} {} than {}",
        SERIES_A_LABEL,
        direction,
        diff.abs(),
        CURRENCY_LABEL,
        SERIES_B_LABEL
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount(3521.456, 2), "3,521.46");
        assert_eq!(format_amount(1234567.0, 2), "1,234,567.00");
        assert_eq!(format_amount(999.999, 2), "1,000.00");
        assert_eq!(format_amount(12.0, 0), "12");
    }

    #[test]
    fn negative_and_zero() {
        assert_eq!(format_amount(-4200.5, 2), "-4,200.50");
        assert_eq!(format_amount(-0.001, 2), "0.00");
        assert_eq!(format_amount(0.0, 2), "0.00");
    }

    #[test]
    fn missing_value_is_dash() {
        assert_eq!(format_optional_amount(None), "–");
        assert_eq!(format_optional_amount(Some(1.5)), "1.50");
    }

    #[test]
    fn comparison_sentence_uses_absolute_difference() {
        let lower = TrailingComparison::compute(&[Some(3500.0)], &[Some(3512.5)]);
        assert_eq!(
            comparison_sentence(&lower).as_deref(),
            Some("LSTM average is lower by 12.50 IDR than GRU")
        );

        let undefined = TrailingComparison::compute(&[], &[Some(1.0)]);
        assert_eq!(comparison_sentence(&undefined), None);
    }
}
