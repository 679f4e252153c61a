//! Horizontal bar charts for bucket totals
//!
//! Bars are sized by absolute value so that income and expenses compare by
//! magnitude; the glyph and color tell them apart.

use colored::Colorize;

use super::report::{format_header, right_align, separator, truncate};
use crate::models::Money;
use crate::reports::Bucket;

/// Length in characters of the longest bar
pub const BAR_MAX_WIDTH: usize = 50;

/// Width of the right-aligned label column
pub const LABEL_WIDTH: usize = 20;

const INCOME_GLYPH: char = '█';
const EXPENSE_GLYPH: char = '▓';

/// Number of bar characters for `value` when `max` is the largest magnitude
pub fn bar_length(value: Money, max: Money) -> usize {
    let filled = (value.magnitude_ratio(max) * BAR_MAX_WIDTH as f64).round() as usize;
    filled.min(BAR_MAX_WIDTH)
}

fn format_bar(value: Money, max: Money) -> String {
    let filled = bar_length(value, max);
    let padding = " ".repeat(BAR_MAX_WIDTH - filled);

    if value.is_negative() {
        let bar = EXPENSE_GLYPH.to_string().repeat(filled);
        format!("{}{}", bar.red(), padding)
    } else {
        let bar = INCOME_GLYPH.to_string().repeat(filled);
        format!("{}{}", bar.green(), padding)
    }
}

/// Render a bucket as a bar chart, largest magnitude first
pub fn render_bar_chart(bucket: &Bucket, title: &str) -> String {
    if bucket.is_empty() {
        return format!("No data to display for {}.\n", title);
    }

    let max = bucket.max_magnitude();
    let mut output = String::new();

    output.push_str(&format_header(title));
    output.push('\n');
    output.push_str(&separator(LABEL_WIDTH + BAR_MAX_WIDTH + 12));
    output.push('\n');

    for (label, value) in bucket.sorted_by_magnitude() {
        let label = right_align(&truncate(label, LABEL_WIDTH), LABEL_WIDTH);
        output.push_str(&format!(
            "{} {} {:>10}\n",
            label,
            format_bar(value, max),
            value.to_string()
        ));
    }

    output
}
