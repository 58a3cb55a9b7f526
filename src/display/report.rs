//! Report formatting utilities for terminal output

use crate::models::Money;

/// Format an amount in whole currency units with Indian digit grouping
///
/// The last three digits form one group and every two digits before them
/// form another: `₹1,50,000`, `₹12,34,56,789`. Paise are rounded half away
/// from zero.
pub fn format_currency(amount: Money, symbol: &str) -> String {
    let minor = amount.minor();
    let whole = (minor.unsigned_abs() + 50) / 100;
    let sign = if minor < 0 && whole > 0 { "-" } else { "" };
    format!("{}{}{}", sign, symbol, group_indian(whole))
}

/// Format a floating-point amount (such as computed tax) like [`format_currency`]
pub fn format_currency_f64(amount: f64, symbol: &str) -> String {
    format_currency(Money::from_minor((amount * 100.0).round() as i64), symbol)
}

fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format a signed percentage change with one decimal, e.g. `+12.5%`
pub fn format_change(pct: f64) -> String {
    format!("{:+.1}%", pct)
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Horizontal bar proportional to `value / max_value`
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate to at most `max_chars` characters, ending in an ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let head: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_indian_grouping() {
        assert_eq!(format_currency(Money::from_major(0), "₹"), "₹0");
        assert_eq!(format_currency(Money::from_major(999), "₹"), "₹999");
        assert_eq!(format_currency(Money::from_major(1000), "₹"), "₹1,000");
        assert_eq!(format_currency(Money::from_major(150_000), "₹"), "₹1,50,000");
        assert_eq!(format_currency(Money::from_major(1_500_000), "₹"), "₹15,00,000");
        assert_eq!(
            format_currency(Money::from_major(123_456_789), "₹"),
            "₹12,34,56,789"
        );
    }

    #[test]
    fn test_format_currency_rounds_paise() {
        assert_eq!(format_currency(Money::from_minor(149_950), "₹"), "₹1,500");
        assert_eq!(format_currency(Money::from_minor(149_949), "₹"), "₹1,499");
        assert_eq!(format_currency(Money::from_minor(-250_000), "₹"), "-₹2,500");
        assert_eq!(format_currency(Money::from_minor(-40), "₹"), "₹0");
    }

    #[test]
    fn test_format_currency_f64() {
        assert_eq!(format_currency_f64(15_000.0, "₹"), "₹15,000");
        assert_eq!(format_currency_f64(4_999.6, "₹"), "₹5,000");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(12.5), "+12.5%");
        assert_eq!(format_change(-100.0), "-100.0%");
        assert_eq!(format_change(0.0), "+0.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(0.0, 100.0, 4), "    ");
    }

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("₹₹₹₹₹₹", 5), "₹₹...");
    }
}
