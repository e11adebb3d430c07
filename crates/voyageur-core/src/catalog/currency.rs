//! Rupee formatting.

/// Formats a whole-rupee amount with Indian-system digit grouping.
///
/// The last three digits form one group and every group above it has two
/// digits: `12500` becomes `₹12,500` and `200000` becomes `₹2,00,000`.
/// No fraction digits are shown.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut index = head_bytes.len();
    while index > 0 {
        let start = index.saturating_sub(2);
        groups.push(&head[start..index]);
        index = start;
    }
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_ungrouped() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(500), "₹500");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(format_inr(2750), "₹2,750");
        assert_eq!(format_inr(12500), "₹12,500");
    }

    #[test]
    fn test_lakhs_use_two_digit_groups() {
        assert_eq!(format_inr(200000), "₹2,00,000");
        assert_eq!(format_inr(1234567), "₹12,34,567");
    }
}
