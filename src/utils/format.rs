/// Format a whole rupee amount with thousands separators (e.g., 1,247)
pub fn format_inr_amount(amount: u32) -> String {
    let s = amount.to_string();
    let mut result = String::new();

    for (count, c) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// Format a rupee amount for display (e.g., ₹1,247)
pub fn format_inr(amount: u32) -> String {
    format!("₹{}", format_inr_amount(amount))
}

/// "1 book" / "3 books"
pub fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Up to two initials from a display name ("Arjun Sharma" -> "AS")
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(799), "₹799");
        assert_eq!(format_inr(1499), "₹1,499");
        assert_eq!(format_inr(1_234_567), "₹1,234,567");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(0, "book"), "0 books");
        assert_eq!(pluralize(1, "book"), "1 book");
        assert_eq!(pluralize(8, "book"), "8 books");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Arjun Sharma"), "AS");
        assert_eq!(initials("  lyra  "), "L");
        assert_eq!(initials("Anna Maria Lopez"), "AM");
        assert_eq!(initials(""), "");
    }
}
