//! Month naming.

use chrono::Month;

/// Full English month name for a zero-based month index (0 = January).
///
/// Returns `None` for indices outside 0..=11.
pub fn month_name(month_index: u32) -> Option<&'static str> {
    let number = u8::try_from(month_index.checked_add(1)?).ok()?;
    Month::try_from(number).ok().map(|m| m.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(0), Some("January"));
        assert_eq!(month_name(8), Some("September"));
        assert_eq!(month_name(11), Some("December"));
        assert_eq!(month_name(12), None);
        assert_eq!(month_name(u32::MAX), None);
    }
}
