/// Largest value of the built-in dataset
pub const DEFAULT_MAX_VALUE: u32 = 30;

/// Stringified integers `0..=max_value`, in ascending order
pub fn number_dataset(max_value: u32) -> Vec<String> {
    (0..=max_value).map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_dataset_bounds() {
        let items = number_dataset(DEFAULT_MAX_VALUE);
        assert_eq!(items.len(), 31);
        assert_eq!(items.first().map(String::as_str), Some("0"));
        assert_eq!(items.last().map(String::as_str), Some("30"));
    }

    #[test]
    fn test_zero_max_value() {
        assert_eq!(number_dataset(0), vec!["0".to_string()]);
    }
}
