#[cfg(test)]
/// # Panics
/// Panics if the result is `Ok` (operation succeeded when error was expected).
pub fn assert_error_code<T>(
    result: crate::NormResult<T>,
    expected_code: &str,
) {
    match result {
        Err(e) => {
            assert_eq!(
                e.code(),
                expected_code,
                "Expected error code {expected_code}, got {}: {e}",
                e.code()
            );
        }
        Ok(_) => {
            panic!("Expected error with code {expected_code}, but operation succeeded");
        }
    }
}

#[cfg(test)]
/// # Panics
/// Panics if the result is `Ok` (operation succeeded when error was expected).
pub fn assert_error_contains<T>(
    result: crate::NormResult<T>,
    expected_substring: &str,
) {
    match result {
        Err(e) => {
            let message = e.to_string();
            assert!(
                message.contains(expected_substring),
                "Error message '{message}' does not contain '{expected_substring}'"
            );
        }
        Ok(_) => {
            panic!("Expected error containing '{expected_substring}', but operation succeeded");
        }
    }
}
