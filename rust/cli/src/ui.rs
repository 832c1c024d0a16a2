//! Consistent error and warning lines on stderr.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefixes() {
        let mut err = Vec::new();
        write_error(&mut err, "bad card").unwrap();
        display_warning(&mut err, "record 2 mismatched").unwrap();
        let text = String::from_utf8(err).unwrap();
        assert_eq!(text, "Error: bad card\nWARNING: record 2 mismatched\n");
    }
}
