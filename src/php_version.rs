use crate::error::LookupError;

/// Moodle versions the PHP table knows about, in release order.
pub fn supported_moodle_versions() -> &'static [&'static str] {
    &["3.9", "3.10", "3.11", "4.0", "4.1", "4.2", "4.3", "4.4", "5.1"]
}

/// Latest PHP version compatible with the given Moodle version.
///
/// The input is matched exactly as given; no trimming or case-folding.
pub fn php_version(moodle_version: &str) -> Result<&'static str, LookupError> {
    let php = match moodle_version {
        "3.9" => "7.4",
        "3.10" => "7.4",
        "3.11" => "8.0",
        "4.0" => "8.0",
        "4.1" => "8.1",
        "4.2" => "8.2",
        "4.3" => "8.2",
        "4.4" => "8.3",
        "5.1" => "8.4",
        other => return Err(LookupError::UnknownMoodleVersion(other.to_string())),
    };
    Ok(php)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_every_documented_version() {
        let expected = [
            ("3.9", "7.4"),
            ("3.10", "7.4"),
            ("3.11", "8.0"),
            ("4.0", "8.0"),
            ("4.1", "8.1"),
            ("4.2", "8.2"),
            ("4.3", "8.2"),
            ("4.4", "8.3"),
            ("5.1", "8.4"),
        ];
        for (moodle, php) in expected {
            assert_eq!(php_version(moodle).unwrap(), php, "moodle {}", moodle);
        }
    }

    #[test]
    fn supported_list_matches_the_table() {
        for moodle in supported_moodle_versions() {
            assert!(php_version(moodle).is_ok(), "moodle {}", moodle);
        }
        assert_eq!(supported_moodle_versions().len(), 9);
    }

    #[test]
    fn rejects_unknown_versions() {
        assert_eq!(
            php_version("4.5"),
            Err(LookupError::UnknownMoodleVersion("4.5".into()))
        );
        assert_eq!(
            php_version("2.7"),
            Err(LookupError::UnknownMoodleVersion("2.7".into()))
        );
    }

    #[test]
    fn input_is_not_normalized() {
        assert_eq!(
            php_version("3.9 "),
            Err(LookupError::UnknownMoodleVersion("3.9 ".into()))
        );
        assert_eq!(
            php_version(" 4.1"),
            Err(LookupError::UnknownMoodleVersion(" 4.1".into()))
        );
    }
}
