//! Sanitizer functions for generated Kotlin identifiers

use regex::Regex;

/// Normalizes an association name into a Kotlin map key.
///
/// Uppercases the name, then collapses every run of whitespace, parentheses,
/// hyphens and periods into a single underscore.
///
/// # Examples
/// ```
/// use iconforge::generation::sanitizers::icon_key;
///
/// assert_eq!(icon_key("Angular"), "ANGULAR");
/// assert_eq!(icon_key("Foo (Bar).Baz-1"), "FOO_BAR_BAZ_1");
/// ```
pub fn icon_key(name: &str) -> String {
    let separators = Regex::new(r"[\s().\-]+").unwrap();
    separators
        .replace_all(&name.to_uppercase(), "_")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_key_uppercases() {
        assert_eq!(icon_key("angular"), "ANGULAR");
        assert_eq!(icon_key("Android"), "ANDROID");
    }

    #[test]
    fn test_icon_key_collapses_separator_runs() {
        // Every run of whitespace, parens, hyphens and periods becomes one
        // underscore
        assert_eq!(icon_key("Foo (Bar).Baz-1"), "FOO_BAR_BAZ_1");
        assert_eq!(icon_key("Visual Studio Code"), "VISUAL_STUDIO_CODE");
        assert_eq!(icon_key("Node.js"), "NODE_JS");
        assert_eq!(icon_key("a - b"), "A_B");
    }

    #[test]
    fn test_icon_key_keeps_other_characters() {
        assert_eq!(icon_key("C++"), "C++");
        assert_eq!(icon_key("foo_bar"), "FOO_BAR");
    }
}
