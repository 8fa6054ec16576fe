// Case transforms shared by all suggestion generators.

/// Uppercase the first character and lowercase the rest.
///
/// This is the transform applied to almost every candidate before it is
/// emitted: `"cloudHUB"` becomes `"Cloudhub"`. Empty input stays empty.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Title-case a string: a letter is uppercased when it does not follow
/// another letter, and lowercased otherwise. Non-letters pass through
/// unchanged and reset the word boundary.
///
/// `"next-genapp"` becomes `"Next-Genapp"`; a plain concatenation like
/// `"cloudstorage"` becomes `"Cloudstorage"`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_letter = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_basic() {
        assert_eq!(capitalize("cloud"), "Cloud");
        assert_eq!(capitalize("CLOUD"), "Cloud");
        assert_eq!(capitalize("cLoUd"), "Cloud");
    }

    #[test]
    fn capitalize_edge_cases() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
        assert_eq!(capitalize("7zip"), "7zip");
    }

    #[test]
    fn title_case_single_run() {
        assert_eq!(title_case("cloudstorage"), "Cloudstorage");
        assert_eq!(title_case("CLOUDSTORAGE"), "Cloudstorage");
    }

    #[test]
    fn title_case_restarts_after_non_letter() {
        assert_eq!(title_case("next-genapp"), "Next-Genapp");
        assert_eq!(title_case("cloud_storage"), "Cloud_Storage");
        assert_eq!(title_case("a1b"), "A1B");
    }

    #[test]
    fn title_case_empty() {
        assert_eq!(title_case(""), "");
    }
}
