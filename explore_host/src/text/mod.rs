//! Text utilities: turning human text into canonical identifiers and back.

/// Separator placed between the words of a slug.
pub const SEPARATOR: char = '_';

/// Canonicalize human text into a slug.
///
/// Letters are lower-cased, a lower-case letter or digit followed by an
/// upper-case letter starts a new word (`CloudNine` -> `cloud_nine`),
/// apostrophes are dropped (`Mario's Pad` -> `marios_pad`) and every other run
/// of non-alphanumeric characters collapses into a single [`SEPARATOR`].
/// Leading and trailing separators never appear in the output.
///
/// The conversion is lossy but deterministic and idempotent:
/// `slugify(&slugify(x)) == slugify(x)`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;
    let mut after_lower = false;

    for ch in input.chars() {
        if is_apostrophe(ch) {
            continue;
        }

        if ch.is_uppercase() && after_lower {
            pending_separator = true;
        }
        after_lower = ch.is_lowercase() || ch.is_numeric();

        for lower in ch.to_lowercase() {
            if lower.is_alphanumeric() && !lower.is_uppercase() {
                if pending_separator && !slug.is_empty() {
                    slug.push(SEPARATOR);
                }
                slug.push(lower);
                pending_separator = false;
            } else {
                pending_separator = true;
            }
        }
    }

    slug
}

/// Turn a slug into a display name: `cloud_nine` -> `Cloud Nine`.
pub fn title_case(identifier: &str) -> String {
    identifier
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check whether a string is already in canonical slug form.
pub fn is_slug(input: &str) -> bool {
    !input.is_empty() && slugify(input) == input
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_apostrophe(ch: char) -> bool {
    matches!(ch, '\'' | '\u{2019}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_slugify_words() {
        assert_eq!(slugify("Cloud Nine"), "cloud_nine");
        assert_eq!(slugify("  Throne   Room!  "), "throne_room");
        assert_eq!(slugify("kero-sewers"), "kero_sewers");
        assert_eq!(slugify("second star to the right"), "second_star_to_the_right");
    }

    #[test]
    fn test_slugify_camel_case() {
        assert_eq!(slugify("CloudNine"), "cloud_nine");
        assert_eq!(slugify("mushroomKingdom"), "mushroom_kingdom");
        assert_eq!(slugify("room2B"), "room2_b");
    }

    #[test]
    fn test_slugify_drops_apostrophes() {
        assert_eq!(slugify("Mario's Pad"), "marios_pad");
        assert_eq!(slugify("Bowser\u{2019}s Keep"), "bowsers_keep");
    }

    #[test]
    fn test_slugify_keeps_canonical_input() {
        assert_eq!(slugify("marios_pad"), "marios_pad");
        assert_eq!(slugify("north"), "north");
    }

    #[test]
    fn test_slugify_empty_results() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("?!_-"), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("cloud_nine"), "Cloud Nine");
        assert_eq!(title_case("throne_room"), "Throne Room");
        assert_eq!(title_case("north"), "North");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("cloud_nine"));
        assert!(!is_slug("Cloud Nine"));
        assert!(!is_slug(""));
    }

    proptest! {
        #[test]
        fn slugify_is_idempotent(input in "\\PC{0,40}") {
            let once = slugify(&input);
            prop_assert_eq!(slugify(&once), once);
        }

        #[test]
        fn slugify_never_emits_stray_separators(input in "[a-zA-Z0-9 _'!?.-]{0,40}") {
            let slug = slugify(&input);
            prop_assert!(!slug.starts_with(SEPARATOR));
            prop_assert!(!slug.ends_with(SEPARATOR));
            prop_assert!(!slug.contains("__"));
        }
    }
}
