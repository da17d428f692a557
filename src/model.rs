//! Declarative-model plumbing shared by the mapped entities.

use std::any::type_name;
use std::borrow::Cow;

/// A type mapped to a database table.
///
/// The table name defaults to the type name inflected to snake_case, so a
/// `PhoneBookEntry` entity maps to `phone_book_entry`. Implementors set
/// [`Model::TABLE`] when the mapped table is named differently; both entities
/// in this crate do, since their tables carry plural names.
pub trait Model {
    /// Explicit table name, overriding the derived one.
    const TABLE: Option<&'static str> = None;

    fn table_name() -> Cow<'static, str> {
        match Self::TABLE {
            Some(name) => Cow::Borrowed(name),
            None => {
                let name = type_name::<Self>().rsplit("::").next().unwrap_or_default();
                Cow::Owned(snake_case(name))
            }
        }
    }
}

/// Inflects a CamelCase type name to snake_case, keeping acronym runs
/// together (`HTMLParser` becomes `html_parser`).
pub fn snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_uppercase() {
            out.push(c);
            continue;
        }
        let boundary = i > 0
            && match (chars[i - 1], chars.get(i + 1)) {
                (p, _) if p.is_lowercase() || p.is_ascii_digit() => true,
                // End of an acronym run: the next char starts a new word.
                (p, Some(n)) if p.is_uppercase() && n.is_lowercase() => true,
                _ => false,
            };
        if boundary {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_word() {
        assert_eq!(snake_case("User"), "user");
        assert_eq!(snake_case("Sample"), "sample");
    }

    #[test]
    fn camel_humps() {
        assert_eq!(snake_case("AuthUser"), "auth_user");
        assert_eq!(snake_case("PhoneBookEntry"), "phone_book_entry");
    }

    #[test]
    fn acronym_runs_stay_together() {
        assert_eq!(snake_case("HTMLParser"), "html_parser");
        assert_eq!(snake_case("UserID"), "user_id");
    }

    #[test]
    fn digits_break_words() {
        assert_eq!(snake_case("UserV2"), "user_v2");
    }

    #[test]
    fn derived_and_overridden_table_names() {
        struct PhoneBookEntry;
        impl Model for PhoneBookEntry {}

        struct Renamed;
        impl Model for Renamed {
            const TABLE: Option<&'static str> = Some("legacy_rows");
        }

        assert_eq!(PhoneBookEntry::table_name(), "phone_book_entry");
        assert_eq!(Renamed::table_name(), "legacy_rows");
    }
}
