use crate::domain::Contact;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Name collation: accents and case are ignored first, then accents break
/// ties (`Emile` before `Émile`). Names that differ only by case compare
/// equal so a stable sort keeps their insertion order.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    folded(a)
        .cmp(folded(b))
        .then_with(|| lowered(a).cmp(lowered(b)))
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
}

fn lowered(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfc().flat_map(char::to_lowercase)
}

pub fn sort_by_name(contacts: &mut [Contact]) {
    contacts.sort_by(|a, b| compare_names(&a.name, &b.name));
}

#[cfg(test)]
mod tests {
    use super::{compare_names, sort_by_name};
    use crate::domain::{Contact, ContactId};
    use std::cmp::Ordering;

    fn contact(id: i64, name: &str) -> Contact {
        Contact {
            id: ContactId(id),
            name: name.to_string(),
            email: String::new(),
            phone: String::new(),
            company: None,
            address: None,
            website: None,
        }
    }

    #[test]
    fn sorts_case_insensitively() {
        let mut contacts = vec![contact(1, "bob"), contact(2, "Alice"), contact(3, "anna")];
        sort_by_name(&mut contacts);
        let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Alice", "anna", "bob"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let mut contacts = vec![contact(1, "ada"), contact(2, "Ada"), contact(3, "ADA")];
        sort_by_name(&mut contacts);
        let ids: Vec<i64> = contacts.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let mut contacts = vec![
            contact(1, "Zoe"),
            contact(2, "Émile"),
            contact(3, "Eve"),
            contact(4, "Fred"),
            contact(5, "emile"),
        ];
        sort_by_name(&mut contacts);
        let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["emile", "Émile", "Eve", "Fred", "Zoe"]);
    }

    #[test]
    fn compare_handles_prefixes() {
        assert_eq!(compare_names("Ann", "anna"), Ordering::Less);
        assert_eq!(compare_names("Émile", "émile"), Ordering::Equal);
        assert_eq!(compare_names("E\u{301}mile", "Émile"), Ordering::Equal);
    }
}
