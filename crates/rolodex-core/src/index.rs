//! Search and letter grouping over an already name-sorted contact list.

use crate::domain::Contact;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactGroup<'a> {
    pub key: String,
    pub contacts: Vec<&'a Contact>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexRow<'a> {
    Header(&'a str),
    Contact(&'a Contact),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactIndex<'a> {
    groups: Vec<ContactGroup<'a>>,
}

impl<'a> ContactIndex<'a> {
    pub fn groups(&self) -> &[ContactGroup<'a>] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<ContactGroup<'a>> {
        self.groups
    }

    /// Number of contacts across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|group| group.contacts.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(|group| group.key.as_str())
    }

    pub fn contacts(&self) -> impl Iterator<Item = &'a Contact> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.contacts.iter().copied())
    }

    /// Flattens groups into a header row followed by that group's contacts.
    pub fn rows(&self) -> Vec<IndexRow<'_>> {
        let mut rows = Vec::with_capacity(self.groups.len() + self.len());
        for group in &self.groups {
            rows.push(IndexRow::Header(group.key.as_str()));
            rows.extend(group.contacts.iter().map(|contact| IndexRow::Contact(contact)));
        }
        rows
    }
}

pub fn matches_search(name: &str, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Uppercase form of the first character; `None` for an empty name.
pub fn group_key(name: &str) -> Option<String> {
    name.chars().next().map(|first| first.to_uppercase().collect())
}

/// Filters `contacts` by a case-insensitive name substring and groups the
/// matches by first letter. Groups appear in first-seen order and keep the
/// input order inside each group; no sorting happens here.
pub fn build_index<'a>(contacts: &'a [Contact], term: &str) -> ContactIndex<'a> {
    let mut groups: Vec<ContactGroup<'a>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for contact in contacts {
        if !matches_search(&contact.name, term) {
            continue;
        }
        let Some(key) = group_key(&contact.name) else {
            continue;
        };
        match positions.get(&key) {
            Some(&pos) => groups[pos].contacts.push(contact),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(ContactGroup {
                    key,
                    contacts: vec![contact],
                });
            }
        }
    }

    ContactIndex { groups }
}

#[cfg(test)]
mod tests {
    use super::{build_index, group_key, IndexRow};
    use crate::domain::{Contact, ContactId};
    use crate::rules::sort_by_name;

    fn contact(id: i64, name: &str) -> Contact {
        Contact {
            id: ContactId(id),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "+1 555-0100".to_string(),
            company: None,
            address: None,
            website: None,
        }
    }

    fn sorted_sample() -> Vec<Contact> {
        let mut contacts = vec![contact(1, "bob"), contact(2, "Alice"), contact(3, "anna")];
        sort_by_name(&mut contacts);
        contacts
    }

    fn names<'a>(contacts: &[&'a Contact]) -> Vec<&'a str> {
        contacts.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn groups_by_uppercase_first_letter() {
        let contacts = sorted_sample();
        let index = build_index(&contacts, "");
        let keys: Vec<&str> = index.group_keys().collect();
        assert_eq!(keys, ["A", "B"]);
        assert_eq!(names(&index.groups()[0].contacts), ["Alice", "anna"]);
        assert_eq!(names(&index.groups()[1].contacts), ["bob"]);
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn accented_group_follows_sorted_order() {
        let mut contacts = vec![
            contact(1, "Zoe"),
            contact(2, "Émile"),
            contact(3, "Eve"),
            contact(4, "Fred"),
        ];
        sort_by_name(&mut contacts);
        let index = build_index(&contacts, "");
        let keys: Vec<&str> = index.group_keys().collect();
        assert_eq!(keys, ["É", "E", "F", "Z"]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let contacts = sorted_sample();
        let index = build_index(&contacts, "al");
        assert_eq!(index.groups().len(), 1);
        assert_eq!(index.groups()[0].key, "A");
        assert_eq!(names(&index.groups()[0].contacts), ["Alice"]);

        let index = build_index(&contacts, "NN");
        assert_eq!(names(&index.groups()[0].contacts), ["anna"]);
    }

    #[test]
    fn no_match_yields_empty_index() {
        let contacts = sorted_sample();
        let index = build_index(&contacts, "zed");
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn empty_names_are_skipped() {
        let contacts = vec![contact(1, ""), contact(2, "Carol")];
        let index = build_index(&contacts, "");
        assert_eq!(index.len(), 1);
        assert_eq!(index.groups()[0].key, "C");
    }

    #[test]
    fn groups_follow_input_order_without_resorting() {
        let contacts = vec![contact(1, "Zoe"), contact(2, "Adam"), contact(3, "zack")];
        let index = build_index(&contacts, "");
        let keys: Vec<&str> = index.group_keys().collect();
        assert_eq!(keys, ["Z", "A"]);
        assert_eq!(names(&index.groups()[0].contacts), ["Zoe", "zack"]);
    }

    #[test]
    fn rows_interleave_headers_and_contacts() {
        let contacts = sorted_sample();
        let index = build_index(&contacts, "");
        let rows = index.rows();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], IndexRow::Header("A"));
        assert!(matches!(rows[1], IndexRow::Contact(c) if c.name == "Alice"));
        assert_eq!(rows[3], IndexRow::Header("B"));
    }

    #[test]
    fn group_key_handles_multi_char_uppercase() {
        assert_eq!(group_key("ßeta").as_deref(), Some("SS"));
        assert_eq!(group_key("émile").as_deref(), Some("É"));
        assert_eq!(group_key(""), None);
    }
}
