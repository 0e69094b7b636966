use crate::Result;
use rolodex_core::{Contact, CoreError};
use std::collections::HashSet;

/// Parses a JSON array of contact-shaped objects. Fields the contact model
/// does not know about are ignored; ids must be unique.
pub fn parse_seed(body: &str) -> Result<Vec<Contact>> {
    let contacts: Vec<Contact> = serde_json::from_str(body)?;
    let mut seen = HashSet::with_capacity(contacts.len());
    for contact in &contacts {
        if !seen.insert(contact.id) {
            return Err(CoreError::DuplicateContactId(contact.id.as_i64()).into());
        }
    }
    Ok(contacts)
}

#[cfg(test)]
mod tests {
    use super::parse_seed;
    use crate::SyncError;
    use rolodex_core::{ContactId, CoreError};

    const SAMPLE: &str = r#"[
      {
        "id": 1,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
          "street": "Kulas Light",
          "suite": "Apt. 556",
          "city": "Gwenborough",
          "zipcode": "92998-3874",
          "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org",
        "company": {
          "name": "Romaguera-Crona",
          "catchPhrase": "Multi-layered client-server neural-net",
          "bs": "harness real-time e-markets"
        }
      },
      { "id": 2, "name": "Ervin Howell", "email": "Shanna@melissa.tv", "phone": "010-692-6593 x09125" }
    ]"#;

    #[test]
    fn parses_placeholder_users() {
        let contacts = parse_seed(SAMPLE).expect("parse");
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].id, ContactId(1));
        assert_eq!(contacts[0].phone, "1-770-736-8031 x56442");
        let company = contacts[0].company.as_ref().expect("company");
        assert_eq!(
            company.catch_phrase.as_deref(),
            Some("Multi-layered client-server neural-net")
        );
        assert!(contacts[1].address.is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let body = r#"[{"id": 7, "name": "A"}, {"id": 7, "name": "B"}]"#;
        let err = parse_seed(body).unwrap_err();
        assert!(matches!(
            err,
            SyncError::Core(CoreError::DuplicateContactId(7))
        ));
    }

    #[test]
    fn rejects_non_array_body() {
        let err = parse_seed(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, SyncError::Json(_)));
    }
}
