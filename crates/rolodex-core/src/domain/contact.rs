use crate::domain::ids::ContactId;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default)]
    pub name: String,
    #[serde(
        rename = "catchPhrase",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub catch_phrase: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suite: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
}

impl Address {
    /// Non-empty parts joined as `street, suite, city, zipcode`.
    pub fn full(&self) -> String {
        [
            Some(self.street.as_str()),
            self.suite.as_deref(),
            Some(self.city.as_str()),
            self.zipcode.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// A contact as submitted by an add or edit action. `id` is `None` for new
/// contacts; the store assigns one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub id: Option<ContactId>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<Company>,
    pub address: Option<Address>,
    pub website: Option<String>,
}

impl ContactDraft {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyName);
        }
        Ok(())
    }

    pub fn into_contact(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            company: self.company,
            address: self.address,
            website: self.website,
        }
    }
}

impl From<&Contact> for ContactDraft {
    fn from(contact: &Contact) -> Self {
        Self {
            id: Some(contact.id),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            company: contact.company.clone(),
            address: contact.address.clone(),
            website: contact.website.clone(),
        }
    }
}

/// Keeps the catch phrase of an existing company when only its name is edited,
/// and drops the company entirely when the name is cleared.
pub fn edit_company(existing: Option<&Company>, name: &str) -> Option<Company> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(Company {
        name: name.to_string(),
        catch_phrase: existing.and_then(|company| company.catch_phrase.clone()),
    })
}

/// Same as [`edit_company`] for the user-editable address fields. Seed-only
/// `suite` and `zipcode` survive the edit.
pub fn edit_address(existing: Option<&Address>, street: &str, city: &str) -> Option<Address> {
    let street = street.trim();
    let city = city.trim();
    let suite = existing.and_then(|address| address.suite.clone());
    let zipcode = existing.and_then(|address| address.zipcode.clone());
    if street.is_empty() && city.is_empty() && suite.is_none() && zipcode.is_none() {
        return None;
    }
    Some(Address {
        street: street.to_string(),
        suite,
        city: city.to_string(),
        zipcode,
    })
}

pub fn normalize_optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{edit_address, edit_company, Address, Company, Contact, ContactDraft};
    use crate::domain::ContactId;

    #[test]
    fn deserializes_seed_shape_and_ignores_unknown_fields() {
        let raw = r#"{
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
        }"#;
        let contact: Contact = serde_json::from_str(raw).expect("parse contact");
        assert_eq!(contact.id, ContactId(1));
        assert_eq!(contact.name, "Leanne Graham");
        let company = contact.company.expect("company");
        assert_eq!(
            company.catch_phrase.as_deref(),
            Some("Multi-layered client-server neural-net")
        );
        let address = contact.address.expect("address");
        assert_eq!(
            address.full(),
            "Kulas Light, Apt. 556, Gwenborough, 92998-3874"
        );
    }

    #[test]
    fn serializes_camel_case_and_skips_absent_optionals() {
        let contact = Contact {
            id: ContactId(7),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            company: Some(Company {
                name: "Engines".to_string(),
                catch_phrase: Some("Analytical".to_string()),
            }),
            address: None,
            website: None,
        };
        let value = serde_json::to_value(&contact).expect("serialize");
        assert_eq!(value["company"]["catchPhrase"], "Analytical");
        assert!(value.get("address").is_none());
        assert!(value.get("website").is_none());
    }

    #[test]
    fn draft_requires_name() {
        let draft = ContactDraft {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn edit_company_keeps_catch_phrase() {
        let existing = Company {
            name: "Old".to_string(),
            catch_phrase: Some("Motto".to_string()),
        };
        let edited = edit_company(Some(&existing), " New ").expect("company");
        assert_eq!(edited.name, "New");
        assert_eq!(edited.catch_phrase.as_deref(), Some("Motto"));
        assert!(edit_company(Some(&existing), "").is_none());
    }

    #[test]
    fn edit_address_keeps_seed_only_fields() {
        let existing = Address {
            street: "Kulas Light".to_string(),
            suite: Some("Apt. 556".to_string()),
            city: "Gwenborough".to_string(),
            zipcode: Some("92998-3874".to_string()),
        };
        let edited = edit_address(Some(&existing), "Main St", "").expect("address");
        assert_eq!(edited.street, "Main St");
        assert_eq!(edited.suite.as_deref(), Some("Apt. 556"));
        assert_eq!(edited.city, "");
        assert!(edit_address(None, " ", "").is_none());
    }

    #[test]
    fn address_full_skips_empty_parts() {
        let address = Address {
            street: "".to_string(),
            suite: None,
            city: "Paris".to_string(),
            zipcode: None,
        };
        assert_eq!(address.full(), "Paris");
    }
}
