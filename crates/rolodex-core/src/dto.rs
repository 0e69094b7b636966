use crate::domain::{Contact, ContactId};
use crate::index::ContactIndex;
use serde::{Deserialize, Serialize};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactListItemDto {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<&Contact> for ContactListItemDto {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactGroupDto {
    pub key: String,
    pub contacts: Vec<ContactListItemDto>,
}

pub fn groups_to_dto(index: &ContactIndex<'_>) -> Vec<ContactGroupDto> {
    index
        .groups()
        .iter()
        .map(|group| ContactGroupDto {
            key: group.key.clone(),
            contacts: group
                .contacts
                .iter()
                .map(|contact| ContactListItemDto::from(*contact))
                .collect(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLinks {
    pub email: Option<String>,
    pub call: Option<String>,
    pub message: Option<String>,
    pub website: Option<String>,
}

impl ContactLinks {
    pub fn for_contact(contact: &Contact) -> Self {
        let email = contact.email.trim();
        let phone = contact.phone.trim();
        let website = contact
            .website
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty());
        Self {
            email: (!email.is_empty()).then(|| format!("mailto:{email}")),
            call: (!phone.is_empty()).then(|| format!("tel:{phone}")),
            message: (!phone.is_empty()).then(|| format!("sms:{phone}")),
            website: website.map(website_url),
        }
    }
}

/// Always prefixed with `http://`, even when the value carries a scheme.
fn website_url(site: &str) -> String {
    format!("http://{site}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetailDto {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub catch_phrase: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub links: ContactLinks,
}

impl From<&Contact> for ContactDetailDto {
    fn from(contact: &Contact) -> Self {
        let address = contact
            .address
            .as_ref()
            .map(|address| address.full())
            .filter(|full| !full.is_empty());
        Self {
            id: contact.id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            company: contact
                .company
                .as_ref()
                .map(|company| company.name.clone())
                .filter(|name| !name.is_empty()),
            catch_phrase: contact
                .company
                .as_ref()
                .and_then(|company| company.catch_phrase.clone())
                .filter(|phrase| !phrase.is_empty()),
            address,
            website: contact.website.clone().filter(|site| !site.is_empty()),
            links: ContactLinks::for_contact(contact),
        }
    }
}

/// Display form of an optional detail field.
pub fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

#[cfg(test)]
mod tests {
    use super::{or_not_available, ContactDetailDto, ContactLinks};
    use crate::domain::{Address, Company, Contact, ContactId};

    fn sample() -> Contact {
        Contact {
            id: ContactId(1),
            name: "Leanne Graham".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: "+1 770-736-8031".to_string(),
            company: Some(Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: Some("Multi-layered client-server neural-net".to_string()),
            }),
            address: Some(Address {
                street: "Kulas Light".to_string(),
                suite: Some("Apt. 556".to_string()),
                city: "Gwenborough".to_string(),
                zipcode: Some("92998-3874".to_string()),
            }),
            website: Some("hildegard.org".to_string()),
        }
    }

    #[test]
    fn links_use_uri_schemes() {
        let links = ContactLinks::for_contact(&sample());
        assert_eq!(links.email.as_deref(), Some("mailto:Sincere@april.biz"));
        assert_eq!(links.call.as_deref(), Some("tel:+1 770-736-8031"));
        assert_eq!(links.message.as_deref(), Some("sms:+1 770-736-8031"));
        assert_eq!(links.website.as_deref(), Some("http://hildegard.org"));

        let mut prefixed = sample();
        prefixed.website = Some("https://hildegard.org".to_string());
        let links = ContactLinks::for_contact(&prefixed);
        assert_eq!(
            links.website.as_deref(),
            Some("http://https://hildegard.org")
        );
    }

    #[test]
    fn links_skip_empty_values() {
        let mut contact = sample();
        contact.phone.clear();
        contact.website = None;
        let links = ContactLinks::for_contact(&contact);
        assert!(links.call.is_none());
        assert!(links.message.is_none());
        assert!(links.website.is_none());
    }

    #[test]
    fn detail_joins_address_parts() {
        let detail = ContactDetailDto::from(&sample());
        assert_eq!(
            detail.address.as_deref(),
            Some("Kulas Light, Apt. 556, Gwenborough, 92998-3874")
        );
        assert_eq!(detail.company.as_deref(), Some("Romaguera-Crona"));
    }

    #[test]
    fn missing_detail_shows_not_available() {
        let mut contact = sample();
        contact.company = None;
        let detail = ContactDetailDto::from(&contact);
        assert_eq!(or_not_available(detail.company.as_deref()), "N/A");
    }
}
