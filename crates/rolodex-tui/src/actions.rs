use anyhow::Result;
use rolodex_core::dto::{groups_to_dto, ContactDetailDto};
use rolodex_core::{ContactDraft, ContactId};
use rolodex_store::{ContactBook, SaveOutcome};

use crate::app::{App, ContactForm, Mode};
use crate::system;

#[derive(Debug, Clone)]
pub enum Action {
    LoadList,
    LoadDetail(ContactId),
    OpenEditForm(ContactId),
    SaveContact(ContactDraft),
    DeleteContact(ContactId),
    Copy { label: &'static str, value: String },
    OpenUri(String),
}

pub fn execute_action(app: &mut App, book: &mut ContactBook, action: Action) -> Result<()> {
    match action {
        Action::LoadList => {
            let index = book.index(&app.search_term);
            app.apply_list(groups_to_dto(&index));
        }
        Action::LoadDetail(contact_id) => match book.get(contact_id) {
            Some(contact) => {
                app.apply_detail(ContactDetailDto::from(contact));
                app.clear_error();
            }
            None => {
                app.detail = None;
                app.set_error("contact not found");
                if matches!(app.mode, Mode::Detail(id) if id == contact_id) {
                    app.mode = Mode::List;
                }
            }
        },
        Action::OpenEditForm(contact_id) => match book.get(contact_id) {
            Some(contact) => {
                app.mode = Mode::ModalEditContact(ContactForm::from_contact(contact));
                app.clear_error();
            }
            None => app.set_error("contact not found"),
        },
        Action::SaveContact(draft) => {
            let outcome = book.save(draft)?;
            let message = match &outcome {
                SaveOutcome::Created(_) => "Contact added!",
                SaveOutcome::Updated(_) => "Contact updated!",
            };
            let id = outcome.contact().id;
            app.set_status(message);
            app.clear_error();
            app.pending_select = Some(id);
            app.enqueue(Action::LoadList);
            if app.detail.as_ref().is_some_and(|detail| detail.id == id) {
                app.enqueue(Action::LoadDetail(id));
            }
        }
        Action::DeleteContact(contact_id) => {
            if book.delete(contact_id)?.is_some() {
                app.set_status("Contact deleted.");
            }
            if app.detail.as_ref().is_some_and(|detail| detail.id == contact_id) {
                app.detail = None;
            }
            app.enqueue(Action::LoadList);
        }
        Action::Copy { label, value } => {
            system::copy_to_clipboard(&value)?;
            app.set_status(format!("{label} copied to clipboard!"));
        }
        Action::OpenUri(uri) => {
            system::open_uri(&uri)?;
            app.set_status(format!("Opened {uri}"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{execute_action, Action};
    use crate::app::{App, Mode};
    use rolodex_config::Theme;
    use rolodex_core::{Contact, ContactDraft, ContactId};
    use rolodex_store::{ContactBook, Store};
    use std::time::Duration;

    fn contact(id: i64, name: &str) -> Contact {
        Contact {
            id: ContactId(id),
            name: name.to_string(),
            email: format!("{id}@example.com"),
            phone: "+91 555".to_string(),
            company: None,
            address: None,
            website: None,
        }
    }

    fn setup() -> (App, ContactBook) {
        let store = Store::open_in_memory().expect("open store");
        store.migrate().expect("migrate");
        let (book, outcome) = ContactBook::load(store, || {
            Ok::<_, String>(vec![contact(1, "Bret"), contact(2, "Antonette")])
        })
        .expect("load");
        let mut app = App::new(Duration::from_millis(300), Theme::Light);
        app.finish_loading(&outcome);
        (app, book)
    }

    fn run_queue(app: &mut App, book: &mut ContactBook) {
        while let Some(action) = app.next_action() {
            execute_action(app, book, action).expect("action");
        }
    }

    #[test]
    fn list_is_grouped_and_filtered_by_search_term() {
        let (mut app, mut book) = setup();
        run_queue(&mut app, &mut book);
        let keys: Vec<_> = app.groups.iter().map(|group| group.key.as_str()).collect();
        assert_eq!(keys, ["A", "B"]);

        app.search_term = "bre".to_string();
        app.enqueue(Action::LoadList);
        run_queue(&mut app, &mut book);
        assert_eq!(app.contact_count(), 1);
        assert_eq!(app.selected_contact_id(), Some(ContactId(1)));
    }

    #[test]
    fn saving_new_contact_selects_it() {
        let (mut app, mut book) = setup();
        run_queue(&mut app, &mut book);
        app.enqueue(Action::SaveContact(ContactDraft {
            id: None,
            name: "Clementine".to_string(),
            email: "c@example.com".to_string(),
            phone: "+1 555".to_string(),
            company: None,
            address: None,
            website: None,
        }));
        run_queue(&mut app, &mut book);
        assert_eq!(app.status.as_deref(), Some("Contact added!"));
        assert_eq!(app.contact_count(), 3);
        assert_eq!(
            app.selected_contact().map(|item| item.name.as_str()),
            Some("Clementine")
        );
    }

    #[test]
    fn delete_removes_contact_and_detail() {
        let (mut app, mut book) = setup();
        run_queue(&mut app, &mut book);
        app.enqueue(Action::LoadDetail(ContactId(2)));
        run_queue(&mut app, &mut book);
        assert!(app.detail.is_some());

        app.enqueue(Action::DeleteContact(ContactId(2)));
        run_queue(&mut app, &mut book);
        assert!(app.detail.is_none());
        assert_eq!(app.status.as_deref(), Some("Contact deleted."));
        assert_eq!(app.contact_count(), 1);
    }

    #[test]
    fn edit_form_opens_for_known_contact() {
        let (mut app, mut book) = setup();
        run_queue(&mut app, &mut book);
        app.enqueue(Action::OpenEditForm(ContactId(1)));
        run_queue(&mut app, &mut book);
        match &app.mode {
            Mode::ModalEditContact(form) => assert_eq!(form.name, "Bret"),
            other => panic!("unexpected mode {other:?}"),
        }

        app.mode = Mode::List;
        app.enqueue(Action::OpenEditForm(ContactId(99)));
        run_queue(&mut app, &mut book);
        assert!(matches!(app.mode, Mode::List));
        assert_eq!(app.error.as_deref(), Some("contact not found"));
    }
}
