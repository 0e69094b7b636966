use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rolodex_config::Theme;
use rolodex_core::dto::{ContactDetailDto, ContactGroupDto, ContactListItemDto};
use rolodex_core::domain::phone::is_local_number_char;
use rolodex_core::{
    default_dialing_code, dialing_code_index, edit_address, edit_company, join_phone,
    normalize_optional, split_phone, validate_contact_form, Contact, ContactDraft, ContactId,
    Debouncer, FieldErrors, DIALING_CODES,
};
use rolodex_store::LoadOutcome;

use crate::actions::Action;

const LIST_EMPTY: &str = "No contacts found.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact? (y/n)";

#[derive(Debug, Clone)]
pub enum Mode {
    List,
    SearchEditing,
    Detail(ContactId),
    Features,
    ModalAddContact(ContactForm),
    ModalEditContact(ContactForm),
    Confirm(ConfirmState),
}

#[derive(Debug, Clone)]
pub struct App {
    pub mode: Mode,
    pub show_help: bool,
    pub should_quit: bool,
    pub loading: bool,
    pub theme: Theme,
    pub search_input: String,
    pub search_term: String,
    search: Debouncer<String>,
    pub groups: Vec<ContactGroupDto>,
    pub selected: usize,
    pub detail: Option<ContactDetailDto>,
    pub status: Option<String>,
    pub error: Option<String>,
    actions: VecDeque<Action>,
    pub(crate) pending_select: Option<ContactId>,
}

impl App {
    pub fn new(search_debounce: Duration, theme: Theme) -> Self {
        Self {
            mode: Mode::List,
            show_help: false,
            should_quit: false,
            loading: true,
            theme,
            search_input: String::new(),
            search_term: String::new(),
            search: Debouncer::new(search_debounce),
            groups: Vec::new(),
            selected: 0,
            detail: None,
            status: None,
            error: None,
            actions: VecDeque::new(),
            pending_select: None,
        }
    }

    pub fn finish_loading(&mut self, outcome: &LoadOutcome) {
        self.loading = false;
        match outcome {
            LoadOutcome::SeedFailed(message) => {
                self.set_error(format!("Failed to fetch contacts: {message}"));
            }
            LoadOutcome::Seeded => self.set_status("Loaded starter contacts"),
            LoadOutcome::Restored | LoadOutcome::Unseeded => {}
        }
        self.enqueue(Action::LoadList);
    }

    pub fn enqueue(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn next_action(&mut self) -> Option<Action> {
        self.actions.pop_front()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(message.into());
    }

    /// Contacts in display order, across all letter groups.
    pub fn contacts(&self) -> impl Iterator<Item = &ContactListItemDto> + '_ {
        self.groups.iter().flat_map(|group| group.contacts.iter())
    }

    pub fn contact_count(&self) -> usize {
        self.groups.iter().map(|group| group.contacts.len()).sum()
    }

    pub fn selected_contact(&self) -> Option<&ContactListItemDto> {
        self.contacts().nth(self.selected)
    }

    pub fn selected_contact_id(&self) -> Option<ContactId> {
        self.selected_contact().map(|contact| contact.id)
    }

    pub fn apply_list(&mut self, groups: Vec<ContactGroupDto>) {
        self.groups = groups;
        if let Some(target) = self.pending_select.take() {
            let found = self.contacts().position(|item| item.id == target);
            if let Some(pos) = found {
                self.selected = pos;
            }
        }
        let count = self.contact_count();
        if self.selected >= count {
            self.selected = count.saturating_sub(1);
        }
    }

    pub fn apply_detail(&mut self, detail: ContactDetailDto) {
        self.detail = Some(detail);
    }

    pub fn empty_hint(&self) -> &'static str {
        LIST_EMPTY
    }

    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// How long the event loop may sleep before the pending search fires.
    pub fn search_timeout(&self, now: Instant) -> Option<Duration> {
        self.search.remaining(now)
    }

    /// Applies the debounced search term once its quiet period is over.
    pub fn poll_search(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(term) => {
                self.apply_search(term);
                true
            }
            None => false,
        }
    }

    fn apply_search(&mut self, term: String) {
        if term == self.search_term {
            return;
        }
        self.search_term = term;
        self.selected = 0;
        self.enqueue(Action::LoadList);
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_at(key, Instant::now());
    }

    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }

        if self.loading {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        if matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        ) {
            self.should_quit = true;
            return;
        }

        let mut mode = std::mem::replace(&mut self.mode, Mode::List);
        if matches!(mode, Mode::List | Mode::Detail(_) | Mode::Features) {
            match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    self.mode = mode;
                    return;
                }
                KeyCode::Char('?') => {
                    self.show_help = true;
                    self.mode = mode;
                    return;
                }
                KeyCode::Char('T') => {
                    self.theme = self.theme.toggled();
                    self.set_status(format!("Switched to {} theme", self.theme.as_str()));
                    self.mode = mode;
                    return;
                }
                _ => {}
            }
        }

        match &mut mode {
            Mode::List => {
                if let Some(next) = self.handle_list_key(key) {
                    mode = next;
                }
            }
            Mode::SearchEditing => {
                if let Some(next) = self.handle_search_key(key, now) {
                    mode = next;
                }
            }
            Mode::Detail(contact_id) => {
                if let Some(next) = self.handle_detail_key(key, *contact_id) {
                    mode = next;
                }
            }
            Mode::Features => {
                if matches!(key.code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('f')) {
                    mode = Mode::List;
                }
            }
            Mode::ModalAddContact(form) | Mode::ModalEditContact(form) => {
                if let Some(next) = self.handle_contact_form_key(form, key) {
                    mode = next;
                }
            }
            Mode::Confirm(state) => {
                if let Some(next) = self.handle_confirm_key(state, key) {
                    mode = next;
                }
            }
        }
        self.mode = mode;
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::PageDown => self.move_selection(5),
            KeyCode::PageUp => self.move_selection(-5),
            KeyCode::Home | KeyCode::Char('g') => self.selected = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.selected = self.contact_count().saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(id) = self.selected_contact_id() {
                    self.enqueue(Action::LoadDetail(id));
                    return Some(Mode::Detail(id));
                }
            }
            KeyCode::Char('/') => return Some(Mode::SearchEditing),
            KeyCode::Char('c') => {
                self.search_input.clear();
                self.search.cancel();
                self.apply_search(String::new());
            }
            KeyCode::Char('a') => return Some(Mode::ModalAddContact(ContactForm::new())),
            KeyCode::Char('e') => {
                if let Some(id) = self.selected_contact_id() {
                    self.enqueue(Action::OpenEditForm(id));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_contact_id() {
                    return Some(Mode::Confirm(ConfirmState::delete(id, ConfirmReturn::List)));
                }
            }
            KeyCode::Char('y') => self.copy_selected(CopyField::Email),
            KeyCode::Char('Y') => self.copy_selected(CopyField::Phone),
            KeyCode::Char('f') => return Some(Mode::Features),
            KeyCode::Char('r') => self.enqueue(Action::LoadList),
            _ => {}
        }
        None
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) -> Option<Mode> {
        match key.code {
            KeyCode::Esc => return Some(Mode::List),
            KeyCode::Enter => {
                self.search.cancel();
                let term = self.search_input.clone();
                self.apply_search(term);
                return Some(Mode::List);
            }
            KeyCode::Down => self.move_selection(1),
            KeyCode::Up => self.move_selection(-1),
            _ => {
                let before = self.search_input.clone();
                apply_text_input(&mut self.search_input, key);
                if self.search_input != before {
                    self.search.schedule(self.search_input.clone(), now);
                }
            }
        }
        None
    }

    fn handle_detail_key(&mut self, key: KeyEvent, contact_id: ContactId) -> Option<Mode> {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace => {
                self.detail = None;
                return Some(Mode::List);
            }
            KeyCode::Char('e') => self.enqueue(Action::OpenEditForm(contact_id)),
            KeyCode::Char('d') => {
                return Some(Mode::Confirm(ConfirmState::delete(
                    contact_id,
                    ConfirmReturn::Detail(contact_id),
                )));
            }
            KeyCode::Char('m') => self.open_link(|links| links.email.clone(), "No email address"),
            KeyCode::Char('c') => self.open_link(|links| links.call.clone(), "No phone number"),
            KeyCode::Char('s') => self.open_link(|links| links.message.clone(), "No phone number"),
            KeyCode::Char('w') => self.open_link(|links| links.website.clone(), "No website"),
            KeyCode::Char('y') => self.copy_detail(CopyField::Email),
            KeyCode::Char('Y') => self.copy_detail(CopyField::Phone),
            _ => {}
        }
        None
    }

    fn handle_contact_form_key(&mut self, form: &mut ContactForm, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Esc => return Some(Mode::List),
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_prev(),
            KeyCode::Left if form.is_code_focus() => form.cycle_code(-1),
            KeyCode::Right if form.is_code_focus() => form.cycle_code(1),
            KeyCode::Enter => {
                if form.is_save_focus() {
                    match form.to_draft() {
                        Ok(draft) => {
                            self.clear_error();
                            self.enqueue(Action::SaveContact(draft));
                            return Some(Mode::List);
                        }
                        Err(errors) => {
                            form.errors = errors;
                            self.set_error("Please fill in the required fields");
                        }
                    }
                } else if form.is_cancel_focus() {
                    return Some(Mode::List);
                } else {
                    form.focus_next();
                }
            }
            KeyCode::Char(ch)
                if form.is_number_focus()
                    && !key.modifiers.contains(KeyModifiers::CONTROL)
                    && !is_local_number_char(ch) => {}
            _ => {
                if let Some(target) = form.active_field_mut() {
                    apply_text_input(target, key);
                }
            }
        }
        None
    }

    fn handle_confirm_key(&mut self, state: &mut ConfirmState, key: KeyEvent) -> Option<Mode> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.enqueue(Action::DeleteContact(state.contact_id));
                return Some(Mode::List);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                return Some(state.return_on_cancel.clone().into_mode());
            }
            _ => {}
        }
        None
    }

    fn move_selection(&mut self, delta: i32) {
        let count = self.contact_count();
        if count == 0 {
            self.selected = 0;
            return;
        }
        let next = (self.selected as i64 + delta as i64).clamp(0, count as i64 - 1);
        self.selected = next as usize;
    }

    fn copy_selected(&mut self, field: CopyField) {
        let Some(contact) = self.selected_contact() else {
            return;
        };
        let value = match field {
            CopyField::Email => contact.email.clone(),
            CopyField::Phone => contact.phone.clone(),
        };
        self.enqueue_copy(field, value);
    }

    fn copy_detail(&mut self, field: CopyField) {
        let Some(detail) = &self.detail else {
            return;
        };
        let value = match field {
            CopyField::Email => detail.email.clone(),
            CopyField::Phone => detail.phone.clone(),
        };
        self.enqueue_copy(field, value);
    }

    fn enqueue_copy(&mut self, field: CopyField, value: String) {
        if value.trim().is_empty() {
            self.set_error(format!("No {} to copy", field.label().to_lowercase()));
            return;
        }
        self.enqueue(Action::Copy {
            label: field.label(),
            value,
        });
    }

    fn open_link<F>(&mut self, pick: F, missing: &str)
    where
        F: FnOnce(&rolodex_core::ContactLinks) -> Option<String>,
    {
        let uri = self.detail.as_ref().and_then(|detail| pick(&detail.links));
        match uri {
            Some(uri) => self.enqueue(Action::OpenUri(uri)),
            None => self.set_error(missing.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CopyField {
    Email,
    Phone,
}

impl CopyField {
    fn label(self) -> &'static str {
        match self {
            CopyField::Email => "Email",
            CopyField::Phone => "Phone",
        }
    }
}

fn apply_text_input(target: &mut String, key: KeyEvent) {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            target.clear();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            delete_last_word(target);
        }
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                target.push(ch);
            }
        }
        KeyCode::Backspace => {
            target.pop();
        }
        _ => {}
    }
}

fn delete_last_word(value: &mut String) {
    while value.ends_with(|ch: char| ch.is_whitespace()) {
        value.pop();
    }
    while value.ends_with(|ch: char| !ch.is_whitespace()) {
        value.pop();
    }
}

/// Add/edit form state. The phone is edited as a dialing code picked from
/// the table plus a local number; they are joined again on save.
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub(crate) focus: usize,
    pub contact_id: Option<ContactId>,
    pub name: String,
    pub email: String,
    pub code: String,
    /// `None` when the stored code is not in the dialing-code table.
    pub code_index: Option<usize>,
    pub number: String,
    pub company: String,
    pub street: String,
    pub city: String,
    pub website: String,
    pub errors: FieldErrors,
    original: Option<Contact>,
}

impl ContactForm {
    pub const NAME: usize = 0;
    pub const EMAIL: usize = 1;
    pub const CODE: usize = 2;
    pub const NUMBER: usize = 3;
    pub const COMPANY: usize = 4;
    pub const STREET: usize = 5;
    pub const CITY: usize = 6;
    pub const WEBSITE: usize = 7;
    const FIELD_COUNT: usize = 8;

    pub fn new() -> Self {
        Self {
            focus: Self::NAME,
            contact_id: None,
            name: String::new(),
            email: String::new(),
            code: default_dialing_code().code.to_string(),
            code_index: Some(0),
            number: String::new(),
            company: String::new(),
            street: String::new(),
            city: String::new(),
            website: String::new(),
            errors: FieldErrors::default(),
            original: None,
        }
    }

    pub fn from_contact(contact: &Contact) -> Self {
        let phone = split_phone(&contact.phone);
        let code_index = dialing_code_index(&phone.code);
        Self {
            focus: Self::NAME,
            contact_id: Some(contact.id),
            name: contact.name.clone(),
            email: contact.email.clone(),
            code: phone.code,
            code_index,
            number: phone.number,
            company: contact
                .company
                .as_ref()
                .map(|company| company.name.clone())
                .unwrap_or_default(),
            street: contact
                .address
                .as_ref()
                .map(|address| address.street.clone())
                .unwrap_or_default(),
            city: contact
                .address
                .as_ref()
                .map(|address| address.city.clone())
                .unwrap_or_default(),
            website: contact.website.clone().unwrap_or_default(),
            errors: FieldErrors::default(),
            original: Some(contact.clone()),
        }
    }

    pub fn focus_next(&mut self) {
        let total = Self::FIELD_COUNT + 2;
        self.focus = (self.focus + 1) % total;
    }

    pub fn focus_prev(&mut self) {
        let total = Self::FIELD_COUNT + 2;
        if self.focus == 0 {
            self.focus = total - 1;
        } else {
            self.focus -= 1;
        }
    }

    pub fn is_save_focus(&self) -> bool {
        self.focus == Self::FIELD_COUNT
    }

    pub fn is_cancel_focus(&self) -> bool {
        self.focus == Self::FIELD_COUNT + 1
    }

    pub fn is_code_focus(&self) -> bool {
        self.focus == Self::CODE
    }

    pub fn is_number_focus(&self) -> bool {
        self.focus == Self::NUMBER
    }

    pub fn active_field_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Self::NAME => Some(&mut self.name),
            Self::EMAIL => Some(&mut self.email),
            Self::NUMBER => Some(&mut self.number),
            Self::COMPANY => Some(&mut self.company),
            Self::STREET => Some(&mut self.street),
            Self::CITY => Some(&mut self.city),
            Self::WEBSITE => Some(&mut self.website),
            _ => None,
        }
    }

    /// Steps through the dialing-code table. A custom code steps to the
    /// first (forward) or last (backward) table entry.
    pub fn cycle_code(&mut self, delta: i32) {
        let len = DIALING_CODES.len() as i32;
        let next = match self.code_index {
            Some(index) => (index as i32 + delta).rem_euclid(len),
            None if delta < 0 => len - 1,
            None => 0,
        };
        let next = next as usize;
        self.code_index = Some(next);
        self.code = DIALING_CODES[next].code.to_string();
    }

    pub fn code_label(&self) -> String {
        match self.code_index {
            Some(index) => DIALING_CODES[index].label(),
            None => format!("Custom ({})", self.code),
        }
    }

    pub fn to_draft(&self) -> Result<ContactDraft, FieldErrors> {
        validate_contact_form(&self.name, &self.email, &self.number)?;
        let original = self.original.as_ref();
        Ok(ContactDraft {
            id: self.contact_id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: join_phone(&self.code, self.number.trim()),
            company: edit_company(original.and_then(|c| c.company.as_ref()), &self.company),
            address: edit_address(
                original.and_then(|c| c.address.as_ref()),
                &self.street,
                &self.city,
            ),
            website: normalize_optional(&self.website),
        })
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub message: String,
    pub contact_id: ContactId,
    pub return_on_cancel: ConfirmReturn,
}

impl ConfirmState {
    pub fn delete(contact_id: ContactId, return_on_cancel: ConfirmReturn) -> Self {
        Self {
            message: DELETE_PROMPT.to_string(),
            contact_id,
            return_on_cancel,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ConfirmReturn {
    List,
    Detail(ContactId),
}

impl ConfirmReturn {
    pub fn into_mode(self) -> Mode {
        match self {
            ConfirmReturn::List => Mode::List,
            ConfirmReturn::Detail(contact_id) => Mode::Detail(contact_id),
        }
    }
}
