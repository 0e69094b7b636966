use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{confirm, parse_contact_id, parse_dialing_code};
use anyhow::Result;
use clap::Args;
use rolodex_core::dto::{or_not_available, ContactDetailDto};
use rolodex_core::{
    default_dialing_code, edit_address, edit_company, filter_local_number, groups_to_dto,
    join_phone, normalize_optional, split_phone, validate_contact_form, ContactDraft,
};
use rolodex_store::SaveOutcome;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this contact? (y/n)";

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive name search
    #[arg(long, short)]
    pub search: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    /// Local number; the dialing code is given separately
    #[arg(long)]
    pub phone: String,
    /// Dialing code such as +44 (defaults to +91)
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub code: Option<String>,
    #[arg(long)]
    pub company: Option<String>,
    #[arg(long)]
    pub street: Option<String>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub website: Option<String>,
}

impl EditArgs {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.code.is_none()
            && self.company.is_none()
            && self.street.is_none()
            && self.city.is_none()
            && self.website.is_none()
    }
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long, short)]
    pub yes: bool,
}

pub fn list_contacts(ctx: &Context<'_>, args: ListArgs) -> Result<()> {
    let term = args.search.as_deref().unwrap_or_default().trim();
    let index = ctx.book.index(term);

    if ctx.json {
        return print_json(&groups_to_dto(&index));
    }

    if index.is_empty() {
        println!("No contacts found.");
        return Ok(());
    }

    for group in index.groups() {
        println!("{}", group.key);
        for contact in &group.contacts {
            println!(
                "  {}  {}  {}  {}",
                contact.id, contact.name, contact.email, contact.phone
            );
        }
    }
    Ok(())
}

pub fn show_contact(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    let contact = ctx
        .book
        .get(id)
        .ok_or_else(|| not_found(format!("contact {id} not found")))?;
    let detail = ContactDetailDto::from(contact);

    if ctx.json {
        return print_json(&detail);
    }

    println!("id: {}", detail.id);
    println!("name: {}", detail.name);
    println!("email: {}", detail.email);
    println!("phone: {}", detail.phone);
    match (detail.company.as_deref(), detail.catch_phrase.as_deref()) {
        (Some(company), Some(phrase)) => println!("company: {company} \"{phrase}\""),
        (company, _) => println!("company: {}", or_not_available(company)),
    }
    println!("address: {}", or_not_available(detail.address.as_deref()));
    println!("website: {}", or_not_available(detail.website.as_deref()));

    let links = [
        ("email", detail.links.email.as_deref()),
        ("call", detail.links.call.as_deref()),
        ("message", detail.links.message.as_deref()),
        ("website", detail.links.website.as_deref()),
    ];
    println!("links:");
    for (label, uri) in links {
        if let Some(uri) = uri {
            println!("  {label}: {uri}");
        }
    }
    Ok(())
}

pub fn add_contact(ctx: &mut Context<'_>, args: AddArgs) -> Result<()> {
    let code = match args.code.as_deref() {
        Some(raw) => parse_dialing_code(raw)?,
        None => default_dialing_code().code,
    };
    let number = filter_local_number(&args.phone);
    validate_contact_form(&args.name, &args.email, &number)?;

    let draft = ContactDraft {
        id: None,
        name: args.name.trim().to_string(),
        email: args.email.trim().to_string(),
        phone: join_phone(code, number.trim()),
        company: args
            .company
            .as_deref()
            .and_then(|name| edit_company(None, name)),
        address: edit_address(
            None,
            args.street.as_deref().unwrap_or_default(),
            args.city.as_deref().unwrap_or_default(),
        ),
        website: args.website.as_deref().and_then(normalize_optional),
    };

    let outcome = ctx.book.save(draft)?;
    report_save(ctx, &outcome)
}

pub fn edit_contact(ctx: &mut Context<'_>, args: EditArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    if args.is_empty() {
        return Err(invalid_input("no updates provided"));
    }
    let existing = ctx
        .book
        .get(id)
        .ok_or_else(|| not_found(format!("contact {id} not found")))?;

    let stored_phone = split_phone(&existing.phone);
    let code = match args.code.as_deref() {
        Some(raw) => parse_dialing_code(raw)?.to_string(),
        None => stored_phone.code,
    };
    let number = match args.phone.as_deref() {
        Some(raw) => filter_local_number(raw),
        None => stored_phone.number,
    };
    let name = args.name.unwrap_or_else(|| existing.name.clone());
    let email = args.email.unwrap_or_else(|| existing.email.clone());
    validate_contact_form(&name, &email, &number)?;

    let company = match args.company.as_deref() {
        Some(raw) => edit_company(existing.company.as_ref(), raw),
        None => existing.company.clone(),
    };
    let address = if args.street.is_some() || args.city.is_some() {
        let current = existing.address.as_ref();
        let street = args
            .street
            .unwrap_or_else(|| current.map(|a| a.street.clone()).unwrap_or_default());
        let city = args
            .city
            .unwrap_or_else(|| current.map(|a| a.city.clone()).unwrap_or_default());
        edit_address(current, &street, &city)
    } else {
        existing.address.clone()
    };
    let website = match args.website.as_deref() {
        Some(raw) => normalize_optional(raw),
        None => existing.website.clone(),
    };

    let draft = ContactDraft {
        id: Some(id),
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        phone: join_phone(&code, number.trim()),
        company,
        address,
        website,
    };

    let outcome = ctx.book.save(draft)?;
    report_save(ctx, &outcome)
}

pub fn delete_contact(ctx: &mut Context<'_>, args: DeleteArgs) -> Result<()> {
    let id = parse_contact_id(&args.id)?;
    if ctx.book.get(id).is_none() {
        if ctx.json {
            print_json(&serde_json::json!({ "id": id, "deleted": false }))?;
        } else {
            println!("no contact with id {id}");
        }
        return Ok(());
    }

    if !args.yes && !confirm(DELETE_PROMPT)? {
        if ctx.json {
            print_json(&serde_json::json!({ "id": id, "deleted": false }))?;
        } else {
            println!("cancelled");
        }
        return Ok(());
    }

    let removed = ctx.book.delete(id)?;
    if ctx.json {
        print_json(&serde_json::json!({ "id": id, "deleted": removed.is_some() }))?;
    } else if let Some(contact) = removed {
        println!("deleted {} {}", contact.id, contact.name);
    }
    Ok(())
}

fn report_save(ctx: &Context<'_>, outcome: &SaveOutcome) -> Result<()> {
    let contact = outcome.contact();
    if ctx.json {
        return print_json(contact);
    }
    let verb = match outcome {
        SaveOutcome::Created(_) => "created",
        SaveOutcome::Updated(_) => "updated",
    };
    println!("{} {} {}", verb, contact.id, contact.name);
    Ok(())
}
