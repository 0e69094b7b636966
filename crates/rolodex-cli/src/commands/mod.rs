use anyhow::Result;
use rolodex_store::ContactBook;
use serde::Serialize;
use std::io::{self, Write};

pub mod codes;
pub mod completions;
pub mod contacts;
pub mod features;
pub mod tui;

pub struct Context<'a> {
    pub book: &'a mut ContactBook,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
