use crate::commands::print_json;
use anyhow::Result;
use rolodex_core::dialing_codes;

pub fn list_codes(json: bool) -> Result<()> {
    let codes = dialing_codes();
    if json {
        return print_json(&codes);
    }
    for code in codes {
        println!("{:<5} {}", code.code, code.name);
    }
    Ok(())
}
