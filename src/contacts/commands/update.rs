use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactError, Result};
use crate::model::{optional_field, required_field};
use crate::store::DataStore;

use super::find;

pub fn run<S: DataStore>(
    store: &mut S,
    phone_number: &str,
    name: &str,
    email: Option<&str>,
) -> Result<CmdResult> {
    let phone_number = phone_number.trim();
    let name = required_field("Name", name)?;
    let email = optional_field("E-mail", email)?;

    if find::run(store, phone_number)?.is_none() {
        return Err(ContactError::NotFound(phone_number.to_string()));
    }

    let updated = store.update_fields(phone_number, &name, email.as_deref())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated: {} ({})",
        updated.name, updated.phone_number
    )));
    Ok(result.with_affected_contacts(vec![updated]))
}
