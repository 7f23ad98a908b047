use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactError, Result};
use crate::model::{optional_field, required_field, Contact, ContactType};
use crate::store::DataStore;

pub fn run<S: DataStore>(
    store: &mut S,
    name: &str,
    phone_number: &str,
    email: Option<&str>,
    contact_type: ContactType,
) -> Result<CmdResult> {
    let name = required_field("Name", name)?;
    let phone_number = required_field("Phone number", phone_number)?;
    let email = optional_field("E-mail", email)?;

    if store.exists(&phone_number)? {
        return Err(ContactError::DuplicateContact(phone_number));
    }

    let contact = Contact::new(store.next_id(), name, phone_number, email, contact_type);
    store.insert(contact.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added: {} ({})",
        contact.name, contact.phone_number
    )));
    result.affected_contacts.push(contact);
    Ok(result)
}
