use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let contacts = store.load()?;
    let mut result = CmdResult::default();
    if contacts.is_empty() {
        result.add_message(CmdMessage::info("No contacts found."));
    }
    Ok(result.with_listed_contacts(contacts))
}
