use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

use super::find;

pub fn run<S: DataStore>(store: &S, phone_number: &str) -> Result<CmdResult> {
    match find::run(store, phone_number)? {
        Some(contact) => Ok(CmdResult::default().with_listed_contacts(vec![contact])),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "Contact with {} not found",
                phone_number.trim()
            )));
            Ok(result)
        }
    }
}
