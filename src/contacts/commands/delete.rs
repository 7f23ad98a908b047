use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactError, Result};
use crate::store::DataStore;

use super::find;

pub fn run<S: DataStore>(store: &mut S, phone_number: &str) -> Result<CmdResult> {
    let phone_number = phone_number.trim();
    let Some(found) = find::run(store, phone_number)? else {
        return Err(ContactError::NotFound(phone_number.to_string()));
    };

    // Found only in the file: someone appended it since we loaded.
    if !store.contacts().iter().any(|c| c.phone_number == found.phone_number) {
        store.reload()?;
    }

    let removed = store.remove(phone_number)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact deleted: {} ({})",
        removed.name, removed.phone_number
    )));
    Ok(result.with_affected_contacts(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::find;
    use crate::store::fixtures::StoreFixture;
    use crate::store::InMemoryStore;

    #[test]
    fn deleted_contact_is_gone_from_memory_and_file() {
        let mut store = StoreFixture::new().with_contacts(2).store;
        run(&mut store, "555-0001").unwrap();

        assert!(find::run(&store, "555-0001").unwrap().is_none());
        assert_eq!(store.contacts().len(), 1);
        assert_eq!(store.backend().lines().len(), 1);
    }

    #[test]
    fn unknown_phone_is_not_found() {
        let mut store = StoreFixture::new().with_contacts(1).store;
        let err = run(&mut store, "555-9999").unwrap_err();
        assert!(matches!(err, ContactError::NotFound(_)));
        assert_eq!(store.backend().lines().len(), 1);
    }

    #[test]
    fn deletes_record_appended_after_startup() {
        let mut store = InMemoryStore::new();
        store.backend().push_raw(
            "Id: 5 | Name: Eve | Phone No: 555-0500 | E-mail:  | Type: Other | Time Created: 2026-01-01T00:00:00Z",
        );

        run(&mut store, "555-0500").unwrap();
        assert!(store.backend().lines().is_empty());
        assert!(store.contacts().is_empty());
    }
}
