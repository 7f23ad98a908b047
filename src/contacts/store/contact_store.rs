use super::backend::StorageBackend;
use super::DataStore;
use crate::codec;
use crate::error::{ContactError, Result};
use crate::model::Contact;
use std::path::PathBuf;
use tracing::{debug, warn};

pub struct ContactStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    contacts: Vec<Contact>,
    /// Highest id seen this session. Only ever grows.
    last_id: u32,
}

impl<B: StorageBackend> ContactStore<B> {
    /// Open the store and load the backing file into memory.
    pub fn open(backend: B) -> Result<Self> {
        let mut store = Self::empty(backend);
        store.reload()?;
        Ok(store)
    }

    /// A store that has not read its backend yet.
    pub(crate) fn empty(backend: B) -> Self {
        Self {
            backend,
            contacts: Vec::new(),
            last_id: 0,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.contacts.iter().position(|c| c.phone_number == phone)
    }

    fn find_line(lines: &[String], phone: &str) -> Option<usize> {
        lines.iter().position(|l| codec::line_has_phone(l, phone))
    }
}

impl<B: StorageBackend> DataStore for ContactStore<B> {
    fn load(&self) -> Result<Vec<Contact>> {
        let lines = self.backend.read_lines()?;
        let location = self.backend.location();
        let mut contacts = Vec::with_capacity(lines.len());

        for (n, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match codec::decode(line) {
                Ok(contact) => contacts.push(contact),
                Err(e) => warn!(
                    file = %location.display(),
                    line = n + 1,
                    error = %e,
                    "Skipping unreadable contact record"
                ),
            }
        }

        Ok(contacts)
    }

    fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    fn exists(&self, phone: &str) -> Result<bool> {
        if self.position(phone).is_some() {
            return Ok(true);
        }
        let lines = self.backend.read_lines()?;
        Ok(Self::find_line(&lines, phone).is_some())
    }

    fn next_id(&self) -> u32 {
        self.last_id + 1
    }

    fn insert(&mut self, contact: Contact) -> Result<()> {
        let line = codec::encode(&contact);
        let previous_last_id = self.last_id;

        self.last_id = self.last_id.max(contact.id);
        self.contacts.push(contact);

        if let Err(e) = self.backend.append_line(&line) {
            warn!(error = %e, "Append failed, dropping contact from memory");
            self.contacts.pop();
            self.last_id = previous_last_id;
            return Err(e);
        }

        debug!(record = %line, "Contact appended");
        Ok(())
    }

    fn remove(&mut self, phone: &str) -> Result<Contact> {
        let pos = self
            .position(phone)
            .ok_or_else(|| ContactError::NotFound(phone.to_string()))?;
        let mut lines = self.backend.read_lines()?;

        let removed = self.contacts.remove(pos);

        let Some(line_idx) = Self::find_line(&lines, phone) else {
            warn!(phone, "Contact was in memory but not in the backing file");
            return Ok(removed);
        };
        lines.remove(line_idx);

        if let Err(e) = self.backend.write_lines(&lines) {
            warn!(error = %e, "Rewrite failed, restoring contact in memory");
            self.contacts.insert(pos, removed);
            return Err(e);
        }

        debug!(phone, "Contact removed");
        Ok(removed)
    }

    fn find_by_phone(&self, phone: &str) -> Result<Option<Contact>> {
        if let Some(pos) = self.position(phone) {
            return Ok(Some(self.contacts[pos].clone()));
        }

        let lines = self.backend.read_lines()?;
        let Some(idx) = Self::find_line(&lines, phone) else {
            return Ok(None);
        };

        match codec::decode(&lines[idx]) {
            Ok(contact) => Ok(Some(contact)),
            Err(e) => {
                warn!(line = idx + 1, error = %e, "Matching record is unreadable");
                Ok(None)
            }
        }
    }

    fn update_fields(&mut self, phone: &str, name: &str, email: Option<&str>) -> Result<Contact> {
        let mut lines = self.backend.read_lines()?;
        let idx = Self::find_line(&lines, phone)
            .ok_or_else(|| ContactError::NotFound(phone.to_string()))?;

        let new_line = codec::rewrite_name_email(&lines[idx], name, email)?;
        let from_file = codec::decode(&new_line)?;
        lines[idx] = new_line;

        let pos = self.position(phone);
        let previous = pos.map(|p| {
            let contact = &mut self.contacts[p];
            let old = (contact.name.clone(), contact.email.clone());
            contact.name = name.to_string();
            contact.email = email.map(str::to_string);
            old
        });

        if let Err(e) = self.backend.write_lines(&lines) {
            warn!(error = %e, "Rewrite failed, restoring previous name and e-mail");
            if let (Some(p), Some((old_name, old_email))) = (pos, previous) {
                self.contacts[p].name = old_name;
                self.contacts[p].email = old_email;
            }
            return Err(e);
        }

        debug!(phone, "Contact updated");
        Ok(match pos {
            Some(p) => self.contacts[p].clone(),
            None => from_file,
        })
    }

    fn reload(&mut self) -> Result<()> {
        self.contacts = self.load()?;
        let max_id = self.contacts.iter().map(|c| c.id).max().unwrap_or(0);
        self.last_id = self.last_id.max(max_id);
        let location = self.backend.location();
        debug!(
            file = %location.display(),
            count = self.contacts.len(),
            "Contacts loaded"
        );
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.backend.location()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ContactType;
    use crate::store::mem_backend::MemBackend;
    use crate::store::InMemoryStore;

    fn contact(store: &InMemoryStore, name: &str, phone: &str) -> Contact {
        Contact::new(
            store.next_id(),
            name.into(),
            phone.into(),
            None,
            ContactType::Personal,
        )
    }

    #[test]
    fn insert_appends_to_memory_and_file() {
        let mut store = InMemoryStore::new();
        let c = contact(&store, "Alice", "555-0100");
        store.insert(c.clone()).unwrap();

        assert_eq!(store.contacts(), &[c.clone()]);
        assert_eq!(store.backend().lines(), vec![codec::encode(&c)]);
    }

    #[test]
    fn failed_append_leaves_memory_untouched() {
        let mut store = InMemoryStore::new();
        store.backend().set_simulate_write_error(true);

        let c = contact(&store, "Alice", "555-0100");
        let err = store.insert(c).unwrap_err();

        assert!(matches!(err, ContactError::Io(_)));
        assert!(store.contacts().is_empty());
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn open_loads_file_and_skips_bad_lines() {
        let good = "Id: 4 | Name: Bob | Phone No: 1 | E-mail:  | Type: Work | Time Created: 2026-01-01T00:00:00Z";
        let store = InMemoryStore::from_lines([good, "Id: 5 | broken", ""]).unwrap();

        assert_eq!(store.contacts().len(), 1);
        assert_eq!(store.contacts()[0].name, "Bob");
        assert_eq!(store.next_id(), 5);
    }

    #[test]
    fn exists_checks_memory_and_file() {
        let mut store = InMemoryStore::new();
        let c = contact(&store, "Alice", "555-0100");
        store.insert(c).unwrap();
        store.backend().push_raw(
            "Id: 9 | Name: X | Phone No: 555-0199 | E-mail:  | Type: Work | Time Created: now",
        );

        assert!(store.exists("555-0100").unwrap());
        assert!(store.exists("555-0199").unwrap());
        assert!(!store.exists("555-01").unwrap());
    }

    #[test]
    fn exists_sees_damaged_record_phone() {
        let store = InMemoryStore::from_lines([
            "Id: 9 | Name: X | Phone No: 555-0199 | E-mail:  | Type: Bogus | Time Created: now",
        ])
        .unwrap();

        assert!(store.contacts().is_empty());
        assert!(store.exists("555-0199").unwrap());
    }

    #[test]
    fn remove_rewrites_file_without_the_record() {
        let mut store = InMemoryStore::new();
        let a = contact(&store, "Alice", "555-0100");
        store.insert(a).unwrap();
        let b = contact(&store, "Bob", "555-0200");
        store.insert(b.clone()).unwrap();

        let removed = store.remove("555-0100").unwrap();

        assert_eq!(removed.name, "Alice");
        assert_eq!(store.contacts(), &[b.clone()]);
        assert_eq!(store.backend().lines(), vec![codec::encode(&b)]);
    }

    #[test]
    fn remove_of_unknown_phone_is_not_found_and_leaves_file() {
        let mut store = InMemoryStore::new();
        let a = contact(&store, "Alice", "555-0100");
        store.insert(a).unwrap();
        store.backend().set_simulate_write_error(true);

        let err = store.remove("555-9999").unwrap_err();
        assert!(matches!(err, ContactError::NotFound(_)));
        assert_eq!(store.backend().lines().len(), 1);
    }

    #[test]
    fn failed_remove_restores_memory() {
        let mut store = InMemoryStore::new();
        let a = contact(&store, "Alice", "555-0100");
        store.insert(a.clone()).unwrap();
        let b = contact(&store, "Bob", "555-0200");
        store.insert(b.clone()).unwrap();
        store.backend().set_simulate_write_error(true);

        assert!(store.remove("555-0100").is_err());
        assert_eq!(store.contacts(), &[a, b]);
        assert_eq!(store.backend().lines().len(), 2);
    }

    #[test]
    fn ids_are_not_recycled_after_delete() {
        let mut store = InMemoryStore::new();
        let a = contact(&store, "Alice", "555-0100");
        store.insert(a).unwrap();
        let b = contact(&store, "Bob", "555-0200");
        store.insert(b).unwrap();

        store.remove("555-0200").unwrap();
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn find_prefers_memory_then_file() {
        let mut store = InMemoryStore::new();
        let a = contact(&store, "Alice", "555-0100");
        store.insert(a.clone()).unwrap();
        store.backend().push_raw(
            "Id: 7 | Name: carol | Phone No: 555-0300 | E-mail: c@x.com | Type: Family | Time Created: 2026-02-03T04:05:06Z",
        );

        assert_eq!(store.find_by_phone("555-0100").unwrap(), Some(a));

        let carol = store.find_by_phone("555-0300").unwrap().unwrap();
        assert_eq!(carol.id, 7);
        assert_eq!(carol.name, "carol");
        assert_eq!(carol.contact_type, ContactType::Family);
    }

    #[test]
    fn find_on_damaged_line_is_none() {
        let store = InMemoryStore::new();
        store
            .backend()
            .push_raw("Id: 7 | Name: X | Phone No: 555-0300 | E-mail:  | Type: Friend | Time Created: now");

        assert_eq!(store.find_by_phone("555-0300").unwrap(), None);
        assert_eq!(store.find_by_phone("555-0400").unwrap(), None);
    }

    #[test]
    fn update_changes_only_name_and_email() {
        let mut store = InMemoryStore::new();
        let a = contact(&store, "Alice", "555-0100");
        store.insert(a.clone()).unwrap();

        let updated = store
            .update_fields("555-0100", "Alicia", Some("new@x.com"))
            .unwrap();

        assert_eq!(updated.name, "Alicia");
        assert_eq!(updated.email.as_deref(), Some("new@x.com"));
        assert_eq!(updated.id, a.id);
        assert_eq!(updated.created_at, a.created_at);
        assert_eq!(updated.contact_type, a.contact_type);

        let on_disk = codec::decode(&store.backend().lines()[0]).unwrap();
        assert_eq!(on_disk, updated);
        assert_eq!(store.contacts(), &[updated]);
    }

    #[test]
    fn update_of_file_only_record_returns_decoded_line() {
        let mut store = InMemoryStore::new();
        store.backend().push_raw(
            "Id: 7 | Name: Carol | Phone No: 555-0300 | E-mail:  | Type: Family | Time Created: 2026-02-03T04:05:06Z",
        );

        let updated = store.update_fields("555-0300", "Caroline", None).unwrap();
        assert_eq!(updated.name, "Caroline");
        assert_eq!(updated.id, 7);
        assert!(store.contacts().is_empty());
    }

    #[test]
    fn update_of_missing_record_is_not_found() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            store.update_fields("555-0100", "X", None),
            Err(ContactError::NotFound(_))
        ));
    }

    #[test]
    fn failed_update_restores_memory() {
        let mut store = InMemoryStore::new();
        let a = contact(&store, "Alice", "555-0100");
        store.insert(a.clone()).unwrap();
        store.backend().set_simulate_write_error(true);

        assert!(store.update_fields("555-0100", "Alicia", None).is_err());
        assert_eq!(store.contacts(), &[a.clone()]);
        assert_eq!(store.backend().lines(), vec![codec::encode(&a)]);
    }

    #[test]
    fn reload_picks_up_external_lines() {
        let mut store = ContactStore::open(MemBackend::new()).unwrap();
        store.backend().push_raw(
            "Id: 12 | Name: Dan | Phone No: 1 | E-mail:  | Type: Other | Time Created: 2026-02-03T04:05:06Z",
        );
        store.reload().unwrap();

        assert_eq!(store.contacts().len(), 1);
        assert_eq!(store.next_id(), 13);
    }
}
