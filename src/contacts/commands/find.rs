use crate::error::Result;
use crate::model::Contact;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S, phone_number: &str) -> Result<Option<Contact>> {
    store.find_by_phone(phone_number.trim())
}
