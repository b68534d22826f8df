use super::*;

use tracing::debug;

/// In-memory contact book keyed by name.
///
/// Records live in a `Vec` so listing follows insertion order; lookups are a
/// linear scan by exact, case-sensitive name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactManager {
    mem: Vec<Contact>,
}

impl ContactManager {
    pub fn new() -> Self {
        Self { mem: Vec::new() }
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        let mut manager = Self::new();
        for contact in contacts {
            manager.add_contact(contact);
        }
        manager
    }

    fn get_index_by_name(&self, name: &str) -> Option<usize> {
        self.mem.iter().position(|c| c.name() == name)
    }

    /// Inserts `contact`, replacing any record with the same name in place.
    pub fn add_contact(&mut self, contact: Contact) {
        match self.get_index_by_name(contact.name()) {
            Some(index) => {
                debug!(name = contact.name(), "overwriting contact");
                self.mem[index] = contact;
            }
            None => {
                debug!(name = contact.name(), "adding contact");
                self.mem.push(contact);
            }
        }
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.mem.iter().find(|c| c.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Contact> {
        self.mem.iter_mut().find(|c| c.name() == name)
    }

    /// Returns the first record holding `number`, along with the matching entry.
    pub fn find_phone(&self, number: &str) -> Option<(&Contact, &PhoneNumber)> {
        self.mem
            .iter()
            .find_map(|c| c.find_phone(number).map(|phone| (c, phone)))
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<Contact, AppError> {
        match self.get_index_by_name(name) {
            Some(index) => {
                debug!(name, "deleting contact");
                Ok(self.mem.remove(index))
            }
            None => Err(AppError::NotFound("Record".to_string())),
        }
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }
}
