use std::rc::Rc;

use crate::models::{TransactionId, TransactionRecord};

/// The server's current set of transactions for this session.
///
/// Contents only ever change through [`TransactionStore::replace_all`]; there is
/// no per-record patching. Cloning is cheap, the records are shared.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransactionStore {
    records: Rc<Vec<TransactionRecord>>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace_all(&mut self, records: Vec<TransactionRecord>) {
        self.records = Rc::new(records);
        log::debug!("transaction store replaced with {} records", self.len());
    }

    pub fn all(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn get(&self, id: TransactionId) -> Option<&TransactionRecord> {
        self.records.iter().find(|r| r.id == Some(id))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records = Rc::default();
    }
}
