//! In-process repository behind a `RwLock<HashMap>`.

use crate::store::{Document, Repository, StoreError};
use std::collections::HashMap;
use std::sync::RwLock;
use uuid::Uuid;

pub struct MemoryRepository<T> {
    docs: RwLock<HashMap<Uuid, T>>,
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            docs: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Document> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(self.docs.read().map_err(|_| StoreError::Poisoned)?.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

impl<T: Document> Repository<T> for MemoryRepository<T> {
    fn find_by_id(&self, id: Uuid) -> Result<Option<T>, StoreError> {
        let g = self.docs.read().map_err(|_| StoreError::Poisoned)?;
        Ok(g.get(&id).cloned())
    }

    fn insert(&self, doc: T) -> Result<(), StoreError> {
        let mut g = self.docs.write().map_err(|_| StoreError::Poisoned)?;
        let id = doc.id();
        if g.contains_key(&id) {
            return Err(StoreError::Duplicate(id));
        }
        g.insert(id, doc);
        Ok(())
    }

    fn replace(&self, doc: T) -> Result<(), StoreError> {
        let mut g = self.docs.write().map_err(|_| StoreError::Poisoned)?;
        match g.get_mut(&doc.id()) {
            Some(slot) => {
                *slot = doc;
                Ok(())
            }
            None => Err(StoreError::Missing(doc.id())),
        }
    }

    fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut g = self.docs.write().map_err(|_| StoreError::Poisoned)?;
        Ok(g.remove(&id).is_some())
    }

    fn query(&self, filter: &dyn Fn(&T) -> bool) -> Result<Vec<T>, StoreError> {
        let g = self.docs.read().map_err(|_| StoreError::Poisoned)?;
        let mut found: Vec<T> = g.values().filter(|d| filter(d)).cloned().collect();
        found.sort_by_key(|d| (d.created_at(), d.id()));
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Group;

    #[test]
    fn crud_cycle() {
        let repo = MemoryRepository::<Group>::new();
        let mut g = Group::new("MorningMen").unwrap();
        repo.insert(g.clone()).unwrap();
        assert!(matches!(repo.insert(g.clone()), Err(StoreError::Duplicate(_))));

        g.rename("Early Birds").unwrap();
        repo.replace(g.clone()).unwrap();
        assert_eq!(repo.find_by_id(g.id).unwrap().unwrap().name, "Early Birds");

        assert!(repo.delete(g.id).unwrap());
        assert!(!repo.delete(g.id).unwrap());
        assert!(repo.find_by_id(g.id).unwrap().is_none());
        assert!(matches!(repo.replace(g), Err(StoreError::Missing(_))));
    }

    #[test]
    fn query_filters_and_orders_by_creation() {
        let repo = MemoryRepository::<Group>::new();
        for name in ["A", "B", "C"] {
            repo.insert(Group::new(name).unwrap()).unwrap();
        }
        let all = repo.all().unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.windows(2).all(|w| w[0].created_at <= w[1].created_at));
        let b = repo.query(&|g: &Group| g.name == "B").unwrap();
        assert_eq!(b.len(), 1);
        assert_eq!(repo.len().unwrap(), 3);
    }
}
