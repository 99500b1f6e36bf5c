// SPDX-FileCopyrightText: 2022-2026 Noah Fontes
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::error::Result;

use super::{IsPersistent, Storage};

/// Process-local storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub(crate) struct Memory {
    data: Rc<RefCell<HashMap<String, String>>>,
}

impl Memory {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl IsPersistent for Memory {
    fn is_persistent(&self) -> bool {
        false
    }
}

impl Storage for Memory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        _ = self
            .data
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        _ = self.data.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() -> Result<()> {
        let mut first = Memory::new();
        let second = first.clone();

        first.set("auth_token", "abc")?;
        assert_eq!(second.get("auth_token")?.as_deref(), Some("abc"));

        first.remove("auth_token")?;
        assert_eq!(second.get("auth_token")?, None);
        Ok(())
    }

    #[test]
    fn remove_missing_key_is_ok() -> Result<()> {
        let mut storage = Memory::new();
        storage.remove("auth_user")?;
        assert!(!storage.is_persistent());
        Ok(())
    }
}
