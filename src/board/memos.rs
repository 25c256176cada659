use crate::entity::{EntityId, IdGenerator, Memo, MemoEdit};
use crate::error::Result;
use crate::storage::{SharedStore, MEMOS_KEY};

use super::collection::Collection;

fn seed_memos() -> Vec<Memo> {
    vec![Memo {
        id: 1,
        title: "업무 메모".to_string(),
        content: "- 영업정보시스템 개발건\n- 하나은행 기업뱅킹 이슈".to_string(),
        expanded: true,
    }]
}

/// Sidebar memos. Every operation rewrites the whole list.
pub struct MemoCollection {
    memos: Collection<Memo>,
    ids: IdGenerator,
}

impl MemoCollection {
    pub fn load(store: SharedStore) -> Result<Self> {
        let memos = Collection::load(store, MEMOS_KEY, seed_memos)?;
        let ids = IdGenerator::seeded(memos.items().iter().map(|m| m.id));
        Ok(Self { memos, ids })
    }

    pub fn list(&self) -> &[Memo] {
        self.memos.items()
    }

    pub fn get(&self, id: EntityId) -> Option<&Memo> {
        self.memos.items().iter().find(|m| m.id == id)
    }

    /// Append a blank, expanded memo.
    pub fn add(&mut self) -> Result<Memo> {
        let memo = Memo::new(self.ids.next_id());
        let mut memos = self.memos.items().to_vec();
        memos.push(memo.clone());
        self.memos.replace(memos)?;
        Ok(memo)
    }

    /// Apply `edit` to the memo with `id`. Returns whether one matched.
    pub fn update(&mut self, id: EntityId, edit: MemoEdit) -> Result<bool> {
        let mut memos = self.memos.items().to_vec();
        let found = match memos.iter_mut().find(|m| m.id == id) {
            Some(memo) => {
                edit.apply(memo);
                true
            }
            None => false,
        };
        self.memos.replace(memos)?;
        Ok(found)
    }

    pub fn toggle_expanded(&mut self, id: EntityId) -> Result<bool> {
        self.update(id, MemoEdit::ToggleExpanded)
    }

    pub fn delete(&mut self, id: EntityId) -> Result<bool> {
        let before = self.memos.len();
        let memos: Vec<Memo> = self
            .memos
            .items()
            .iter()
            .filter(|m| m.id != id)
            .cloned()
            .collect();
        let removed = memos.len() != before;
        self.memos.replace(memos)?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};
    use std::rc::Rc;

    #[test]
    fn test_seed_memo() {
        let store = Rc::new(MemoryStore::new());
        let memos = MemoCollection::load(store).unwrap();

        assert_eq!(memos.list().len(), 1);
        assert_eq!(memos.list()[0].id, 1);
        assert_eq!(memos.list()[0].title, "업무 메모");
        assert!(memos.list()[0].expanded);
    }

    #[test]
    fn test_quick_adds_get_distinct_ids() {
        let store = Rc::new(MemoryStore::new());
        let mut memos = MemoCollection::load(store).unwrap();

        let a = memos.add().unwrap();
        let b = memos.add().unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.title, "새 메모");
        assert!(a.expanded);
        assert_eq!(memos.list().last().unwrap().id, b.id);
    }

    #[test]
    fn test_update_and_toggle_persist() {
        let store = Rc::new(MemoryStore::new());
        let mut memos = MemoCollection::load(store.clone()).unwrap();
        let memo = memos.add().unwrap();

        assert!(memos
            .update(memo.id, MemoEdit::SetTitle("장보기".into()))
            .unwrap());
        assert!(memos
            .update(memo.id, MemoEdit::SetContent("우유, 계란".into()))
            .unwrap());
        assert!(memos.toggle_expanded(memo.id).unwrap());

        let reloaded = MemoCollection::load(store).unwrap();
        let stored = reloaded.get(memo.id).unwrap();
        assert_eq!(stored.title, "장보기");
        assert_eq!(stored.content, "우유, 계란");
        assert!(!stored.expanded);
        assert_eq!(reloaded.list(), memos.list());
    }

    #[test]
    fn test_update_unknown_id() {
        let store = Rc::new(MemoryStore::new());
        let mut memos = MemoCollection::load(store).unwrap();
        assert!(!memos.update(42, MemoEdit::SetExpanded(false)).unwrap());
        assert!(memos.list()[0].expanded);
    }

    #[test]
    fn test_delete() {
        let store = Rc::new(MemoryStore::new());
        let mut memos = MemoCollection::load(store.clone()).unwrap();

        assert!(memos.delete(1).unwrap());
        assert!(memos.list().is_empty());
        assert!(!memos.delete(1).unwrap());
        assert_eq!(store.get_raw(MEMOS_KEY).unwrap().as_deref(), Some("[]"));
    }
}
