use crate::catalog::{Catalog, CatalogItem};
use crate::registry::name_key;

/// A single owner in the registry tree: a name, an ordered Pokédex, and
/// two exclusively-owned subtrees.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerNode {
    pub name: String,
    pub pokedex: Vec<CatalogItem>,
    pub left: Option<Box<OwnerNode>>,
    pub right: Option<Box<OwnerNode>>,
}

/// Outcome of adding a catalog item to an owner's Pokédex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    /// An item with the same id is already held; nothing was changed.
    AlreadyPresent,
}

/// Outcome of evolving an item by name.
#[derive(Debug, Clone, PartialEq)]
pub enum EvolveOutcome {
    /// The old item was removed and the evolved form appended.
    Evolved { from: CatalogItem, to: CatalogItem },
    /// The evolved form was already held: the old item was removed but
    /// no duplicate was appended.
    AlreadyPresent { from: CatalogItem, to: CatalogItem },
    /// The item's `can_evolve` flag is false; the Pokédex is untouched.
    CannotEvolve { item: CatalogItem },
    /// The catalog has no entry at `id + 1`; the Pokédex is untouched.
    NoEvolvedForm { item: CatalogItem },
    /// No item with that name is held.
    NotFound,
}

impl OwnerNode {
    pub fn new(name: impl Into<String>, pokedex: Vec<CatalogItem>) -> Box<Self> {
        Box::new(Self {
            name: name.into(),
            pokedex,
            left: None,
            right: None,
        })
    }

    /// Append an item unless one with the same id is already held.
    pub fn add_item(&mut self, item: CatalogItem) -> AddOutcome {
        if self.pokedex.iter().any(|p| p.id == item.id) {
            return AddOutcome::AlreadyPresent;
        }
        self.pokedex.push(item);
        AddOutcome::Added
    }

    /// Remove and return the first item whose name matches
    /// case-insensitively.
    pub fn release_item(&mut self, name: &str) -> Option<CatalogItem> {
        let idx = self.position_by_name(name)?;
        Some(self.pokedex.remove(idx))
    }

    /// Evolve an item by name. The evolved form is the catalog entry at
    /// `id + 1`. The old item is removed whenever evolution goes ahead;
    /// if the evolved form is already held no duplicate is appended.
    pub fn evolve_item(&mut self, name: &str, catalog: &Catalog) -> EvolveOutcome {
        let Some(idx) = self.position_by_name(name) else {
            return EvolveOutcome::NotFound;
        };
        if !self.pokedex[idx].can_evolve {
            return EvolveOutcome::CannotEvolve {
                item: self.pokedex[idx].clone(),
            };
        }
        let Some(next) = catalog.get(self.pokedex[idx].id + 1) else {
            return EvolveOutcome::NoEvolvedForm {
                item: self.pokedex[idx].clone(),
            };
        };
        let next = next.clone();
        let old = self.pokedex.remove(idx);
        if self.pokedex.iter().any(|p| p.id == next.id) {
            EvolveOutcome::AlreadyPresent { from: old, to: next }
        } else {
            self.pokedex.push(next.clone());
            EvolveOutcome::Evolved { from: old, to: next }
        }
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        let key = name_key(name);
        self.pokedex.iter().position(|p| name_key(&p.name) == key)
    }

    // Display filters. Read-only views over the Pokédex in held order.

    pub fn items_of_type(&self, poke_type: &str) -> Vec<&CatalogItem> {
        let key = name_key(poke_type);
        self.pokedex
            .iter()
            .filter(|p| name_key(&p.poke_type) == key)
            .collect()
    }

    pub fn evolvable_items(&self) -> Vec<&CatalogItem> {
        self.pokedex.iter().filter(|p| p.can_evolve).collect()
    }

    pub fn items_with_attack_at_least(&self, min: i32) -> Vec<&CatalogItem> {
        self.pokedex.iter().filter(|p| p.attack >= min).collect()
    }

    pub fn items_with_hp_at_least(&self, min: i32) -> Vec<&CatalogItem> {
        self.pokedex.iter().filter(|p| p.hp >= min).collect()
    }

    pub fn items_with_prefix(&self, prefix: &str) -> Vec<&CatalogItem> {
        self.pokedex
            .iter()
            .filter(|p| p.name.starts_with(prefix))
            .collect()
    }

    pub fn all_items(&self) -> Vec<&CatalogItem> {
        self.pokedex.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(id: u32, name: &str, can_evolve: bool) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            poke_type: "WATER".to_string(),
            hp: 50,
            attack: 40 + id as i32,
            can_evolve,
        }
    }

    fn catalog() -> Catalog {
        Catalog::from_items(vec![
            item(1, "Mudkip", true),
            item(2, "Marshtomp", true),
            item(3, "Swampert", false),
        ])
    }

    #[test]
    fn add_rejects_duplicate_ids() {
        let mut owner = OwnerNode::new("Ash", vec![item(1, "Mudkip", true)]);
        assert_eq!(owner.add_item(item(2, "Marshtomp", true)), AddOutcome::Added);
        assert_eq!(
            owner.add_item(item(1, "Mudkip", true)),
            AddOutcome::AlreadyPresent
        );
        assert_eq!(owner.pokedex.len(), 2);
    }

    #[test]
    fn release_matches_name_case_insensitively() {
        let mut owner = OwnerNode::new(
            "Ash",
            vec![item(1, "Mudkip", true), item(2, "Marshtomp", true)],
        );
        let released = owner.release_item("MUDKIP").unwrap();
        assert_eq!(released.id, 1);
        assert_eq!(owner.pokedex.len(), 1);
        assert!(owner.release_item("Mudkip").is_none());
    }

    #[test]
    fn release_removes_only_the_first_match() {
        let mut owner = OwnerNode::new(
            "Ash",
            vec![item(1, "Mudkip", true), item(2, "mudkip", true)],
        );
        owner.release_item("Mudkip");
        assert_eq!(owner.pokedex.len(), 1);
        assert_eq!(owner.pokedex[0].id, 2);
    }

    #[test]
    fn evolve_replaces_old_with_next_catalog_entry() {
        let mut owner = OwnerNode::new("Ash", vec![item(1, "Mudkip", true)]);
        let outcome = owner.evolve_item("mudkip", &catalog());
        match outcome {
            EvolveOutcome::Evolved { from, to } => {
                assert_eq!(from.id, 1);
                assert_eq!(to.id, 2);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert_eq!(owner.pokedex.len(), 1);
        assert_eq!(owner.pokedex[0].name, "Marshtomp");
    }

    #[test]
    fn evolve_of_non_evolvable_item_changes_nothing() {
        let mut owner = OwnerNode::new("Ash", vec![item(3, "Swampert", false)]);
        let before = owner.pokedex.clone();
        let outcome = owner.evolve_item("Swampert", &catalog());
        assert!(matches!(outcome, EvolveOutcome::CannotEvolve { .. }));
        assert_eq!(owner.pokedex, before);
    }

    #[test]
    fn evolve_with_form_already_held_removes_old_without_duplicating() {
        let mut owner = OwnerNode::new(
            "Ash",
            vec![item(1, "Mudkip", true), item(2, "Marshtomp", true)],
        );
        let outcome = owner.evolve_item("Mudkip", &catalog());
        assert!(matches!(outcome, EvolveOutcome::AlreadyPresent { .. }));
        let ids: Vec<u32> = owner.pokedex.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn evolve_past_the_catalog_end_changes_nothing() {
        let mut owner = OwnerNode::new("Ash", vec![item(3, "Swampert", true)]);
        let before = owner.pokedex.clone();
        let outcome = owner.evolve_item("Swampert", &catalog());
        assert!(matches!(outcome, EvolveOutcome::NoEvolvedForm { .. }));
        assert_eq!(owner.pokedex, before);
    }

    #[test]
    fn evolve_of_missing_name_reports_not_found() {
        let mut owner = OwnerNode::new("Ash", vec![item(1, "Mudkip", true)]);
        assert_eq!(
            owner.evolve_item("Torchic", &catalog()),
            EvolveOutcome::NotFound
        );
    }

    #[test]
    fn filters_select_expected_items() {
        let mut grass = item(4, "Treecko", true);
        grass.poke_type = "GRASS".to_string();
        grass.hp = 40;
        grass.attack = 45;
        let owner = OwnerNode::new(
            "Ash",
            vec![item(1, "Mudkip", true), item(3, "Swampert", false), grass],
        );

        assert_eq!(owner.items_of_type("grass").len(), 1);
        assert_eq!(owner.items_of_type("WATER").len(), 2);
        assert_eq!(owner.evolvable_items().len(), 2);
        assert_eq!(owner.items_with_hp_at_least(50).len(), 2);
        assert_eq!(owner.items_with_attack_at_least(43).len(), 2);
        assert_eq!(owner.items_with_prefix("M").len(), 1);
        assert_eq!(owner.items_with_prefix("m").len(), 0);
        assert_eq!(owner.all_items().len(), 3);
    }
}
