//! End-to-end registry scenarios: many owners, deletions at every shape,
//! and reorder-rebuild, checked against the ordering invariant.

use hoenndex::catalog::CatalogItem;
use hoenndex::registry::{OwnerNode, Registry};

fn item(id: u32) -> CatalogItem {
    CatalogItem {
        id,
        name: format!("poke-{id}"),
        poke_type: "NORMAL".to_string(),
        hp: 50,
        attack: 50,
        can_evolve: false,
    }
}

fn owner(name: &str, item_count: u32) -> Box<OwnerNode> {
    OwnerNode::new(name, (1..=item_count).map(item).collect())
}

fn inorder_keys(registry: &Registry) -> Vec<String> {
    let mut keys = Vec::new();
    registry.for_each_inorder(|o| keys.push(o.name.to_lowercase()));
    keys
}

fn assert_ordered(registry: &Registry) {
    let keys = inorder_keys(registry);
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

const NAMES: [&str; 12] = [
    "Norman", "Brawly", "Winona", "Ash", "Flannery", "Wallace", "Roxanne", "Juan", "Tate",
    "Liza", "Sidney", "Phoebe",
];

#[test]
fn every_inserted_owner_is_findable() {
    let mut registry = Registry::new();
    for (i, name) in NAMES.iter().enumerate() {
        registry.insert(owner(name, i as u32 % 3 + 1));
    }
    assert_ordered(&registry);
    for name in NAMES {
        assert!(registry.find(name).is_some());
        assert!(registry.find(&name.to_uppercase()).is_some());
    }
    assert!(registry.find("Steven").is_none());
}

#[test]
fn deleting_each_owner_in_turn_preserves_the_rest() {
    for victim in NAMES {
        let mut registry = Registry::new();
        for name in NAMES {
            registry.insert(owner(name, 2));
        }
        assert!(registry.remove(victim), "failed to remove {victim}");
        assert!(registry.find(victim).is_none());
        assert_ordered(&registry);
        assert_eq!(registry.len(), NAMES.len() - 1);
        for name in NAMES {
            if name != victim {
                let found = registry
                    .find(name)
                    .unwrap_or_else(|| panic!("{name} lost after deleting {victim}"));
                assert_eq!(found.pokedex.len(), 2, "{name}'s items changed");
            }
        }
    }
}

#[test]
fn draining_the_whole_registry_ends_empty() {
    let mut registry = Registry::new();
    for name in NAMES {
        registry.insert(owner(name, 1));
    }
    for name in NAMES {
        assert!(registry.remove(name));
        assert_ordered(&registry);
    }
    assert!(registry.is_empty());
}

#[test]
fn reorder_then_inorder_matches_the_report_ordering() {
    let mut registry = Registry::new();
    for (i, name) in NAMES.iter().enumerate() {
        registry.insert(owner(name, (i as u32 % 4) + 1));
    }
    let report = registry.reorder_by_size();
    assert_eq!(report.len(), NAMES.len());

    // The report is sorted by (count, folded name).
    let mut expected = report.clone();
    expected.sort_by_key(|(name, count)| (*count, name.to_lowercase()));
    assert_eq!(report, expected);

    // The rebuilt tree holds the same owners with unchanged item lists.
    assert_ordered(&registry);
    for (i, name) in NAMES.iter().enumerate() {
        let found = registry.find(name).unwrap();
        assert_eq!(found.pokedex.len(), (i % 4) + 1);
    }
}

#[test]
fn reorder_is_stable_for_equal_sizes() {
    let mut registry = Registry::new();
    registry.insert(owner("Ash", 2));
    registry.insert(owner("Brock", 1));
    registry.insert(owner("Misty", 1));
    assert_eq!(
        registry.reorder_by_size(),
        vec![
            ("Brock".to_string(), 1),
            ("Misty".to_string(), 1),
            ("Ash".to_string(), 2),
        ]
    );
}
