//! Text rendering of catalog items and owners.

use std::io::Write;

use crate::catalog::CatalogItem;
use crate::Result;

pub fn write_item<W: Write>(out: &mut W, item: &CatalogItem) -> Result<()> {
    writeln!(
        out,
        "ID: {}, Name: {}, Type: {}, HP: {}, Attack: {}, Can Evolve: {}",
        item.id,
        item.name,
        item.poke_type,
        item.hp,
        item.attack,
        if item.can_evolve { "TRUE" } else { "FALSE" }
    )?;
    Ok(())
}

pub fn write_item_list<W: Write>(out: &mut W, items: &[CatalogItem]) -> Result<()> {
    if items.is_empty() {
        writeln!(
            out,
            "There are no Pokemons in this Pokedex that match the criteria."
        )?;
        return Ok(());
    }
    for item in items {
        write_item(out, item)?;
    }
    Ok(())
}

pub fn write_owner<W: Write>(out: &mut W, name: &str, pokedex: &[CatalogItem]) -> Result<()> {
    writeln!(out, "\nOwner: {name}")?;
    write_item_list(out, pokedex)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CatalogItem {
        CatalogItem {
            id: 1,
            name: "Treecko".to_string(),
            poke_type: "GRASS".to_string(),
            hp: 40,
            attack: 45,
            can_evolve: true,
        }
    }

    #[test]
    fn renders_item_line() {
        let mut out = Vec::new();
        write_item(&mut out, &item()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ID: 1, Name: Treecko, Type: GRASS, HP: 40, Attack: 45, Can Evolve: TRUE\n"
        );
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let mut out = Vec::new();
        write_item_list(&mut out, &[]).unwrap();
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("no Pokemons in this Pokedex"));
    }
}
