//! The interactive menu shell. All reads and writes go through the
//! handles given at construction, so sessions can be scripted in tests.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::catalog::{Catalog, CatalogItem};
use crate::cli::render;
use crate::registry::{AddOutcome, EvolveOutcome, OwnerNode, Registry};
use crate::Result;

const MAIN_MENU: &str = "\n=== Main Menu ===\n\
1. New Pokedex\n\
2. Existing Pokedex\n\
3. Delete a Pokedex\n\
4. Sort owners\n\
5. Print all\n\
6. Exit\n\
Your choice: ";

const STARTER_MENU: &str = "Choose your starter Pokemon:\n\
1) Treecko\n\
2) Torchic\n\
3) Mudkip\n\
Your choice: ";

const FILTER_MENU: &str = "\n-- Display Filter Menu --\n\
1. Only a certain Type\n\
2. Only Evolvable\n\
3. Only Attack above __\n\
4. Only HP above __\n\
5. Only names starting with letter(s)\n\
6. All of them!\n\
7. Back\n\
Your choice: ";

const PRINT_MENU: &str = "1) BFS\n\
2) Pre-Order\n\
3) In-Order\n\
4) Post-Order\n\
Your choice: ";

pub struct Shell<R, W> {
    catalog: Catalog,
    registry: Registry,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            registry: Registry::new(),
            input,
            output,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Run the main menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(choice) = self.prompt_int::<u32>(MAIN_MENU)? else {
                return Ok(());
            };
            match choice {
                1 => self.new_pokedex()?,
                2 => self.existing_pokedex()?,
                3 => self.delete_pokedex()?,
                4 => self.sort_owners()?,
                5 => self.print_all()?,
                6 => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn new_pokedex(&mut self) -> Result<()> {
        let Some(name) = self.prompt_line("Owner name: ")? else {
            return Ok(());
        };
        if name.is_empty() {
            writeln!(self.output, "Owner name cannot be empty.")?;
            return Ok(());
        }
        if self.registry.find(&name).is_some() {
            writeln!(
                self.output,
                "Owner '{name}' already exists. No new Pokedex created."
            )?;
            return Ok(());
        }
        let Some(choice) = self.prompt_int::<u32>(STARTER_MENU)? else {
            return Ok(());
        };
        // Starters sit at ids 1, 4, 7.
        let starter = choice
            .checked_mul(3)
            .and_then(|v| v.checked_sub(2))
            .and_then(|id| self.catalog.get(id))
            .cloned();
        let Some(starter) = starter else {
            writeln!(self.output, "Invalid choice.")?;
            return Ok(());
        };
        let starter_name = starter.name.clone();
        self.registry.insert(OwnerNode::new(&name, vec![starter]));
        writeln!(
            self.output,
            "New Pokedex created for {name} with starter {starter_name}."
        )?;
        Ok(())
    }

    fn existing_pokedex(&mut self) -> Result<()> {
        let Some(name) = self.prompt_line("Owner name: ")? else {
            return Ok(());
        };
        // Resolve to the stored spelling once; menu prompts use it.
        let Some(owner) = self.registry.find(&name).map(|o| o.name.clone()) else {
            writeln!(self.output, "Owner '{name}' not found.")?;
            return Ok(());
        };
        loop {
            let menu = format!(
                "\n-- {owner}'s Pokedex Menu --\n\
1. Add Pokemon\n\
2. Display Pokedex\n\
3. Release Pokemon\n\
4. Evolve Pokemon\n\
5. Back to Main\n\
Your choice: "
            );
            let Some(choice) = self.prompt_int::<u32>(&menu)? else {
                return Ok(());
            };
            match choice {
                1 => self.add_pokemon(&owner)?,
                2 => self.display_filter_menu(&owner)?,
                3 => self.release_pokemon(&owner)?,
                4 => self.evolve_pokemon(&owner)?,
                5 => {
                    writeln!(self.output, "Back to Main Menu.")?;
                    return Ok(());
                }
                _ => writeln!(self.output, "Invalid choice.")?,
            }
        }
    }

    fn add_pokemon(&mut self, owner: &str) -> Result<()> {
        let Some(id) = self.prompt_int::<u32>("Enter Pokemon ID to add: ")? else {
            return Ok(());
        };
        let Some(item) = self.catalog.get(id).cloned() else {
            writeln!(self.output, "ID {id} not found in Hoenn Pokedex.")?;
            return Ok(());
        };
        let Some(node) = self.registry.find_mut(owner) else {
            return Ok(());
        };
        match node.add_item(item.clone()) {
            AddOutcome::Added => writeln!(
                self.output,
                "Pokemon {} (ID {}) added to {owner}'s Pokedex.",
                item.name, item.id
            )?,
            AddOutcome::AlreadyPresent => {
                writeln!(self.output, "Pokemon already in the list. No changes made.")?
            }
        }
        Ok(())
    }

    fn release_pokemon(&mut self, owner: &str) -> Result<()> {
        let Some(name) = self.prompt_line("Enter Pokemon Name to release: ")? else {
            return Ok(());
        };
        let released = self
            .registry
            .find_mut(owner)
            .and_then(|node| node.release_item(&name));
        match released {
            Some(item) => writeln!(self.output, "Releasing {} from {owner}.", item.name)?,
            None => writeln!(
                self.output,
                "No Pokemon named '{name}' in {owner}'s Pokedex."
            )?,
        }
        Ok(())
    }

    fn evolve_pokemon(&mut self, owner: &str) -> Result<()> {
        let Some(name) = self.prompt_line("Enter Pokemon Name to evolve: ")? else {
            return Ok(());
        };
        let Some(node) = self.registry.find_mut(owner) else {
            return Ok(());
        };
        match node.evolve_item(&name, &self.catalog) {
            EvolveOutcome::Evolved { from, to } => writeln!(
                self.output,
                "Pokemon evolved from {} (ID {}) to {} (ID {}).",
                from.name, from.id, to.name, to.id
            )?,
            EvolveOutcome::AlreadyPresent { from, to } => {
                writeln!(
                    self.output,
                    "Pokemon evolved from {} (ID {}) to {} (ID {}).",
                    from.name, from.id, to.name, to.id
                )?;
                writeln!(
                    self.output,
                    "{} is already in the Pokedex; the evolved copy was not kept.",
                    to.name
                )?;
            }
            EvolveOutcome::CannotEvolve { item } => writeln!(
                self.output,
                "Pokemon {} (ID {}) can't evolve.",
                item.name, item.id
            )?,
            EvolveOutcome::NoEvolvedForm { item } => writeln!(
                self.output,
                "{} has no evolved form in the Hoenn Pokedex.",
                item.name
            )?,
            EvolveOutcome::NotFound => writeln!(
                self.output,
                "No Pokemon named '{name}' in {owner}'s Pokedex."
            )?,
        }
        Ok(())
    }

    fn display_filter_menu(&mut self, owner: &str) -> Result<()> {
        loop {
            let Some(choice) = self.prompt_int::<u32>(FILTER_MENU)? else {
                return Ok(());
            };
            let shown = match choice {
                1 => {
                    let Some(t) = self.prompt_line("Which Type? (e.g. GRASS, WATER): ")? else {
                        return Ok(());
                    };
                    self.owner_items(owner, |o| o.items_of_type(&t))
                }
                2 => self.owner_items(owner, |o| o.evolvable_items()),
                3 => {
                    let Some(min) = self.prompt_int::<i32>("Enter Attack threshold: ")? else {
                        return Ok(());
                    };
                    self.owner_items(owner, |o| o.items_with_attack_at_least(min))
                }
                4 => {
                    let Some(min) = self.prompt_int::<i32>("Enter HP threshold: ")? else {
                        return Ok(());
                    };
                    self.owner_items(owner, |o| o.items_with_hp_at_least(min))
                }
                5 => {
                    let Some(prefix) = self.prompt_line("Starting letter(s): ")? else {
                        return Ok(());
                    };
                    self.owner_items(owner, |o| o.items_with_prefix(&prefix))
                }
                6 => self.owner_items(owner, |o| o.all_items()),
                7 => {
                    writeln!(self.output, "Back to Pokedex Menu.")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    continue;
                }
            };
            render::write_item_list(&mut self.output, &shown)?;
        }
    }

    fn owner_items<F>(&self, owner: &str, select: F) -> Vec<CatalogItem>
    where
        F: Fn(&OwnerNode) -> Vec<&CatalogItem>,
    {
        self.registry
            .find(owner)
            .map(|node| select(node).into_iter().cloned().collect())
            .unwrap_or_default()
    }

    fn delete_pokedex(&mut self) -> Result<()> {
        let Some(name) = self.prompt_line("Enter owner to delete: ")? else {
            return Ok(());
        };
        if self.registry.find(&name).is_none() {
            writeln!(self.output, "Owner '{name}' not found.")?;
            return Ok(());
        }
        writeln!(self.output, "Deleting {name}'s entire Pokedex...")?;
        self.registry.remove(&name);
        writeln!(self.output, "Pokedex deleted.")?;
        Ok(())
    }

    fn sort_owners(&mut self) -> Result<()> {
        if self.registry.is_empty() {
            writeln!(self.output, "No owners at all.")?;
            return Ok(());
        }
        let report = self.registry.reorder_by_size();
        writeln!(
            self.output,
            "=== The Owners we have, sorted by number of Pokemons ==="
        )?;
        for (name, count) in &report {
            writeln!(self.output, "Owner: {name} (has {count} Pokemon)")?;
        }
        Ok(())
    }

    fn print_all(&mut self) -> Result<()> {
        let Some(choice) = self.prompt_int::<u32>(PRINT_MENU)? else {
            return Ok(());
        };
        let mut owners: Vec<(String, Vec<CatalogItem>)> = Vec::new();
        {
            let mut visit = |o: &OwnerNode| owners.push((o.name.clone(), o.pokedex.clone()));
            match choice {
                1 => self.registry.for_each_level_order(&mut visit),
                2 => self.registry.for_each_preorder(&mut visit),
                3 => self.registry.for_each_inorder(&mut visit),
                4 => self.registry.for_each_postorder(&mut visit),
                _ => {
                    writeln!(self.output, "Invalid choice.")?;
                    return Ok(());
                }
            }
        }
        for (name, pokedex) in owners {
            render::write_owner(&mut self.output, &name, &pokedex)?;
        }
        Ok(())
    }

    fn prompt_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input ended, leaving shell");
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompt until a line of digits parses into the requested
    /// integer type. `None` means end of input.
    fn prompt_int<T: std::str::FromStr>(&mut self, prompt: &str) -> Result<Option<T>> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input ended, leaving shell");
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(value) = trimmed.parse() {
                    return Ok(Some(value));
                }
            }
        }
    }
}
