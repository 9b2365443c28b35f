//! Explicit view state of the inventory page.
//!
//! The controller mutates only [`FormState`]; markup is derived from it by
//! the functions in [`crate::render`].

use meatkonnex_core::{AnimalId, DomainError, MeatPartId};
use meatkonnex_inventory::{Animal, InventoryItem, MeatPart};

use crate::form::FormInput;

/// State of the dependent meat-part selector.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum MeatPartSelect {
    /// No animal selected (or the last fetch failed). Disabled.
    #[default]
    Empty,
    /// Parts for `animal_id` are being fetched. Disabled.
    Loading { animal_id: AnimalId },
    /// Parts for `animal_id` are loaded. Enabled.
    Populated {
        animal_id: AnimalId,
        parts: Vec<MeatPart>,
    },
}

impl MeatPartSelect {
    pub fn is_enabled(&self) -> bool {
        matches!(self, MeatPartSelect::Populated { .. })
    }

    pub fn parts(&self) -> &[MeatPart] {
        match self {
            MeatPartSelect::Populated { parts, .. } => parts,
            _ => &[],
        }
    }

    pub fn contains(&self, id: MeatPartId) -> bool {
        self.parts().iter().any(|p| p.id == id)
    }
}

/// Stamp of one meat-part request. Only the ticket of the latest request
/// may change the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeatPartTicket {
    generation: u64,
    animal_id: AnimalId,
}

impl MeatPartTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn animal_id(&self) -> AnimalId {
        self.animal_id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    animals: Vec<Animal>,
    selected_animal: String,
    meat_parts: MeatPartSelect,
    inventory: Vec<InventoryItem>,
    form: FormInput,
    generation: u64,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animals(&self) -> &[Animal] {
        &self.animals
    }

    /// Raw value of the animal selector.
    pub fn selected_animal(&self) -> &str {
        &self.selected_animal
    }

    pub fn meat_parts(&self) -> &MeatPartSelect {
        &self.meat_parts
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormInput {
        &mut self.form
    }

    pub fn replace_animals(&mut self, animals: Vec<Animal>) {
        self.animals = animals;
    }

    pub fn replace_inventory(&mut self, items: Vec<InventoryItem>) {
        self.inventory = items;
    }

    /// Record a new animal selection.
    ///
    /// The meat-part selector is cleared and disabled whatever `raw` is, and
    /// any request still in flight becomes stale. Returns the ticket for the
    /// request to issue, or `None` when nothing is selected.
    pub fn select_animal(&mut self, raw: &str) -> Result<Option<MeatPartTicket>, DomainError> {
        self.generation += 1;
        self.selected_animal = raw.to_string();
        self.meat_parts = MeatPartSelect::Empty;
        self.form.meat_part.clear();

        if raw.trim().is_empty() {
            return Ok(None);
        }

        let animal_id = raw.parse::<AnimalId>()?;
        self.meat_parts = MeatPartSelect::Loading { animal_id };
        Ok(Some(MeatPartTicket {
            generation: self.generation,
            animal_id,
        }))
    }

    pub fn is_current(&self, ticket: MeatPartTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Populate the selector. Returns `false` (and changes nothing) for a stale ticket.
    pub fn apply_meat_parts(&mut self, ticket: MeatPartTicket, parts: Vec<MeatPart>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.meat_parts = MeatPartSelect::Populated {
            animal_id: ticket.animal_id,
            parts,
        };
        true
    }

    /// Leave the selector cleared after a failed fetch. Returns `false` for a stale ticket.
    pub fn fail_meat_parts(&mut self, ticket: MeatPartTicket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.meat_parts = MeatPartSelect::Empty;
        true
    }

    /// The form's meat part, provided it is one of the loaded options.
    pub fn selected_meat_part(&self) -> Option<MeatPartId> {
        self.form
            .selected_meat_part()
            .filter(|id| self.meat_parts.contains(*id))
    }

    /// Clear the entry fields. The animal selection and its loaded parts stay.
    pub fn reset_form(&mut self) {
        self.form = FormInput::default();
    }
}
