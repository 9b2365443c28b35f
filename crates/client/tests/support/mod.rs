#![allow(dead_code)]

use std::cell::RefCell;

use meatkonnex_client::Notifier;
use meatkonnex_core::{AnimalId, InventoryId, MeatPartId};
use meatkonnex_inventory::{Animal, InventoryItem, MeatPart};

/// Keeps every alert and diagnostic for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    pub alerts: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn error_count(&self) -> usize {
        self.errors.borrow().len()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn log_error(&self, context: &str, error: &dyn std::error::Error) {
        self.errors.borrow_mut().push(format!("{context}: {error}"));
    }
}

pub fn animals() -> Vec<Animal> {
    vec![
        Animal { id: AnimalId::new(1), name: "Goat".into() },
        Animal { id: AnimalId::new(2), name: "Pork".into() },
        Animal { id: AnimalId::new(3), name: "Beef".into() },
    ]
}

pub fn goat_parts() -> Vec<MeatPart> {
    vec![
        MeatPart { id: MeatPartId::new(10), part_name: "Leg".into() },
        MeatPart { id: MeatPartId::new(11), part_name: "Shoulder".into() },
    ]
}

pub fn pork_parts() -> Vec<MeatPart> {
    vec![MeatPart { id: MeatPartId::new(20), part_name: "Ribs".into() }]
}

pub fn inventory_item(id: i64, meat_part: &str, animal: &str, stock_lb: f64) -> InventoryItem {
    InventoryItem {
        inventory_id: InventoryId::new(id),
        meat_part: meat_part.into(),
        animal: animal.into(),
        stock_lb,
        seasoned: false,
        location: "Freezer A".into(),
    }
}
