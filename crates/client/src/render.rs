//! Pure functions from [`FormState`](crate::state::FormState) pieces to view data.

use meatkonnex_core::InventoryId;
use meatkonnex_inventory::{Animal, InventoryItem};

use crate::state::MeatPartSelect;

/// Label of the leading, empty-valued option of the meat-part selector.
pub const MEAT_PART_PLACEHOLDER: &str = "--Select Meat Part--";

/// Column headers of the inventory table.
pub const INVENTORY_COLUMNS: [&str; 6] =
    ["ID", "Meat Part", "Animal", "Stock (lb)", "Seasoned", "Location"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectView {
    pub options: Vec<SelectOption>,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    pub id: InventoryId,
    pub cells: [String; 6],
}

/// One option per animal, in response order.
pub fn animal_options(animals: &[Animal]) -> Vec<SelectOption> {
    animals
        .iter()
        .map(|a| SelectOption::new(a.id.to_string(), a.name.clone()))
        .collect()
}

/// The placeholder, followed by the loaded parts once there are any.
pub fn meat_part_select(select: &MeatPartSelect) -> SelectView {
    let mut options = vec![SelectOption::new("", MEAT_PART_PLACEHOLDER)];
    options.extend(
        select
            .parts()
            .iter()
            .map(|p| SelectOption::new(p.id.to_string(), p.part_name.clone())),
    );
    SelectView {
        options,
        enabled: select.is_enabled(),
    }
}

pub fn inventory_rows(items: &[InventoryItem]) -> Vec<InventoryRow> {
    items.iter().map(inventory_row).collect()
}

fn inventory_row(item: &InventoryItem) -> InventoryRow {
    InventoryRow {
        id: item.inventory_id,
        cells: [
            item.inventory_id.to_string(),
            item.meat_part.clone(),
            item.animal.clone(),
            format_stock(item.stock_lb),
            seasoned_label(item.seasoned).to_string(),
            item.location.clone(),
        ],
    }
}

/// `12.0` renders as `12`, `12.5` as `12.5`.
pub fn format_stock(stock_lb: f64) -> String {
    stock_lb.to_string()
}

pub fn seasoned_label(seasoned: bool) -> &'static str {
    if seasoned { "Yes" } else { "No" }
}
