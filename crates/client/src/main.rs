//! Command-line entry point: drives the inventory controller from a terminal.

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{Context, bail};
#[cfg(not(target_arch = "wasm32"))]
use meatkonnex_client::render::{self, INVENTORY_COLUMNS, InventoryRow};
#[cfg(not(target_arch = "wasm32"))]
use meatkonnex_client::{ClientConfig, ConsoleNotifier, HttpInventoryApi, InventoryFormController};

#[cfg(not(target_arch = "wasm32"))]
const USAGE: &str = "usage:
  meatkonnex-client                      list animals and inventory
  meatkonnex-client parts <animal_id>    list the meat parts of an animal
  meatkonnex-client add <animal_id> <meat_part_id> <stock_lb> <true|false> <location...>";

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    meatkonnex_observability::init();

    let config = ClientConfig::from_env();
    tracing::info!(api_url = %config.api_url(), "starting MeatKonnex client");

    let controller = InventoryFormController::new(HttpInventoryApi::new(&config), ConsoleNotifier);
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => {
            let (animals, inventory) =
                tokio::join!(controller.load_animals(), controller.load_inventory());

            controller.with_state(|s| {
                println!("Animals:");
                for option in render::animal_options(s.animals()) {
                    println!("  {:>4}  {}", option.value, option.label);
                }
                println!();
                print_table(&render::inventory_rows(s.inventory()));
            });
            animals.and(inventory)?;
        }
        Some("parts") => {
            let animal = args.get(1).context(USAGE)?;
            controller.load_meat_parts(animal).await?;

            controller.with_state(|s| {
                // Skip the placeholder option.
                for option in render::meat_part_select(s.meat_parts()).options.iter().skip(1) {
                    println!("  {:>4}  {}", option.value, option.label);
                }
            });
        }
        Some("add") => {
            let [animal, meat_part, stock, seasoned] = match args.get(1..5) {
                Some([a, m, st, se]) => [a, m, st, se],
                _ => bail!(USAGE),
            };
            let location = args[5..].join(" ");

            controller.load_meat_parts(animal).await?;
            controller.select_meat_part(meat_part);
            controller.set_stock(stock);
            controller.set_seasoned(seasoned);
            controller.set_location(&location);
            controller.submit_inventory().await?;

            controller.with_state(|s| print_table(&render::inventory_rows(s.inventory())));
        }
        Some(other) => bail!("unknown command {other:?}\n{USAGE}"),
    }

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn print_table(rows: &[InventoryRow]) {
    let mut widths = INVENTORY_COLUMNS.map(str::len);
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: [&str; 6]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{cell:<width$}"))
            .collect();
        println!("{}", padded.join("  ").trim_end());
    };

    line(INVENTORY_COLUMNS);
    for row in rows {
        line(row.cells.each_ref().map(String::as_str));
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
