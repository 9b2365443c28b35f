//! Leptos application: the "add inventory" form and the inventory table.

use std::future::Future;
use std::rc::Rc;

use leptos::*;

use crate::config::ClientConfig;
use crate::controller::InventoryFormController;
use crate::error::ClientError;
use crate::frontend::browser::BrowserNotifier;
use crate::http::HttpInventoryApi;
use crate::render::{self, INVENTORY_COLUMNS};
use crate::state::FormState;

type Controller = InventoryFormController<HttpInventoryApi, BrowserNotifier>;

/// Run a controller operation on the browser's event loop. Failures were
/// already alerted by the controller.
fn spawn_op<F, Fut>(controller: &Rc<Controller>, op: F)
where
    F: FnOnce(Rc<Controller>) -> Fut + 'static,
    Fut: Future<Output = Result<(), ClientError>> + 'static,
{
    let controller = controller.clone();
    spawn_local(async move {
        if let Err(e) = op(controller).await {
            tracing::debug!(error = %e, "operation failed after alerting");
        }
    });
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let view_state = create_rw_signal(FormState::new());
    let api = HttpInventoryApi::new(&ClientConfig::default());
    let controller = Rc::new(
        Controller::new(api, BrowserNotifier).with_observer(move |s| view_state.set(s.clone())),
    );

    // Page load: both lists, independently.
    spawn_op(&controller, |c| async move { c.load_animals().await });
    spawn_op(&controller, |c| async move { c.load_inventory().await });

    let on_animal = {
        let controller = controller.clone();
        move |event: ev::Event| {
            let value = event_target_value(&event);
            spawn_op(&controller, move |c| async move { c.load_meat_parts(&value).await });
        }
    };
    let on_meat_part = {
        let controller = controller.clone();
        move |event: ev::Event| controller.select_meat_part(&event_target_value(&event))
    };
    let on_stock = {
        let controller = controller.clone();
        move |event: ev::Event| controller.set_stock(&event_target_value(&event))
    };
    let on_seasoned = {
        let controller = controller.clone();
        move |event: ev::Event| controller.set_seasoned(&event_target_value(&event))
    };
    let on_location = {
        let controller = controller.clone();
        move |event: ev::Event| controller.set_location(&event_target_value(&event))
    };
    let on_submit = {
        let controller = controller.clone();
        move |event: ev::SubmitEvent| {
            event.prevent_default();
            spawn_op(&controller, |c| async move { c.submit_inventory().await });
        }
    };

    let meat_parts = move || view_state.with(|s| render::meat_part_select(s.meat_parts()));
    let form_value = move |field: fn(&FormState) -> String| move || view_state.with(field);

    view! {
        <div class="app">
            <header>
                <h1>"MeatKonnex Inventory"</h1>
            </header>

            <main>
                <form id="add-inventory-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="animal-select">"Animal"</label>
                        <select
                            id="animal-select"
                            on:change=on_animal
                            prop:value=form_value(|s| s.selected_animal().to_string())
                        >
                            <option value="">"--Select Animal--"</option>
                            {move || {
                                view_state
                                    .with(|s| render::animal_options(s.animals()))
                                    .into_iter()
                                    .map(|o| view! { <option value=o.value>{o.label}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="meat-part-select">"Meat Part"</label>
                        <select
                            id="meat-part-select"
                            on:change=on_meat_part
                            prop:disabled=move || !meat_parts().enabled
                            prop:value=form_value(|s| s.form().meat_part.clone())
                        >
                            {move || {
                                meat_parts()
                                    .options
                                    .into_iter()
                                    .map(|o| view! { <option value=o.value>{o.label}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="stock_lb">"Stock (lb)"</label>
                        <input
                            type="number"
                            step="any"
                            id="stock_lb"
                            on:input=on_stock
                            prop:value=form_value(|s| s.form().stock_lb.clone())
                        />
                    </div>

                    <div class="form-group">
                        <label for="is_seasoned">"Seasoned"</label>
                        <select
                            id="is_seasoned"
                            on:change=on_seasoned
                            prop:value=form_value(|s| s.form().seasoned.clone())
                        >
                            <option value="false">"No"</option>
                            <option value="true">"Yes"</option>
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="location">"Location"</label>
                        <input
                            type="text"
                            id="location"
                            on:input=on_location
                            prop:value=form_value(|s| s.form().location.clone())
                        />
                    </div>

                    <div class="form-actions">
                        <button type="submit">"Add Inventory"</button>
                    </div>
                </form>

                <table id="inventory-table">
                    <thead>
                        <tr>
                            {INVENTORY_COLUMNS.iter().map(|c| view! { <th>{*c}</th> }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            view_state
                                .with(|s| render::inventory_rows(s.inventory()))
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <tr>
                                            {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </main>
        </div>
    }
}
