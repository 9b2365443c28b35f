//! The inventory page controller.
//!
//! Each operation talks to the backend through an [`InventoryApi`], applies
//! the result to the [`FormState`], and reports failures to a [`Notifier`]
//! (one generic alert per operation plus a diagnostic). Nothing is retried.
//!
//! Operations take `&self` so that several can be in flight at once on a
//! single-threaded executor. The state borrow is never held across an
//! `.await`.

use std::cell::RefCell;

use meatkonnex_core::DomainError;

use crate::api::InventoryApi;
use crate::error::ClientError;
use crate::notify::{Notifier, alerts};
use crate::state::FormState;

type Observer = Box<dyn Fn(&FormState)>;

pub struct InventoryFormController<A, N> {
    api: A,
    notifier: N,
    state: RefCell<FormState>,
    observer: Option<Observer>,
}

impl<A, N> InventoryFormController<A, N>
where
    A: InventoryApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            state: RefCell::new(FormState::new()),
            observer: None,
        }
    }

    /// Call `observer` with the new state after every change.
    pub fn with_observer(mut self, observer: impl Fn(&FormState) + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&FormState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn select_meat_part(&self, value: &str) {
        self.update(|s| s.form_mut().meat_part = value.to_string());
    }

    pub fn set_stock(&self, value: &str) {
        self.update(|s| s.form_mut().stock_lb = value.to_string());
    }

    pub fn set_seasoned(&self, value: &str) {
        self.update(|s| s.form_mut().seasoned = value.to_string());
    }

    pub fn set_location(&self, value: &str) {
        self.update(|s| s.form_mut().location = value.to_string());
    }

    /// Replace the animal options with the backend's list.
    pub async fn load_animals(&self) -> Result<(), ClientError> {
        match self.api.list_animals().await {
            Ok(animals) => {
                tracing::info!(count = animals.len(), "animals loaded");
                self.update(|s| s.replace_animals(animals));
                Ok(())
            }
            Err(e) => Err(self.report(alerts::ANIMALS_FAILED, e.into())),
        }
    }

    /// React to a change of the animal selector.
    ///
    /// The meat-part selector is cleared and disabled first. A blank value
    /// stops there. A response that arrives after a newer selection was made
    /// is dropped without touching the selector or alerting.
    pub async fn load_meat_parts(&self, animal: &str) -> Result<(), ClientError> {
        let selection = self.update(|s| s.select_animal(animal));
        let ticket = match selection {
            Ok(Some(ticket)) => ticket,
            Ok(None) => return Ok(()),
            Err(e) => return Err(self.report(alerts::MEAT_PARTS_FAILED, e.into())),
        };

        let result = self.api.list_meat_parts(ticket.animal_id()).await;

        let applied = match result {
            Ok(parts) => {
                let count = parts.len();
                let applied = self.update(|s| s.apply_meat_parts(ticket, parts));
                if applied {
                    tracing::info!(animal_id = %ticket.animal_id(), count, "meat parts loaded");
                }
                applied.then_some(Ok(()))
            }
            Err(e) => {
                let applied = self.update(|s| s.fail_meat_parts(ticket));
                applied.then(|| Err(self.report(alerts::MEAT_PARTS_FAILED, e.into())))
            }
        };

        applied.unwrap_or_else(|| {
            tracing::debug!(
                animal_id = %ticket.animal_id(),
                generation = ticket.generation(),
                "dropping stale meat parts response"
            );
            Ok(())
        })
    }

    /// Replace every table row with the backend's inventory list.
    pub async fn load_inventory(&self) -> Result<(), ClientError> {
        match self.api.list_inventory().await {
            Ok(items) => {
                tracing::info!(count = items.len(), "inventory loaded");
                self.update(|s| s.replace_inventory(items));
                Ok(())
            }
            Err(e) => Err(self.report(alerts::INVENTORY_FAILED, e.into())),
        }
    }

    /// Submit the form: create the record, then reset the form and refresh the table.
    pub async fn submit_inventory(&self) -> Result<(), ClientError> {
        let payload = {
            let state = self.state.borrow();
            state
                .selected_meat_part()
                .map(|id| state.form().to_payload(id))
        };
        let Some(payload) = payload else {
            self.notifier.alert(alerts::SELECT_MEAT_PART);
            return Err(DomainError::validation(alerts::SELECT_MEAT_PART).into());
        };

        if let Err(e) = self.api.create_inventory(&payload).await {
            return Err(self.report(alerts::ADD_FAILED, e.into()));
        }

        tracing::info!(meat_part_id = %payload.meat_part_id, "inventory added");
        self.notifier.alert(alerts::ADDED);
        self.update(FormState::reset_form);
        self.load_inventory().await
    }

    fn update<R>(&self, f: impl FnOnce(&mut FormState) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        if let Some(observer) = &self.observer {
            observer(&self.state.borrow());
        }
        result
    }

    fn report(&self, message: &str, error: ClientError) -> ClientError {
        self.notifier.alert(message);
        self.notifier.log_error(message, &error);
        error
    }
}
