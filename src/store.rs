//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The collected
//! item list lives here; the registration components only propose changes
//! through callbacks and never write to the store themselves.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::DonateItem;

/// Flow-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Resources collected so far in this registration flow
    pub items: Vec<DonateItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Append a collected resource to the flow state
pub fn store_add_item(store: &AppStore, item: DonateItem) {
    store.items().write().push(item);
}

/// Remove a collected resource by its position in the summary table.
///
/// An index past the end is ignored; the table may have removed the row
/// already in the same render cycle.
pub fn store_remove_item(store: &AppStore, index: usize) {
    let binding = store.items();
    let mut items = binding.write();
    if index < items.len() {
        items.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceCategory;

    fn named_item(category: ResourceCategory, name: &str) -> DonateItem {
        let mut item = DonateItem::new(category);
        item.name = Some(name.to_string());
        item
    }

    #[test]
    fn items_append_in_order() {
        let store = AppStore::new(AppState::default());
        store_add_item(&store, named_item(ResourceCategory::Food, "Conserve"));
        store_add_item(&store, named_item(ResourceCategory::Tents, "Cort"));

        let names: Vec<String> = store
            .items()
            .read()
            .iter()
            .map(|item| item.name.clone().unwrap())
            .collect();
        assert_eq!(names, ["Conserve", "Cort"]);
    }

    #[test]
    fn remove_addresses_the_exact_index() {
        let store = AppStore::new(AppState::default());
        store_add_item(&store, named_item(ResourceCategory::Food, "a"));
        store_add_item(&store, named_item(ResourceCategory::Food, "b"));
        store_add_item(&store, named_item(ResourceCategory::Food, "c"));

        store_remove_item(&store, 1);

        let names: Vec<String> = store
            .items()
            .read()
            .iter()
            .map(|item| item.name.clone().unwrap())
            .collect();
        assert_eq!(names, ["a", "c"]);
    }

    #[test]
    fn remove_past_the_end_is_a_no_op() {
        let store = AppStore::new(AppState::default());
        store_add_item(&store, named_item(ResourceCategory::Food, "a"));

        store_remove_item(&store, 5);

        assert_eq!(store.items().read().len(), 1);
    }
}
