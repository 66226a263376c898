//! Sprijin de Urgență frontend entry point

mod api;
mod app;
mod catalog;
mod components;
mod forms;
mod i18n;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
