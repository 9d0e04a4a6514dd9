mod app;
mod audio;
mod content;
mod input;
mod view_state;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("portfolio ui starting");

    leptos::mount::mount_to_body(App);
}
