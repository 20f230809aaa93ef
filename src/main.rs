use page_control_ui::*;

fn main() {
    let _ = console_log::init_with_level(shared_constants::LOG_LEVEL);
    console_error_panic_hook::set_once();

    let controller = PageController::new(
        DocumentCookies,
        NavigatorPlatform,
        BrowserDom,
        load_page_config(),
    );
    controller.activate();
}
