#[cfg(feature = "csr")]
fn main() {
    use portfolio_site::app::App;

    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("portfolio-site v{} built {}", env!("CARGO_PKG_VERSION"), env!("BUILD_TIME"));
    leptos::mount::mount_to_body(App);
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no native entry point; the site is bundled for the browser with
    // Trunk (see index.html), and the pure modules are tested on the host
}
