/// Bundled defaults for builds that ship without a .env file
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

fn load_dotenv() {
    // .env wins during local development
    if dotenvy::dotenv().is_ok() {
        return;
    }

    load_bundled_config();
}

fn load_bundled_config() {
    let unset = finfolio::ai::unset_defaults(BUNDLED_CONFIG, |key| std::env::var(key).is_ok());
    for (key, value) in unset {
        // SAFETY: called at startup before the runtime spawns any threads
        unsafe {
            std::env::set_var(key, value);
        }
    }
}

fn init_tracing() {
    // Dioxus may install its own subscriber; whichever lands first wins.
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .try_init();
}

fn main() {
    load_dotenv();
    init_tracing();
    dioxus::launch(finfolio::ui::App);
}
