pub mod companion;
pub mod contact;
pub mod hero;
pub mod profile;
pub mod projects;
pub mod shared;

pub use companion::BotCompanion;
pub use contact::ContactSection;
pub use hero::HeroSection;
pub use profile::ProfileSection;
pub use projects::ProjectsSection;
