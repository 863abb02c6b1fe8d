mod dashboard;
pub use dashboard::Dashboard;

mod settings;
pub use settings::Settings;
