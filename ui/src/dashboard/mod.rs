//! Dashboard panels. Each panel renders a slice of the
//! [`DashboardView`](crate::view::DashboardView) and forwards user actions to
//! the [`AppContext`](crate::app::AppContext).

mod charts;
mod export;
mod matrix;
mod recommendations;
mod stats;
mod toast;
mod upload;

pub use charts::ChartCard;
pub use export::ExportPanel;
pub use matrix::MatrixCard;
pub use recommendations::{RecommendationsCard, SummaryCard};
pub use stats::StatsGrid;
pub use toast::ToastHost;
pub use upload::UploadPanel;
