mod correction_dialog;
mod icons;
mod layout;
mod notice;
mod stat_card;
mod summary;
mod transaction_table;
mod upload_button;

pub use correction_dialog::CorrectionDialog;
pub use layout::{page_shell, Layout};
pub use notice::{Notice, NoticeBanner};
pub use stat_card::{StatCard, StatIcon};
pub use summary::{ChartCard, InsightsCard};
pub use transaction_table::TransactionTable;
pub use upload_button::UploadButton;
