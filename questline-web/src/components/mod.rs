pub mod alert;
pub mod error_banner;
pub mod foundation;
pub mod history_panel;
pub mod home_interface;
pub mod icon;
pub mod offer_alert;
pub mod perks;
pub mod progress_card;
pub mod quest_actions;
pub mod rewards_panel;
pub mod tab_bar;
pub mod task_card;

pub use alert::{Alert, AlertDescription, AlertTitle};
pub use error_banner::ErrorBanner;
pub use history_panel::HistoryPanel;
pub use home_interface::HomeInterface;
pub use icon::{Glyph, Icon};
pub use offer_alert::GoPayOfferAlert;
pub use perks::PerksSection;
pub use progress_card::ProgressCard;
pub use quest_actions::{AnotherQuestButton, StartQuestButton};
pub use rewards_panel::RewardsPanel;
pub use tab_bar::TabBar;
pub use task_card::TaskCard;
