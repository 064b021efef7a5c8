pub mod history;
pub mod input;
pub mod language;
pub mod sidebar;
pub mod styles;

pub use history::ChatHistory;
pub use input::ChatInput;
pub use language::{LanguageSelector, LANGUAGE_OPTIONS};
pub use sidebar::SidebarPanel;
