pub mod api_key_input;
pub mod chat_panel;
pub mod layout;
pub mod tabs;
pub mod toast;

pub use api_key_input::ApiKeyInput;
pub use chat_panel::{ChatMessage, ChatPanel, QuickPrompt, STUDY_PROMPTS};
pub use layout::Layout;
pub use tabs::TabBar;
pub use toast::{use_toast, ToastProvider};
