//! Platform-agnostic adapters for headless frontends (tests, CLI, scripted runs).

mod fixed_answer_prompt;
mod headless_native;
mod headless_view_host;
mod static_resources;

pub use fixed_answer_prompt::FixedAnswerPrompt;
pub use headless_native::{HeadlessNative, HeadlessNativeResolver};
pub use headless_view_host::{HeadlessViewHost, RenderedView};
pub use static_resources::StaticResourceProvider;
