//! Chat Completion Provider Implementations
//!
//! | Provider | Type |
//! |----------|------|
//! | OpenAIChatProvider | Cloud |
//! | NullChatProvider | Offline, fixed reply |

pub mod null;
pub mod openai;

pub use null::NullChatProvider;
pub use openai::OpenAIChatProvider;
