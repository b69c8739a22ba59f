pub mod global_context;
pub mod page_state;

pub use global_context::AppGlobalContext;
pub use page_state::PageState;
