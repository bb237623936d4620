//! UI Components
//!
//! Sections and widgets of the feedback app.

mod nav_bar;
mod home_section;
mod sentiment_preview;
mod catalog_select;
mod field_errors;
mod login_section;
mod dashboard_section;
mod dashboard_stats;
mod feedback_filters;
mod feedback_list;
mod delete_confirm_button;
mod toast_stack;

pub use nav_bar::NavBar;
pub use home_section::HomeSection;
pub use sentiment_preview::SentimentPreview;
pub use catalog_select::CatalogSelect;
pub use field_errors::FieldErrors;
pub use login_section::LoginSection;
pub use dashboard_section::DashboardSection;
pub use dashboard_stats::DashboardStats;
pub use feedback_filters::FeedbackFilters;
pub use feedback_list::FeedbackList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use toast_stack::ToastStack;
