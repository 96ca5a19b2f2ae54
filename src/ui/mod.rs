pub mod host;
pub mod layout;
pub mod view;
