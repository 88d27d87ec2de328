pub mod app;
pub mod pager;
pub mod refresh;
pub mod sort;
pub mod view;
