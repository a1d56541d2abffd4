//! Server-side rendering: maud pages and the PDF CV.

pub mod cv;
mod layout;
pub mod pages;

pub use layout::Page;
