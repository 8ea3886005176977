//! Portfolio content: the tab set, blog posts, and the text shown for each.

pub mod blog;
pub mod image;
pub mod navigation;
pub mod provider;
pub mod section;
pub mod tab;

pub use blog::{BlogPost, BLOG_POSTS};
pub use image::ImageSpec;
pub use navigation::Navigation;
pub use provider::{ContentProvider, StaticContent, NOT_FOUND};
pub use section::Section;
pub use tab::Tab;
