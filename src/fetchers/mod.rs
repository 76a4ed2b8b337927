mod image;
mod page;

pub use image::{image_base_name, image_extension, HttpImageFetcher, ImageFetcher, ImageRequest};
pub use page::{is_recipe_page, PageFetcher};
