// Surface: the host document the viewer reads its inputs from and renders into.

pub mod document;
pub mod events;

pub use document::Document;
pub use events::{FilterEvent, FilterField};

use crate::model::SurfaceError;
use crate::render::PageContent;

pub const NAME_FILTER_ID: &str = "name-filter";
pub const BRAND_FILTER_ID: &str = "brand-filter";
pub const TYPE_FILTER_ID: &str = "type-filter";
pub const PRODUCTS_ID: &str = "products";

/// Every element the viewer needs from its host.
pub const REQUIRED_ELEMENTS: [&str; 4] = [NAME_FILTER_ID, BRAND_FILTER_ID, TYPE_FILTER_ID, PRODUCTS_ID];

pub trait Surface {
    fn has_element(&self, id: &str) -> bool;
    fn input_value(&self, id: &str) -> Result<String, SurfaceError>;
    fn set_input_value(&mut self, id: &str, value: &str) -> Result<(), SurfaceError>;
    /// Discards whatever the container held and shows `content` instead.
    fn replace_content(&mut self, id: &str, content: PageContent) -> Result<(), SurfaceError>;
}
