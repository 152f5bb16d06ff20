use crate::model::SurfaceError;
use crate::render::PageContent;
use crate::surface::{BRAND_FILTER_ID, NAME_FILTER_ID, PRODUCTS_ID, Surface, TYPE_FILTER_ID};
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Element {
    Input(String),
    /// `None` until the first render reaches it.
    Container(Option<PageContent>),
}

/// In-memory host document: text inputs and content containers addressed by id.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: HashMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The page the viewer expects: three empty filter inputs and a blank product container.
    pub fn catalog_page() -> Self {
        Self::new()
            .with_input(NAME_FILTER_ID)
            .with_input(BRAND_FILTER_ID)
            .with_input(TYPE_FILTER_ID)
            .with_container(PRODUCTS_ID)
    }

    pub fn with_input(mut self, id: &str) -> Self {
        self.elements.insert(id.to_string(), Element::Input(String::new()));
        self
    }

    pub fn with_container(mut self, id: &str) -> Self {
        self.elements
            .insert(id.to_string(), Element::Container(None));
        self
    }

    pub fn content(&self, id: &str) -> Result<Option<&PageContent>, SurfaceError> {
        match self.elements.get(id) {
            Some(Element::Container(content)) => Ok(content.as_ref()),
            Some(Element::Input(_)) => Err(SurfaceError::NotAContainer(id.to_string())),
            None => Err(SurfaceError::MissingElement(id.to_string())),
        }
    }
}

impl Surface for Document {
    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn input_value(&self, id: &str) -> Result<String, SurfaceError> {
        match self.elements.get(id) {
            Some(Element::Input(value)) => Ok(value.clone()),
            Some(Element::Container(_)) => Err(SurfaceError::NotAnInput(id.to_string())),
            None => Err(SurfaceError::MissingElement(id.to_string())),
        }
    }

    fn set_input_value(&mut self, id: &str, value: &str) -> Result<(), SurfaceError> {
        match self.elements.get_mut(id) {
            Some(Element::Input(current)) => {
                *current = value.to_string();
                Ok(())
            }
            Some(Element::Container(_)) => Err(SurfaceError::NotAnInput(id.to_string())),
            None => Err(SurfaceError::MissingElement(id.to_string())),
        }
    }

    fn replace_content(&mut self, id: &str, content: PageContent) -> Result<(), SurfaceError> {
        match self.elements.get_mut(id) {
            Some(Element::Container(current)) => {
                *current = Some(content);
                Ok(())
            }
            Some(Element::Input(_)) => Err(SurfaceError::NotAContainer(id.to_string())),
            None => Err(SurfaceError::MissingElement(id.to_string())),
        }
    }
}
