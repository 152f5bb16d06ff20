use crate::filter::FilterQuery;
use crate::model::{FetchError, Product, SurfaceError};
use crate::render::{PageContent, RenderSettings, render_items};
use crate::surface::{
    BRAND_FILTER_ID, FilterEvent, NAME_FILTER_ID, PRODUCTS_ID, REQUIRED_ELEMENTS, Surface,
    TYPE_FILTER_ID,
};
use crate::view::ViewState;
use tracing::{error, info};

/// Ties the view state to a host surface: loads the catalog, reacts to filter input and
/// pushes rendered pages into the product container.
pub struct Catalog<S: Surface> {
    surface: S,
    state: ViewState,
    settings: RenderSettings,
}

impl<S: Surface> Catalog<S> {
    /// Fails if the host lacks any of the filter inputs or the product container.
    pub fn bind(surface: S, items_per_page: usize, settings: RenderSettings) -> Result<Self, SurfaceError> {
        if let Some(missing) = REQUIRED_ELEMENTS.iter().find(|id| !surface.has_element(id)) {
            return Err(SurfaceError::MissingElement(missing.to_string()));
        }
        Ok(Self {
            surface,
            state: ViewState::new(items_per_page),
            settings,
        })
    }

    /// Takes the outcome of the one catalog fetch. On success the first page is returned for
    /// display; on failure the error is logged and the catalog stays empty.
    pub fn load(&mut self, result: Result<Vec<Product>, FetchError>) -> Option<PageContent> {
        match result {
            Ok(products) => {
                info!("Loaded {} products", products.len());
                self.state.load(products);
                Some(self.render())
            }
            Err(e) => {
                error!("Error: {}", e);
                None
            }
        }
    }

    /// Applies a keystroke to its input, re-filters from all three inputs and renders page 0.
    pub fn handle_input(&mut self, event: &FilterEvent) -> Result<PageContent, SurfaceError> {
        self.surface.set_input_value(event.field.element_id(), &event.value)?;

        let query = FilterQuery {
            name: self.surface.input_value(NAME_FILTER_ID)?,
            brand: self.surface.input_value(BRAND_FILTER_ID)?,
            product_type: self.surface.input_value(TYPE_FILTER_ID)?,
        };
        self.state.apply_filter(&query);
        if query.is_empty() {
            info!("Filters cleared");
        }
        info!(
            "Filter {:?} matched {} of {} products",
            query,
            self.state.filtered().len(),
            self.state.data().len()
        );
        Ok(self.render())
    }

    pub fn render(&self) -> PageContent {
        render_items(self.state.current_items(), &self.settings)
    }

    pub fn display(&mut self, content: PageContent) -> Result<(), SurfaceError> {
        self.surface.replace_content(PRODUCTS_ID, content)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }
}
