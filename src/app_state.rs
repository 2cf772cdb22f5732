use std::{sync::Arc, time::Duration};

use crate::{
    config::Config,
    errors::AppResult,
    render::pdf::PdfRenderer,
    services::{
        extractor::PageExtractor,
        generator::{MistralGenerator, QuizGenerator},
    },
};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn QuizGenerator>,
    pub extractor: Arc<PageExtractor>,
    pub pdf_renderer: Arc<PdfRenderer>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Builds every service from config. Fails fast on anything that
    /// would otherwise fail per-request, notably the PDF font.
    pub fn new(config: Config) -> AppResult<Self> {
        let generator = Arc::new(MistralGenerator::new(&config)?);
        let extractor = Arc::new(PageExtractor::new(Duration::from_secs(
            config.fetch_timeout_secs,
        ))?);
        let pdf_renderer = Arc::new(PdfRenderer::from_font_file(&config.pdf_font_path)?);

        Ok(Self {
            generator,
            extractor,
            pdf_renderer,
            config: Arc::new(config),
        })
    }

    /// Assembles state from pre-built services. Used by tests to swap
    /// in a mock generator.
    pub fn with_services(
        config: Config,
        generator: Arc<dyn QuizGenerator>,
        extractor: Arc<PageExtractor>,
        pdf_renderer: Arc<PdfRenderer>,
    ) -> Self {
        Self {
            generator,
            extractor,
            pdf_renderer,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
