//! Marketing email layout with a hero carousel and a desktop/mobile preview
//! toggle.

use crate::cursor::Carousel;
use crate::data::{self, EmailContent};
use crate::catalog::Slide;
use crate::error::Result;
use crate::types::PreviewMode;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct EmailView {
    content: EmailContent,
    preview: PreviewMode,
    hero: Carousel,
}

impl EmailView {
    pub fn mount() -> Result<Self> {
        Self::new(data::NEWSLETTER)
    }

    pub fn new(content: EmailContent) -> Result<Self> {
        Ok(Self {
            hero: Carousel::new(content.hero.len())?,
            content,
            preview: PreviewMode::default(),
        })
    }

    pub fn content(&self) -> &EmailContent {
        &self.content
    }

    pub fn preview(&self) -> PreviewMode {
        self.preview
    }

    pub fn hero_cursor(&self) -> &Carousel {
        &self.hero
    }

    pub fn current_hero(&self) -> &'static Slide {
        let hero: &'static [Slide] = self.content.hero;
        &hero[self.hero.position()]
    }

    pub fn switch_preview(&mut self) {
        self.preview = self.preview.toggled();
    }

    pub fn next_hero(&mut self) {
        self.hero.advance();
    }

    pub fn previous_hero(&mut self) {
        self.hero.retreat();
    }

    pub fn jump_to_hero(&mut self, index: usize) {
        if let Err(e) = self.hero.jump_to(index) {
            debug!("hero jump ignored: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_tab_switch() {
        let mut view = EmailView::mount().unwrap();
        assert_eq!(view.preview(), PreviewMode::Desktop);
        view.switch_preview();
        assert_eq!(view.preview(), PreviewMode::Mobile);
    }

    #[test]
    fn test_hero_paging() {
        let mut view = EmailView::mount().unwrap();
        view.previous_hero();
        assert_eq!(
            view.current_hero().title,
            view.content().hero.last().unwrap().title
        );
        view.jump_to_hero(0);
        assert_eq!(view.hero_cursor().position(), 0);
    }
}
