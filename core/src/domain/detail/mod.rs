use crate::domain::{common::FALLBACK_IMAGE, recipe::entities::Recipe, selection::SelectionContext};

/// Read-only recipe view with an image carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailView {
    recipe: Option<Recipe>,
    cursor: usize,
}

impl DetailView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, ctx: &SelectionContext) -> Option<&Recipe> {
        self.recipe = ctx.selected_recipe().cloned();
        self.cursor = 0;
        self.recipe.as_ref()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn image_count(&self) -> usize {
        self.recipe.as_ref().map_or(0, |r| r.image_urls.len())
    }

    pub fn next_image(&mut self) {
        let len = self.image_count();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn previous_image(&mut self) {
        let len = self.image_count();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    pub fn current_image(&self) -> &str {
        self.recipe
            .as_ref()
            .and_then(|r| r.image_urls.get(self.cursor))
            .map_or(FALLBACK_IMAGE, String::as_str)
    }

    /// Clears the local view only; the selection context is left alone.
    pub fn go_back(&mut self) {
        self.recipe = None;
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context_with_images(n: usize) -> SelectionContext {
        let urls = (0..n).map(|i| format!("https://img/{}.jpg", i)).collect();
        let recipe = Recipe::new("Dal".into(), vec![], vec![]).with_image_urls(urls);
        let mut ctx = SelectionContext::new();
        ctx.select(recipe.clone(), vec![recipe], None);
        ctx
    }

    #[test]
    fn next_cycles_back_to_start() {
        for n in 1..=4 {
            let mut view = DetailView::new();
            view.open(&context_with_images(n));
            view.next_image();
            let start = view.cursor();
            for _ in 0..n {
                view.next_image();
            }
            assert_eq!(view.cursor(), start);
        }
    }

    #[test]
    fn previous_wraps_around() {
        let mut view = DetailView::new();
        view.open(&context_with_images(3));
        view.previous_image();
        assert_eq!(view.cursor(), 2);
        assert_eq!(view.current_image(), "https://img/2.jpg");
        view.next_image();
        assert_eq!(view.cursor(), 0);
    }

    #[test]
    fn empty_carousel_is_a_no_op() {
        let mut view = DetailView::new();
        view.open(&context_with_images(0));
        view.next_image();
        view.previous_image();
        assert_eq!(view.cursor(), 0);
        assert_eq!(view.current_image(), FALLBACK_IMAGE);

        let mut closed = DetailView::new();
        closed.next_image();
        assert_eq!(closed.cursor(), 0);
    }

    #[test]
    fn go_back_leaves_context_untouched() {
        let ctx = context_with_images(2);
        let mut view = DetailView::new();
        view.open(&ctx);
        view.next_image();
        view.go_back();

        assert!(view.recipe().is_none());
        assert_eq!(view.cursor(), 0);
        assert!(ctx.selected_recipe().is_some());
    }
}
