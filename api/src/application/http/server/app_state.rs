use std::sync::Arc;

use recipelens_core::{
    application::RecipeLensService,
    domain::{detail::DetailView, fetch::RecipeFetcher, selection::SelectionContext},
};
use tokio::sync::Mutex;

use crate::args::Args;

/// One application session: the search view's fetcher, the selection
/// shared between views, and the detail view.
#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub fetcher: RecipeFetcher<RecipeLensService>,
    pub selection: Arc<Mutex<SelectionContext>>,
    pub detail: Arc<Mutex<DetailView>>,
}

impl AppState {
    pub fn new(args: Arc<Args>, fetcher: RecipeFetcher<RecipeLensService>) -> Self {
        Self {
            args,
            fetcher,
            selection: Arc::new(Mutex::new(SelectionContext::new())),
            detail: Arc::new(Mutex::new(DetailView::new())),
        }
    }
}
