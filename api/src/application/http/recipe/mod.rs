use recipelens_core::{
    application::RecipeLensService,
    domain::fetch::{FetchRequest, ImageEnrichment},
};
use tracing::{Instrument, debug, info_span};

use crate::application::http::{
    recipe::handlers::get_session::SessionResponse, server::app_state::AppState,
};

pub mod handlers;
pub mod router;
pub mod validators;

/// Runs a submission until recipes are known and leaves the image lookups
/// running in the background. Clients poll the session to see them land.
pub(crate) async fn submit_and_enrich(state: &AppState, request: FetchRequest) -> SessionResponse {
    let submission = state.fetcher.submit(request).await;

    if let Some(enrichment) = submission.enrichment {
        spawn_enrichment(enrichment);
    }

    SessionResponse::with_input_image(submission.session)
}

pub(crate) fn spawn_enrichment(enrichment: ImageEnrichment<RecipeLensService>) {
    let generation = enrichment.generation();
    tokio::spawn(
        async move {
            if !enrichment.run().await {
                debug!("Image enrichment finished for a superseded session");
            }
        }
        .instrument(info_span!("image_enrichment", generation = generation.0)),
    );
}
