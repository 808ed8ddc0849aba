use icebreak_common::error::{IcebreakError, IcebreakResult};
use icebreak_common::types::{CurrentUser, SearchHit};
use icebreak_upstream::ChatModel;

use crate::pairing::{parse_pairings, PairingSet};
use crate::profiles::{group_profiles, validate_current_user};
use crate::prompt::{build_prompt, SYSTEM_PROMPT};

/// Asks the chat model for best pairs. Every call goes to the model; nothing
/// is cached.
pub struct PairingEngine<M: ChatModel> {
    model: Option<M>,
}

impl<M: ChatModel> PairingEngine<M> {
    /// `None` means no chat credentials were configured.
    pub fn new(model: Option<M>) -> Self {
        Self { model }
    }

    pub async fn generate(
        &self,
        current: &CurrentUser,
        corpus: &[SearchHit],
    ) -> IcebreakResult<PairingSet> {
        validate_current_user(current)?;

        let model = self.model.as_ref().ok_or_else(|| {
            IcebreakError::Config("GMI_API_KEY is not configured on the server".to_string())
        })?;

        let profiles = group_profiles(corpus, current);
        let focal = current.name.trim();
        let prompt = build_prompt(focal, &profiles)?;

        tracing::info!(
            focal,
            participants = profiles.len(),
            corpus = corpus.len(),
            "generating pairs"
        );

        let reply = model.complete(SYSTEM_PROMPT, &prompt).await?;
        let pairs = parse_pairings(&reply)?;

        tracing::info!(pairings = pairs.pairings.len(), "pairs generated");
        Ok(pairs)
    }
}
