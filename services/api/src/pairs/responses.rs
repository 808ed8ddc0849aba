use icebreak_matching::PairingSet;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PairsResponse {
    pub success: bool,
    pub pairs: PairingSet,
}
