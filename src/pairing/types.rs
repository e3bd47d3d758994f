use serde::Serialize;

/// One next-round pairing. Field order follows the standings: player1 is
/// the higher-ranked entry of the two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub player1_id: i64,
    pub player1_name: String,
    pub player2_id: i64,
    pub player2_name: String,
}
