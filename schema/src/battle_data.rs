use crate::{MoveId, TypeId};
use serde::{Deserialize, Serialize};

/// Static metadata of one move.
///
/// `power` is `None` for moves without a fixed base power (status moves and the
/// like); `accuracy` is `None` for moves that never miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRow {
    pub id: MoveId,
    pub identifier: String,
    pub power: Option<u16>,
    pub accuracy: Option<u8>,
    pub priority: i8,
    pub type_id: TypeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRow {
    pub id: TypeId,
    pub identifier: String,
}

/// Damage factor, in percent, of `damage_type_id` hitting `target_type_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEfficacyRow {
    pub damage_type_id: TypeId,
    pub target_type_id: TypeId,
    pub damage_factor: u16,
}
