use serde::{Deserialize, Serialize};

use meatkonnex_core::{AnimalId, MeatPartId};

/// An animal as listed by `GET /animals`.
///
/// The backend also returns weights, prices and nested parts; those are not
/// part of the client's model and are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub id: AnimalId,
    pub name: String,
}

/// A meat part of one animal, as listed by `GET /meat_parts/{animal_id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeatPart {
    pub id: MeatPartId,
    pub part_name: String,
}
