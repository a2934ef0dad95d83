use serde::{Deserialize, Serialize};

use crate::domain::RecordId;

/// One catalog entry. This is both the backing-file shape and the wire shape:
/// the service responds with a bare JSON array of these, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
}
