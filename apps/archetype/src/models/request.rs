use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::scoring::params::TuningInput;

/// One scoring request.
///
/// `grades[i]` is the grade for `canonical_order[i]` (or for position `i` of
/// the curriculum's default order when `canonical_order` is omitted). That
/// alignment is trusted, not checked: a caller passing grades in a different
/// order than its course list gets a silently wrong profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub grades: Vec<Value>,
    #[serde(default)]
    pub canonical_order: Option<Vec<String>>,
    #[serde(flatten)]
    pub tuning: TuningInput,
}
