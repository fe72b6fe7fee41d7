use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, JsonSchema, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub enum GeocoderProvider {
    /// Random coordinates around a base point, for demos and tests
    Simulated {
        seed: Option<u64>,
        base: Option<[f64; 2]>,
        spread_degrees: Option<f64>,
    },

    /// Known addresses mapped to `[lat, lng]`
    Fixed {
        addresses: BTreeMap<String, [f64; 2]>,
    },
}

impl Default for GeocoderProvider {
    fn default() -> Self {
        GeocoderProvider::Simulated {
            seed: None,
            base: None,
            spread_degrees: None,
        }
    }
}
