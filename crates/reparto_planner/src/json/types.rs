use std::{fs::File, io::BufReader, path::Path};

use schemars::JsonSchema;
use serde::Deserialize;

use crate::order::DeliveryOrder;

/// Orders as exported by the data source: either `{ "orders": [...] }` or a
/// bare array.
#[derive(Deserialize, JsonSchema)]
#[serde(untagged, rename = "Orders")]
pub enum JsonOrders {
    Wrapped { orders: Vec<DeliveryOrder> },
    Bare(Vec<DeliveryOrder>),
}

impl JsonOrders {
    pub fn into_orders(self) -> Vec<DeliveryOrder> {
        match self {
            JsonOrders::Wrapped { orders } => orders,
            JsonOrders::Bare(orders) => orders,
        }
    }

    pub fn from_file(path: &Path) -> Result<Vec<DeliveryOrder>, anyhow::Error> {
        let file = File::open(path)?;
        let content: JsonOrders = serde_json::from_reader(BufReader::new(file))?;

        Ok(content.into_orders())
    }
}
