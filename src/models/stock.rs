use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct StockItem {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    pub alimento: String,
    pub quantidade: f64,
    pub unidade: String,
    #[serde(default)]
    pub local: Option<String>,
    #[serde(default)]
    pub data_atualizacao: Option<String>,
}
