use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct Address {
    #[serde(default)]
    pub logradouro: String,
    #[serde(default)]
    pub numero: String,
    #[serde(default)]
    pub bairro: Option<String>,
    #[serde(default)]
    pub cidade: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub cep: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Donor {
    #[serde(alias = "_id")]
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub endereco: Option<Address>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Recipient {
    #[serde(alias = "_id")]
    pub id: String,
    pub nome: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub endereco: Option<Address>,
    #[serde(default)]
    pub capacidade: Option<f64>,
}
