use super::try_into_js_value::TryIntoJsValue;
use crate::address::{Address, AddressFormat, AddressKind};
use crate::bitcoin::Script;
use crate::networks::Network;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_network(network: &str) -> Result<Network, String> {
    Network::from_name(network).ok_or_else(|| format!("Unknown network: {}", network))
}

fn encode_hash(
    hash: &[u8],
    kind: &str,
    network: &str,
    format: Option<&str>,
) -> Result<String, String> {
    let kind =
        AddressKind::from_name(kind).ok_or_else(|| format!("Unknown address kind: {}", kind))?;
    let network = parse_network(network)?;
    let format = AddressFormat::from_optional_str(format)?;

    let address = Address::from_hash160(kind, network, hash).map_err(|e| e.to_string())?;
    Ok(address.to_format(format))
}

fn script_to_address(
    script: &[u8],
    network: &str,
    format: Option<&str>,
) -> Result<String, String> {
    let network = parse_network(network)?;
    let format = AddressFormat::from_optional_str(format)?;

    Address::from_output_script(Script::from_bytes(script), network)
        .map(|a| a.to_format(format))
        .map_err(|e| e.to_string())
}

#[wasm_bindgen]
pub struct AddressNamespace;

#[wasm_bindgen]
impl AddressNamespace {
    #[wasm_bindgen]
    pub fn to_cash_address(
        address: &str,
        force_regtest: Option<bool>,
    ) -> std::result::Result<String, JsValue> {
        crate::address::to_cash_address(address, force_regtest.unwrap_or(false)).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn to_legacy_address(
        address: &str,
        force_regtest: Option<bool>,
    ) -> std::result::Result<String, JsValue> {
        crate::address::to_legacy_address(address, force_regtest.unwrap_or(false)).map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn is_valid(address: &str) -> bool {
        crate::address::is_valid(address)
    }

    /// Returns `{ kind, network, hash, legacy, cashaddr }`.
    #[wasm_bindgen]
    pub fn decode(
        address: &str,
        force_regtest: Option<bool>,
    ) -> std::result::Result<JsValue, JsValue> {
        let address =
            Address::from_string(address, force_regtest.unwrap_or(false)).map_err(js_err)?;
        address.try_to_js_value().map_err(JsValue::from)
    }

    #[wasm_bindgen]
    pub fn encode(
        hash: &[u8],
        kind: &str,
        network: &str,
        format: Option<String>,
    ) -> std::result::Result<String, JsValue> {
        encode_hash(hash, kind, network, format.as_deref()).map_err(js_err)
    }

    /// Output script bytes for an address in either format.
    #[wasm_bindgen]
    pub fn to_output_script(address: &str) -> std::result::Result<Vec<u8>, JsValue> {
        Address::from_string(address, false)
            .map(|a| a.script_pubkey().to_bytes())
            .map_err(js_err)
    }

    #[wasm_bindgen]
    pub fn from_output_script(
        script: &[u8],
        network: &str,
        format: Option<String>,
    ) -> std::result::Result<String, JsValue> {
        script_to_address(script, network, format.as_deref()).map_err(js_err)
    }
}
