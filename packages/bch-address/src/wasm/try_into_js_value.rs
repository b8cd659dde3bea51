use crate::address::{Address, AddressKind};
use crate::networks::Network;
use wasm_bindgen::{JsError, JsValue};

pub(crate) trait TryIntoJsValue {
    fn try_to_js_value(&self) -> Result<JsValue, JsError>;
}

macro_rules! js_obj {
    ( $( $key:expr => $value:expr ),* ) => {{
        let obj = js_sys::Object::new();
        $(
            js_sys::Reflect::set(&obj, &$key.into(), &$value.try_to_js_value()?.into())
                .map_err(|_| JsError::new("Failed to set object property"))?;
        )*
        Ok(Into::<JsValue>::into(obj)) as Result<JsValue, JsError>
    }};
}

impl TryIntoJsValue for String {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from_str(self))
    }
}

impl TryIntoJsValue for AddressKind {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from_str(self.as_str()))
    }
}

impl TryIntoJsValue for Network {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        Ok(JsValue::from_str(self.as_str()))
    }
}

impl TryIntoJsValue for Address {
    fn try_to_js_value(&self) -> Result<JsValue, JsError> {
        js_obj!(
            "kind" => self.kind(),
            "network" => self.network(),
            "hash" => hex::encode(self.payload()),
            "legacy" => self.legacy_address(),
            "cashaddr" => self.cash_address()
        )
    }
}
