mod address;
mod try_into_js_value;

pub use address::AddressNamespace;
