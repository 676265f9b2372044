//! Stand-ins for the camera QR decoder.

use crate::registry::Registry;

/// Source of decoded QR values.
pub trait CodeReader: Send + Sync {
    /// Return the value read from the code in view.
    fn read_code(&self) -> String;
}

/// Pretends to read one of the demo packages at random.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoCodeReader;

impl CodeReader for DemoCodeReader {
    fn read_code(&self) -> String {
        // 122 random bits per v4 UUID
        let codes = Registry::demo_qr_codes();
        let roll = uuid::Uuid::new_v4().as_u128();
        let index = (roll % codes.len() as u128) as usize;
        codes[index].to_string()
    }
}

/// Always reads the same value.
#[derive(Debug, Clone)]
pub struct FixedCodeReader(pub String);

impl CodeReader for FixedCodeReader {
    fn read_code(&self) -> String {
        self.0.clone()
    }
}
