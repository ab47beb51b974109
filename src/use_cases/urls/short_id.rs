use argon2::password_hash::rand_core::{OsRng, RngCore};

pub const URL_ID_LENGTH: usize = 10;

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Random URL-safe id. Every byte maps onto the 64-symbol alphabet without bias.
pub fn generate_url_id() -> String {
    let mut bytes = [0u8; URL_ID_LENGTH];
    OsRng.fill_bytes(&mut bytes);
    bytes
        .iter()
        .map(|b| ALPHABET[(b & 63) as usize] as char)
        .collect()
}

pub fn is_url_id(value: &str) -> bool {
    value.len() == URL_ID_LENGTH && value.bytes().all(|b| ALPHABET.contains(&b))
}
