//! Tests for token signing, validation, and key loading.

pub(crate) mod keys;

#[cfg(test)]
mod cleanup_tests;
#[cfg(test)]
mod codec_tests;
#[cfg(test)]
mod key_store_tests;
