//! Random CSRF token pairs

use rand::Rng;

use forms_render::{CsrfToken, CsrfTokenProvider};

use crate::settings::CsrfSettings;

const NAME_PREFIX: &str = "csrf";
const NAME_LEN: usize = 16;
const VALUE_LEN: usize = 32;

/// Issues a fresh random name/value pair for every form.
///
/// Verification of submitted tokens belongs to the session layer that
/// stores them; this provider only mints them.
#[derive(Debug, Clone)]
pub struct RandomCsrfProvider {
    name_key: String,
    value_key: String,
}

impl RandomCsrfProvider {
    pub fn new(name_key: impl Into<String>, value_key: impl Into<String>) -> Self {
        Self {
            name_key: name_key.into(),
            value_key: value_key.into(),
        }
    }

    pub fn from_settings(settings: &CsrfSettings) -> Self {
        Self::new(settings.name_key.clone(), settings.value_key.clone())
    }
}

fn random_hex(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| char::from_digit(rng.gen_range(0..16), 16).unwrap_or('0'))
        .collect()
}

impl CsrfTokenProvider for RandomCsrfProvider {
    fn token(&self) -> CsrfToken {
        CsrfToken {
            name_key: self.name_key.clone(),
            name: format!("{}{}", NAME_PREFIX, random_hex(NAME_LEN)),
            value_key: self.value_key.clone(),
            value: random_hex(VALUE_LEN),
        }
    }
}
