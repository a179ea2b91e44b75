pub mod email;
pub mod money;
pub mod number;
pub mod random;
pub mod slug;
pub mod stage;
pub mod transliteration;
pub mod utf8;

pub use email::{is_valid_email, is_valid_email_bytes};
pub use money::{cents_to_dollars, cents_to_dollars_with_sign};
pub use number::{NumberError, NumberInput, is_number, to_float, to_int};
pub use random::{AMBIGUOUS_CHARACTERS, get_random_string};
pub use slug::{Replacement, SlugConfig, SlugError, Slugifier, slugify, slugify_bytes};
pub use utf8::{is_raw_utf8, is_typical_utf8, to_utf8, to_utf8_string};
