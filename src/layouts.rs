use strum_macros::{Display, EnumIter, EnumString};

/// Reference layouts for `analyze`, mapped onto the standard 30-key block.
/// The usual `;` slot carries `'` in this crate's alphabet.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLayout {
    Qwerty,
    Colemak,
    ColemakDh,
    Workman,
    Canary,
}

impl KnownLayout {
    pub fn get_str(&self) -> &'static str {
        match self {
            Self::Qwerty => "qwertyuiopasdfghjkl'zxcvbnm,./",
            Self::Colemak => "qwfpgjluy'arstdhneiozxcvbkm,./",
            Self::ColemakDh => "qwfpbjluy'arstgmneiozxcdvkh,./",
            Self::Workman => "qdrwbjfup'ashtgyneoizxmcvkl,./",
            Self::Canary => "wlypbzfou'crstgmneiaqjvdkxh,./",
        }
    }
}
