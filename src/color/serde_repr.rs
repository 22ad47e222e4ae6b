use serde::{Deserialize, Serialize, Serializer};

use crate::color::hex::Rgb;

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Obj { r: u8, g: u8, b: u8 },
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Rgb::parse_hex(&s).map_err(serde::de::Error::custom),
            Repr::Obj { r, g, b } => Ok(Rgb::new(r, g, b)),
            Repr::Arr(v) => {
                if v.len() == 3 {
                    Ok(Rgb::new(v[0], v[1], v[2]))
                } else {
                    Err(serde::de::Error::custom("rgb array must have len 3 ([r,g,b])"))
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/serde_repr.rs"]
mod tests;
