use {
    primitive_types::U256,
    serde::{
        Deserializer, Serializer,
        de::{self, Visitor},
    },
    serde_with::{DeserializeAs, SerializeAs},
    std::fmt,
};

/// Serializes a [`U256`] as a decimal string and deserializes from a decimal
/// or a `0x` prefixed hex string.
///
/// Chain amounts exceed every native integer width so the JSON encoding is a
/// string. Use through `serde_with`:
/// `#[serde_as(as = "number::serialization::DecimalU256")]`.
pub struct DecimalU256;

impl<'de> DeserializeAs<'de, U256> for DecimalU256 {
    fn deserialize_as<D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct U256Visitor;

        impl Visitor<'_> for U256Visitor {
            type Value = U256;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(
                    formatter,
                    "a u256 encoded either as 0x hex prefixed or decimal encoded string"
                )
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if s.trim().starts_with("0x") {
                    U256::from_str_radix(s, 16).map_err(|err| {
                        E::custom(format!("failed to decode {s:?} as hex u256: {err}"))
                    })
                } else {
                    U256::from_dec_str(s).map_err(|err| {
                        E::custom(format!("failed to decode {s:?} as decimal u256: {err}"))
                    })
                }
            }
        }

        deserializer.deserialize_str(U256Visitor)
    }
}

impl SerializeAs<U256> for DecimalU256 {
    fn serialize_as<S: Serializer>(source: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use {super::*, serde::Deserialize, serde_with::serde_as};

    #[serde_as]
    #[derive(Debug, PartialEq, serde::Serialize, Deserialize)]
    struct Amount(#[serde_as(as = "DecimalU256")] U256);

    #[test]
    fn deserializes_decimal_and_hex() {
        let result: Amount = serde_json::from_str(r#""10""#).unwrap();
        assert_eq!(result, Amount(10.into()));

        let result: Amount = serde_json::from_str(r#""0x10""#).unwrap();
        assert_eq!(result, Amount(16.into()));

        assert!(serde_json::from_str::<Amount>(r#""10e""#).is_err());
        assert!(serde_json::from_str::<Amount>(r#""0xx1""#).is_err());
        assert!(serde_json::from_str::<Amount>(r#""0AFF""#).is_err());
    }

    #[test]
    fn serializes_as_decimal_string() {
        let serialized = serde_json::to_string(&Amount(10.into())).unwrap();
        assert_eq!(serialized, "\"10\"");
    }
}
