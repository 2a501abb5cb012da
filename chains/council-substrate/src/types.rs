use std::{fmt, str::FromStr};

/// Length of an account address in bytes
pub const ADDRESS_LEN: usize = 20;

/// Errors for user-supplied call parameters
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Address is not `0x` followed by 40 hex characters
    #[error("BadAddress: \"{0}\" must be a valid Ethereum-style address (0x followed by 40 hex characters)")]
    BadAddress(String),
    /// Amount is not a plain digit string
    #[error("BadAmount: \"{0}\" must be a positive integer")]
    BadAmount(String),
    /// Amount does not fit the runtime balance type
    #[error("AmountOverflow: \"{0}\" exceeds the largest representable balance ({max})", max = u128::MAX)]
    AmountOverflow(String),
}

/// A 20 byte Ethereum-style account, as used by Moonbeam runtimes
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Raw bytes
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for Address {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Address {
    type Err = InputError;

    /// Accepts exactly `^0x[0-9a-fA-F]{40}$`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || InputError::BadAddress(s.to_owned());

        let digits = s.strip_prefix("0x").ok_or_else(bad)?;
        if digits.len() != ADDRESS_LEN * 2 {
            return Err(bad());
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| bad())?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

/// Parse an amount in planck. Accepts exactly `^\d+$`.
pub fn parse_planck(s: &str) -> Result<u128, InputError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::BadAmount(s.to_owned()));
    }

    s.parse()
        .map_err(|_| InputError::AmountOverflow(s.to_owned()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_parses_mixed_case_addresses() {
        let address: Address = "0xAbCdEf0123456789abcdef0123456789ABCDEF01".parse().unwrap();
        assert_eq!(address.as_bytes()[0], 0xab);
        assert_eq!(address.as_bytes()[19], 0x01);
        assert_eq!(
            address.to_string(),
            "0xabcdef0123456789abcdef0123456789abcdef01"
        );
    }

    #[test]
    fn it_rejects_malformed_addresses() {
        for bad in [
            "",
            "0x",
            "1234567890123456789012345678901234567890",
            "0X1234567890123456789012345678901234567890",
            "0x123456789012345678901234567890123456789",
            "0x12345678901234567890123456789012345678901",
            "0x123456789012345678901234567890123456789g",
            "0xProxyAddressHere",
            " 0x1234567890123456789012345678901234567890",
        ] {
            assert_eq!(
                bad.parse::<Address>(),
                Err(InputError::BadAddress(bad.to_owned())),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn it_parses_planck_amounts() {
        assert_eq!(parse_planck("0"), Ok(0));
        assert_eq!(
            parse_planck("1000000000000000000"),
            Ok(1_000_000_000_000_000_000)
        );
        assert_eq!(parse_planck(&u128::MAX.to_string()), Ok(u128::MAX));
    }

    #[test]
    fn it_rejects_non_digit_amounts() {
        for bad in ["", "-1", "+1", "1.5", "1e18", "12 34", "0x10", "١٢"] {
            assert_eq!(parse_planck(bad), Err(InputError::BadAmount(bad.to_owned())));
        }
    }

    #[test]
    fn it_rejects_amounts_beyond_u128() {
        let too_big = "340282366920938463463374607431768211456";
        assert_eq!(
            parse_planck(too_big),
            Err(InputError::AmountOverflow(too_big.to_owned()))
        );
    }
}
