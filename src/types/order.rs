use std::{fmt, str::FromStr};

use crate::appendix::AppendixError;

/// Execution behavior of an order sent to the engine.
///
/// * [`OrderExecutionType::Default`] is a plain limit order resting on the book.
/// * [`OrderExecutionType::Ioc`] matches what it can immediately and cancels the remainder.
/// * [`OrderExecutionType::Fok`] either fills completely right away or is cancelled.
/// * [`OrderExecutionType::PostOnly`] is rejected if it would match against existing orders.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OrderExecutionType {
    #[default]
    Default,
    Ioc,
    Fok,
    PostOnly,
}

/// Kind of trigger the order is handed to the trigger service with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerType {
    Price,
    Twap,
    /// TWAP with amounts listed in the trigger order itself.
    TwapCustomAmounts,
}

impl OrderExecutionType {
    pub const ALL: [Self; 4] = [Self::Default, Self::Ioc, Self::Fok, Self::PostOnly];

    /// 2-bit appendix code.
    pub fn code(&self) -> u8 {
        match self {
            OrderExecutionType::Default => 0,
            OrderExecutionType::Ioc => 1,
            OrderExecutionType::Fok => 2,
            OrderExecutionType::PostOnly => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderExecutionType::Default => "default",
            OrderExecutionType::Ioc => "ioc",
            OrderExecutionType::Fok => "fok",
            OrderExecutionType::PostOnly => "post_only",
        }
    }
}

impl TryFrom<u8> for OrderExecutionType {
    type Error = AppendixError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OrderExecutionType::Default),
            1 => Ok(OrderExecutionType::Ioc),
            2 => Ok(OrderExecutionType::Fok),
            3 => Ok(OrderExecutionType::PostOnly),
            other => Err(AppendixError::UnknownOrderType(other)),
        }
    }
}

impl TriggerType {
    pub const ALL: [Self; 3] = [Self::Price, Self::Twap, Self::TwapCustomAmounts];

    /// 2-bit appendix code, zero is reserved for "no trigger".
    pub fn code(&self) -> u8 {
        match self {
            TriggerType::Price => 1,
            TriggerType::Twap => 2,
            TriggerType::TwapCustomAmounts => 3,
        }
    }

    /// Decode a trigger code, `None` when the order has no trigger.
    pub fn from_code(code: u8) -> Result<Option<Self>, AppendixError> {
        match code {
            0 => Ok(None),
            1 => Ok(Some(TriggerType::Price)),
            2 => Ok(Some(TriggerType::Twap)),
            3 => Ok(Some(TriggerType::TwapCustomAmounts)),
            other => Err(AppendixError::UnknownTriggerType(other)),
        }
    }

    /// Whether the order value region carries TWAP parameters.
    pub fn is_twap(&self) -> bool {
        matches!(self, TriggerType::Twap | TriggerType::TwapCustomAmounts)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerType::Price => "price",
            TriggerType::Twap => "twap",
            TriggerType::TwapCustomAmounts => "twap_custom_amounts",
        }
    }
}

impl fmt::Display for OrderExecutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for TriggerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderExecutionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown order execution type: {s}"))
    }
}

impl FromStr for TriggerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown trigger type: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execution_type_codes() {
        for t in OrderExecutionType::ALL {
            assert_eq!(OrderExecutionType::try_from(t.code()).unwrap(), t);
            assert_eq!(t.as_str().parse::<OrderExecutionType>().unwrap(), t);
        }
        assert_eq!(
            OrderExecutionType::try_from(4),
            Err(AppendixError::UnknownOrderType(4))
        );
    }

    #[test]
    fn test_trigger_type_codes() {
        assert_eq!(TriggerType::from_code(0).unwrap(), None);
        for t in TriggerType::ALL {
            assert_eq!(TriggerType::from_code(t.code()).unwrap(), Some(t));
            assert_eq!(t.as_str().parse::<TriggerType>().unwrap(), t);
        }
        assert!(TriggerType::Twap.is_twap());
        assert!(TriggerType::TwapCustomAmounts.is_twap());
        assert!(!TriggerType::Price.is_twap());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderExecutionType::PostOnly).unwrap(),
            "\"post_only\""
        );
        assert_eq!(
            serde_json::from_str::<TriggerType>("\"twap_custom_amounts\"").unwrap(),
            TriggerType::TwapCustomAmounts
        );
    }
}
