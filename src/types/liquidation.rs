/// Side of a health group a liquidation acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidationMode {
    /// Spot and perp legs of the group together.
    Spread,
    Long,
    Short,
}

impl LiquidationMode {
    pub fn code(&self) -> u8 {
        match self {
            LiquidationMode::Spread => 0,
            LiquidationMode::Long => 1,
            LiquidationMode::Short => 2,
        }
    }
}
